use leptos::prelude::*;
use log::{info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{MediaQueryList, Window};

use super::state::{InteractionMode, InteractionState, MOBILE_MEDIA_QUERY, PanelEvent};

/// Subscribes `state` to window resizes and to the mobile breakpoint.
///
/// The page root never unmounts, so the listeners are leaked for the life of
/// the page.
pub fn bind_viewport_events(state: RwSignal<InteractionState>) {
	let Some(window) = web_sys::window() else {
		warn!("No window available; panels will not react to the viewport");
		return;
	};

	let on_resize: Closure<dyn FnMut()> = Closure::new(move || {
		state.maybe_update(|s| s.apply(PanelEvent::Resize));
	});
	if let Err(err) =
		window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
	{
		warn!("Failed to listen for resize: {err:?}");
	}
	on_resize.forget();

	let Some(query) = mobile_query(&window) else {
		warn!("matchMedia unavailable; staying in desktop mode");
		return;
	};
	watch_mode_query(state, query);
}

/// Sets the mode from `query` now and again on every `change` it fires.
pub(crate) fn watch_mode_query(state: RwSignal<InteractionState>, query: MediaQueryList) {
	let sync = move |query: &MediaQueryList| {
		let mode = if query.matches() {
			InteractionMode::Mobile
		} else {
			InteractionMode::Desktop
		};
		let changed = state.try_maybe_update(|s| {
			let changed = s.apply(PanelEvent::ModeChanged(mode));
			(changed, changed)
		});
		if changed == Some(true) {
			info!("Interaction mode is now {mode:?}");
		}
	};
	sync(&query);

	let query_cb = query.clone();
	let on_change: Closure<dyn FnMut()> = Closure::new(move || sync(&query_cb));
	if let Err(err) =
		query.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())
	{
		warn!("Failed to watch {}: {err:?}", query.media());
	}
	on_change.forget();
}

fn mobile_query(window: &Window) -> Option<MediaQueryList> {
	window.match_media(MOBILE_MEDIA_QUERY).ok().flatten()
}
