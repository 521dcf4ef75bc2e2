use leptos::prelude::*;
use log::info;
use web_sys::MouseEvent;

use crate::components::controller::{
	ControllerNode, InteractionMode, InteractionState, MobileToggle, PanelEvent,
	bind_viewport_events,
};
use crate::links::{LINK_MAP_JSON, LinkGroup, load_groups};
use crate::shape::ShapeKind;

const SITE_NAME: &str = "ETHPAPERS.XYZ";
const VERSION_LABEL: &str = concat!("v", env!("CARGO_PKG_VERSION"));

/// Landing page: four controller nodes around the central composition.
#[component]
pub fn Home(
	/// Whether a mobile tap on one node closes the others.
	#[prop(default = MobileToggle::Shared)]
	mobile_toggle: MobileToggle,
) -> impl IntoView {
	let state = RwSignal::new(InteractionState::new(InteractionMode::Desktop, mobile_toggle));
	bind_viewport_events(state);

	info!("Rendering landing page ({mobile_toggle:?} mobile toggle)");

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<div class="error-screen">
					<h2>"Error"</h2>
					<pre>
						{move || {
							errors
								.get()
								.into_iter()
								.map(|(_, e)| e.to_string())
								.collect::<Vec<_>>()
								.join("\n")
						}}
					</pre>
				</div>
			}
		}>
			<Landing state=state groups=load_groups(LINK_MAP_JSON) />
		</ErrorBoundary>
	}
}

/// Header, shape grid and decorative overlays.
///
/// Clicks that reach `<main>` came from outside every node and close all panels.
#[component]
fn Landing(
	state: RwSignal<InteractionState>,
	groups: [(ShapeKind, LinkGroup); 4],
) -> impl IntoView {
	let [triangle, square, circle, cross] = groups;
	let on_background_click = move |_: MouseEvent| {
		state.maybe_update(|s| s.apply(PanelEvent::BackgroundClick));
	};

	view! {
		<main class="landing" on:click=on_background_click>
			<header class="site-header">
				<h1 class="site-name">{SITE_NAME}</h1>
				<div class="site-version">{VERSION_LABEL}</div>
			</header>

			<section class="composition">
				<div class="shape-grid">
					<div />
					<div class="grid-cell">
						<ControllerNode shape=triangle.0 group=triangle.1 state=state />
					</div>
					<div />
					<div class="grid-cell">
						<ControllerNode shape=square.0 group=square.1 state=state />
					</div>
					<div class="grid-centre" />
					<div class="grid-cell">
						<ControllerNode shape=circle.0 group=circle.1 state=state />
					</div>
					<div />
					<div class="grid-cell">
						<ControllerNode shape=cross.0 group=cross.1 state=state />
					</div>
					<div />
				</div>
			</section>

			<div class="scanlines" />
			<div class="vignette" />
		</main>
	}
}
