use leptos::prelude::*;
use web_sys::MouseEvent;

use super::panel::Panel;
use super::render;
use super::state::{InteractionMode, InteractionState, PanelEvent};
use crate::links::LinkGroup;
use crate::shape::ShapeKind;

/// One shape control and, while open, its panel of links.
///
/// Open state lives in the shared `state` signal owned by the page; this
/// component only forwards events into it.
#[component]
pub fn ControllerNode(
	shape: ShapeKind,
	group: LinkGroup,
	state: RwSignal<InteractionState>,
) -> impl IntoView {
	let open = Memo::new(move |_| state.with(|s| s.is_open(shape)));
	let mobile = Memo::new(move |_| state.with(|s| s.mode() == InteractionMode::Mobile));
	let dispatch = move |event: PanelEvent| {
		state.maybe_update(|s| s.apply(event));
	};

	let on_mouseenter = move |_: MouseEvent| dispatch(PanelEvent::PointerEnter(shape));
	let on_mouseleave = move |_: MouseEvent| dispatch(PanelEvent::PointerLeave(shape));
	// Clicks anywhere inside the node must not reach the background dismissal.
	let on_node_click = move |ev: MouseEvent| ev.stop_propagation();
	let on_shape_click = move |ev: MouseEvent| {
		ev.stop_propagation();
		dispatch(PanelEvent::Tap(shape));
	};

	let wrapper_class = move || {
		if mobile.get() {
			"panel-wrapper panel-wrapper-mobile".to_string()
		} else {
			format!("panel-wrapper {}", shape.anchor().class())
		}
	};

	view! {
		<div
			class="controller-node"
			on:mouseenter=on_mouseenter
			on:mouseleave=on_mouseleave
			on:click=on_node_click
		>
			<div
				class="shape-button"
				aria-haspopup="menu"
				aria-expanded=move || open.get().to_string()
				on:click=on_shape_click
			>
				{render::shape_svg(shape)}
			</div>
			<Show when=move || open.get()>
				<div class=wrapper_class>
					<Panel group=group.clone() mobile=mobile />
				</div>
			</Show>
		</div>
	}
}
