mod component;
mod panel;
mod render;
mod state;
mod viewport;

pub use component::ControllerNode;
pub use state::{InteractionMode, InteractionState, MobileToggle, PanelEvent};
pub use viewport::bind_viewport_events;
