use log::debug;

use crate::shape::ShapeKind;

/// Viewports at or below 768px use tap interaction.
pub const MOBILE_MEDIA_QUERY: &str = "(max-width: 768px)";

/// Which input events drive the panels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InteractionMode {
	/// Hover opens a panel, leaving closes it.
	#[default]
	Desktop,
	/// Taps toggle panels.
	Mobile,
}

/// How a tap on a mobile viewport treats other open panels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MobileToggle {
	/// Opening one panel closes any other.
	#[default]
	Shared,
	/// Each node toggles on its own.
	Independent,
}

/// Inputs the controller reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelEvent {
	PointerEnter(ShapeKind),
	PointerLeave(ShapeKind),
	Tap(ShapeKind),
	BackgroundClick,
	Resize,
	ModeChanged(InteractionMode),
}

/// Set of nodes whose panel is open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OpenPanels(u8);

impl OpenPanels {
	pub fn contains(self, shape: ShapeKind) -> bool {
		self.0 & shape.bit() != 0
	}

	#[cfg(test)]
	pub fn len(self) -> usize {
		self.0.count_ones() as usize
	}

	pub fn is_empty(self) -> bool {
		self.0 == 0
	}

	fn only(shape: ShapeKind) -> Self {
		Self(shape.bit())
	}

	fn without(self, shape: ShapeKind) -> Self {
		Self(self.0 & !shape.bit())
	}

	fn toggled(self, shape: ShapeKind) -> Self {
		Self(self.0 ^ shape.bit())
	}
}

/// Open/closed state for all four panels, owned by the page root.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InteractionState {
	mode: InteractionMode,
	toggle: MobileToggle,
	open: OpenPanels,
}

impl InteractionState {
	pub fn new(mode: InteractionMode, toggle: MobileToggle) -> Self {
		Self {
			mode,
			toggle,
			open: OpenPanels::default(),
		}
	}

	pub fn mode(&self) -> InteractionMode {
		self.mode
	}

	pub fn open_panels(&self) -> OpenPanels {
		self.open
	}

	pub fn is_open(&self, shape: ShapeKind) -> bool {
		self.open.contains(shape)
	}

	/// Applies one event. Returns whether anything changed.
	pub fn apply(&mut self, event: PanelEvent) -> bool {
		let before = *self;
		match (event, self.mode) {
			(PanelEvent::PointerEnter(shape), InteractionMode::Desktop) => {
				self.open = OpenPanels::only(shape);
			}
			// A leave that arrives after another node's enter must not close it.
			(PanelEvent::PointerLeave(shape), InteractionMode::Desktop) => {
				self.open = self.open.without(shape);
			}
			(PanelEvent::Tap(shape), InteractionMode::Mobile) => {
				self.open = match self.toggle {
					MobileToggle::Shared if self.open.contains(shape) => OpenPanels::default(),
					MobileToggle::Shared => OpenPanels::only(shape),
					MobileToggle::Independent => self.open.toggled(shape),
				};
			}
			(PanelEvent::PointerEnter(_) | PanelEvent::PointerLeave(_), InteractionMode::Mobile)
			| (PanelEvent::Tap(_), InteractionMode::Desktop) => {}
			(PanelEvent::BackgroundClick | PanelEvent::Resize, _) => {
				self.open = OpenPanels::default();
			}
			(PanelEvent::ModeChanged(mode), _) => {
				self.mode = mode;
			}
		}

		let changed = *self != before;
		if changed {
			debug!("{event:?}: {before:?} -> {:?}", self);
		}
		changed
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::shape::ShapeKind::{Circle, Cross, Square, Triangle};

	fn desktop() -> InteractionState {
		InteractionState::new(InteractionMode::Desktop, MobileToggle::Shared)
	}

	fn mobile(toggle: MobileToggle) -> InteractionState {
		InteractionState::new(InteractionMode::Mobile, toggle)
	}

	fn open_shapes(state: &InteractionState) -> Vec<ShapeKind> {
		ShapeKind::ALL
			.into_iter()
			.filter(|s| state.is_open(*s))
			.collect()
	}

	#[test]
	fn hover_opens_and_leave_closes() {
		let mut s = desktop();
		assert!(s.apply(PanelEvent::PointerEnter(Circle)));
		assert_eq!(open_shapes(&s), vec![Circle]);
		assert!(s.apply(PanelEvent::PointerLeave(Circle)));
		assert!(s.open_panels().is_empty());
	}

	#[test]
	fn entering_square_closes_triangle() {
		let mut s = desktop();
		s.apply(PanelEvent::PointerEnter(Triangle));

		let mut enter_first = s;
		enter_first.apply(PanelEvent::PointerEnter(Square));
		enter_first.apply(PanelEvent::PointerLeave(Triangle));

		let mut leave_first = s;
		leave_first.apply(PanelEvent::PointerLeave(Triangle));
		leave_first.apply(PanelEvent::PointerEnter(Square));

		assert_eq!(open_shapes(&enter_first), vec![Square]);
		assert_eq!(enter_first, leave_first);
	}

	#[test]
	fn desktop_clicks_do_not_toggle() {
		let mut s = desktop();
		s.apply(PanelEvent::PointerEnter(Cross));
		assert!(!s.apply(PanelEvent::Tap(Cross)));
		assert!(s.is_open(Cross));
	}

	#[test]
	fn shared_tap_toggles_and_steals() {
		let mut s = mobile(MobileToggle::Shared);
		s.apply(PanelEvent::Tap(Triangle));
		assert_eq!(open_shapes(&s), vec![Triangle]);
		s.apply(PanelEvent::Tap(Cross));
		assert_eq!(open_shapes(&s), vec![Cross]);
		s.apply(PanelEvent::Tap(Cross));
		assert!(s.open_panels().is_empty());
	}

	#[test]
	fn independent_taps_keep_other_panels() {
		let mut s = mobile(MobileToggle::Independent);
		s.apply(PanelEvent::Tap(Triangle));
		s.apply(PanelEvent::Tap(Circle));
		assert_eq!(open_shapes(&s), vec![Triangle, Circle]);
		s.apply(PanelEvent::Tap(Triangle));
		assert_eq!(open_shapes(&s), vec![Circle]);
	}

	#[test]
	fn mobile_ignores_hover() {
		let mut s = mobile(MobileToggle::Shared);
		assert!(!s.apply(PanelEvent::PointerEnter(Square)));
		s.apply(PanelEvent::Tap(Square));
		assert!(!s.apply(PanelEvent::PointerLeave(Square)));
		assert!(s.is_open(Square));
	}

	#[test]
	fn background_click_closes_everything() {
		let mut s = mobile(MobileToggle::Independent);
		s.apply(PanelEvent::Tap(Square));
		s.apply(PanelEvent::Tap(Circle));
		assert!(s.apply(PanelEvent::BackgroundClick));
		assert!(s.open_panels().is_empty());
		assert!(!s.apply(PanelEvent::BackgroundClick));
	}

	#[test]
	fn mode_change_keeps_open_state() {
		let mut s = desktop();
		s.apply(PanelEvent::PointerEnter(Square));
		assert!(s.apply(PanelEvent::ModeChanged(InteractionMode::Mobile)));
		assert_eq!(s.mode(), InteractionMode::Mobile);
		assert!(s.is_open(Square));
		s.apply(PanelEvent::Tap(Square));
		assert!(!s.is_open(Square));
	}

	// proptest pulls in process forking, which wasm32 lacks.
	#[cfg(not(target_arch = "wasm32"))]
	mod props {
		use proptest::prelude::*;

		use super::*;

		fn shape_strategy() -> impl Strategy<Value = ShapeKind> {
			prop_oneof![Just(Triangle), Just(Square), Just(Circle), Just(Cross)]
		}

		fn event_strategy() -> impl Strategy<Value = PanelEvent> {
			prop_oneof![
				4 => shape_strategy().prop_map(PanelEvent::PointerEnter),
				4 => shape_strategy().prop_map(PanelEvent::PointerLeave),
				4 => shape_strategy().prop_map(PanelEvent::Tap),
				1 => Just(PanelEvent::BackgroundClick),
				1 => Just(PanelEvent::Resize),
				1 => Just(PanelEvent::ModeChanged(InteractionMode::Desktop)),
				1 => Just(PanelEvent::ModeChanged(InteractionMode::Mobile)),
			]
		}

		fn toggle_strategy() -> impl Strategy<Value = MobileToggle> {
			prop_oneof![Just(MobileToggle::Shared), Just(MobileToggle::Independent)]
		}

		proptest! {
			#[test]
			fn shared_policy_never_opens_two(events in prop::collection::vec(event_strategy(), 0..64)) {
				let mut s = desktop();
				for event in events {
					s.apply(event);
					prop_assert!(s.open_panels().len() <= 1);
				}
			}

			#[test]
			fn resize_always_closes(
				toggle in toggle_strategy(),
				events in prop::collection::vec(event_strategy(), 0..64),
			) {
				let mut s = mobile(toggle);
				for event in events {
					s.apply(event);
				}
				s.apply(PanelEvent::Resize);
				prop_assert!(s.open_panels().is_empty());
			}

			#[test]
			fn late_leave_keeps_latest_hover(
				events in prop::collection::vec(event_strategy(), 0..32),
				next in shape_strategy(),
				prev in shape_strategy(),
			) {
				prop_assume!(next != prev);
				let mut s = desktop();
				for event in events {
					s.apply(event);
				}
				s.apply(PanelEvent::ModeChanged(InteractionMode::Desktop));
				s.apply(PanelEvent::PointerEnter(next));
				s.apply(PanelEvent::PointerLeave(prev));
				prop_assert_eq!(open_shapes(&s), vec![next]);
			}
		}
	}
}
