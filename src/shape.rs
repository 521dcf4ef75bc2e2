//! The four fixed controller shapes and where their panels attach.

use std::fmt;

/// One of the four controller nodes arranged around the composition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
	/// Top-centre node.
	Triangle,
	/// Left-centre node.
	Square,
	/// Right-centre node.
	Circle,
	/// Bottom-centre node.
	Cross,
}

/// Side of a node that its panel is positioned against on desktop layouts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Anchor {
	/// Panel drops below a node sitting in the top row.
	Top,
	/// Panel opens to the right of a node sitting in the left column.
	Left,
	/// Panel opens to the left of a node sitting in the right column.
	Right,
	/// Panel rises above a node sitting in the bottom row.
	Bottom,
}

impl ShapeKind {
	/// All shapes, in layout order.
	pub const ALL: [ShapeKind; 4] = [
		ShapeKind::Triangle,
		ShapeKind::Square,
		ShapeKind::Circle,
		ShapeKind::Cross,
	];

	/// Key of this shape in the link map document.
	pub const fn key(self) -> &'static str {
		match self {
			ShapeKind::Triangle => "triangle",
			ShapeKind::Square => "square",
			ShapeKind::Circle => "circle",
			ShapeKind::Cross => "cross",
		}
	}

	/// Looks a shape up by its link map key.
	pub fn from_key(key: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|s| s.key() == key)
	}

	/// Panel title used when the link map entry carries none.
	pub const fn default_title(self) -> &'static str {
		match self {
			ShapeKind::Triangle => "NFTs",
			ShapeKind::Square => "Books",
			ShapeKind::Circle => "GPTs",
			ShapeKind::Cross => "Author",
		}
	}

	/// Fixed anchor for this shape's slot in the layout grid.
	pub const fn anchor(self) -> Anchor {
		match self {
			ShapeKind::Triangle => Anchor::Top,
			ShapeKind::Square => Anchor::Left,
			ShapeKind::Circle => Anchor::Right,
			ShapeKind::Cross => Anchor::Bottom,
		}
	}

	pub(crate) const fn bit(self) -> u8 {
		match self {
			ShapeKind::Triangle => 0b0001,
			ShapeKind::Square => 0b0010,
			ShapeKind::Circle => 0b0100,
			ShapeKind::Cross => 0b1000,
		}
	}
}

impl fmt::Display for ShapeKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.key())
	}
}

impl Anchor {
	/// CSS class positioning the panel wrapper.
	pub const fn class(self) -> &'static str {
		match self {
			Anchor::Top => "panel-anchor-top",
			Anchor::Left => "panel-anchor-left",
			Anchor::Right => "panel-anchor-right",
			Anchor::Bottom => "panel-anchor-bottom",
		}
	}
}
