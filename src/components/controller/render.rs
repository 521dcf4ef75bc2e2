use leptos::prelude::*;

use crate::shape::ShapeKind;

const GOLD: &str = "#f1c453";
const GOLD_MID: &str = "#e0b041";

const CROSS_PATH: &str =
	"M20 38 L38 20 L50 32 L62 20 L80 38 L68 50 L80 62 L62 80 L50 68 L38 80 L20 62 L32 50 Z";

/// Draws the outline for `shape`. Every shape shares the 100x100 view box.
pub fn shape_svg(shape: ShapeKind) -> AnyView {
	let outline = match shape {
		ShapeKind::Triangle => view! {
			<polygon points="50,10 90,80 10,80" fill="none" stroke-width="4" stroke=GOLD />
		}
		.into_any(),
		ShapeKind::Square => view! {
			<rect x="10" y="10" width="80" height="80" fill="none" stroke-width="4" stroke=GOLD_MID />
		}
		.into_any(),
		ShapeKind::Circle => view! {
			<circle cx="50" cy="50" r="40" fill="none" stroke-width="4" stroke=GOLD_MID />
		}
		.into_any(),
		ShapeKind::Cross => view! {
			<path d=CROSS_PATH fill="none" stroke-width="4" stroke=GOLD_MID />
		}
		.into_any(),
	};

	view! {
		<div class=format!("shape shape-{}", shape.key())>
			<svg viewBox="0 0 100 100" class="shape-svg">
				{outline}
			</svg>
			<div class="shape-glow" />
		</div>
	}
	.into_any()
}
