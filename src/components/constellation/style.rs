//! State-to-style mapping for the DOM parts of the widget.
//!
//! Every function is pure: given an interaction phase or reveal state it returns
//! inline CSS. Tweening is left to CSS transitions.

use super::interaction::NodeVisual;
use super::types::{MAX_LEVEL, Point};

/// Circumference of the proficiency ring (r = 26).
pub const RING_CIRCUMFERENCE: f64 = 163.4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reveal {
	Hidden,
	Visible,
}

/// Converts `#RRGGBB` plus alpha into an `rgba()` string.
/// Malformed input falls back to white.
pub fn with_alpha(hex: &str, alpha: f64) -> String {
	let (r, g, b) = parse_hex(hex).unwrap_or((255, 255, 255));
	format!("rgba({}, {}, {}, {:.3})", r, g, b, alpha.clamp(0.0, 1.0))
}

fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
	let digits = hex.strip_prefix('#')?;
	if digits.len() != 6 {
		return None;
	}
	let channel = |i: usize| u8::from_str_radix(digits.get(i..i + 2)?, 16).ok();
	Some((channel(0)?, channel(2)?, channel(4)?))
}

/// Badge container: absolute position plus scale for the interaction phase.
pub fn badge_style(visual: NodeVisual, position: Point, radius: f64) -> String {
	let (scale, z, cursor) = match visual {
		NodeVisual::Idle => (1.0, 10, "grab"),
		NodeVisual::Hovered => (1.2, 50, "grab"),
		NodeVisual::Dragging => (1.1, 60, "grabbing"),
	};
	// shorter scale tween while dragging
	let transition = if visual == NodeVisual::Dragging {
		"transform 0.1s ease-out"
	} else {
		"transform 0.2s ease-out"
	};
	format!(
		"position: absolute; left: {:.1}px; top: {:.1}px; width: {d:.0}px; height: {d:.0}px; \
		 transform: scale({}); z-index: {}; cursor: {}; transition: {}; \
		 user-select: none; touch-action: none; will-change: transform;",
		position.x - radius,
		position.y - radius,
		scale,
		z,
		cursor,
		transition,
		d = radius * 2.0,
	)
}

/// Circular star body tinted by category.
pub fn star_style(visual: NodeVisual, color: &str) -> String {
	let (border, glow, inset) = match visual {
		NodeVisual::Idle => (with_alpha(color, 0.67), with_alpha(color, 0.38), 0.2),
		NodeVisual::Hovered | NodeVisual::Dragging => {
			("#FFFFFF".to_string(), with_alpha(color, 0.67), 0.3)
		}
	};
	let blur = if visual == NodeVisual::Idle { 15 } else { 25 };
	format!(
		"background: radial-gradient(circle at 30% 30%, {}, {}); border: 2px solid {}; \
		 box-shadow: 0 0 {}px {}, inset 0 0 15px rgba(255, 255, 255, {});",
		with_alpha(color, 1.0),
		with_alpha(color, 0.67),
		border,
		blur,
		glow,
		inset,
	)
}

pub fn label_style(visual: NodeVisual, color: &str) -> String {
	match visual {
		NodeVisual::Idle => "color: #A0A0A0; font-weight: 500; \
			text-shadow: 0 2px 4px rgba(0, 0, 0, 0.8); background: rgba(0, 0, 0, 0.3); \
			border: 1px solid transparent;"
			.to_string(),
		NodeVisual::Hovered | NodeVisual::Dragging => format!(
			"color: #FFFFFF; font-weight: 600; text-shadow: 0 0 10px {}; background: {}; \
			 border: 1px solid {};",
			color,
			with_alpha(color, 0.125),
			with_alpha(color, 0.25),
		),
	}
}

/// `stroke-dasharray` for the proficiency ring.
pub fn ring_dash(level: u8) -> String {
	let filled = RING_CIRCUMFERENCE * level.min(MAX_LEVEL) as f64 / MAX_LEVEL as f64;
	format!("{:.2} {:.1}", filled, RING_CIRCUMFERENCE)
}

/// Width of a level bar, as a percentage.
pub fn level_percent(level: u8) -> f64 {
	level.min(MAX_LEVEL) as f64 * 100.0 / MAX_LEVEL as f64
}

pub fn pip_style(filled: bool, color: &str) -> String {
	if filled {
		format!(
			"background-color: {}; box-shadow: 0 0 6px {};",
			color,
			with_alpha(color, 0.5)
		)
	} else {
		"background-color: rgba(255, 255, 255, 0.2); box-shadow: none;".to_string()
	}
}

/// Enter/leave variants for sections and badges, staggered by `delay` seconds.
pub fn reveal_style(reveal: Reveal, delay: f64) -> String {
	let (opacity, transform) = match reveal {
		Reveal::Hidden => (0.0, "translateY(20px) scale(0.95)"),
		Reveal::Visible => (1.0, "none"),
	};
	format!(
		"opacity: {}; transform: {}; transition: opacity 0.8s ease, transform 0.8s ease; \
		 transition-delay: {:.2}s;",
		opacity, transform, delay,
	)
}

pub fn filter_button_style(active: bool, color: Option<&str>) -> String {
	match (active, color) {
		(true, Some(color)) => format!(
			"background-color: {}; border-color: {}; color: {}; box-shadow: 0 0 25px {};",
			with_alpha(color, 0.19),
			color,
			color,
			with_alpha(color, 0.25),
		),
		(true, None) => "background: linear-gradient(90deg, rgba(6, 182, 212, 0.3), \
			rgba(59, 130, 246, 0.3)); border-color: rgba(34, 211, 238, 0.5); color: #67E8F9;"
			.to_string(),
		(false, _) => "background-color: rgba(255, 255, 255, 0.05); \
			border-color: rgba(255, 255, 255, 0.2);"
			.to_string(),
	}
}

pub fn grid_card_style(color: &str) -> String {
	format!(
		"background: linear-gradient(135deg, {}, {}); border: 1px solid {}; box-shadow: 0 2px 8px {};",
		with_alpha(color, 0.06),
		with_alpha(color, 0.02),
		with_alpha(color, 0.19),
		with_alpha(color, 0.08),
	)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn hex_with_alpha() {
		assert_eq!(with_alpha("#06B6D4", 0.5), "rgba(6, 182, 212, 0.500)");
		assert_eq!(with_alpha("#10b981", 2.0), "rgba(16, 185, 129, 1.000)");
	}

	#[test]
	fn malformed_hex_falls_back_to_white() {
		assert_eq!(with_alpha("teal", 1.0), "rgba(255, 255, 255, 1.000)");
		assert_eq!(with_alpha("#12345", 1.0), "rgba(255, 255, 255, 1.000)");
	}

	#[test]
	fn badge_is_centered_on_position() {
		let css = badge_style(NodeVisual::Idle, Point::new(100.0, 80.0), 35.0);
		assert!(css.contains("left: 65.0px"));
		assert!(css.contains("top: 45.0px"));
		assert!(css.contains("scale(1)"));
	}

	#[test]
	fn visuals_map_to_distinct_styles() {
		let p = Point::new(0.0, 0.0);
		let idle = badge_style(NodeVisual::Idle, p, 35.0);
		let hovered = badge_style(NodeVisual::Hovered, p, 35.0);
		let dragging = badge_style(NodeVisual::Dragging, p, 35.0);
		assert!(hovered.contains("scale(1.2)"));
		assert!(dragging.contains("cursor: grabbing"));
		assert!(dragging.contains("transition: transform 0.1s"));
		assert!(!dragging.contains("left 0") && !idle.contains("top 0"));
		assert_ne!(idle, hovered);
		assert_ne!(hovered, dragging);
	}

	#[test]
	fn ring_dash_scales_with_level() {
		assert_eq!(ring_dash(10), "163.40 163.4");
		assert_eq!(ring_dash(5), "81.70 163.4");
		assert_eq!(ring_dash(0), "0.00 163.4");
	}

	#[test]
	fn reveal_variants() {
		assert!(reveal_style(Reveal::Hidden, 0.0).starts_with("opacity: 0;"));
		assert!(reveal_style(Reveal::Visible, 0.25).contains("transition-delay: 0.25s"));
	}

	#[test]
	fn inactive_filter_button_is_neutral() {
		assert_eq!(
			filter_button_style(false, Some("#F59E0B")),
			filter_button_style(false, None)
		);
		assert!(filter_button_style(true, Some("#F59E0B")).contains("color: #F59E0B"));
	}
}
