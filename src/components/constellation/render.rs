use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::state::ConstellationState;
use super::style::with_alpha;

const PARTICLE_RADIUS: f64 = 3.0;
const STAR_RADIUS: f64 = 1.0;

/// Paints one frame. Node badges are DOM elements; the canvas only carries
/// stars, particles and connective lines.
pub fn render(state: &ConstellationState, ctx: &CanvasRenderingContext2d) {
	let surface = state.surface();
	ctx.clear_rect(0.0, 0.0, surface.width, surface.height);
	if state.show_stars() {
		draw_stars(state, ctx);
	}
	draw_particles(state, ctx);
	draw_edges(state, ctx);
	draw_tether(state, ctx);
}

fn draw_stars(state: &ConstellationState, ctx: &CanvasRenderingContext2d) {
	let surface = state.surface();
	ctx.set_fill_style_str("rgba(255, 255, 255, 0.1)");
	for i in 0..state.config.star_count {
		let (x, y) = (
			(i as f64 * 147.83) % surface.width,
			(i as f64 * 91.27) % surface.height,
		);
		let twinkle = ((state.elapsed + i as f64).sin() + 1.0) * 0.5;
		ctx.set_global_alpha(0.1 * twinkle);
		ctx.begin_path();
		let _ = ctx.arc(x, y, STAR_RADIUS, 0.0, 2.0 * PI);
		ctx.fill();
	}
	ctx.set_global_alpha(1.0);
}

fn draw_particles(state: &ConstellationState, ctx: &CanvasRenderingContext2d) {
	for p in state.particles.iter() {
		ctx.set_fill_style_str(&with_alpha(p.color, p.alpha()));
		ctx.begin_path();
		let _ = ctx.arc(p.position.x, p.position.y, PARTICLE_RADIUS, 0.0, 2.0 * PI);
		ctx.fill();
	}
}

fn draw_edges(state: &ConstellationState, ctx: &CanvasRenderingContext2d) {
	ctx.set_line_cap("round");
	for edge in state.visible_edges() {
		let (alpha, width) = if edge.emphasized {
			(0.8, 2.5)
		} else {
			(0.25, 1.0)
		};
		ctx.set_stroke_style_str(&with_alpha(edge.color, alpha));
		ctx.set_line_width(width);
		ctx.begin_path();
		ctx.move_to(edge.from.x, edge.from.y);
		ctx.line_to(edge.to.x, edge.to.y);
		ctx.stroke();
	}
}

fn draw_tether(state: &ConstellationState, ctx: &CanvasRenderingContext2d) {
	let Some((from, to, color)) = state.tether() else {
		return;
	};
	let gradient = ctx.create_linear_gradient(from.x, from.y, to.x, to.y);
	if gradient.add_color_stop(0.0, &with_alpha(color, 0.5)).is_err()
		|| gradient.add_color_stop(1.0, "rgba(255, 255, 255, 0)").is_err()
	{
		return;
	}
	#[allow(deprecated)]
	ctx.set_stroke_style(&gradient);
	ctx.set_line_width(2.0);
	let _ = ctx.set_line_dash(&js_sys::Array::of2(
		&JsValue::from_f64(4.0),
		&JsValue::from_f64(4.0),
	));
	ctx.begin_path();
	ctx.move_to(from.x, from.y);
	ctx.line_to(to.x, to.y);
	ctx.stroke();
	let _ = ctx.set_line_dash(&js_sys::Array::new());
}
