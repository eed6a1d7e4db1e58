use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::html;
use leptos::prelude::*;
use log::{debug, error, warn};
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, EventTarget, MouseEvent, TouchEvent, Window};

use super::config::ConstellationConfig;
use super::frame::FramePacer;
use super::grid::MobileGrid;
use super::interaction::{NodeVisual, is_primary_button};
use super::layout::{LayoutMode, Surface};
use super::render;
use super::state::ConstellationState;
use super::style::{
	Reveal, badge_style, filter_button_style, label_style, pip_style, reveal_style, ring_dash,
	star_style, with_alpha,
};
use super::types::{CategoryInfo, MAX_LEVEL, Point};

pub(super) type StateSignal = RwSignal<ConstellationState, LocalStorage>;

/// Interactive skills constellation. Below the mobile breakpoint it renders a
/// static, filterable grid of the same catalog instead of the canvas.
#[component]
pub fn SkillsConstellation(
	/// Overrides the default tuning.
	#[prop(optional)]
	config: Option<ConstellationConfig>,
) -> impl IntoView {
	let config = config.unwrap_or_default();
	let viewport = web_sys::window()
		.as_ref()
		.and_then(viewport_width)
		.unwrap_or(config.mobile_breakpoint);
	let seed = js_sys::Date::now() as u64;
	let state: StateSignal =
		RwSignal::new_local(ConstellationState::new(config, viewport, viewport, seed));
	let mode = Memo::new(move |_| state.with(|s| s.mode()));

	let canvas_ref = NodeRef::<html::Canvas>::new();
	let container_ref = NodeRef::<html::Div>::new();
	let lifecycle = Lifecycle::default();

	// Re-measure after every mode flip, once the new subtree is mounted.
	Effect::new(move |_| {
		mode.track();
		sync_viewport(state, container_ref);
	});

	let lifecycle_start = lifecycle.clone();
	Effect::new(move |_| lifecycle_start.start(state, canvas_ref, container_ref));

	let guard = SendWrapper::new(lifecycle);
	on_cleanup(move || guard.teardown());

	view! {
		<section id="skills" class="skills-section">
			{move || match mode.get() {
				LayoutMode::Desktop => {
					view! {
						<DesktopConstellation
							state=state
							canvas_ref=canvas_ref
							container_ref=container_ref
						/>
					}
						.into_any()
				}
				LayoutMode::Mobile => view! { <MobileGrid state=state /> }.into_any(),
			}}
		</section>
	}
}

/// Browser resources owned by one mounted widget.
#[derive(Clone, Default)]
struct Lifecycle {
	alive: Rc<Cell<bool>>,
	frame: Rc<Cell<Option<i32>>>,
	animate: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>,
	listeners: Rc<RefCell<Vec<(EventTarget, &'static str, Closure<dyn FnMut()>)>>>,
	resize_timer: Rc<Cell<Option<i32>>>,
	resize_fire: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl Lifecycle {
	fn start(
		&self,
		state: StateSignal,
		canvas_ref: NodeRef<html::Canvas>,
		container_ref: NodeRef<html::Div>,
	) {
		if self.alive.replace(true) {
			return;
		}
		let Some(window) = web_sys::window() else {
			error!("no window; constellation stays static");
			return;
		};

		// A release anywhere in the document ends a drag.
		match window.document() {
			Some(document) => {
				for event in ["mouseup", "touchend"] {
					let cb = Closure::<dyn FnMut()>::new(move || {
						state.try_update(|s| s.release());
					});
					self.listen(document.clone().into(), event, cb);
				}
			}
			None => warn!("no document; global release fallback disabled"),
		}

		let delay = state.with_untracked(|s| s.config.resize_debounce_ms);
		let timer = self.resize_timer.clone();
		*self.resize_fire.borrow_mut() = Some(Closure::new(move || {
			timer.set(None);
			sync_viewport(state, container_ref);
		}));
		let (timer, fire) = (self.resize_timer.clone(), self.resize_fire.clone());
		let on_resize = Closure::<dyn FnMut()>::new(move || {
			let Some(win) = web_sys::window() else {
				return;
			};
			if let Some(id) = timer.take() {
				win.clear_timeout_with_handle(id);
			}
			if let Some(cb) = fire.borrow().as_ref() {
				match win.set_timeout_with_callback_and_timeout_and_arguments_0(
					cb.as_ref().unchecked_ref(),
					delay,
				) {
					Ok(id) => timer.set(Some(id)),
					Err(err) => warn!("resize debounce failed: {:?}", err),
				}
			}
		});
		self.listen(window.clone().into(), "resize", on_resize);

		let (alive, frame, animate_inner) =
			(self.alive.clone(), self.frame.clone(), self.animate.clone());
		let mut pacer = FramePacer::default();
		*self.animate.borrow_mut() = Some(Closure::new(move |now: f64| {
			if !alive.get() {
				return;
			}
			let Some(fps) = state.try_with_untracked(|s| s.target_fps()) else {
				return;
			};
			if let Some(dt) = pacer.ready(now, fps) {
				state.update_untracked(|s| s.tick(dt));
				let surface = state.with_untracked(|s| s.surface());
				if let Some(ctx) = canvas_context(canvas_ref, surface) {
					state.with_untracked(|s| render::render(s, &ctx));
				}
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				frame.set(
					web_sys::window()
						.and_then(|w| w.request_animation_frame(cb.as_ref().unchecked_ref()).ok()),
				);
			}
		}));
		if let Some(ref cb) = *self.animate.borrow() {
			self.frame
				.set(window.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
		}
		debug!("constellation render loop started");
	}

	fn listen(&self, target: EventTarget, event: &'static str, cb: Closure<dyn FnMut()>) {
		if let Err(err) = target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref()) {
			warn!("could not listen for {}: {:?}", event, err);
			return;
		}
		self.listeners.borrow_mut().push((target, event, cb));
	}

	fn teardown(&self) {
		self.alive.set(false);
		if let Some(window) = web_sys::window() {
			if let Some(id) = self.frame.take() {
				let _ = window.cancel_animation_frame(id);
			}
			if let Some(id) = self.resize_timer.take() {
				window.clear_timeout_with_handle(id);
			}
		}
		for (target, event, cb) in self.listeners.borrow_mut().drain(..) {
			let _ = target.remove_event_listener_with_callback(event, cb.as_ref().unchecked_ref());
		}
		self.animate.borrow_mut().take();
		self.resize_fire.borrow_mut().take();
		debug!("constellation torn down");
	}
}

fn viewport_width(window: &Window) -> Option<f64> {
	window.inner_width().ok().and_then(|w| w.as_f64())
}

fn sync_viewport(state: StateSignal, container_ref: NodeRef<html::Div>) {
	let Some(viewport) = web_sys::window().as_ref().and_then(viewport_width) else {
		return;
	};
	// measure the host, the surface div is sized from the result
	let container = container_ref
		.get_untracked()
		.and_then(|el| el.parent_element())
		.map(|host| host.client_width() as f64)
		.filter(|w| *w > 0.0)
		.unwrap_or(viewport);
	state.try_update(|s| s.set_viewport(viewport, container));
}

/// Sizes the canvas to the surface and returns its 2D context.
fn canvas_context(
	canvas_ref: NodeRef<html::Canvas>,
	surface: Surface,
) -> Option<CanvasRenderingContext2d> {
	let canvas = canvas_ref.get_untracked()?;
	let (w, h) = (surface.width as u32, surface.height as u32);
	if canvas.width() != w {
		canvas.set_width(w);
	}
	if canvas.height() != h {
		canvas.set_height(h);
	}
	canvas.get_context("2d").ok()??.dyn_into().ok()
}

fn local_point(container_ref: NodeRef<html::Div>, client_x: i32, client_y: i32) -> Option<Point> {
	let rect = container_ref.get_untracked()?.get_bounding_client_rect();
	Some(Point::new(
		client_x as f64 - rect.left(),
		client_y as f64 - rect.top(),
	))
}

fn touch_point(container_ref: NodeRef<html::Div>, ev: &TouchEvent) -> Option<Point> {
	let touch = ev.touches().get(0)?;
	local_point(container_ref, touch.client_x(), touch.client_y())
}

/// Flips to visible on the frame after mount so CSS transitions run.
pub(super) fn reveal_on_mount() -> RwSignal<bool> {
	let revealed = RwSignal::new(false);
	Effect::new(move |_| request_animation_frame(move || revealed.set(true)));
	revealed
}

pub(super) fn reveal(revealed: RwSignal<bool>, delay: f64) -> String {
	let phase = if revealed.get() {
		Reveal::Visible
	} else {
		Reveal::Hidden
	};
	reveal_style(phase, delay)
}

#[component]
fn DesktopConstellation(
	state: StateSignal,
	canvas_ref: NodeRef<html::Canvas>,
	container_ref: NodeRef<html::Div>,
) -> impl IntoView {
	let visible = Memo::new(move |_| state.with(|s| s.visible_ids()));
	let surface = Memo::new(move |_| state.with(|s| s.surface()));
	let categories = state.with_untracked(|s| s.categories());
	let revealed = reveal_on_mount();

	let on_mousemove = move |ev: MouseEvent| {
		let Some(p) = local_point(container_ref, ev.client_x(), ev.client_y()) else {
			return;
		};
		// the tether only needs the pointer on the next frame, not a re-render
		if state.with_untracked(|s| s.is_dragging()) {
			state.update(|s| s.pointer_move(p));
		} else {
			state.update_untracked(|s| s.pointer_move(p));
		}
	};

	let on_touchmove = move |ev: TouchEvent| {
		if !state.with_untracked(|s| s.is_dragging()) {
			return;
		}
		ev.prevent_default();
		if let Some(p) = touch_point(container_ref, &ev) {
			state.update(|s| s.pointer_move(p));
		}
	};

	let on_mouseleave = move |_: MouseEvent| state.update(|s| s.cancel());

	view! {
		<div class="constellation-header" style=move || reveal(revealed, 0.0)>
			<h2>"Interactive Tech Universe"</h2>
			<p>
				"Navigate through my technical constellation. Hover to reveal connections, "
				"click for cosmic effects, and drag to explore the universe."
			</p>
		</div>
		<div style=move || reveal(revealed, 0.2)>
			<CategoryFilter state=state show_counts=true />
		</div>
		<div
			node_ref=container_ref
			class="constellation-surface"
			on:mousemove=on_mousemove
			on:touchmove=on_touchmove
			on:mouseleave=on_mouseleave
			style=move || {
				let s = surface.get();
				format!(
					"position: relative; max-width: 100%; width: {}px; height: {}px; margin: 0 auto; \
					 overflow: hidden; border-radius: 1rem; background: radial-gradient(ellipse at center, \
					 rgba(6, 182, 212, 0.03) 0%, rgba(139, 92, 246, 0.03) 50%, transparent 100%); {}",
					s.width,
					s.height,
					reveal(revealed, 0.4),
				)
			}
		>
			<canvas
				node_ref=canvas_ref
				class="constellation-canvas"
				style="position: absolute; inset: 0; display: block; pointer-events: none;"
			/>
			<For
				each=move || visible.get()
				key=|id: &String| id.clone()
				children=move |id: String| {
					view! { <SkillBadge state=state id=id container_ref=container_ref /> }
				}
			/>
		</div>
		<CategoryStats categories=categories />
	}
}

#[component]
fn SkillBadge(state: StateSignal, id: String, container_ref: NodeRef<html::Div>) -> impl IntoView {
	let node = state.with_untracked(|s| s.node_by_id(&id).map(|(_, n)| n.clone()));
	node.map(move |node| {
		let (color, level, name) = (node.category.color(), node.level, node.name);
		let visual = Memo::new({
			let id = id.clone();
			move |_| state.with(|s| s.visual_of(&id))
		});
		let badge_css = {
			let id = id.clone();
			move || {
				state.with(|s| {
					let p = s.position_of(&id).unwrap_or_default();
					badge_style(s.visual_of(&id), p, s.badge_radius())
				})
			}
		};
		let on_mousedown = {
			let id = id.clone();
			move |ev: MouseEvent| {
				if !is_primary_button(ev.button()) {
					return;
				}
				ev.prevent_default();
				if let Some(p) = local_point(container_ref, ev.client_x(), ev.client_y()) {
					state.update(|s| {
						s.press(&id, p, false);
					});
				}
			}
		};
		let on_touchstart = {
			let id = id.clone();
			move |ev: TouchEvent| {
				ev.prevent_default();
				if let Some(p) = touch_point(container_ref, &ev) {
					state.update(|s| {
						s.press(&id, p, true);
					});
				}
			}
		};
		let on_mouseenter = {
			let id = id.clone();
			move |_: MouseEvent| state.update(|s| s.hover_enter(&id))
		};
		let on_mouseleave = move |_: MouseEvent| state.update(|s| s.hover_leave(&id));
		let tooltip_name = name.clone();

		view! {
			<div
				class="skill-badge"
				style=badge_css
				on:mousedown=on_mousedown
				on:touchstart=on_touchstart
				on:mouseenter=on_mouseenter
				on:mouseleave=on_mouseleave
			>
				<div
					class="skill-glow"
					style=format!(
						"position: absolute; inset: 0; border-radius: 50%; filter: blur(8px); opacity: 0.4; \
						 background: radial-gradient(circle, {}, transparent);",
						with_alpha(color, 0.25),
					)
				></div>
				<div class="skill-star" style=move || star_style(visual.get(), color)>
					<span class="skill-initials">{initials(&name)}</span>
				</div>
				<svg class="skill-ring" viewBox="0 0 56 56" style="transform: rotate(-90deg);">
					<circle
						cx="28"
						cy="28"
						r="26"
						fill="none"
						stroke="rgba(255, 255, 255, 0.2)"
						stroke-width="1"
					></circle>
					<circle
						cx="28"
						cy="28"
						r="26"
						fill="none"
						stroke="#FFFFFF"
						stroke-width="2"
						stroke-dasharray=ring_dash(level)
					></circle>
				</svg>
				<div class="skill-label" style=move || label_style(visual.get(), color)>
					{name.clone()}
				</div>
				<Show when=move || visual.get() == NodeVisual::Hovered>
					<SkillTooltip name=tooltip_name.clone() level=level color=color />
				</Show>
			</div>
		}
	})
}

#[component]
fn SkillTooltip(name: String, level: u8, color: &'static str) -> impl IntoView {
	let pips = (0..MAX_LEVEL)
		.map(|i| view! { <span class="level-pip" style=pip_style(i < level, color)></span> })
		.collect_view();

	view! {
		<div
			class="skill-tooltip"
			style=format!(
				"border: 1px solid {}; box-shadow: 0 10px 25px rgba(0, 0, 0, 0.3), 0 0 15px {};",
				with_alpha(color, 0.25),
				with_alpha(color, 0.19),
			)
		>
			<p class="tooltip-name">{name}</p>
			<div class="tooltip-level">
				<div class="level-pips">{pips}</div>
				<span>{format!("{}/{}", level, MAX_LEVEL)}</span>
			</div>
		</div>
	}
}

/// "All" plus one toggle per category.
#[component]
pub(super) fn CategoryFilter(state: StateSignal, show_counts: bool) -> impl IntoView {
	let filter = Memo::new(move |_| state.with(|s| s.filter()));
	let (total, categories) = state.with_untracked(|s| (s.registry().len(), s.categories()));

	let buttons = categories
		.into_iter()
		.map(|info| {
			let (category, color) = (info.category, info.color);
			let label = if show_counts {
				format!("{} ({})", info.name, info.count)
			} else {
				info.name.to_string()
			};
			view! {
				<button
					class="filter-button"
					style=move || filter_button_style(filter.get() == Some(category), Some(color))
					on:click=move |_| state.update(|s| s.select_category(Some(category)))
				>
					{label}
				</button>
			}
		})
		.collect_view();

	view! {
		<div class="category-filter">
			<button
				class="filter-button"
				style=move || filter_button_style(filter.get().is_none(), None)
				on:click=move |_| state.update(|s| s.select_category(None))
			>
				{format!("All ({})", total)}
			</button>
			{buttons}
		</div>
	}
}

#[component]
fn CategoryStats(categories: Vec<CategoryInfo>) -> impl IntoView {
	view! {
		<div class="category-stats">
			{categories
				.into_iter()
				.map(|info| {
					view! {
						<div
							class="category-stat"
							style=format!(
								"box-shadow: 0 0 30px {}, inset 0 0 20px rgba(255, 255, 255, 0.05);",
								with_alpha(info.color, 0.08),
							)
						>
							<div
								class="stat-count"
								style=format!(
									"color: {}; text-shadow: 0 0 20px {};",
									info.color,
									with_alpha(info.color, 0.38),
								)
							>
								{info.count}
							</div>
							<div class="stat-name">{info.name}</div>
						</div>
					}
				})
				.collect_view()}
		</div>
	}
}

/// Up to two leading letters standing in for a logo.
fn initials(name: &str) -> String {
	let letters: String = name
		.split(|c: char| c.is_whitespace() || c == '.')
		.filter_map(|word| word.chars().find(|c| c.is_alphanumeric()))
		.take(2)
		.collect();
	if letters.is_empty() {
		name.chars().take(2).collect()
	} else {
		letters.to_uppercase()
	}
}

#[cfg(test)]
mod tests {
	use super::initials;

	#[test]
	fn initials_from_names() {
		assert_eq!(initials("REST API"), "RA");
		assert_eq!(initials("Node.js"), "NJ");
		assert_eq!(initials("React"), "R");
		assert_eq!(initials("VS Code"), "VC");
	}
}
