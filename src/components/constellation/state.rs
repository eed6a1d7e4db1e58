use log::{debug, info};

use super::config::{ConstellationConfig, ModeConfig};
use super::interaction::{InteractionState, NodeVisual, Release};
use super::layout::{Layout, LayoutMode, Surface};
use super::particles::{BurstShape, ParticleSystem};
use super::registry::Registry;
use super::types::{Category, CategoryInfo, Point, SkillNode};

/// A connection line ready to paint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeView {
	pub from: Point,
	pub to: Point,
	pub color: &'static str,
	pub emphasized: bool,
}

pub struct ConstellationState {
	pub config: ConstellationConfig,
	registry: Registry,
	layout: Layout,
	pub particles: ParticleSystem,
	pub interaction: InteractionState,
	filter: Option<Category>,
	/// Seconds of animation, drives the star twinkle.
	pub elapsed: f64,
}

impl ConstellationState {
	pub fn new(
		config: ConstellationConfig,
		viewport_width: f64,
		container_width: f64,
		seed: u64,
	) -> Self {
		let mode = LayoutMode::for_viewport(viewport_width, config.mobile_breakpoint);
		let registry = registry_for(mode);
		let surface = surface_for(config.mode(mode), container_width);
		let layout = Layout::initialize(mode, &registry, surface, config.mode(mode).margin);
		let particles = ParticleSystem::new(seed, config.particle_damping);

		Self {
			config,
			registry,
			layout,
			particles,
			interaction: InteractionState::default(),
			filter: None,
			elapsed: 0.0,
		}
	}

	pub fn mode(&self) -> LayoutMode {
		self.layout.mode()
	}

	pub fn surface(&self) -> Surface {
		self.layout.surface()
	}

	pub fn badge_radius(&self) -> f64 {
		self.config.badge_radius
	}

	/// Column count of the mobile card grid.
	pub fn grid_columns(&self) -> usize {
		self.layout.grid_columns()
	}

	pub fn registry(&self) -> &Registry {
		&self.registry
	}

	pub fn categories(&self) -> Vec<CategoryInfo> {
		self.registry.categories()
	}

	/// Applies a new viewport; returns `true` if the rendering mode flipped.
	pub fn set_viewport(&mut self, viewport_width: f64, container_width: f64) -> bool {
		let mode = LayoutMode::for_viewport(viewport_width, self.config.mobile_breakpoint);
		let surface = surface_for(self.config.mode(mode), container_width);

		if mode == self.mode() {
			if surface != self.surface() {
				self.layout.resize(surface);
			}
			return false;
		}

		info!("constellation switching to {:?} layout at {}px", mode, viewport_width);
		self.registry = registry_for(mode);
		self.layout = Layout::initialize(mode, &self.registry, surface, self.config.mode(mode).margin);
		self.interaction.reset();
		self.particles.clear();
		true
	}

	pub fn filter(&self) -> Option<Category> {
		self.filter
	}

	/// `None` shows everything; re-selecting the active category clears it.
	pub fn select_category(&mut self, category: Option<Category>) {
		self.filter = match category {
			Some(c) if self.filter != Some(c) => Some(c),
			_ => None,
		};
		debug!("category filter: {:?}", self.filter);

		if let Some(idx) = self.interaction.dragged {
			if !self.is_visible(idx) {
				self.interaction.end();
			}
		}
		if let Some(idx) = self.interaction.hovered {
			if !self.is_visible(idx) {
				self.interaction.hovered = None;
			}
		}
	}

	pub fn is_visible(&self, idx: usize) -> bool {
		match (self.filter, self.registry.node(idx)) {
			(_, None) => false,
			(None, Some(_)) => true,
			(Some(c), Some(node)) => node.category == c,
		}
	}

	pub fn visible_ids(&self) -> Vec<String> {
		self.registry
			.nodes()
			.iter()
			.enumerate()
			.filter(|(idx, _)| self.is_visible(*idx))
			.map(|(_, node)| node.id.clone())
			.collect()
	}

	pub fn node_by_id(&self, id: &str) -> Option<(usize, &SkillNode)> {
		let idx = self.registry.index_of(id)?;
		Some((idx, self.registry.node(idx)?))
	}

	pub fn position_of(&self, id: &str) -> Option<Point> {
		self.layout.position(self.registry.index_of(id)?)
	}

	pub fn visual_of(&self, id: &str) -> NodeVisual {
		self.registry
			.index_of(id)
			.map(|idx| self.interaction.visual(idx))
			.unwrap_or(NodeVisual::Idle)
	}

	pub fn is_dragging(&self) -> bool {
		self.interaction.is_dragging()
	}

	pub fn hover_enter(&mut self, id: &str) {
		if self.interaction.is_dragging() || self.interaction.touch {
			return;
		}
		if let Some(idx) = self.registry.index_of(id).filter(|&i| self.is_visible(i)) {
			self.interaction.hovered = Some(idx);
		}
	}

	pub fn hover_leave(&mut self, id: &str) {
		if self.interaction.hovered.is_some() && self.interaction.hovered == self.registry.index_of(id) {
			self.interaction.hovered = None;
		}
	}

	/// Pointer or touch down on a node. Ignored while another node is dragged
	/// and in the static mobile grid.
	pub fn press(&mut self, id: &str, pointer: Point, touch: bool) -> bool {
		if self.mode() == LayoutMode::Mobile {
			return false;
		}
		let Some(idx) = self.registry.index_of(id).filter(|&i| self.is_visible(i)) else {
			return false;
		};
		let Some(node_pos) = self.layout.position(idx) else {
			return false;
		};
		let started = self.interaction.begin_drag(idx, pointer, node_pos, touch);
		if started {
			debug!("drag start {:?}", id);
		}
		started
	}

	pub fn pointer_move(&mut self, pointer: Point) {
		let threshold = self.config.drag_threshold;
		match self.interaction.drag_target(pointer, threshold) {
			Some((idx, target)) => {
				self.layout.set_position(idx, target.x, target.y);
			}
			None => self.interaction.pointer = Some(pointer),
		}
	}

	/// Ends any press. A press that never travelled bursts particles.
	pub fn release(&mut self) -> Release {
		let outcome = self.interaction.end();
		if let Release::Click(idx) = outcome {
			self.burst(idx);
		}
		outcome
	}

	/// Pointer left the widget: abandon drag and hover, no click.
	pub fn cancel(&mut self) {
		self.interaction.end();
		self.interaction.hovered = None;
		self.interaction.pointer = None;
	}

	pub fn burst(&mut self, idx: usize) -> usize {
		let (Some(node), Some(origin)) = (self.registry.node(idx), self.layout.position(idx)) else {
			return 0;
		};
		let color = node.category.color();
		let shape = BurstShape {
			count: self.config.burst_count,
			radius: self.config.burst_radius,
			speed: self.config.burst_speed,
			life: self.config.particle_life,
		};
		let spawned = self.particles.burst(origin, color, &shape);
		debug!("burst at {:?}, {} particles live", node.id, self.particles.len());
		spawned
	}

	pub fn target_fps(&self) -> f64 {
		if self.is_dragging() {
			self.config.drag_fps
		} else {
			self.config.idle_fps
		}
	}

	/// Advances per-frame animation state.
	pub fn tick(&mut self, dt: f64) {
		self.particles.tick();
		self.elapsed += dt;
	}

	pub fn show_stars(&self) -> bool {
		!self.is_dragging() && self.mode() == LayoutMode::Desktop
	}

	/// Lines to paint this frame. While dragging only lines touching the dragged
	/// node are returned.
	pub fn visible_edges(&self) -> Vec<EdgeView> {
		if self.mode() == LayoutMode::Mobile {
			return Vec::new();
		}
		let focus = self.interaction.dragged.or(self.interaction.hovered);
		let dragging = self.is_dragging();

		self.registry
			.edges()
			.iter()
			.filter(|&&(a, b)| self.is_visible(a) && self.is_visible(b))
			.filter(|&&(a, b)| !dragging || focus == Some(a) || focus == Some(b))
			.filter_map(|&(a, b)| {
				let (from, to) = (self.layout.position(a)?, self.layout.position(b)?);
				let color = self.registry.node(a)?.category.color();
				Some(EdgeView {
					from,
					to,
					color,
					emphasized: focus == Some(a) || focus == Some(b),
				})
			})
			.collect()
	}

	/// Endpoints of the dashed hover tether, if one should be drawn.
	pub fn tether(&self) -> Option<(Point, Point, &'static str)> {
		if self.is_dragging() {
			return None;
		}
		let idx = self.interaction.hovered?;
		let pointer = self.interaction.pointer?;
		let node = self.registry.node(idx)?;
		Some((self.layout.position(idx)?, pointer, node.category.color()))
	}
}

fn registry_for(mode: LayoutMode) -> Registry {
	match mode {
		LayoutMode::Desktop => Registry::desktop(),
		LayoutMode::Mobile => Registry::grid(),
	}
}

fn surface_for(mode: &ModeConfig, container_width: f64) -> Surface {
	Surface {
		width: container_width.min(mode.max_width).max(2.0 * mode.margin),
		height: mode.height,
	}
}
