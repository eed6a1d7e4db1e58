use super::layout::LayoutMode;

/// Surface geometry for one layout mode.
#[derive(Clone, Debug, PartialEq)]
pub struct ModeConfig {
	/// Clamp distance from every surface edge.
	pub margin: f64,
	pub max_width: f64,
	pub height: f64,
}

/// Tunables for the skills constellation.
#[derive(Clone, Debug, PartialEq)]
pub struct ConstellationConfig {
	/// Viewports narrower than this render the static grid.
	pub mobile_breakpoint: f64,
	pub desktop: ModeConfig,
	pub mobile: ModeConfig,
	/// Half the badge size; badges are drawn centered on the node position.
	pub badge_radius: f64,
	pub burst_count: usize,
	pub burst_radius: (f64, f64),
	pub burst_speed: (f64, f64),
	pub idle_fps: f64,
	pub drag_fps: f64,
	pub particle_life: u32,
	pub particle_damping: f64,
	/// Pointer travel (px) after which a press stops counting as a click.
	pub drag_threshold: f64,
	pub resize_debounce_ms: i32,
	pub star_count: usize,
}

impl Default for ConstellationConfig {
	fn default() -> Self {
		Self {
			mobile_breakpoint: 768.0,
			desktop: ModeConfig {
				margin: 40.0,
				max_width: 1400.0,
				height: 800.0,
			},
			mobile: ModeConfig {
				margin: 30.0,
				max_width: 768.0,
				height: 520.0,
			},
			badge_radius: 35.0,
			burst_count: 12,
			burst_radius: (10.0, 5.0),
			burst_speed: (2.0, 2.0),
			idle_fps: 30.0,
			drag_fps: 20.0,
			particle_life: 60,
			particle_damping: 0.97,
			drag_threshold: 4.0,
			resize_debounce_ms: 150,
			star_count: 20,
		}
	}
}

impl ConstellationConfig {
	pub fn mode(&self, mode: LayoutMode) -> &ModeConfig {
		match mode {
			LayoutMode::Desktop => &self.desktop,
			LayoutMode::Mobile => &self.mobile,
		}
	}
}
