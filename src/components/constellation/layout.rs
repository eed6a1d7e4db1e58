use super::registry::Registry;
use super::types::Point;

/// Reference frame the desktop coordinates were authored in.
pub const REFERENCE_WIDTH: f64 = 1400.0;
pub const REFERENCE_HEIGHT: f64 = 800.0;

const GRID_WIDE_MIN: f64 = 640.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutMode {
	Desktop,
	Mobile,
}

impl LayoutMode {
	pub fn for_viewport(width: f64, breakpoint: f64) -> Self {
		if width < breakpoint {
			LayoutMode::Mobile
		} else {
			LayoutMode::Desktop
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Surface {
	pub width: f64,
	pub height: f64,
}

/// Live node positions, indexed like the registry they were built from.
#[derive(Clone, Debug)]
pub struct Layout {
	mode: LayoutMode,
	surface: Surface,
	margin: f64,
	positions: Vec<Point>,
}

impl Layout {
	pub fn initialize(mode: LayoutMode, registry: &Registry, surface: Surface, margin: f64) -> Self {
		let mut layout = Self {
			mode,
			surface,
			margin,
			positions: Vec::with_capacity(registry.len()),
		};
		match mode {
			LayoutMode::Desktop => {
				let (sx, sy) = (
					(surface.width / REFERENCE_WIDTH).min(1.0),
					(surface.height / REFERENCE_HEIGHT).min(1.0),
				);
				for node in registry.nodes() {
					let p = layout.clamp(node.home.x * sx, node.home.y * sy);
					layout.positions.push(p);
				}
			}
			LayoutMode::Mobile => {
				let cols = layout.grid_columns();
				let rows = registry.len().div_ceil(cols).max(1);
				let col_step = (surface.width - 2.0 * margin).max(0.0) / (cols - 1) as f64;
				let row_step = if rows > 1 {
					((surface.height - 2.0 * margin).max(0.0) / (rows - 1) as f64).min(col_step)
				} else {
					0.0
				};
				for i in 0..registry.len() {
					let (row, col) = (i / cols, i % cols);
					let p = layout.clamp(
						margin + col as f64 * col_step,
						margin + row as f64 * row_step,
					);
					layout.positions.push(p);
				}
			}
		}
		layout
	}

	pub fn mode(&self) -> LayoutMode {
		self.mode
	}

	pub fn surface(&self) -> Surface {
		self.surface
	}

	pub fn grid_columns(&self) -> usize {
		if self.surface.width >= GRID_WIDE_MIN { 4 } else { 3 }
	}

	pub fn position(&self, idx: usize) -> Option<Point> {
		self.positions.get(idx).copied()
	}

	#[cfg(test)]
	pub fn positions(&self) -> &[Point] {
		&self.positions
	}

	pub fn clamp(&self, x: f64, y: f64) -> Point {
		let m = self.margin;
		// max() applied last so a surface smaller than two margins pins to the margin
		Point::new(
			x.min(self.surface.width - m).max(m),
			y.min(self.surface.height - m).max(m),
		)
	}

	/// Moves a node, clamped to the surface. Unknown indices are ignored.
	pub fn set_position(&mut self, idx: usize, x: f64, y: f64) -> Option<Point> {
		let p = self.clamp(x, y);
		let slot = self.positions.get_mut(idx)?;
		*slot = p;
		Some(p)
	}

	pub fn resize(&mut self, surface: Surface) {
		self.surface = surface;
		for i in 0..self.positions.len() {
			let p = self.positions[i];
			self.positions[i] = self.clamp(p.x, p.y);
		}
	}

	#[cfg(test)]
	pub fn in_bounds(&self, p: Point) -> bool {
		let m = self.margin;
		p.x >= m && p.x <= self.surface.width - m && p.y >= m && p.y <= self.surface.height - m
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn desktop(width: f64) -> Layout {
		Layout::initialize(
			LayoutMode::Desktop,
			&Registry::desktop(),
			Surface {
				width,
				height: 800.0,
			},
			40.0,
		)
	}

	#[test]
	fn mode_switches_below_breakpoint() {
		assert_eq!(LayoutMode::for_viewport(767.0, 768.0), LayoutMode::Mobile);
		assert_eq!(LayoutMode::for_viewport(768.0, 768.0), LayoutMode::Desktop);
	}

	#[test]
	fn full_width_keeps_authored_positions() {
		let layout = desktop(1400.0);
		assert_eq!(layout.position(0), Some(Point::new(250.0, 300.0)));
	}

	#[test]
	fn narrow_surface_scales_every_node_into_bounds() {
		let layout = desktop(900.0);
		assert!(layout.positions().iter().all(|&p| layout.in_bounds(p)));
		let supabase = layout.position(19).map(|p| p.x);
		assert!(supabase.is_some_and(|x| x < 900.0 - 40.0));
	}

	#[test]
	fn set_position_clamps_to_margins() {
		let mut layout = desktop(1400.0);
		assert_eq!(
			layout.set_position(0, -500.0, 5000.0),
			Some(Point::new(40.0, 760.0))
		);
		assert_eq!(
			layout.set_position(0, 9000.0, 10.0),
			Some(Point::new(1360.0, 40.0))
		);
	}

	#[test]
	fn surface_narrower_than_margins_pins_to_margin() {
		let mut layout = desktop(1400.0);
		layout.resize(Surface {
			width: 50.0,
			height: 60.0,
		});
		assert_eq!(layout.clamp(500.0, -20.0), Point::new(40.0, 40.0));
	}

	#[test]
	fn unknown_index_is_a_no_op() {
		let mut layout = desktop(1400.0);
		let before = layout.positions().to_vec();
		assert_eq!(layout.set_position(999, 100.0, 100.0), None);
		assert_eq!(layout.positions(), before.as_slice());
	}

	#[test]
	fn resize_reclamps_positions() {
		let mut layout = desktop(1400.0);
		layout.resize(Surface {
			width: 600.0,
			height: 400.0,
		});
		assert!(layout.positions().iter().all(|&p| layout.in_bounds(p)));
	}

	#[test]
	fn mobile_grid_rows_and_columns() {
		let layout = Layout::initialize(
			LayoutMode::Mobile,
			&Registry::grid(),
			Surface {
				width: 420.0,
				height: 520.0,
			},
			30.0,
		);
		assert_eq!(layout.grid_columns(), 3);
		let (a, b, d) = (
			layout.position(0).unwrap_or_default(),
			layout.position(1).unwrap_or_default(),
			layout.position(3).unwrap_or_default(),
		);
		assert_eq!(a.y, b.y);
		assert!(b.x > a.x);
		assert_eq!(a.x, d.x);
		assert!(d.y > a.y);
		assert!(layout.positions().iter().all(|&p| layout.in_bounds(p)));
	}
}
