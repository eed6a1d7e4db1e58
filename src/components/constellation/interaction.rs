use super::types::Point;

/// Per-node interaction phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeVisual {
	Idle,
	Hovered,
	Dragging,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Press {
	pub node: usize,
	pub origin: Point,
	/// Set once the pointer travels past the drag threshold.
	pub moved: bool,
}

/// Pointer focus shared by all nodes; at most one node is dragged.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InteractionState {
	pub hovered: Option<usize>,
	pub dragged: Option<usize>,
	pub grab_offset: Point,
	pub press: Option<Press>,
	/// Last pointer position while not dragging.
	pub pointer: Option<Point>,
	pub touch: bool,
}

/// What a pointer release amounted to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Release {
	Idle,
	DragEnded(usize),
	Click(usize),
}

/// Only the main button (usually left) starts a press.
pub fn is_primary_button(button: i16) -> bool {
	button == 0
}

impl InteractionState {
	pub fn is_dragging(&self) -> bool {
		self.dragged.is_some()
	}

	pub fn begin_drag(&mut self, node: usize, pointer: Point, node_pos: Point, touch: bool) -> bool {
		if self.dragged.is_some() {
			return false;
		}
		self.dragged = Some(node);
		self.grab_offset = pointer - node_pos;
		self.press = Some(Press {
			node,
			origin: pointer,
			moved: false,
		});
		self.hovered = None;
		self.touch = touch;
		true
	}

	/// Target position for the dragged node, keeping the grab point under the pointer.
	pub fn drag_target(&mut self, pointer: Point, threshold: f64) -> Option<(usize, Point)> {
		let node = self.dragged?;
		if let Some(press) = self.press.as_mut() {
			if !press.moved && pointer.distance(press.origin) > threshold {
				press.moved = true;
			}
		}
		Some((node, pointer - self.grab_offset))
	}

	/// Ends the gesture. The touch flag only lives as long as the touch itself.
	pub fn end(&mut self) -> Release {
		let press = self.press.take();
		let dragged = self.dragged.take();
		self.grab_offset = Point::default();
		self.touch = false;
		match (dragged, press) {
			(Some(node), Some(press)) if !press.moved => Release::Click(node),
			(Some(node), _) => Release::DragEnded(node),
			_ => Release::Idle,
		}
	}

	pub fn reset(&mut self) {
		*self = Self::default();
	}

	pub fn visual(&self, idx: usize) -> NodeVisual {
		if self.dragged == Some(idx) {
			NodeVisual::Dragging
		} else if self.hovered == Some(idx) {
			NodeVisual::Hovered
		} else {
			NodeVisual::Idle
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn second_press_is_ignored_while_dragging() {
		let mut s = InteractionState::default();
		assert!(s.begin_drag(1, Point::new(10.0, 10.0), Point::new(5.0, 5.0), false));
		assert!(!s.begin_drag(2, Point::new(0.0, 0.0), Point::new(0.0, 0.0), false));
		assert_eq!(s.dragged, Some(1));
		assert_eq!(s.grab_offset, Point::new(5.0, 5.0));
	}

	#[test]
	fn drag_target_preserves_grab_offset() {
		let mut s = InteractionState::default();
		s.begin_drag(0, Point::new(110.0, 95.0), Point::new(100.0, 100.0), false);
		assert_eq!(
			s.drag_target(Point::new(210.0, 195.0), 4.0),
			Some((0, Point::new(200.0, 200.0)))
		);
	}

	#[test]
	fn release_without_travel_is_a_click() {
		let mut s = InteractionState::default();
		s.begin_drag(3, Point::new(10.0, 10.0), Point::new(10.0, 10.0), false);
		s.drag_target(Point::new(12.0, 11.0), 4.0);
		assert_eq!(s.end(), Release::Click(3));
		assert_eq!(s.dragged, None);
	}

	#[test]
	fn release_after_travel_ends_drag() {
		let mut s = InteractionState::default();
		s.begin_drag(3, Point::new(10.0, 10.0), Point::new(10.0, 10.0), false);
		s.drag_target(Point::new(40.0, 10.0), 4.0);
		s.drag_target(Point::new(11.0, 10.0), 4.0);
		assert_eq!(s.end(), Release::DragEnded(3));
	}

	#[test]
	fn release_with_nothing_pressed_is_idle() {
		let mut s = InteractionState::default();
		assert_eq!(s.end(), Release::Idle);
	}

	#[test]
	fn drag_clears_hover() {
		let mut s = InteractionState {
			hovered: Some(2),
			..Default::default()
		};
		s.begin_drag(2, Point::default(), Point::default(), false);
		assert_eq!(s.hovered, None);
		assert_eq!(s.visual(2), NodeVisual::Dragging);
	}

	#[test]
	fn release_clears_the_touch_flag() {
		let mut s = InteractionState::default();
		s.begin_drag(2, Point::new(10.0, 10.0), Point::new(10.0, 10.0), true);
		assert!(s.touch);
		assert_eq!(s.end(), Release::Click(2));
		assert!(!s.touch);
	}

	#[test]
	fn only_the_main_button_presses() {
		assert!(is_primary_button(0));
		assert!(!is_primary_button(1));
		assert!(!is_primary_button(2));
	}
}
