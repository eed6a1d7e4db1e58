use std::ops::{Add, Sub};

/// A 2D coordinate or offset in surface pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

impl Point {
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	pub fn distance(self, other: Point) -> f64 {
		let (dx, dy) = (self.x - other.x, self.y - other.y);
		(dx * dx + dy * dy).sqrt()
	}
}

impl Add for Point {
	type Output = Point;

	fn add(self, rhs: Point) -> Point {
		Point::new(self.x + rhs.x, self.y + rhs.y)
	}
}

impl Sub for Point {
	type Output = Point;

	fn sub(self, rhs: Point) -> Point {
		Point::new(self.x - rhs.x, self.y - rhs.y)
	}
}

/// Skill grouping; drives colors and the category filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
	Frontend,
	Backend,
	Database,
	Tools,
}

impl Category {
	pub const ALL: [Category; 4] = [
		Category::Frontend,
		Category::Backend,
		Category::Database,
		Category::Tools,
	];

	pub fn name(self) -> &'static str {
		match self {
			Category::Frontend => "Frontend",
			Category::Backend => "Backend",
			Category::Database => "Database",
			Category::Tools => "Tools",
		}
	}

	pub fn color(self) -> &'static str {
		match self {
			Category::Frontend => "#06B6D4",
			Category::Backend => "#8B5CF6",
			Category::Database => "#10B981",
			Category::Tools => "#F59E0B",
		}
	}
}

pub const MIN_LEVEL: u8 = 1;
pub const MAX_LEVEL: u8 = 10;

#[derive(Clone, Debug)]
pub struct SkillNode {
	pub id: String,
	pub name: String,
	pub category: Category,
	/// Proficiency, always within `MIN_LEVEL..=MAX_LEVEL`.
	pub level: u8,
	/// Default desktop coordinate in the reference frame.
	pub home: Point,
	pub connections: Vec<String>,
}

impl SkillNode {
	pub fn new(id: &str, name: &str, category: Category, level: u8, home: Point) -> Self {
		Self {
			id: id.to_string(),
			name: name.to_string(),
			category,
			level: level.clamp(MIN_LEVEL, MAX_LEVEL),
			home,
			connections: Vec::new(),
		}
	}

	pub fn connected_to(mut self, ids: &[&str]) -> Self {
		self.connections = ids.iter().map(|id| id.to_string()).collect();
		self
	}
}

/// Per-category summary shown by the filter bar and stats panel.
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryInfo {
	pub category: Category,
	pub name: &'static str,
	pub color: &'static str,
	pub count: usize,
}
