use std::f64::consts::PI;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::types::Point;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	pub position: Point,
	pub velocity: Point,
	pub remaining_life: u32,
	pub max_life: u32,
	pub color: &'static str,
}

impl Particle {
	/// Fade factor in `0.0..=1.0`.
	pub fn alpha(&self) -> f64 {
		if self.max_life == 0 {
			return 0.0;
		}
		self.remaining_life as f64 / self.max_life as f64
	}
}

/// Geometry of one burst. Ranges are `(min, spread)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BurstShape {
	pub count: usize,
	pub radius: (f64, f64),
	pub speed: (f64, f64),
	pub life: u32,
}

pub struct ParticleSystem {
	particles: Vec<Particle>,
	damping: f64,
	rng: SmallRng,
}

impl ParticleSystem {
	pub fn new(seed: u64, damping: f64) -> Self {
		Self {
			particles: Vec::new(),
			damping,
			rng: SmallRng::seed_from_u64(seed),
		}
	}

	/// Spawns `shape.count` particles evenly fanned around `origin`.
	pub fn burst(&mut self, origin: Point, color: &'static str, shape: &BurstShape) -> usize {
		if shape.life == 0 {
			return 0;
		}
		self.particles.reserve(shape.count);
		for i in 0..shape.count {
			let angle = (i as f64 / shape.count as f64) * 2.0 * PI;
			let (dx, dy) = (angle.cos(), angle.sin());
			let radius = shape.radius.0 + self.rng.gen_range(0.0..=1.0) * shape.radius.1;
			let speed = shape.speed.0 + self.rng.gen_range(0.0..=1.0) * shape.speed.1;
			self.particles.push(Particle {
				position: Point::new(origin.x + dx * radius, origin.y + dy * radius),
				velocity: Point::new(dx * speed, dy * speed),
				remaining_life: shape.life,
				max_life: shape.life,
				color,
			});
		}
		shape.count
	}

	pub fn tick(&mut self) {
		let damping = self.damping;
		for p in &mut self.particles {
			p.position = p.position + p.velocity;
			p.velocity = Point::new(p.velocity.x * damping, p.velocity.y * damping);
			p.remaining_life = p.remaining_life.saturating_sub(1);
		}
		self.particles.retain(|p| p.remaining_life > 0);
	}

	pub fn clear(&mut self) {
		self.particles.clear();
	}

	pub fn len(&self) -> usize {
		self.particles.len()
	}

	pub fn iter(&self) -> impl Iterator<Item = &Particle> {
		self.particles.iter()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const SHAPE: BurstShape = BurstShape {
		count: 10,
		radius: (10.0, 5.0),
		speed: (2.0, 2.0),
		life: 40,
	};

	#[test]
	fn burst_spawns_configured_count() {
		let mut system = ParticleSystem::new(7, 0.97);
		assert_eq!(system.burst(Point::new(100.0, 100.0), "#fff", &SHAPE), 10);
		assert_eq!(system.len(), 10);
		assert!(system.iter().all(|p| p.remaining_life == 40 && p.max_life == 40));
	}

	#[test]
	fn particles_fan_outward_evenly() {
		let origin = Point::new(50.0, 50.0);
		let mut system = ParticleSystem::new(1, 1.0);
		system.burst(origin, "#fff", &SHAPE);
		for (i, p) in system.iter().enumerate() {
			let expected = (i as f64 / 10.0) * 2.0 * PI;
			let angle = p.velocity.y.atan2(p.velocity.x).rem_euclid(2.0 * PI);
			assert!((angle - expected).abs() < 1e-9, "particle {i}: {angle} vs {expected}");
			let r = p.position.distance(origin);
			assert!((10.0..=15.0).contains(&r));
		}
	}

	#[test]
	fn all_particles_expire_after_max_life_ticks() {
		let mut system = ParticleSystem::new(3, 0.97);
		system.burst(Point::default(), "#fff", &SHAPE);
		for _ in 0..39 {
			system.tick();
		}
		assert_eq!(system.len(), 10);
		assert!(system.iter().all(|p| p.remaining_life == 1));
		system.tick();
		assert_eq!(system.len(), 0);
	}

	#[test]
	fn tick_integrates_and_damps_velocity() {
		let mut system = ParticleSystem::new(5, 0.5);
		system.burst(
			Point::default(),
			"#fff",
			&BurstShape {
				count: 1,
				radius: (0.0, 0.0),
				speed: (2.0, 0.0),
				life: 10,
			},
		);
		system.tick();
		let p = system.iter().next().cloned();
		let p = p.expect("particle still alive");
		assert!((p.position.x - 2.0).abs() < 1e-9);
		assert!((p.velocity.x - 1.0).abs() < 1e-9);
		assert!((p.alpha() - 0.9).abs() < 1e-9);
	}

	#[test]
	fn staggered_bursts_decay_independently() {
		let mut system = ParticleSystem::new(9, 0.97);
		system.burst(Point::default(), "#fff", &SHAPE);
		for _ in 0..20 {
			system.tick();
		}
		system.burst(Point::default(), "#000", &SHAPE);
		for _ in 0..20 {
			system.tick();
		}
		assert_eq!(system.len(), 10);
		assert!(system.iter().all(|p| p.color == "#000"));
	}
}
