/// Drops animation frames to hold a target rate.
#[derive(Clone, Debug, Default)]
pub struct FramePacer {
	last_ms: Option<f64>,
}

impl FramePacer {
	/// Returns seconds since the last accepted frame, or `None` to skip this one.
	pub fn ready(&mut self, now_ms: f64, fps: f64) -> Option<f64> {
		let interval = 1000.0 / fps.max(1.0);
		match self.last_ms {
			Some(last) if now_ms - last < interval => None,
			Some(last) => {
				self.last_ms = Some(now_ms);
				Some((now_ms - last) / 1000.0)
			}
			None => {
				self.last_ms = Some(now_ms);
				Some(interval / 1000.0)
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn first_frame_is_always_accepted() {
		let mut pacer = FramePacer::default();
		assert!(pacer.ready(0.0, 30.0).is_some());
	}

	#[test]
	fn frames_inside_the_interval_are_skipped() {
		let mut pacer = FramePacer::default();
		pacer.ready(0.0, 30.0);
		assert_eq!(pacer.ready(16.0, 30.0), None);
		assert_eq!(pacer.ready(34.0, 30.0), Some(0.034));
	}

	#[test]
	fn drag_rate_accepts_fewer_frames() {
		let count = |fps: f64| {
			let mut pacer = FramePacer::default();
			(0..100)
				.filter(|i| pacer.ready(*i as f64 * 10.0, fps).is_some())
				.count()
		};
		assert_eq!(count(30.0), 25);
		assert_eq!(count(20.0), 20);
	}
}
