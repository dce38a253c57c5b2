use crate::math::Timestamp;
use crate::planting::Crop;

#[derive(Debug, Clone, Copy, PartialEq, Eq, bincode::Encode, bincode::Decode)]
pub struct Stage {
    pub index: usize,
    pub ripe: bool,
    /// Seconds left in the current stage, `None` once ripe.
    pub time_to_next: Option<u64>,
}

/// Stage duration under a growth rate modifier, unscaled for rates `<= 0`.
pub fn scale_duration(duration: u64, growth_rate: f32) -> u64 {
    if growth_rate > 0.0 {
        (duration as f64 / growth_rate as f64).round() as u64
    } else {
        duration
    }
}

impl Crop {
    pub fn stage(&self, now: Timestamp) -> Stage {
        let mut elapsed = now.saturating_sub(self.planted_at);
        for (index, duration) in self.kind.stages.iter().enumerate() {
            let duration = scale_duration(*duration, self.growth_rate);
            if elapsed < duration {
                return Stage {
                    index,
                    ripe: false,
                    time_to_next: Some(duration - elapsed),
                };
            }
            elapsed -= duration;
        }
        Stage {
            index: self.kind.stages.len(),
            ripe: true,
            time_to_next: None,
        }
    }

    pub fn is_ripe(&self, now: Timestamp) -> bool {
        self.stage(now).ripe
    }

    /// Moment the crop becomes ripe.
    pub fn ripe_at(&self) -> Timestamp {
        self.kind
            .stages
            .iter()
            .map(|duration| scale_duration(*duration, self.growth_rate))
            .fold(self.planted_at, |time, duration| time.saturating_add(duration))
    }
}
