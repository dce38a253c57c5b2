use crate::api::Event;
use crate::math::Timestamp;
use crate::{occur, Game};

impl Game {
    /// Periodic refresh, reports crops ripened since the previous call.
    pub fn update(&mut self, now: Timestamp) -> Vec<Event> {
        let since = self.last_update;
        self.last_update = now;
        let ripened = self.planting.update(since, now);
        if ripened.is_empty() {
            vec![]
        } else {
            occur![ripened]
        }
    }
}
