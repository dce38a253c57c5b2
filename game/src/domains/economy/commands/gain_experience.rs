use crate::economy::Economy::{ExperienceChanged, LevelChanged};
use crate::economy::{Economy, EconomyDomain, EconomyError};

impl EconomyDomain {
    /// Adds experience and raises the level as many times as it covers.
    ///
    /// `required` gives the experience needed to leave a level, `None` for
    /// the last known level, which caps progression.
    pub fn gain_experience<'operation, R>(
        &'operation mut self,
        reward: u32,
        required: R,
    ) -> Result<impl FnOnce() -> Vec<Economy> + 'operation, EconomyError>
    where
        R: Fn(u32) -> Option<u32> + 'operation,
    {
        let operation = move || {
            let mut events = vec![];
            let mut experience = self.experience.saturating_add(reward);
            let mut level = self.level;
            while let Some(threshold) = required(level) {
                if threshold == 0 || experience < threshold {
                    break;
                }
                experience -= threshold;
                level += 1;
            }
            if level != self.level {
                self.level = level;
                events.push(LevelChanged { level });
            }
            self.experience = experience;
            events.push(ExperienceChanged {
                experience,
                max_experience: required(level).unwrap_or(0),
            });
            events
        };
        Ok(operation)
    }
}
