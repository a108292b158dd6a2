//! Fixed-rate clock
//!
//! Turns real elapsed time into whole simulation steps so the tick rate is
//! independent of how often the frontend presents.

use std::time::Duration;

#[derive(Debug, Clone)]
pub struct FixedTimestep {
    step: Duration,
    accumulator: Duration,
    max_steps: u32,
}

impl FixedTimestep {
    pub fn new(step: Duration, max_steps: u32) -> Self {
        Self {
            step,
            accumulator: Duration::ZERO,
            max_steps: max_steps.max(1),
        }
    }

    pub fn step(&self) -> Duration {
        self.step
    }

    /// Feed real elapsed time, get back how many steps to simulate now
    ///
    /// At most `max_steps` are returned; any backlog beyond that is dropped.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.accumulator += elapsed;
        let mut steps = 0;
        while self.accumulator >= self.step && steps < self.max_steps {
            self.accumulator -= self.step;
            steps += 1;
        }
        if steps == self.max_steps && self.accumulator >= self.step {
            tracing::debug!(
                "Dropping {:?} of simulation backlog",
                self.accumulator
            );
            self.accumulator = Duration::ZERO;
        }
        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulates_partial_steps() {
        let mut clock = FixedTimestep::new(Duration::from_millis(10), 5);
        assert_eq!(clock.advance(Duration::from_millis(4)), 0);
        assert_eq!(clock.advance(Duration::from_millis(7)), 1);
        assert_eq!(clock.advance(Duration::from_millis(29)), 3);
    }

    #[test]
    fn test_caps_catch_up() {
        let mut clock = FixedTimestep::new(Duration::from_millis(10), 3);
        assert_eq!(clock.advance(Duration::from_secs(1)), 3);
        assert_eq!(
            clock.advance(Duration::from_millis(9)),
            0,
            "backlog beyond the cap is dropped"
        );
        assert_eq!(clock.advance(Duration::from_millis(1)), 1);
    }
}
