//! Fixed-step tick scheduling.

/// Turns variable frame times into a whole number of fixed-interval ticks.
///
/// The first tick fires once a full interval has elapsed; leftover time
/// carries over to the next frame.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedStep {
    interval: f32,
    accumulated: f32,
}

impl FixedStep {
    #[must_use]
    pub fn new(interval: f32) -> Self {
        assert!(interval > 0.0, "Tick interval must be positive");
        Self {
            interval,
            accumulated: 0.0,
        }
    }

    /// Add frame time and return how many ticks are now due.
    pub fn advance(&mut self, dt: f32) -> u32 {
        self.accumulated += dt.max(0.0);
        let mut due = 0;
        while self.accumulated >= self.interval {
            self.accumulated -= self.interval;
            due += 1;
        }
        due
    }

    /// Drop any partially accumulated time.
    pub fn reset(&mut self) {
        self.accumulated = 0.0;
    }

    #[must_use]
    pub fn interval(&self) -> f32 {
        self.interval
    }
}
