use std::time::{Duration, Instant};

/// Quiet period after the last zoom/pan tick before a snapshot is taken.
pub const DEBOUNCE_WINDOW: Duration = Duration::from_millis(300);

/// Trailing-edge debounce timer.
///
/// Continuous wheel and pinch gestures produce many state updates per
/// second; committing each would flood the history. Every tick re-arms the
/// deadline, and the commit fires once the gesture pauses for the whole
/// window. Time is passed in explicitly so tests control the clock.
#[derive(Clone, Debug)]
pub struct Debounce {
    window: Duration,
    deadline: Option<Instant>,
}

impl Debounce {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            deadline: None,
        }
    }

    /// Arm the timer, or push an armed deadline further out.
    pub fn touch(&mut self, now: Instant) {
        self.deadline = Some(now + self.window);
    }

    /// Whether a deadline is armed.
    pub fn pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Report and clear an expired deadline.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Drop any armed deadline and report whether one was pending.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }
}

impl Default for Debounce {
    fn default() -> Self {
        Self::new(DEBOUNCE_WINDOW)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_after_window() {
        let mut debounce = Debounce::default();
        let start = Instant::now();

        debounce.touch(start);
        assert!(!debounce.fire(start + Duration::from_millis(299)));
        assert!(debounce.fire(start + Duration::from_millis(300)));
        // Cleared after firing.
        assert!(!debounce.fire(start + Duration::from_millis(400)));
    }

    #[test]
    fn test_each_touch_resets_the_deadline() {
        let mut debounce = Debounce::default();
        let start = Instant::now();

        // Ten rapid ticks, 20ms apart, inside one window.
        for i in 0..10 {
            let now = start + Duration::from_millis(20 * i);
            debounce.touch(now);
            assert!(!debounce.fire(now));
        }

        let last_touch = start + Duration::from_millis(180);
        assert!(!debounce.fire(last_touch + Duration::from_millis(299)));
        assert!(debounce.fire(last_touch + Duration::from_millis(300)));
    }

    #[test]
    fn test_cancel_clears_pending() {
        let mut debounce = Debounce::default();
        let start = Instant::now();

        assert!(!debounce.cancel());
        debounce.touch(start);
        assert!(debounce.pending());
        assert!(debounce.cancel());
        assert!(!debounce.fire(start + Duration::from_secs(1)));
    }
}
