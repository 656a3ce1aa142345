//! Repeating timer used for enemy spawning.

/// Fixed-interval timer driven by the frame clock. Cancellable and re-armable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepeatingTimer {
    interval_ms: u64,
    next_fire_ms: Option<u64>,
}

impl RepeatingTimer {
    /// Create a timer whose first firing is one interval after `now_ms`.
    /// A zero interval is clamped to 1 ms.
    pub fn new(interval_ms: u64, now_ms: u64) -> Self {
        let interval_ms = interval_ms.max(1);
        Self {
            interval_ms,
            next_fire_ms: Some(now_ms + interval_ms),
        }
    }

    /// Number of firings due at `now_ms`. Advances the schedule past them.
    pub fn poll(&mut self, now_ms: u64) -> u32 {
        let Some(mut next) = self.next_fire_ms else {
            return 0;
        };
        let mut fired = 0;
        while next <= now_ms {
            fired += 1;
            next += self.interval_ms;
        }
        self.next_fire_ms = Some(next);
        fired
    }

    pub fn cancel(&mut self) {
        self.next_fire_ms = None;
    }

    /// Restart with the first firing one interval after `now_ms`.
    pub fn rearm(&mut self, now_ms: u64) {
        self.next_fire_ms = Some(now_ms + self.interval_ms);
    }

    pub fn is_armed(&self) -> bool {
        self.next_fire_ms.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_interval_is_clamped() {
        let mut timer = RepeatingTimer::new(0, 0);
        assert_eq!(timer.poll(0), 0);
        assert_eq!(timer.poll(5), 5);
    }

    #[test]
    fn fires_once_per_interval() {
        let mut timer = RepeatingTimer::new(2000, 0);
        assert_eq!(timer.poll(1999), 0);
        assert_eq!(timer.poll(2000), 1);
        assert_eq!(timer.poll(2001), 0);
        assert_eq!(timer.poll(4000), 1);
    }

    #[test]
    fn catches_up_after_long_gap() {
        let mut timer = RepeatingTimer::new(1500, 0);
        assert_eq!(timer.poll(4600), 3);
        assert_eq!(timer.poll(6000), 1);
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let mut timer = RepeatingTimer::new(100, 0);
        timer.cancel();
        assert!(!timer.is_armed());
        assert_eq!(timer.poll(10_000), 0);
    }

    #[test]
    fn rearm_restarts_from_now() {
        let mut timer = RepeatingTimer::new(2000, 0);
        timer.cancel();
        timer.rearm(5000);
        assert!(timer.is_armed());
        assert_eq!(timer.poll(6999), 0);
        assert_eq!(timer.poll(7000), 1);
    }
}
