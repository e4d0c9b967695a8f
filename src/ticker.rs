use std::time::{Duration, Instant};

/// Fixed-interval gate that decouples game ticks from the render rate.
#[derive(Debug, Clone, Copy)]
pub struct Ticker {
    interval: Duration,
    last_tick: Instant,
}

impl Ticker {
    /// Creates a ticker whose first tick is due one `interval` after `start`.
    #[must_use]
    pub fn new(interval: Duration, start: Instant) -> Self {
        Self {
            interval,
            last_tick: start,
        }
    }

    /// Returns true and restarts the interval when at least one interval has
    /// elapsed since the last fired tick.
    ///
    /// Fires at most once per call no matter how many intervals were missed.
    pub fn try_consume_tick(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last_tick) < self.interval {
            return false;
        }

        self.last_tick = now;
        true
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::Ticker;

    const INTERVAL: Duration = Duration::from_millis(200);

    #[test]
    fn no_tick_before_interval_elapses() {
        let start = Instant::now();
        let mut ticker = Ticker::new(INTERVAL, start);

        assert!(!ticker.try_consume_tick(start));
        assert!(!ticker.try_consume_tick(start + Duration::from_millis(199)));
    }

    #[test]
    fn tick_fires_once_at_interval() {
        let start = Instant::now();
        let mut ticker = Ticker::new(INTERVAL, start);

        let due = start + INTERVAL;
        assert!(ticker.try_consume_tick(due));
        assert!(!ticker.try_consume_tick(due));
    }

    #[test]
    fn missed_intervals_collapse_into_one_tick() {
        let start = Instant::now();
        let mut ticker = Ticker::new(INTERVAL, start);

        let late = start + INTERVAL * 5;
        assert!(ticker.try_consume_tick(late));
        assert!(!ticker.try_consume_tick(late + Duration::from_millis(100)));
        assert!(ticker.try_consume_tick(late + INTERVAL));
    }

    #[test]
    fn clock_going_backwards_never_ticks() {
        let start = Instant::now() + Duration::from_secs(1);
        let mut ticker = Ticker::new(INTERVAL, start);

        assert!(!ticker.try_consume_tick(start - Duration::from_millis(500)));
    }
}
