use std::time::{Duration, Instant};

/// Fixed-cadence, cancellable repeating timer.
///
/// Deadlines advance in whole multiples of the interval from the instant the
/// timer was started, so a late poll does not shift the cadence. Periods that
/// elapsed entirely between two polls are skipped rather than replayed.
#[derive(Debug, Clone)]
pub struct RepeatingTimer {
    interval: Duration,
    next: Option<Instant>,
}

impl RepeatingTimer {
    const MIN_INTERVAL: Duration = Duration::from_millis(1);

    /// Creates a stopped timer. Intervals below 1 ms are raised to 1 ms.
    pub fn new(interval: Duration) -> Self {
        Self { interval: interval.max(Self::MIN_INTERVAL), next: None }
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Schedules the first firing one interval after `now`.
    ///
    /// Restarting a running timer rebases its cadence on `now`.
    pub fn start(&mut self, now: Instant) {
        self.next = Some(now + self.interval);
    }

    pub fn stop(&mut self) {
        self.next = None;
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.next.is_some()
    }

    /// When the timer fires next, or `None` while stopped.
    #[inline]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.next
    }

    /// Returns `true` if a deadline passed since the last poll.
    ///
    /// Fires at most once per call, however many periods elapsed.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(deadline) = self.next else { return false };
        if now < deadline {
            return false;
        }

        let late = now.duration_since(deadline);
        let missed = (late.as_nanos() / self.interval.as_nanos()) as u32;
        if missed > 0 {
            log::trace!("timer skipped {missed} period(s)");
        }
        self.next = Some(deadline + self.interval * (missed + 1));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEC: Duration = Duration::from_secs(1);

    // ── cadence ────────────────────────────────────────────────────────────

    #[test]
    fn stopped_timer_never_fires() {
        let t0 = Instant::now();
        let mut timer = RepeatingTimer::new(SEC);
        assert!(!timer.is_running());
        assert_eq!(timer.next_deadline(), None);
        assert!(!timer.poll(t0 + SEC * 10));
    }

    #[test]
    fn fires_once_per_interval() {
        let t0 = Instant::now();
        let mut timer = RepeatingTimer::new(SEC);
        timer.start(t0);
        assert_eq!(timer.next_deadline(), Some(t0 + SEC));

        assert!(!timer.poll(t0 + Duration::from_millis(999)));
        assert!(timer.poll(t0 + SEC));
        assert!(!timer.poll(t0 + SEC));
        assert_eq!(timer.next_deadline(), Some(t0 + SEC * 2));
    }

    #[test]
    fn late_poll_keeps_cadence() {
        let t0 = Instant::now();
        let mut timer = RepeatingTimer::new(SEC);
        timer.start(t0);

        assert!(timer.poll(t0 + Duration::from_millis(1300)));
        assert_eq!(timer.next_deadline(), Some(t0 + SEC * 2));
    }

    #[test]
    fn missed_periods_are_skipped() {
        let t0 = Instant::now();
        let mut timer = RepeatingTimer::new(SEC);
        timer.start(t0);

        assert!(timer.poll(t0 + Duration::from_millis(5500)));
        assert_eq!(timer.next_deadline(), Some(t0 + SEC * 6));
        assert!(!timer.poll(t0 + Duration::from_millis(5900)));
    }

    // ── lifecycle ──────────────────────────────────────────────────────────

    #[test]
    fn stop_and_restart_rebases() {
        let t0 = Instant::now();
        let mut timer = RepeatingTimer::new(SEC);
        timer.start(t0);
        timer.stop();
        assert!(!timer.is_running());
        assert!(!timer.poll(t0 + SEC * 3));

        let t1 = t0 + Duration::from_millis(3250);
        timer.start(t1);
        assert!(timer.is_running());
        assert_eq!(timer.next_deadline(), Some(t1 + SEC));
    }

    #[test]
    fn zero_interval_is_raised() {
        let timer = RepeatingTimer::new(Duration::ZERO);
        assert_eq!(timer.interval(), Duration::from_millis(1));
    }
}
