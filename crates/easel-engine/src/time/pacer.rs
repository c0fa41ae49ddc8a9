use std::time::{Duration, Instant};

/// Sleeps the loop thread to hold a target frame rate.
///
/// The pacer keeps an absolute deadline so that small oversleeps do not accumulate.
/// When a frame overruns its slot the deadline restarts from "now" rather than
/// trying to catch up with a burst of short frames.
#[derive(Debug, Clone, Default)]
pub struct FramePacer {
    interval: Option<Duration>,
    deadline: Option<Instant>,
}

impl FramePacer {
    pub fn new(target_fps: Option<u32>) -> Self {
        let mut pacer = Self::default();
        pacer.set_target(target_fps.unwrap_or(0));
        pacer
    }

    /// Sets the target rate. `0` disables pacing (presentation still blocks on vsync
    /// when the surface uses a FIFO present mode).
    pub fn set_target(&mut self, fps: u32) {
        self.interval = (fps > 0).then(|| Duration::from_secs_f64(1.0 / fps as f64));
        self.deadline = None;
    }

    pub fn target(&self) -> Option<Duration> {
        self.interval
    }

    /// Computes how long to wait at `now` and advances the deadline.
    pub fn next_wait(&mut self, now: Instant) -> Option<Duration> {
        let interval = self.interval?;

        let Some(deadline) = self.deadline else {
            self.deadline = Some(now + interval);
            return None;
        };

        if now >= deadline {
            self.deadline = Some(now + interval);
            None
        } else {
            self.deadline = Some(deadline + interval);
            Some(deadline - now)
        }
    }

    /// Blocks until the current frame slot ends.
    pub fn wait(&mut self) {
        if let Some(d) = self.next_wait(Instant::now()) {
            std::thread::sleep(d);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_pacer_never_waits() {
        let mut p = FramePacer::new(None);
        assert_eq!(p.next_wait(Instant::now()), None);
        assert_eq!(p.next_wait(Instant::now()), None);
    }

    #[test]
    fn waits_for_remaining_slot() {
        let mut p = FramePacer::new(Some(50)); // 20ms slots
        let t0 = Instant::now();
        assert_eq!(p.next_wait(t0), None);
        let wait = p.next_wait(t0 + Duration::from_millis(5)).unwrap();
        assert_eq!(wait, Duration::from_millis(15));
    }

    #[test]
    fn overrun_resets_deadline() {
        let mut p = FramePacer::new(Some(50));
        let t0 = Instant::now();
        p.next_wait(t0);
        assert_eq!(p.next_wait(t0 + Duration::from_millis(100)), None);
        let wait = p.next_wait(t0 + Duration::from_millis(110)).unwrap();
        assert_eq!(wait, Duration::from_millis(10));
    }

    #[test]
    fn zero_target_disables() {
        let mut p = FramePacer::new(Some(60));
        p.set_target(0);
        assert!(p.target().is_none());
    }
}
