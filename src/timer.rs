use std::time::Duration;

use tracing::info;

/// Repeating timer driven by the frame loop.
///
/// The owner feeds it elapsed time with [`RepeatingTimer::tick`] and gets back
/// how many periods completed. A cancelled timer ignores time until it is
/// started again, and starting always begins a fresh period.
#[derive(Debug)]
pub struct RepeatingTimer {
    interval: Duration,
    elapsed: Duration,
    running: bool,
}

impl RepeatingTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            elapsed: Duration::ZERO,
            running: false,
        }
    }

    pub fn start(&mut self) {
        self.elapsed = Duration::ZERO;
        self.running = true;
        info!(interval_ms = self.interval.as_millis() as u64, "auto-advance started");
    }

    pub fn cancel(&mut self) {
        if self.running {
            self.running = false;
            info!("auto-advance cancelled");
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Number of periods that completed during `dt`.
    pub fn tick(&mut self, dt: Duration) -> u32 {
        if !self.running || self.interval.is_zero() {
            return 0;
        }
        self.elapsed += dt;
        let mut fired = 0;
        while self.elapsed >= self.interval {
            self.elapsed -= self.interval;
            fired += 1;
        }
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn idle_until_started() {
        let mut timer = RepeatingTimer::new(ms(100));
        assert!(!timer.is_running());
        assert_eq!(timer.tick(ms(1000)), 0);
    }

    #[test]
    fn fires_once_per_interval() {
        let mut timer = RepeatingTimer::new(ms(10_000));
        timer.start();
        assert_eq!(timer.tick(ms(9_999)), 0);
        assert_eq!(timer.tick(ms(1)), 1);
        assert_eq!(timer.tick(ms(5_000)), 0);
        assert_eq!(timer.tick(ms(5_000)), 1);
    }

    #[test]
    fn long_frame_fires_several_times() {
        let mut timer = RepeatingTimer::new(ms(100));
        timer.start();
        assert_eq!(timer.tick(ms(350)), 3);
        assert_eq!(timer.tick(ms(50)), 1);
    }

    #[test]
    fn frame_sized_steps_add_up() {
        let mut timer = RepeatingTimer::new(ms(1_000));
        timer.start();
        let fired: u32 = (0..600).map(|_| timer.tick(Duration::from_micros(16_667))).sum();
        assert_eq!(fired, 10);
    }

    #[test]
    fn cancel_stops_firing_and_restart_resets_period() {
        let mut timer = RepeatingTimer::new(ms(100));
        timer.start();
        assert_eq!(timer.tick(ms(90)), 0);

        timer.cancel();
        assert!(!timer.is_running());
        assert_eq!(timer.tick(ms(500)), 0);

        timer.start();
        assert_eq!(timer.tick(ms(90)), 0);
        assert_eq!(timer.tick(ms(10)), 1);
    }

    #[test]
    fn cancel_twice_is_harmless() {
        let mut timer = RepeatingTimer::new(ms(100));
        timer.cancel();
        timer.start();
        timer.cancel();
        timer.cancel();
        assert!(!timer.is_running());
        assert_eq!(timer.interval(), ms(100));
    }
}
