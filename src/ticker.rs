// src/ticker.rs

use log::debug;

/// Fixed-cadence repeating timer.
///
/// The ticker does not own a clock. The host feeds it elapsed time and it
/// reports how many whole intervals fell due. While stopped it reports
/// nothing and keeps no partial time, so restarting always begins a fresh
/// interval.
#[derive(Debug, Clone)]
pub struct Ticker {
    interval_ms: f64,
    running: bool,
    pending_ms: f64,
}

impl Ticker {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            running: false,
            pending_ms: 0.0,
        }
    }

    /// Begin ticking. No-op if already running.
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }

        self.running = true;
        self.pending_ms = 0.0;
        debug!("ticker started ({} ms)", self.interval_ms);
        true
    }

    /// Stop ticking. No-op if already stopped.
    pub fn stop(&mut self) -> bool {
        if !self.running {
            return false;
        }

        self.running = false;
        self.pending_ms = 0.0;
        debug!("ticker stopped");
        true
    }

    /// Feed elapsed time; returns the number of ticks now due.
    pub fn advance(&mut self, elapsed_ms: f64) -> u32 {
        if !self.running || !(elapsed_ms > 0.0) {
            return 0;
        }

        self.pending_ms += elapsed_ms;
        let due = (self.pending_ms / self.interval_ms).floor();
        self.pending_ms -= due * self.interval_ms;
        due as u32
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[inline]
    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_before_start_is_noop() {
        let mut ticker = Ticker::new(50.0);
        assert!(!ticker.stop());
        assert!(!ticker.is_running());
        assert_eq!(ticker.advance(500.0), 0);
    }

    #[test]
    fn test_double_start_keeps_single_cadence() {
        let mut ticker = Ticker::new(50.0);
        assert!(ticker.start());
        assert!(!ticker.start());

        // One timer: 100 ms yields two ticks, not four.
        assert_eq!(ticker.advance(100.0), 2);
    }

    #[test]
    fn test_partial_intervals_accumulate() {
        let mut ticker = Ticker::new(50.0);
        ticker.start();
        assert_eq!(ticker.advance(30.0), 0);
        assert_eq!(ticker.advance(30.0), 1);
        assert_eq!(ticker.advance(40.0), 1);
        assert_eq!(ticker.advance(0.0), 0);
    }

    #[test]
    fn test_restart_discards_partial_time() {
        let mut ticker = Ticker::new(50.0);
        ticker.start();
        ticker.advance(40.0);
        assert!(ticker.stop());
        assert!(!ticker.stop());

        ticker.start();
        assert_eq!(ticker.advance(20.0), 0);
    }

    #[test]
    fn test_stopped_ticker_reports_nothing() {
        let mut ticker = Ticker::new(50.0);
        ticker.start();
        ticker.stop();
        assert_eq!(ticker.advance(1000.0), 0);
    }
}
