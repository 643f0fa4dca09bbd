//! Wall-clock timers that feed the histogram registry.

use crate::metrics;
use std::time::{Duration, Instant};

/// Timer for measuring operation duration
///
/// Records into the histogram named after the timer, in milliseconds,
/// either on [`Timer::stop`] or when dropped.
pub struct Timer {
    name: String,
    start: Option<Instant>,
}

impl Timer {
    /// Start a new timer
    pub fn start(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            start: Some(Instant::now()),
        }
    }

    /// Stop the timer and record the duration
    pub fn stop(mut self) -> Duration {
        let duration = self.record();
        tracing::debug!(
            metric = %self.name,
            duration_ms = duration.as_millis(),
            "timer completed"
        );
        duration
    }

    fn record(&mut self) -> Duration {
        match self.start.take() {
            Some(start) => {
                let duration = start.elapsed();
                metrics().histogram(&self.name, duration.as_secs_f64() * 1000.0);
                duration
            }
            None => Duration::ZERO,
        }
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        self.record();
    }
}
