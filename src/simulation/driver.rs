//! Update-path selection and variable-rate timing bookkeeping
//!
//! Exactly one update path drives the ball at a time, selected by
//! [`DriverMode`]:
//! - `FixedRate`    the host render loop, throttled to a target frequency;
//!                  the host hands the measured inter-frame duration to `step`
//! - `VariableRate` a per-frame callback fed a monotonic timestamp; the
//!                  driver derives the elapsed time between invocations itself
//!
//! The variable path's "time of the previous invocation" lives here, on the
//! driver, not on the ball: it is timing bookkeeping, not physical state.

/// Which update path is currently driving the ball
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverMode {
    FixedRate,
    VariableRate,
}

impl DriverMode {
    /// The other mode, for the UI toggle
    pub fn toggled(self) -> Self {
        match self {
            DriverMode::FixedRate => DriverMode::VariableRate,
            DriverMode::VariableRate => DriverMode::FixedRate,
        }
    }
}

/// Elapsed-time bookkeeping for the variable-rate path
///
/// `last_timestamp` starts as `None` and is initialized lazily by the
/// first [`tick`](Self::tick). Mode switches deliberately do not reset it,
/// so re-enabling the variable path after time spent on the fixed path
/// yields one large catch-up delta covering the gap
#[derive(Debug, Clone, Default)]
pub struct VariableRateDriver {
    last_timestamp: Option<f64>, // milliseconds, monotonic host clock
}

impl VariableRateDriver {
    pub fn new() -> Self {
        Self { last_timestamp: None }
    }

    /// Record `timestamp_ms` and return the elapsed time since the
    /// previous invocation, in milliseconds
    ///
    /// The very first invocation only establishes the baseline and
    /// returns 0.0
    pub fn tick(&mut self, timestamp_ms: f64) -> f64 {
        let elapsed = match self.last_timestamp {
            Some(last) => timestamp_ms - last,
            None => 0.0,
        };
        self.last_timestamp = Some(timestamp_ms);
        elapsed
    }

    /// Timestamp of the most recent tick, if any
    pub fn last_timestamp(&self) -> Option<f64> {
        self.last_timestamp
    }
}
