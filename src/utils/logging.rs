use log::{log_enabled, trace, warn, Level};
use std::time::{Duration, Instant};

/// Scoped timer for the hot loops of the collider space.
///
/// Emits trace records on entry and exit and, if given a slot, adds the
/// elapsed time to it when dropped.
pub struct ScopedTimer<'a> {
    label: &'a str,
    start: Instant,
    output: Option<&'a mut Duration>,
}

impl<'a> ScopedTimer<'a> {
    pub fn new(label: &'a str) -> Self {
        Self::start(label, None)
    }

    pub fn recording(label: &'a str, output: &'a mut Duration) -> Self {
        Self::start(label, Some(output))
    }

    fn start(label: &'a str, output: Option<&'a mut Duration>) -> Self {
        if log_enabled!(Level::Trace) {
            trace!("⏱️ start {label}");
        }
        Self {
            label,
            start: Instant::now(),
            output,
        }
    }
}

impl Drop for ScopedTimer<'_> {
    fn drop(&mut self) {
        let elapsed = self.start.elapsed();
        if let Some(output) = self.output.as_deref_mut() {
            *output += elapsed;
        }
        if log_enabled!(Level::Trace) {
            trace!("⏱️ end {} ({} µs)", self.label, elapsed.as_micros());
        }
    }
}

/// Logs a warning when `duration` is over `budget_ms`. Returns whether it was.
pub fn warn_if_over_budget(label: &str, duration: Duration, budget_ms: f32) -> bool {
    let elapsed_ms = duration.as_secs_f32() * 1000.0;
    if elapsed_ms > budget_ms {
        warn!("{label} exceeded budget: {elapsed_ms:.2} ms > {budget_ms:.2} ms");
        return true;
    }
    false
}
