use log::debug;
use std::time::Duration;

/// Counters and timings for the most recent `update` call.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct SpaceStats {
    pub owner_count: usize,
    pub pairs_tested: usize,
    pub overlaps: usize,
    pub resolutions: usize,
    pub update_time: Duration,
}

impl SpaceStats {
    pub fn begin_update(&mut self, owner_count: usize) {
        self.owner_count = owner_count;
        self.pairs_tested = 0;
        self.overlaps = 0;
        self.resolutions = 0;
        self.update_time = Duration::ZERO;
    }

    pub fn report(&self) {
        debug!(
            "space update: {} owners, {} pairs, {} overlaps, {} resolved in {:.3} ms",
            self.owner_count,
            self.pairs_tested,
            self.overlaps,
            self.resolutions,
            self.update_time.as_secs_f32() * 1000.0
        );
    }
}
