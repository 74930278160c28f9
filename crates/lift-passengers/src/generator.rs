//! `ArrivalGenerator` — a seeded random passenger stream for batch runs.

use lift_core::{SimRng, Tick};

use crate::ArrivalRequest;

/// Produces at most one group per tick with probability `arrival_rate`.
///
/// Origin and destination are uniform over the building (never equal);
/// group size is uniform in `1..=max_group_size`.  The same seed always
/// yields the same stream.
pub struct ArrivalGenerator {
    rng:            SimRng,
    num_floors:     usize,
    max_group_size: u32,
    arrival_rate:   f64,
    patience:       Option<(u64, u64)>,
}

impl ArrivalGenerator {
    /// `num_floors` must be at least 2 and `max_group_size` at least 1; the
    /// building rejects anything else when the requests are scheduled.
    pub fn new(seed: u64, num_floors: usize, max_group_size: u32, arrival_rate: f64) -> Self {
        Self {
            rng: SimRng::new(seed),
            num_floors,
            max_group_size: max_group_size.max(1),
            arrival_rate,
            patience: None,
        }
    }

    /// Give every generated group a patience limit drawn from `min..=max`.
    pub fn with_patience(mut self, min: u64, max: u64) -> Self {
        self.patience = Some((min.min(max), max.max(min)));
        self
    }

    /// The arrival (if any) for `tick`.
    pub fn next_arrival(&mut self, tick: Tick) -> Option<ArrivalRequest> {
        if self.num_floors < 2 || !self.rng.gen_bool(self.arrival_rate) {
            return None;
        }
        let origin = self.rng.gen_range(0..self.num_floors);
        // Draw from the other num_floors - 1 floors and skip over the origin.
        let mut destination = self.rng.gen_range(0..self.num_floors - 1);
        if destination >= origin {
            destination += 1;
        }
        let size = self.rng.gen_range(1..=self.max_group_size);
        let mut request = ArrivalRequest::new(tick, size, origin, destination);
        if let Some((lo, hi)) = self.patience {
            request = request.with_patience(self.rng.gen_range(lo..=hi));
        }
        Some(request)
    }

    /// Every arrival for ticks `0..ticks`.
    pub fn generate(&mut self, ticks: u64) -> Vec<ArrivalRequest> {
        (0..ticks).filter_map(|t| self.next_arrival(Tick(t))).collect()
    }
}
