//! Fluent builder for constructing a [`Building`].

use lift_core::BuildingConfig;
use lift_passengers::ArrivalRequest;

use crate::{Building, SimResult};

/// Fluent builder for [`Building`].
///
/// # Optional inputs (have defaults)
///
/// | Method           | Default             |
/// |------------------|---------------------|
/// | `.arrivals(v)`   | No arrivals         |
///
/// # Example
///
/// ```rust,ignore
/// let arrivals = load_arrivals_csv(Path::new("arrivals.csv"))?;
/// let mut building = BuildingBuilder::new(config)
///     .arrivals(arrivals)
///     .build()?;
/// building.run_until_idle(10_000, &mut NoopObserver)?;
/// ```
pub struct BuildingBuilder {
    config:   BuildingConfig,
    arrivals: Vec<ArrivalRequest>,
}

impl BuildingBuilder {
    pub fn new(config: BuildingConfig) -> Self {
        Self { config, arrivals: Vec::new() }
    }

    /// Arrivals to schedule before the first tick.  May be called more than
    /// once; batches accumulate.
    pub fn arrivals<I>(mut self, arrivals: I) -> Self
    where
        I: IntoIterator<Item = ArrivalRequest>,
    {
        self.arrivals.extend(arrivals);
        self
    }

    /// Validate the configuration and every arrival, and return a building
    /// with the car parked at the ground floor, doors closed.
    pub fn build(self) -> SimResult<Building> {
        self.config.validate()?;
        let mut building = Building::new(self.config);
        building.schedule_arrivals(self.arrivals)?;
        tracing::debug!(
            floors = building.config().num_floors,
            pending = building.pending_arrivals(),
            "building ready"
        );
        Ok(building)
    }
}
