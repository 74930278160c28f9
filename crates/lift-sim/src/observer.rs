//! Observer trait for event reporting, rendering, and data collection.

use lift_core::Tick;

use crate::event::BuildingEvent;
use crate::snapshot::BuildingSnapshot;

/// Callbacks invoked by [`Building::step`][crate::Building::step] at key
/// points in the tick.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — floor printer
///
/// ```rust,ignore
/// struct FloorPrinter;
///
/// impl BuildingObserver for FloorPrinter {
///     fn on_tick_end(&mut self, snap: &BuildingSnapshot) {
///         println!("{} floor {} {}", snap.ticks_elapsed, snap.floor + 1, snap.state);
///     }
/// }
/// ```
pub trait BuildingObserver {
    /// Called at the very start of each tick, before arrivals are merged.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called for every event while events are enabled in the config.
    fn on_event(&mut self, _event: &BuildingEvent) {}

    /// Called at the end of each tick with the post-commit state.
    fn on_tick_end(&mut self, _snapshot: &BuildingSnapshot) {}

    /// Called once when a `run_*` driver finishes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`BuildingObserver`] that does nothing.
pub struct NoopObserver;

impl BuildingObserver for NoopObserver {}

/// Keeps every event in memory, in emission order.
#[derive(Default, Debug)]
pub struct RecordingObserver {
    events: Vec<BuildingEvent>,
    ticks:  u64,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[BuildingEvent] {
        &self.events
    }

    /// Number of completed ticks observed.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// `StateChanged` events only.
    pub fn state_changes(&self) -> impl Iterator<Item = &BuildingEvent> {
        self.events
            .iter()
            .filter(|e| matches!(e, BuildingEvent::StateChanged { .. }))
    }

    pub fn into_events(self) -> Vec<BuildingEvent> {
        self.events
    }
}

impl BuildingObserver for RecordingObserver {
    fn on_event(&mut self, event: &BuildingEvent) {
        self.events.push(*event);
    }

    fn on_tick_end(&mut self, _snapshot: &BuildingSnapshot) {
        self.ticks += 1;
    }
}

/// Forwards events to `tracing` as structured records.
///
/// Car movement logs at `info`, passenger traffic at `debug`, so the default
/// subscriber filter shows the state machine without per-group noise.
#[derive(Default, Debug)]
pub struct TracingObserver;

impl BuildingObserver for TracingObserver {
    fn on_event(&mut self, event: &BuildingEvent) {
        match *event {
            BuildingEvent::Configured {
                tick,
                capacity,
                ticks_per_floor,
                ticks_door,
                passengers_per_tick,
                state,
                floor,
            } => tracing::info!(
                tick = tick.0,
                capacity,
                ticks_per_floor,
                ticks_door,
                passengers_per_tick,
                state = state.label(),
                floor = floor + 1,
                "car configured"
            ),
            BuildingEvent::StateChanged {
                tick,
                prev_state,
                curr_state,
                prev_floor,
                curr_floor,
            } => {
                tracing::info!(
                    tick = tick.0,
                    from = prev_state.label(),
                    to = curr_state.label(),
                    prev_floor = prev_floor + 1,
                    floor = curr_floor + 1,
                    "car state changed"
                )
            }
            BuildingEvent::CallRegistered { tick, group } => tracing::debug!(
                tick = tick.0,
                group = group.id.0,
                size = group.size,
                floor = group.origin + 1,
                dest = group.destination + 1,
                dir = %group.direction,
                "call registered"
            ),
            BuildingEvent::Overflowed { tick, group } => tracing::warn!(
                tick = tick.0,
                group = group.id.0,
                size = group.size,
                floor = group.origin + 1,
                "queue full, group dropped"
            ),
            BuildingEvent::Held { tick, group } => tracing::debug!(
                tick = tick.0,
                group = group.id.0,
                floor = group.origin + 1,
                "queue full, group held"
            ),
            BuildingEvent::Boarded { tick, group } => tracing::debug!(
                tick = tick.0,
                group = group.id.0,
                size = group.size,
                floor = group.origin + 1,
                "boarded"
            ),
            BuildingEvent::Offloaded { tick, group } => tracing::debug!(
                tick = tick.0,
                group = group.id.0,
                size = group.size,
                floor = group.destination + 1,
                "offloaded"
            ),
            BuildingEvent::SkippedForCapacity { tick, group } => tracing::debug!(
                tick = tick.0,
                group = group.id.0,
                size = group.size,
                floor = group.origin + 1,
                "no room, group left waiting"
            ),
            BuildingEvent::GaveUp { tick, group, wait } => tracing::info!(
                tick = tick.0,
                group = group.id.0,
                size = group.size,
                floor = group.origin + 1,
                wait,
                "group gave up"
            ),
        }
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        tracing::info!(final_tick = final_tick.0, "simulation finished");
    }
}
