//! slotwise - school timetable generation with Ant Colony Optimization
//!
//! A constraint-aware weekly timetable generator for schools: class arms,
//! subjects, teacher assignments, and blackout windows go in; per-class and
//! per-teacher schedules come out. The search is a fixed-budget ACO
//! metaheuristic, so results are best-effort rather than provably optimal.

pub mod algorithms;
pub mod calendar;
pub mod constraints;
pub mod persist;
pub mod roster;
pub mod timetable;

// Re-export the main entry points for ergonomic use
pub use algorithms::aco::{AcoConfig, AcoScheduler};
pub use algorithms::{SchedulingOutcome, UnmetRequirement};

/// Identifier type used for timetable runs and persisted records.
pub type Id = String;

/// Generates a new unique identifier (UUID v4).
pub fn generate_id() -> Id {
    uuid::Uuid::new_v4().to_string()
}
