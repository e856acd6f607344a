//! Timetable search algorithms.

pub mod aco;

pub use aco::AcoScheduler;

use crate::constraints::ConstraintSet;
use crate::roster::{ClassArmId, Roster, SubjectId};
use crate::timetable::Timetable;

/// A quota that could not be fully placed during construction.
///
/// Under-scheduling is not an error and carries no penalty; it is reported
/// so callers can decide to re-run, relax constraints, or accept the gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnmetRequirement {
    pub class_arm: ClassArmId,
    pub subject: SubjectId,
    /// Periods still owed after construction stopped.
    pub periods_short: u32,
}

/// The result of one scheduling run: best-effort, not provably optimal.
#[derive(Debug, Clone)]
pub struct SchedulingOutcome {
    /// The lowest-penalty candidate found.
    pub timetable: Timetable,
    /// Its violation penalty; zero means fully feasible.
    pub penalty: u32,
    /// Quotas the best candidate left under-filled.
    pub unmet: Vec<UnmetRequirement>,
}

/// Algorithm seam: produces one scheduling outcome for an assembled run.
pub trait TimetableAlgorithm {
    fn run(&mut self, roster: &Roster, constraints: &ConstraintSet) -> SchedulingOutcome;
}
