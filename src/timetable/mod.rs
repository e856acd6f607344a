//! Candidate timetable structure and penalty scoring.
//!
//! A [`Timetable`] is one complete candidate assignment: for every class
//! arm, every grid slot holds either a subject or nothing. Each ant builds
//! one from scratch; only the best-scoring candidate outlives the run.
//!
//! # Module Structure
//!
//! - `score` - The violation penalty function

mod score;

pub use score::score;

use crate::calendar::Slot;
use crate::roster::{ClassArmId, Roster, SubjectId};

/// One candidate assignment, laid out against the grid's dense slot index.
///
/// `cells[arm][slot_index]` is the subject scheduled for that arm at that
/// slot, if any. The layout makes filled-cell iteration deterministic,
/// which the reproducibility guarantees depend on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timetable {
    slot_count: usize,
    cells: Vec<Vec<Option<SubjectId>>>,
}

impl Timetable {
    /// An all-empty timetable sized for the roster's arms and grid.
    pub fn empty(roster: &Roster) -> Self {
        let slot_count = roster.grid().slot_count();
        Self {
            slot_count,
            cells: vec![vec![None; slot_count]; roster.arm_count()],
        }
    }

    /// Number of slots per arm.
    pub fn slot_count(&self) -> usize {
        self.slot_count
    }

    /// The subject scheduled for `arm` at the slot with dense index
    /// `slot_index`, if any.
    pub fn get(&self, arm: ClassArmId, slot_index: usize) -> Option<SubjectId> {
        self.cells[arm.index()][slot_index]
    }

    /// True iff the cell is unassigned.
    pub fn is_free(&self, arm: ClassArmId, slot_index: usize) -> bool {
        self.cells[arm.index()][slot_index].is_none()
    }

    /// Assigns `subject` to the cell. Overwrites silently; callers pick
    /// free cells.
    pub fn set(&mut self, arm: ClassArmId, slot_index: usize, subject: SubjectId) {
        self.cells[arm.index()][slot_index] = Some(subject);
    }

    /// Iterates filled cells as `(arm, slot_index, subject)`, in arm order
    /// then slot-enumeration order.
    pub fn filled(&self) -> impl Iterator<Item = (ClassArmId, usize, SubjectId)> + '_ {
        self.cells.iter().enumerate().flat_map(|(arm, row)| {
            row.iter()
                .enumerate()
                .filter_map(move |(idx, cell)| cell.map(|s| (ClassArmId(arm), idx, s)))
        })
    }

    /// Number of filled cells across all arms.
    pub fn filled_count(&self) -> usize {
        self.filled().count()
    }

    /// Resolves a dense slot index back to its `(day, period)` slot.
    pub fn slot_of(roster: &Roster, slot_index: usize) -> Slot {
        roster.grid().slots()[slot_index]
    }
}
