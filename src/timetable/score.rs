//! Violation penalty for a complete candidate timetable.

use std::collections::HashSet;

use crate::calendar::Slot;
use crate::constraints::ConstraintSet;
use crate::roster::Roster;

use super::Timetable;

/// Scores a candidate; lower is better, zero means fully feasible.
///
/// Per filled cell: +1 if the staffed teacher is unavailable at that slot,
/// +1 if the same teacher is already booked at that slot in another arm,
/// +2 if the slot itself is blacked out for the arm. The last case cannot
/// arise from the constructor, which only picks valid slots, but is still
/// checked so that externally supplied candidates score honestly.
pub fn score(roster: &Roster, constraints: &ConstraintSet, timetable: &Timetable) -> u32 {
    let mut penalty = 0u32;
    let mut booked: Vec<HashSet<Slot>> = vec![HashSet::new(); roster.teacher_count()];

    for (arm, slot_index, subject) in timetable.filled() {
        let slot = Timetable::slot_of(roster, slot_index);
        if let Some(teacher) = roster.teacher_for(subject, arm) {
            if !roster.is_available(teacher, slot) {
                penalty += 1;
            }
            if !booked[teacher.index()].insert(slot) {
                penalty += 1;
            }
        }
        if !constraints.allows(arm, slot) {
            penalty += 2;
        }
    }
    penalty
}
