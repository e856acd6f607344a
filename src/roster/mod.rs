//! Assembled domain model for one scheduling run.
//!
//! A [`Roster`] is built once per run from the surrounding system's records
//! (class arms, staffing triples, quotas, unavailability) and is immutable
//! afterwards. Names are interned into dense ids at assembly time, and the
//! `(subject, class arm) → teacher` staffing index is precomputed so that
//! scoring and record building never scan the staffing records again.
//!
//! # Module Structure
//!
//! - `ids` - Dense identifier newtypes
//! - `assemble` - Raw input records and the assembly step

mod assemble;
mod ids;

pub use assemble::{DayUnavailability, QuotaRecord, StaffingRecord, TimetableRequest};
pub use ids::{ClassArmId, SubjectId, TeacherId};

use std::collections::{HashMap, HashSet};

use crate::calendar::{Period, Slot, WeekGrid};

/// Weekly period quota for a subject, school-wide.
///
/// Quotas are keyed per subject for the whole school, not per class arm:
/// two arms teaching the same subject share one quota record. This mirrors
/// the configuration store's shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quota {
    /// Single periods required per week.
    pub periods_per_week: u32,
    /// Double-period count carried from configuration. Tracked as data
    /// only: the constructor does not pair double periods into adjacent
    /// slots.
    pub double_periods: u32,
}

/// One teacher with availability resolved per day.
#[derive(Debug, Clone)]
pub struct TeacherProfile {
    name: String,
    /// Allowed periods per day, indexed by `DayId`. A fully unavailable
    /// day resolves to an empty set.
    allowed: Vec<HashSet<Period>>,
}

impl TeacherProfile {
    /// The teacher's display name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// The normalized in-memory model consumed by the optimizer.
#[derive(Debug, Clone)]
pub struct Roster {
    grid: WeekGrid,
    arm_names: Vec<String>,
    subject_names: Vec<String>,
    teachers: Vec<TeacherProfile>,
    /// Subjects taught in each arm, in first-seen staffing order.
    arm_subjects: Vec<Vec<SubjectId>>,
    /// Per-subject quota, `None` when no record exists.
    quotas: Vec<Option<Quota>>,
    /// Staffing index: which teacher takes a subject in an arm. First
    /// assignment seen wins when records overlap.
    staffing: HashMap<(SubjectId, ClassArmId), TeacherId>,
}

impl Roster {
    /// The week grid this roster was assembled against.
    pub fn grid(&self) -> &WeekGrid {
        &self.grid
    }

    pub fn arm_count(&self) -> usize {
        self.arm_names.len()
    }

    /// Iterates class-arm ids in registry order.
    pub fn arms(&self) -> impl Iterator<Item = ClassArmId> {
        (0..self.arm_names.len()).map(ClassArmId)
    }

    pub fn arm_name(&self, arm: ClassArmId) -> &str {
        &self.arm_names[arm.index()]
    }

    pub fn subject_count(&self) -> usize {
        self.subject_names.len()
    }

    pub fn subject_name(&self, subject: SubjectId) -> &str {
        &self.subject_names[subject.index()]
    }

    pub fn teacher_count(&self) -> usize {
        self.teachers.len()
    }

    pub fn teacher(&self, teacher: TeacherId) -> &TeacherProfile {
        &self.teachers[teacher.index()]
    }

    /// Subjects taught in an arm, in assembly order.
    pub fn subjects_of(&self, arm: ClassArmId) -> &[SubjectId] {
        &self.arm_subjects[arm.index()]
    }

    /// The school-wide quota for a subject, if one was configured.
    pub fn quota(&self, subject: SubjectId) -> Option<Quota> {
        self.quotas[subject.index()]
    }

    /// Resolves the teacher taking `subject` in `arm`, if staffed.
    pub fn teacher_for(&self, subject: SubjectId, arm: ClassArmId) -> Option<TeacherId> {
        self.staffing.get(&(subject, arm)).copied()
    }

    /// Returns true iff the teacher may be booked at `slot`.
    pub fn is_available(&self, teacher: TeacherId, slot: Slot) -> bool {
        self.teachers[teacher.index()].allowed[slot.day.index()].contains(&slot.period)
    }

    /// True when there is nothing to schedule: no arms or no staffing.
    /// Downstream components treat this as a valid degenerate case.
    pub fn is_empty(&self) -> bool {
        self.arm_names.is_empty() || self.staffing.is_empty()
    }
}
