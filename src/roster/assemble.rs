//! Raw run inputs and the assembly step.
//!
//! The surrounding system hands over name-keyed records; assembly interns
//! every name, resolves teacher availability day by day, attaches quotas to
//! the subjects that are actually staffed somewhere, and resolves the
//! constraint windows against the grid.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{ClassArmId, Quota, Roster, SubjectId, TeacherId, TeacherProfile};
use crate::calendar::{DaySpec, Period, WeekGrid};
use crate::constraints::{ConstraintRecords, ConstraintSet};

/// One `(teacher, subject, class arm)` assignment from the school store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffingRecord {
    pub teacher: String,
    pub subject: String,
    pub class_arm: String,
}

impl StaffingRecord {
    pub fn new(
        teacher: impl Into<String>,
        subject: impl Into<String>,
        class_arm: impl Into<String>,
    ) -> Self {
        Self {
            teacher: teacher.into(),
            subject: subject.into(),
            class_arm: class_arm.into(),
        }
    }
}

/// School-wide weekly quota record for one subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotaRecord {
    pub subject: String,
    pub periods_per_week: u32,
    pub double_periods: u32,
}

impl QuotaRecord {
    pub fn new(subject: impl Into<String>, periods_per_week: u32, double_periods: u32) -> Self {
        Self {
            subject: subject.into(),
            periods_per_week,
            double_periods,
        }
    }
}

/// Teacher unavailability for one day.
///
/// Either the whole day is out, or a specific list of periods is. A day
/// with no entry at all means fully available.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayUnavailability {
    AllDay,
    Periods(Vec<Period>),
}

/// Everything the scheduler needs for one run, as supplied by the caller.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimetableRequest {
    /// Class-arm names, in display order.
    pub class_arms: Vec<String>,
    /// The teaching week: day labels and their period lists.
    pub days: Vec<DaySpec>,
    /// Teacher assignment triples.
    pub staffing: Vec<StaffingRecord>,
    /// School-wide per-subject quotas.
    pub quotas: Vec<QuotaRecord>,
    /// Teacher → day label → unavailability.
    pub unavailability: HashMap<String, HashMap<String, DayUnavailability>>,
    /// Blackout windows.
    pub constraints: ConstraintRecords,
}

impl Roster {
    /// Assembles the normalized model and resolved constraints for one run.
    ///
    /// Staffing records naming an unknown class arm are skipped. Quota
    /// records for subjects no staffing record mentions are dropped, so an
    /// unstaffed subject is never scheduled anywhere. Empty inputs produce
    /// an empty roster rather than an error.
    pub fn assemble(request: &TimetableRequest) -> (Roster, ConstraintSet) {
        let grid = WeekGrid::new(&request.days);

        let mut arm_names: Vec<String> = Vec::new();
        let mut arm_by_name: HashMap<&str, ClassArmId> = HashMap::new();
        for name in &request.class_arms {
            if !arm_by_name.contains_key(name.as_str()) {
                arm_by_name.insert(name.as_str(), ClassArmId(arm_names.len()));
                arm_names.push(name.clone());
            }
        }

        let mut subject_names: Vec<String> = Vec::new();
        let mut subject_by_name: HashMap<&str, SubjectId> = HashMap::new();
        let mut teacher_names: Vec<String> = Vec::new();
        let mut teacher_by_name: HashMap<&str, TeacherId> = HashMap::new();
        let mut arm_subjects: Vec<Vec<SubjectId>> = vec![Vec::new(); arm_names.len()];
        let mut staffing: HashMap<(SubjectId, ClassArmId), TeacherId> = HashMap::new();

        for record in &request.staffing {
            let Some(&arm) = arm_by_name.get(record.class_arm.as_str()) else {
                continue;
            };
            let subject = *subject_by_name
                .entry(record.subject.as_str())
                .or_insert_with(|| {
                    subject_names.push(record.subject.clone());
                    SubjectId(subject_names.len() - 1)
                });
            let teacher = *teacher_by_name
                .entry(record.teacher.as_str())
                .or_insert_with(|| {
                    teacher_names.push(record.teacher.clone());
                    TeacherId(teacher_names.len() - 1)
                });
            if !arm_subjects[arm.index()].contains(&subject) {
                arm_subjects[arm.index()].push(subject);
            }
            staffing.entry((subject, arm)).or_insert(teacher);
        }

        let mut quotas: Vec<Option<Quota>> = vec![None; subject_names.len()];
        for record in &request.quotas {
            if let Some(&subject) = subject_by_name.get(record.subject.as_str()) {
                quotas[subject.index()] = Some(Quota {
                    periods_per_week: record.periods_per_week,
                    double_periods: record.double_periods,
                });
            }
        }

        let teachers = teacher_names
            .iter()
            .map(|name| {
                let per_day = request.unavailability.get(name);
                let allowed = grid
                    .days()
                    .map(|day| match per_day.and_then(|m| m.get(grid.label(day))) {
                        None => grid.periods(day).iter().copied().collect(),
                        Some(DayUnavailability::AllDay) => Default::default(),
                        Some(DayUnavailability::Periods(out)) => grid
                            .periods(day)
                            .iter()
                            .copied()
                            .filter(|p| !out.contains(p))
                            .collect(),
                    })
                    .collect();
                TeacherProfile {
                    name: name.clone(),
                    allowed,
                }
            })
            .collect();

        let constraints = ConstraintSet::resolve(&request.constraints, &grid, &arm_names);

        let roster = Roster {
            grid,
            arm_names,
            subject_names,
            teachers,
            arm_subjects,
            quotas,
            staffing,
        };
        (roster, constraints)
    }
}
