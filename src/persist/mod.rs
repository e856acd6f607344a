//! Persistence adapter: schedule records and the store seam.
//!
//! The optimizer's best candidate is converted into one run record holding
//! per-class-arm and per-teacher schedules, then handed to a
//! [`ScheduleStore`]. Stores must be atomic: either the whole run becomes
//! visible or none of it does.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::algorithms::aco::AcoConfig;
use crate::algorithms::{AcoScheduler, SchedulingOutcome};
use crate::calendar::Period;
use crate::roster::{Roster, TimetableRequest};
use crate::{generate_id, Id};

/// One filled cell of a class schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotEntry {
    pub subject: String,
    /// Absent when no staffing record covers the subject in this arm.
    pub teacher: Option<String>,
}

/// The weekly schedule for one class arm: `day → period → entry or empty`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassScheduleRecord {
    pub class_arm: String,
    pub schedule: BTreeMap<String, BTreeMap<Period, Option<SlotEntry>>>,
}

/// The weekly schedule for one teacher: `day → period → "subject (arm)"`.
///
/// Only teachers with at least one booked period get a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeacherScheduleRecord {
    pub teacher: String,
    pub schedule: BTreeMap<String, BTreeMap<Period, String>>,
}

/// One persisted timetable run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimetableRun {
    pub id: Id,
    pub class_schedules: Vec<ClassScheduleRecord>,
    pub teacher_schedules: Vec<TeacherScheduleRecord>,
}

impl TimetableRun {
    /// Converts a scheduling outcome into persistable records.
    ///
    /// The teacher schedules are built by inverting the class schedules and
    /// grouping by the teacher resolved through the staffing index; cells
    /// whose subject has no staffed teacher in that arm stay out of the
    /// teacher view.
    pub fn from_outcome(roster: &Roster, outcome: &SchedulingOutcome) -> Self {
        let grid = roster.grid();
        let mut class_schedules = Vec::with_capacity(roster.arm_count());
        let mut teacher_schedules: HashMap<usize, BTreeMap<String, BTreeMap<Period, String>>> =
            HashMap::new();

        for arm in roster.arms() {
            let mut schedule: BTreeMap<String, BTreeMap<Period, Option<SlotEntry>>> =
                BTreeMap::new();
            for (idx, &slot) in grid.slots().iter().enumerate() {
                let day_label = grid.label(slot.day).to_string();
                let entry = outcome.timetable.get(arm, idx).map(|subject| {
                    let teacher = roster.teacher_for(subject, arm);
                    if let Some(t) = teacher {
                        let label = format!(
                            "{} ({})",
                            roster.subject_name(subject),
                            roster.arm_name(arm)
                        );
                        teacher_schedules
                            .entry(t.index())
                            .or_default()
                            .entry(day_label.clone())
                            .or_default()
                            .insert(slot.period, label);
                    }
                    SlotEntry {
                        subject: roster.subject_name(subject).to_string(),
                        teacher: teacher.map(|t| roster.teacher(t).name().to_string()),
                    }
                });
                schedule.entry(day_label).or_default().insert(slot.period, entry);
            }
            class_schedules.push(ClassScheduleRecord {
                class_arm: roster.arm_name(arm).to_string(),
                schedule,
            });
        }

        let mut by_teacher: Vec<(usize, BTreeMap<String, BTreeMap<Period, String>>)> =
            teacher_schedules.into_iter().collect();
        by_teacher.sort_by_key(|(idx, _)| *idx);
        let teacher_schedules = by_teacher
            .into_iter()
            .map(|(idx, schedule)| TeacherScheduleRecord {
                teacher: roster
                    .teacher(crate::roster::TeacherId(idx))
                    .name()
                    .to_string(),
                schedule,
            })
            .collect();

        Self {
            id: generate_id(),
            class_schedules,
            teacher_schedules,
        }
    }
}

/// Errors from a schedule store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("a run with id {0} is already stored")]
    DuplicateRun(Id),

    #[error("storage backend failure: {0}")]
    Backend(String),
}

/// Destination for timetable runs.
///
/// # Contract
///
/// `persist` is all-or-nothing: on error, no part of the run may be
/// visible to readers. The scheduler never retries; a failure propagates
/// to the caller, who may re-run the optimizer.
pub trait ScheduleStore {
    fn persist(&mut self, run: &TimetableRun) -> Result<(), StoreError>;
}

/// In-memory reference store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    runs: Vec<TimetableRun>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn runs(&self) -> &[TimetableRun] {
        &self.runs
    }

    pub fn get(&self, id: &str) -> Option<&TimetableRun> {
        self.runs.iter().find(|run| run.id == id)
    }
}

impl ScheduleStore for MemoryStore {
    fn persist(&mut self, run: &TimetableRun) -> Result<(), StoreError> {
        // All checks happen before the single visible mutation.
        if self.runs.iter().any(|existing| existing.id == run.id) {
            return Err(StoreError::DuplicateRun(run.id.clone()));
        }
        self.runs.push(run.clone());
        Ok(())
    }
}

/// Assembles, optimizes, converts, and persists in one call.
///
/// The under-fill report is not part of the persisted record; callers that
/// need it should run [`AcoScheduler`] directly and inspect the outcome
/// before persisting.
pub fn generate_and_persist(
    request: &TimetableRequest,
    config: AcoConfig,
    store: &mut dyn ScheduleStore,
) -> Result<TimetableRun, StoreError> {
    let (roster, constraints) = Roster::assemble(request);
    let mut scheduler = AcoScheduler::new(config);
    let outcome = scheduler.run(&roster, &constraints);
    let run = TimetableRun::from_outcome(&roster, &outcome);
    store.persist(&run)?;
    Ok(run)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::DaySpec;
    use crate::roster::{QuotaRecord, StaffingRecord};
    use crate::timetable::Timetable;

    fn request() -> TimetableRequest {
        TimetableRequest {
            class_arms: vec!["JSS1A".into()],
            days: vec![
                DaySpec::new("Monday", vec![1, 2]),
                DaySpec::new("Tuesday", vec![1, 2]),
            ],
            staffing: vec![StaffingRecord::new("Ada", "Math", "JSS1A")],
            quotas: vec![QuotaRecord::new("Math", 2, 0)],
            ..Default::default()
        }
    }

    fn outcome_for(request: &TimetableRequest) -> (Roster, SchedulingOutcome) {
        let (roster, constraints) = Roster::assemble(request);
        let mut scheduler = AcoScheduler::new(AcoConfig::default());
        let outcome = scheduler.run(&roster, &constraints);
        (roster, outcome)
    }

    #[test]
    fn class_record_covers_every_slot() {
        let (roster, outcome) = outcome_for(&request());
        let run = TimetableRun::from_outcome(&roster, &outcome);
        assert_eq!(run.class_schedules.len(), 1);
        let record = &run.class_schedules[0];
        assert_eq!(record.class_arm, "JSS1A");
        let total_cells: usize = record.schedule.values().map(|day| day.len()).sum();
        assert_eq!(total_cells, 4);
        let filled = record
            .schedule
            .values()
            .flat_map(|day| day.values())
            .filter(|cell| cell.is_some())
            .count();
        assert_eq!(filled, 2);
    }

    #[test]
    fn teacher_record_inverts_class_schedules() {
        let (roster, outcome) = outcome_for(&request());
        let run = TimetableRun::from_outcome(&roster, &outcome);
        assert_eq!(run.teacher_schedules.len(), 1);
        let record = &run.teacher_schedules[0];
        assert_eq!(record.teacher, "Ada");
        let labels: Vec<&String> = record
            .schedule
            .values()
            .flat_map(|day| day.values())
            .collect();
        assert_eq!(labels.len(), 2);
        for label in labels {
            assert_eq!(label, "Math (JSS1A)");
        }
    }

    #[test]
    fn idle_teachers_get_no_record() {
        let mut req = request();
        // Ben is staffed for a subject with no quota, so he is never booked
        req.staffing
            .push(StaffingRecord::new("Ben", "English", "JSS1A"));
        let (roster, outcome) = outcome_for(&req);
        let run = TimetableRun::from_outcome(&roster, &outcome);
        assert_eq!(run.teacher_schedules.len(), 1);
        assert_eq!(run.teacher_schedules[0].teacher, "Ada");
    }

    #[test]
    fn memory_store_round_trips() {
        let (roster, outcome) = outcome_for(&request());
        let run = TimetableRun::from_outcome(&roster, &outcome);
        let mut store = MemoryStore::new();
        store.persist(&run).unwrap();
        assert_eq!(store.runs().len(), 1);
        assert_eq!(store.get(&run.id), Some(&run));
    }

    #[test]
    fn duplicate_run_id_is_rejected_without_partial_write() {
        let (roster, outcome) = outcome_for(&request());
        let run = TimetableRun::from_outcome(&roster, &outcome);
        let mut store = MemoryStore::new();
        store.persist(&run).unwrap();
        assert_eq!(
            store.persist(&run),
            Err(StoreError::DuplicateRun(run.id.clone()))
        );
        assert_eq!(store.runs().len(), 1);
    }

    #[test]
    fn generate_and_persist_end_to_end() {
        let mut store = MemoryStore::new();
        let run = generate_and_persist(&request(), AcoConfig::default(), &mut store).unwrap();
        assert_eq!(store.runs().len(), 1);
        assert_eq!(store.get(&run.id), Some(&run));
    }

    #[test]
    fn records_serialize_to_json() {
        let (roster, outcome) = outcome_for(&request());
        let run = TimetableRun::from_outcome(&roster, &outcome);
        let json = serde_json::to_value(&run).unwrap();
        assert!(json["class_schedules"][0]["schedule"]["Monday"].is_object());
        let back: TimetableRun = serde_json::from_value(json).unwrap();
        assert_eq!(back, run);
    }

    #[test]
    fn fresh_runs_get_distinct_ids() {
        let (roster, outcome) = outcome_for(&request());
        let a = TimetableRun::from_outcome(&roster, &outcome);
        let b = TimetableRun::from_outcome(&roster, &outcome);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn unstaffed_cell_keeps_subject_but_no_teacher() {
        // Math is staffed in JSS1A only; a forged Math cell in JSS1B has no
        // teacher to resolve and stays out of the teacher view.
        let mut req = request();
        req.class_arms.push("JSS1B".into());
        let (roster, _) = Roster::assemble(&req);

        let mut tt = Timetable::empty(&roster);
        tt.set(crate::roster::ClassArmId(1), 0, crate::roster::SubjectId(0));
        let outcome = SchedulingOutcome {
            timetable: tt,
            penalty: 0,
            unmet: Vec::new(),
        };

        let run = TimetableRun::from_outcome(&roster, &outcome);
        let cell = &run.class_schedules[1].schedule["Monday"][&1];
        assert_eq!(
            cell.as_ref(),
            Some(&SlotEntry {
                subject: "Math".into(),
                teacher: None,
            })
        );
        assert!(run.teacher_schedules.is_empty());
    }
}
