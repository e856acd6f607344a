//! Pheromone and visibility tables.

use crate::constraints::ConstraintSet;
use crate::roster::Roster;
use crate::roster::SubjectId;

use super::AcoConfig;

/// Per-`(subject, slot)` trail state, indexed `[subject][dense slot index]`.
///
/// Pheromone starts uniform and is mutated only by the per-iteration
/// evaporate-then-deposit step. Visibility is computed once: 1.0 where the
/// slot is valid for at least one arm teaching the subject, otherwise the
/// configured floor.
#[derive(Debug, Clone)]
pub struct TrailMatrix {
    pheromone: Vec<Vec<f64>>,
    visibility: Vec<Vec<f64>>,
}

impl TrailMatrix {
    pub fn new(roster: &Roster, constraints: &ConstraintSet, config: &AcoConfig) -> Self {
        let slot_count = roster.grid().slot_count();
        let pheromone = vec![vec![config.initial_pheromone; slot_count]; roster.subject_count()];

        let mut visibility = vec![vec![config.visibility_floor; slot_count]; roster.subject_count()];
        for arm in roster.arms() {
            for &subject in roster.subjects_of(arm) {
                for (idx, &slot) in roster.grid().slots().iter().enumerate() {
                    if constraints.allows(arm, slot) {
                        visibility[subject.index()][idx] = 1.0;
                    }
                }
            }
        }

        Self {
            pheromone,
            visibility,
        }
    }

    /// Selection weight for a `(subject, slot)` pair.
    pub fn weight(&self, subject: SubjectId, slot_index: usize, alpha: f64, beta: f64) -> f64 {
        self.pheromone[subject.index()][slot_index].powf(alpha)
            * self.visibility[subject.index()][slot_index].powf(beta)
    }

    /// Multiplies every trail by `1 - rho`.
    pub fn evaporate(&mut self, rho: f64) {
        for row in &mut self.pheromone {
            for trail in row.iter_mut() {
                *trail *= 1.0 - rho;
            }
        }
    }

    /// Adds `amount` to one trail.
    pub fn deposit(&mut self, subject: SubjectId, slot_index: usize, amount: f64) {
        self.pheromone[subject.index()][slot_index] += amount;
    }

    pub fn pheromone(&self, subject: SubjectId, slot_index: usize) -> f64 {
        self.pheromone[subject.index()][slot_index]
    }

    pub fn visibility(&self, subject: SubjectId, slot_index: usize) -> f64 {
        self.visibility[subject.index()][slot_index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::DaySpec;
    use crate::constraints::{BlackoutWindow, ConstraintRecords};
    use crate::roster::{StaffingRecord, TimetableRequest};

    fn fixture(constraints: ConstraintRecords) -> (Roster, ConstraintSet) {
        Roster::assemble(&TimetableRequest {
            class_arms: vec!["JSS1A".into()],
            days: vec![
                DaySpec::new("Monday", vec![1, 2]),
                DaySpec::new("Tuesday", vec![1, 2]),
            ],
            staffing: vec![StaffingRecord::new("Ada", "Math", "JSS1A")],
            constraints,
            ..Default::default()
        })
    }

    #[test]
    fn pheromone_starts_uniform() {
        let (roster, constraints) = fixture(ConstraintRecords::default());
        let trails = TrailMatrix::new(&roster, &constraints, &AcoConfig::default());
        for idx in 0..roster.grid().slot_count() {
            assert_eq!(trails.pheromone(SubjectId(0), idx), 1.0);
        }
    }

    #[test]
    fn visibility_reflects_slot_validity() {
        let records = ConstraintRecords {
            break_times: vec![BlackoutWindow::new("Monday", 1, 2)],
            ..Default::default()
        };
        let (roster, constraints) = fixture(records);
        let trails = TrailMatrix::new(&roster, &constraints, &AcoConfig::default());
        // Monday slots are indices 0 and 1; Tuesday 2 and 3
        assert_eq!(trails.visibility(SubjectId(0), 0), 0.01);
        assert_eq!(trails.visibility(SubjectId(0), 1), 0.01);
        assert_eq!(trails.visibility(SubjectId(0), 2), 1.0);
        assert_eq!(trails.visibility(SubjectId(0), 3), 1.0);
    }

    #[test]
    fn evaporation_scales_every_trail_exactly() {
        let (roster, constraints) = fixture(ConstraintRecords::default());
        let mut trails = TrailMatrix::new(&roster, &constraints, &AcoConfig::default());
        trails.deposit(SubjectId(0), 2, 4.0);
        let before: Vec<f64> = (0..roster.grid().slot_count())
            .map(|idx| trails.pheromone(SubjectId(0), idx))
            .collect();

        trails.evaporate(0.1);
        for (idx, &b) in before.iter().enumerate() {
            let after = trails.pheromone(SubjectId(0), idx);
            assert!((after - b * 0.9).abs() < 1e-12);
        }
    }

    #[test]
    fn deposit_accumulates() {
        let (roster, constraints) = fixture(ConstraintRecords::default());
        let mut trails = TrailMatrix::new(&roster, &constraints, &AcoConfig::default());
        trails.deposit(SubjectId(0), 0, 2.5);
        trails.deposit(SubjectId(0), 0, 2.5);
        assert_eq!(trails.pheromone(SubjectId(0), 0), 6.0);
    }
}
