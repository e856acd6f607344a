//! Ant Colony Optimization over the timetable assignment space.
//!
//! Each iteration sends a batch of ants through an independent stochastic
//! construction, scores every candidate, and then updates the shared
//! pheromone trails: evaporate everything by `1 - rho`, then let every ant
//! deposit `q / (1 + penalty)` on each `(subject, slot)` cell it used, so
//! low-penalty candidates reinforce their choices more strongly. The best
//! candidate across all iterations is the run's result.
//!
//! The budget is fixed: `num_iterations` iterations of `num_ants` ants,
//! with no convergence-based early exit. The returned solution is
//! best-effort; its penalty may be non-zero.
//!
//! # Module Structure
//!
//! - [`config`] - Hyperparameters and defaults
//! - `trails` - Pheromone and visibility tables
//! - `construct` - One ant's candidate construction

pub mod config;
mod construct;
mod trails;

pub use config::AcoConfig;
pub use trails::TrailMatrix;


use log::{debug, trace};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::constraints::ConstraintSet;
use crate::roster::Roster;
use crate::timetable::{score, Timetable};

use super::{SchedulingOutcome, TimetableAlgorithm, UnmetRequirement};

use construct::construct;

/// The colony run loop.
///
/// Owns its RNG, seeded from the config, so a fixed seed plus fixed inputs
/// reproduce the run exactly.
///
/// # Lifecycle
///
/// 1. Build with [`AcoScheduler::new`].
/// 2. Call [`AcoScheduler::run`] with an assembled roster and constraints.
/// 3. Inspect the [`SchedulingOutcome`] for the timetable, its penalty,
///    and any under-filled quotas.
///
/// # Example
///
/// ```
/// use slotwise::calendar::DaySpec;
/// use slotwise::roster::{QuotaRecord, Roster, StaffingRecord, TimetableRequest};
/// use slotwise::{AcoConfig, AcoScheduler};
///
/// let request = TimetableRequest {
///     class_arms: vec!["JSS1A".into()],
///     days: vec![DaySpec::new("Monday", vec![1, 2])],
///     staffing: vec![StaffingRecord::new("Ada", "Math", "JSS1A")],
///     quotas: vec![QuotaRecord::new("Math", 2, 0)],
///     ..Default::default()
/// };
/// let (roster, constraints) = Roster::assemble(&request);
/// let mut scheduler = AcoScheduler::new(AcoConfig::default());
/// let outcome = scheduler.run(&roster, &constraints);
/// assert_eq!(outcome.penalty, 0);
/// ```
#[derive(Debug)]
pub struct AcoScheduler {
    config: AcoConfig,
    rng: StdRng,
}

impl AcoScheduler {
    /// Creates a scheduler with the given hyperparameters.
    pub fn new(config: AcoConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        Self { config, rng }
    }

    pub fn config(&self) -> &AcoConfig {
        &self.config
    }

    /// Runs the full iteration budget and returns the best candidate seen.
    ///
    /// An empty roster, or a zero ant/iteration budget, yields an empty
    /// timetable with penalty zero.
    pub fn run(&mut self, roster: &Roster, constraints: &ConstraintSet) -> SchedulingOutcome {
        let mut trails = TrailMatrix::new(roster, constraints, &self.config);
        let mut best: Option<(Timetable, u32, Vec<UnmetRequirement>)> = None;

        for iteration in 0..self.config.num_iterations {
            let mut batch: Vec<(Timetable, u32)> = Vec::with_capacity(self.config.num_ants);

            for ant in 0..self.config.num_ants {
                let (candidate, unmet) =
                    construct(roster, constraints, &trails, &self.config, &mut self.rng);
                let penalty = score(roster, constraints, &candidate);
                trace!("iteration {iteration} ant {ant}: penalty {penalty}");

                let improved = best.as_ref().map_or(true, |(_, b, _)| penalty < *b);
                if improved {
                    best = Some((candidate.clone(), penalty, unmet));
                }
                batch.push((candidate, penalty));
            }

            trails.evaporate(self.config.rho);
            for (candidate, penalty) in &batch {
                let amount = self.config.q / (1.0 + f64::from(*penalty));
                for (_, slot_index, subject) in candidate.filled() {
                    trails.deposit(subject, slot_index, amount);
                }
            }

            if let Some((_, penalty, _)) = &best {
                debug!("iteration {iteration}: best penalty {penalty}");
            }
        }

        match best {
            Some((timetable, penalty, unmet)) => SchedulingOutcome {
                timetable,
                penalty,
                unmet,
            },
            None => SchedulingOutcome {
                timetable: Timetable::empty(roster),
                penalty: 0,
                unmet: Vec::new(),
            },
        }
    }
}

impl TimetableAlgorithm for AcoScheduler {
    fn run(&mut self, roster: &Roster, constraints: &ConstraintSet) -> SchedulingOutcome {
        AcoScheduler::run(self, roster, constraints)
    }
}
