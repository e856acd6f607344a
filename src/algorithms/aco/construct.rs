//! One ant's stochastic timetable construction.

use rand::rngs::StdRng;
use rand::Rng;

use crate::constraints::ConstraintSet;
use crate::roster::Roster;
use crate::timetable::Timetable;

use super::{AcoConfig, TrailMatrix, UnmetRequirement};

/// Builds one complete candidate timetable.
///
/// Per arm, per quota-bearing subject: repeatedly gathers the arm's free
/// and constraint-valid slots, weights each by
/// `pheromone^alpha * visibility^beta`, and picks one by roulette wheel.
/// Runs of this function only read the shared trails; all writes go to the
/// ant's own timetable, so ants are independent.
///
/// When no candidate slot remains (or total weight underflows to zero) the
/// subject stops early and the shortfall is recorded instead of raising an
/// error.
pub(super) fn construct(
    roster: &Roster,
    constraints: &ConstraintSet,
    trails: &TrailMatrix,
    config: &AcoConfig,
    rng: &mut StdRng,
) -> (Timetable, Vec<UnmetRequirement>) {
    let mut timetable = Timetable::empty(roster);
    let mut unmet = Vec::new();
    let slots = roster.grid().slots();

    for arm in roster.arms() {
        for &subject in roster.subjects_of(arm) {
            let Some(quota) = roster.quota(subject) else {
                continue;
            };
            let mut needed = quota.periods_per_week;
            while needed > 0 {
                let candidates: Vec<usize> = (0..slots.len())
                    .filter(|&idx| {
                        timetable.is_free(arm, idx) && constraints.allows(arm, slots[idx])
                    })
                    .collect();
                if candidates.is_empty() {
                    break;
                }

                let weights: Vec<f64> = candidates
                    .iter()
                    .map(|&idx| trails.weight(subject, idx, config.alpha, config.beta))
                    .collect();
                let total: f64 = weights.iter().sum();
                if total <= 0.0 {
                    break;
                }

                let draw = rng.gen_range(0.0..total);
                let mut cumulative = 0.0;
                // Fallback to the last candidate covers float rounding at
                // the top of the wheel.
                let mut chosen = candidates[candidates.len() - 1];
                for (&idx, &w) in candidates.iter().zip(&weights) {
                    cumulative += w;
                    if cumulative >= draw {
                        chosen = idx;
                        break;
                    }
                }

                timetable.set(arm, chosen, subject);
                needed -= 1;
            }
            if needed > 0 {
                unmet.push(UnmetRequirement {
                    class_arm: arm,
                    subject,
                    periods_short: needed,
                });
            }
        }
    }

    (timetable, unmet)
}
