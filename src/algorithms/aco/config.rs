//! Configuration for the ant colony run.

/// Hyperparameters for [`AcoScheduler`](super::AcoScheduler).
///
/// The run is bounded by `num_ants * num_iterations` constructions; there
/// is no convergence-based early exit, so these two knobs are also the
/// wall-clock budget.
#[derive(Debug, Clone)]
pub struct AcoConfig {
    /// Candidate constructions per iteration.
    pub num_ants: usize,
    /// Fixed iteration budget.
    pub num_iterations: usize,
    /// Pheromone importance exponent.
    pub alpha: f64,
    /// Visibility importance exponent.
    pub beta: f64,
    /// Evaporation rate; trails multiply by `1 - rho` each iteration.
    pub rho: f64,
    /// Deposit numerator: each ant adds `q / (1 + penalty)` to the trails
    /// it used.
    pub q: f64,
    /// Uniform starting trail strength.
    pub initial_pheromone: f64,
    /// Visibility assigned to slots no arm can use for a subject. Kept
    /// above zero so roulette selection stays well-defined.
    pub visibility_floor: f64,
    /// Seed for the scheduler's own RNG; fixed seed + fixed inputs give
    /// identical runs.
    pub seed: u64,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            num_ants: 10,
            num_iterations: 30,
            alpha: 1.0,
            beta: 2.0,
            rho: 0.1,
            q: 100.0,
            initial_pheromone: 1.0,
            visibility_floor: 0.01,
            seed: 42,
        }
    }
}

impl AcoConfig {
    /// Replaces the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = AcoConfig::default();
        assert!(cfg.num_ants > 0);
        assert!(cfg.num_iterations > 0);
        assert!(cfg.rho > 0.0 && cfg.rho < 1.0);
        assert!(cfg.visibility_floor > 0.0);
    }

    #[test]
    fn with_seed_overrides() {
        let cfg = AcoConfig::default().with_seed(7);
        assert_eq!(cfg.seed, 7);
    }
}
