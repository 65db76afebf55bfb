//! Search configuration.
//!
//! [`SearchConfig`] holds all parameters that control the evolutionary loop.

use crate::error::{Result, RosterError};

/// Smallest population that can host a default-size tournament.
pub const MIN_POPULATION_SIZE: usize = 3;

/// Configuration for the roster search.
///
/// # Defaults
///
/// ```
/// use u_roster::ga::SearchConfig;
///
/// let config = SearchConfig::default();
/// assert_eq!(config.population_size, 50);
/// assert_eq!(config.generations, 100);
/// assert_eq!(config.elite_size, 5);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_roster::ga::SearchConfig;
///
/// let config = SearchConfig::default()
///     .with_population_size(200)
///     .with_elite_size(10)
///     .with_mutation_rate(0.05)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Number of schedules in every generation.
    pub population_size: usize,

    /// Number of rank → select → breed iterations.
    pub generations: usize,

    /// Per-shift probability that mutation replaces the crew (0.0–1.0).
    pub mutation_rate: f64,

    /// Top schedules carried unchanged into the next generation.
    ///
    /// Must be strictly less than `population_size`.
    pub elite_size: usize,

    /// Entries compared per tournament.
    pub tournament_size: usize,

    /// Whether to score schedules on the rayon pool.
    ///
    /// Only effective when the `parallel` feature is enabled.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            generations: 100,
            mutation_rate: 0.01,
            elite_size: 5,
            tournament_size: 3,
            parallel: true,
            seed: None,
        }
    }
}

impl SearchConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the per-shift mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the elite count.
    pub fn with_elite_size(mut self, n: usize) -> Self {
        self.elite_size = n;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Enables or disables parallel scoring.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Larger, longer search for interactive use.
    ///
    /// - Population: 100, Generations: 200
    /// - Mutation rate: 0.02, Elites: 10
    pub fn extended() -> Self {
        Self {
            population_size: 100,
            generations: 200,
            mutation_rate: 0.02,
            elite_size: 10,
            ..Self::default()
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// - [`RosterError::PopulationTooSmall`] if `population_size` cannot
    ///   host a tournament.
    /// - [`RosterError::InvalidConfig`] for an out-of-range mutation rate,
    ///   elite count or tournament size.
    pub fn validate(&self) -> Result<()> {
        let required = MIN_POPULATION_SIZE.max(self.tournament_size);
        if self.population_size < required {
            return Err(RosterError::PopulationTooSmall {
                required,
                found: self.population_size,
            });
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(RosterError::InvalidConfig(format!(
                "mutation_rate must be within [0, 1], got {}",
                self.mutation_rate
            )));
        }
        if self.elite_size >= self.population_size {
            return Err(RosterError::InvalidConfig(format!(
                "elite_size ({}) must be less than population_size ({})",
                self.elite_size, self.population_size
            )));
        }
        if self.tournament_size == 0 {
            return Err(RosterError::InvalidConfig(
                "tournament_size must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
