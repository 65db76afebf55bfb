//! Roster search loop.
//!
//! [`Scheduler`] runs the generational process:
//! generate → score → rank → select → breed → repeat → rank once more.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, instrument, warn};

use super::config::SearchConfig;
use super::fitness::{evaluate_population, FitnessEvaluator, Objective};
use super::operators::breed;
use super::population::{check_roster, populate, Population};
use super::selection::{fill_pool, rank, Scored};
use crate::error::Result;
use crate::models::{Employee, Schedule, ShiftSet};
use crate::report::{shift_counts, ShiftCount};

/// Result of a roster search.
#[derive(Debug, Clone)]
pub struct ScheduleResult {
    /// Best schedule of the final generation.
    pub best: Schedule,

    /// Fitness of `best`.
    pub best_fitness: f64,

    /// Best fitness of generation 0.
    pub initial_best_fitness: f64,

    /// Generations actually executed.
    pub generations: usize,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Best fitness of each generation, starting with generation 0.
    pub fitness_history: Vec<f64>,
}

impl ScheduleResult {
    /// Shifts worked by each employee in the best schedule.
    pub fn shift_counts<'a>(&self, employees: &'a [Employee]) -> Vec<ShiftCount<'a>> {
        shift_counts(&self.best, employees)
    }
}

/// Genetic search over schedules for a fixed roster and shift calendar.
///
/// All preconditions are checked in [`Scheduler::new`], so a constructed
/// scheduler always runs to completion.
///
/// # Usage
///
/// ```
/// use u_roster::ga::{Scheduler, SearchConfig};
/// use u_roster::models::{Employee, ShiftSet};
///
/// let employees = vec![
///     Employee::new("Alice", "F"),
///     Employee::new("Bob", "M"),
///     Employee::new("Carol", "F"),
///     Employee::new("Dan", "M"),
/// ];
/// let config = SearchConfig::default()
///     .with_population_size(20)
///     .with_generations(10)
///     .with_elite_size(2)
///     .with_seed(42);
///
/// let scheduler = Scheduler::new(employees, ShiftSet::weekly(), config)
///     .unwrap()
///     .with_coverage("M");
/// let result = scheduler.run();
/// assert!(result.best_fitness >= result.initial_best_fitness);
/// ```
#[derive(Debug, Clone)]
pub struct Scheduler<O = FitnessEvaluator> {
    employees: Vec<Employee>,
    shifts: ShiftSet,
    config: SearchConfig,
    objective: O,
}

impl Scheduler<FitnessEvaluator> {
    /// Creates a scheduler scored by the default [`FitnessEvaluator`].
    ///
    /// # Errors
    /// - [`RosterError::InsufficientEmployees`](crate::RosterError) if the
    ///   roster cannot staff one day with distinct crews.
    /// - [`RosterError::PopulationTooSmall`](crate::RosterError) or
    ///   [`RosterError::InvalidConfig`](crate::RosterError) from
    ///   [`SearchConfig::validate`].
    pub fn new(employees: Vec<Employee>, shifts: ShiftSet, config: SearchConfig) -> Result<Self> {
        config.validate()?;
        check_roster(&employees, &shifts)?;
        Ok(Self {
            employees,
            shifts,
            config,
            objective: FitnessEvaluator::new(),
        })
    }

    /// Requires an employee with `attribute` on every shift.
    pub fn with_coverage(mut self, attribute: impl Into<String>) -> Self {
        self.objective = self.objective.with_coverage(attribute);
        self
    }
}

impl<O: Objective> Scheduler<O> {
    /// Swaps in a different objective.
    pub fn with_objective<T: Objective>(self, objective: T) -> Scheduler<T> {
        Scheduler {
            employees: self.employees,
            shifts: self.shifts,
            config: self.config,
            objective,
        }
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn shifts(&self) -> &ShiftSet {
        &self.shifts
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn objective(&self) -> &O {
        &self.objective
    }

    /// Runs the search with an RNG seeded from the config.
    pub fn run(&self) -> ScheduleResult {
        self.run_with_cancel(None)
    }

    /// Runs the search with an optional cancellation token.
    ///
    /// The flag is checked before every generation; once set, the current
    /// population is ranked and its best schedule returned.
    pub fn run_with_cancel(&self, cancel: Option<Arc<AtomicBool>>) -> ScheduleResult {
        let seed = self.config.seed.unwrap_or_else(rand::random);
        let mut rng = StdRng::seed_from_u64(seed);
        self.run_with_rng(&mut rng, cancel)
    }

    /// Runs the search drawing all randomness from `rng`.
    #[instrument(level = "info", skip_all, fields(
        employees = self.employees.len(),
        shifts = self.shifts.len(),
        population_size = self.config.population_size,
        generations = self.config.generations,
    ))]
    pub fn run_with_rng<R: Rng>(
        &self,
        rng: &mut R,
        cancel: Option<Arc<AtomicBool>>,
    ) -> ScheduleResult {
        let config = &self.config;
        let employee_count = self.employees.len();

        // roster and sizes were validated in Scheduler::new
        let mut population = populate(employee_count, &self.shifts, config.population_size, rng);

        let mut ranked = self.rank(population);
        let initial_best_fitness = ranked[0].fitness;
        let mut fitness_history = Vec::with_capacity(config.generations + 1);
        fitness_history.push(initial_best_fitness);
        info!(best_fitness = initial_best_fitness, "initial population ranked");

        let mut cancelled = false;
        let mut executed = 0usize;

        for generation in 0..config.generations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            let selected = fill_pool(
                &ranked,
                config.elite_size,
                config.population_size,
                config.tournament_size,
                rng,
            );
            population = breed(
                &selected,
                config.elite_size,
                config.population_size,
                employee_count,
                config.mutation_rate,
                rng,
            );

            ranked = self.rank(population);
            executed = generation + 1;
            fitness_history.push(ranked[0].fitness);
            debug!(generation = executed, best_fitness = ranked[0].fitness, "generation complete");
        }

        if cancelled {
            warn!(generations = executed, "search cancelled");
        }

        let best = ranked.swap_remove(0);
        info!(
            generations = executed,
            best_fitness = best.fitness,
            "search finished"
        );

        ScheduleResult {
            best: best.schedule,
            best_fitness: best.fitness,
            initial_best_fitness,
            generations: executed,
            cancelled,
            fitness_history,
        }
    }

    fn rank(&self, population: Population) -> Vec<Scored> {
        let fitness = evaluate_population(
            &self.objective,
            &population,
            &self.employees,
            &self.shifts,
            self.config.parallel,
        );
        rank(population, fitness)
    }
}

// ============================================================================
// Tests
// ============================================================================
