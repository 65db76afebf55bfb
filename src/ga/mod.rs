//! Genetic search over shift schedules.
//!
//! Each candidate is a [`Schedule`](crate::models::Schedule): one crew of two
//! employees per shift. The search maximises a pure-penalty fitness, so the
//! best possible score is `0.0`.
//!
//! # Pipeline
//!
//! 1. [`generate`]: random initial population, disjoint crews within a day
//! 2. [`evaluate_population`] + [`rank`]: score and sort best first
//! 3. [`select`]: elites plus tournament winners
//! 4. [`breed`]: elites verbatim, uniform [`crossover`] + [`mutate`] for the rest
//! 5. [`Scheduler`]: repeats 2–4 for the configured number of generations
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Syswerda (1989), "Uniform Crossover in Genetic Algorithms"

mod config;
mod fitness;
mod operators;
mod population;
mod runner;
mod selection;

pub use config::{SearchConfig, MIN_POPULATION_SIZE};
pub use fitness::{
    evaluate_population, FitnessBreakdown, FitnessEvaluator, Objective, PenaltyWeights,
};
pub use operators::{breed, crossover, mutate};
pub use population::{check_roster, generate, required_employees, Population};
pub use runner::{ScheduleResult, Scheduler};
pub use selection::{rank, select, Scored};
