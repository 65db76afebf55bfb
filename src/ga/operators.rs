//! Reproduction operators for schedule chromosomes.
//!
//! Neither operator repairs its output. A child may double-book an employee
//! or lose attribute coverage; the fitness penalty handles it.
//!
//! - [`crossover`]: uniform per-shift crossover
//! - [`mutate`]: per-shift crew replacement
//! - [`breed`]: elites verbatim, then crossover + mutation offspring

use rand::seq::index;
use rand::Rng;

use super::population::{random_crew, Population};
use crate::models::Schedule;

/// Uniform crossover: each shift's crew comes from `parent1` or `parent2`
/// with equal probability.
///
/// # Panics
/// Panics if the parents cover different numbers of shifts.
pub fn crossover<R: Rng>(parent1: &Schedule, parent2: &Schedule, rng: &mut R) -> Schedule {
    assert_eq!(
        parent1.len(),
        parent2.len(),
        "parents must cover the same shifts"
    );

    let crews = parent1
        .crews()
        .iter()
        .zip(parent2.crews())
        .map(|(&a, &b)| if rng.random_bool(0.5) { a } else { b })
        .collect();
    Schedule::from_crews(crews)
}

/// Replaces each shift's crew with probability `mutation_rate` by two
/// distinct employees drawn from the whole roster.
///
/// # Panics
/// Panics if `mutation_rate` is outside `[0, 1]` or `employee_count < 2`
/// when a replacement is drawn.
pub fn mutate<R: Rng>(
    schedule: &mut Schedule,
    employee_count: usize,
    mutation_rate: f64,
    rng: &mut R,
) {
    for shift in 0..schedule.len() {
        if rng.random_bool(mutation_rate) {
            schedule.set_crew(shift, random_crew(employee_count, rng));
        }
    }
}

/// Produces the next generation from a breeding pool.
///
/// The first `elite_size` members of `selected` pass through untouched. Each
/// remaining slot is a child of two distinct pool members, crossed over and
/// then mutated.
///
/// # Panics
/// Panics if `selected` has fewer than two members or fewer than
/// `elite_size`.
pub fn breed<R: Rng>(
    selected: &[Schedule],
    elite_size: usize,
    population_size: usize,
    employee_count: usize,
    mutation_rate: f64,
    rng: &mut R,
) -> Population {
    assert!(selected.len() >= 2, "breeding needs at least two parents");

    let mut children: Population = Vec::with_capacity(population_size);
    children.extend_from_slice(&selected[..elite_size]);

    while children.len() < population_size {
        let parents = index::sample(rng, selected.len(), 2);
        let mut child = crossover(
            &selected[parents.index(0)],
            &selected[parents.index(1)],
            rng,
        );
        mutate(&mut child, employee_count, mutation_rate, rng);
        children.push(child);
    }

    children
}
