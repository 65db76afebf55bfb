//! Ranking and breeding-pool selection.
//!
//! The pool is built in two parts: the top `elite_size` ranked schedules
//! unchanged, then tournament winners until the pool is full.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use rand::seq::index;
use rand::Rng;

use crate::error::{Result, RosterError};
use crate::models::Schedule;

/// A schedule paired with its fitness.
#[derive(Debug, Clone, PartialEq)]
pub struct Scored {
    pub schedule: Schedule,
    pub fitness: f64,
}

/// Pairs schedules with their scores and sorts best first.
///
/// The sort is stable, so equal scores keep their population order.
///
/// # Panics
/// Panics if `population` and `fitness` differ in length.
pub fn rank(population: Vec<Schedule>, fitness: Vec<f64>) -> Vec<Scored> {
    assert_eq!(
        population.len(),
        fitness.len(),
        "one fitness value per schedule"
    );

    let mut ranked: Vec<Scored> = population
        .into_iter()
        .zip(fitness)
        .map(|(schedule, fitness)| Scored { schedule, fitness })
        .collect();
    ranked.sort_by(|a, b| b.fitness.total_cmp(&a.fitness));
    ranked
}

/// Builds a breeding pool of `target_size` schedules from a ranked
/// population.
///
/// The first `elite_size` entries are the top-ranked schedules in rank
/// order. The rest are tournament winners, each tournament comparing
/// `tournament_size` distinct entries of the whole ranked population.
///
/// # Errors
/// - [`RosterError::PopulationTooSmall`] if `ranked` has fewer entries than
///   `tournament_size`.
/// - [`RosterError::InvalidConfig`] if `tournament_size` is 0, or if
///   `elite_size` exceeds `target_size` or the ranked population.
pub fn select<R: Rng>(
    ranked: &[Scored],
    elite_size: usize,
    target_size: usize,
    tournament_size: usize,
    rng: &mut R,
) -> Result<Vec<Schedule>> {
    if tournament_size == 0 {
        return Err(RosterError::InvalidConfig(
            "tournament_size must be at least 1".into(),
        ));
    }
    if ranked.len() < tournament_size {
        return Err(RosterError::PopulationTooSmall {
            required: tournament_size,
            found: ranked.len(),
        });
    }
    if elite_size > target_size || elite_size > ranked.len() {
        return Err(RosterError::InvalidConfig(format!(
            "elite_size ({elite_size}) exceeds pool ({target_size}) or population ({})",
            ranked.len()
        )));
    }

    Ok(fill_pool(ranked, elite_size, target_size, tournament_size, rng))
}

/// [`select`] without the size checks.
pub(crate) fn fill_pool<R: Rng>(
    ranked: &[Scored],
    elite_size: usize,
    target_size: usize,
    tournament_size: usize,
    rng: &mut R,
) -> Vec<Schedule> {
    let mut selected: Vec<Schedule> = Vec::with_capacity(target_size);
    selected.extend(ranked[..elite_size].iter().map(|s| s.schedule.clone()));

    while selected.len() < target_size {
        let winner = tournament(ranked, tournament_size, rng);
        selected.push(ranked[winner].schedule.clone());
    }
    selected
}

/// Returns the index of the fittest of `k` distinct random entries.
///
/// Ties go to the better-ranked (lower) index.
fn tournament<R: Rng>(ranked: &[Scored], k: usize, rng: &mut R) -> usize {
    let contenders = index::sample(rng, ranked.len(), k);

    let mut best = contenders.index(0);
    for idx in contenders.iter().skip(1) {
        let (f, best_f) = (ranked[idx].fitness, ranked[best].fitness);
        if f > best_f || (f == best_f && idx < best) {
            best = idx;
        }
    }
    best
}
