//! Initial population.
//!
//! Every generated schedule staffs each day's periods with pairwise
//! disjoint crews, so generation 0 starts free of same-day double-booking.
//! Later operators may reintroduce overlaps; fitness penalises them.

use rand::seq::index;
use rand::Rng;

use crate::error::{Result, RosterError};
use crate::models::{Crew, Employee, Schedule, ShiftSet, CREW_SIZE};

/// A generation of candidate schedules.
pub type Population = Vec<Schedule>;

/// Minimum roster size to give every period of a day its own crew.
pub fn required_employees(shifts: &ShiftSet) -> usize {
    CREW_SIZE * shifts.periods_per_day()
}

/// Fails with [`RosterError::InsufficientEmployees`] if the roster cannot
/// staff one day without repeating an employee.
pub fn check_roster(employees: &[Employee], shifts: &ShiftSet) -> Result<()> {
    let required = required_employees(shifts);
    if employees.len() < required {
        return Err(RosterError::InsufficientEmployees {
            required,
            found: employees.len(),
        });
    }
    Ok(())
}

/// Builds `population_size` fresh random schedules.
///
/// # Errors
/// [`RosterError::InsufficientEmployees`] when fewer than
/// [`required_employees`] are supplied.
pub fn generate<R: Rng>(
    employees: &[Employee],
    shifts: &ShiftSet,
    population_size: usize,
    rng: &mut R,
) -> Result<Population> {
    check_roster(employees, shifts)?;
    Ok(populate(employees.len(), shifts, population_size, rng))
}

/// [`generate`] without the roster check.
pub(crate) fn populate<R: Rng>(
    employee_count: usize,
    shifts: &ShiftSet,
    population_size: usize,
    rng: &mut R,
) -> Population {
    (0..population_size)
        .map(|_| random_schedule(employee_count, shifts, rng))
        .collect()
}

/// One random schedule with disjoint crews within each day.
///
/// Callers must ensure `employee_count >= required_employees(shifts)`.
pub(crate) fn random_schedule<R: Rng>(
    employee_count: usize,
    shifts: &ShiftSet,
    rng: &mut R,
) -> Schedule {
    let mut crews = Vec::with_capacity(shifts.len());
    let mut pool: Vec<usize> = Vec::with_capacity(employee_count);

    for _ in 0..shifts.day_count() {
        pool.clear();
        pool.extend(0..employee_count);

        for _ in 0..shifts.periods_per_day() {
            crews.push(draw_crew(&mut pool, rng));
        }
    }

    Schedule::from_crews(crews)
}

/// Removes two distinct employees from `pool` uniformly at random.
fn draw_crew<R: Rng>(pool: &mut Vec<usize>, rng: &mut R) -> Crew {
    let picks = index::sample(rng, pool.len(), CREW_SIZE);
    let (i, j) = (picks.index(0), picks.index(1));
    let crew = [pool[i], pool[j]];

    // remove the higher position first so the lower one stays put
    pool.swap_remove(i.max(j));
    pool.swap_remove(i.min(j));
    crew
}

/// Two distinct employees drawn from the whole roster.
pub(crate) fn random_crew<R: Rng>(employee_count: usize, rng: &mut R) -> Crew {
    let picks = index::sample(rng, employee_count, CREW_SIZE);
    [picks.index(0), picks.index(1)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn roster(n: usize) -> Vec<Employee> {
        (0..n)
            .map(|i| Employee::new(format!("E{i}"), if i % 2 == 0 { "F" } else { "M" }))
            .collect()
    }

    fn no_same_day_overlap(schedule: &Schedule, shifts: &ShiftSet) -> bool {
        (0..shifts.day_count()).all(|day| {
            let mut seen = Vec::new();
            for s in shifts.day_range(day) {
                for e in schedule.crew(s) {
                    if seen.contains(&e) {
                        return false;
                    }
                    seen.push(e);
                }
            }
            true
        })
    }

    #[test]
    fn test_generate_size_and_validity() {
        let employees = roster(4);
        let shifts = ShiftSet::weekly();
        let mut rng = StdRng::seed_from_u64(42);

        let population = generate(&employees, &shifts, 30, &mut rng).unwrap();
        assert_eq!(population.len(), 30);
        for schedule in &population {
            assert!(schedule.is_valid(4, 14));
            assert!(no_same_day_overlap(schedule, &shifts));
        }
    }

    #[test]
    fn test_insufficient_employees() {
        let employees = roster(3);
        let shifts = ShiftSet::weekly();
        let mut rng = StdRng::seed_from_u64(1);

        let err = generate(&employees, &shifts, 10, &mut rng).unwrap_err();
        assert_eq!(
            err,
            RosterError::InsufficientEmployees {
                required: 4,
                found: 3
            }
        );
    }

    #[test]
    fn test_required_scales_with_periods() {
        let shifts = ShiftSet::new(["Mon"], ["A", "B", "C"]).unwrap();
        assert_eq!(required_employees(&shifts), 6);
        assert!(check_roster(&roster(5), &shifts).is_err());
        assert!(check_roster(&roster(6), &shifts).is_ok());
    }

    #[test]
    fn test_same_seed_same_population() {
        let employees = roster(6);
        let shifts = ShiftSet::weekly();
        let a = generate(&employees, &shifts, 10, &mut StdRng::seed_from_u64(9)).unwrap();
        let b = generate(&employees, &shifts, 10, &mut StdRng::seed_from_u64(9)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_all_employees_reachable() {
        let employees = roster(8);
        let shifts = ShiftSet::weekly();
        let mut rng = StdRng::seed_from_u64(3);
        let population = generate(&employees, &shifts, 20, &mut rng).unwrap();

        let mut used = [false; 8];
        for schedule in &population {
            for crew in schedule.crews() {
                for &e in crew {
                    used[e] = true;
                }
            }
        }
        assert!(used.iter().all(|&u| u));
    }

    #[test]
    fn test_random_crew_distinct() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..200 {
            let crew = random_crew(2, &mut rng);
            assert_ne!(crew[0], crew[1]);
            assert!(crew.iter().all(|&e| e < 2));
        }
    }

    proptest! {
        #[test]
        fn prop_generated_schedules_are_valid(
            employee_count in 4usize..12,
            days in 1usize..8,
            seed in any::<u64>(),
        ) {
            let employees = roster(employee_count);
            let day_labels: Vec<String> = (0..days).map(|d| format!("D{d}")).collect();
            let shifts = ShiftSet::new(day_labels, ["Morning", "Evening"]).unwrap();
            let mut rng = StdRng::seed_from_u64(seed);

            let population = generate(&employees, &shifts, 5, &mut rng).unwrap();
            for schedule in &population {
                prop_assert!(schedule.is_valid(employee_count, shifts.len()));
                prop_assert!(no_same_day_overlap(schedule, &shifts));
            }
        }
    }
}
