//! Schedule scoring.
//!
//! Fitness is a pure penalty sum: it starts at zero and only decreases, so a
//! schedule meeting every soft constraint scores exactly `0.0`. Higher is
//! better.
//!
//! | Term | Default cost |
//! |------|--------------|
//! | Employee working two shifts on one day | 5 per employee per day |
//! | Deviation from even shift distribution | 1 per shift of deviation |
//! | Shift without a crew member carrying the required attribute | 5 per shift |

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::models::{Employee, Schedule, ShiftSet, CREW_SIZE};

/// Scores a schedule. Higher is better.
///
/// Implementations must be pure: the same schedule always receives the same
/// score. The search may call this from several threads at once.
pub trait Objective: Send + Sync {
    fn score(&self, schedule: &Schedule, employees: &[Employee], shifts: &ShiftSet) -> f64;
}

/// Cost of each constraint violation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PenaltyWeights {
    /// Per employee per day working more than one shift.
    pub double_booking: f64,
    /// Multiplier on the summed absolute deviation from the even target.
    pub imbalance: f64,
    /// Per shift lacking the required attribute.
    pub missing_coverage: f64,
}

impl Default for PenaltyWeights {
    fn default() -> Self {
        Self {
            double_booking: 5.0,
            imbalance: 1.0,
            missing_coverage: 5.0,
        }
    }
}

/// Per-term penalties of one schedule, each ≤ 0.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FitnessBreakdown {
    pub double_booking: f64,
    pub imbalance: f64,
    pub coverage: f64,
}

impl FitnessBreakdown {
    pub fn total(&self) -> f64 {
        self.double_booking + self.imbalance + self.coverage
    }
}

/// Default soft-constraint objective.
///
/// # Examples
///
/// ```
/// use u_roster::ga::{FitnessEvaluator, Objective};
/// use u_roster::models::{Employee, Schedule, ShiftSet};
///
/// let employees = vec![
///     Employee::new("Alice", "F"),
///     Employee::new("Bob", "M"),
///     Employee::new("Carol", "F"),
///     Employee::new("Dan", "M"),
/// ];
/// let shifts = ShiftSet::new(["Monday"], ["Morning", "Evening"]).unwrap();
/// let schedule = Schedule::from_crews(vec![[0, 1], [2, 3]]);
///
/// let evaluator = FitnessEvaluator::new().with_coverage("M");
/// assert_eq!(evaluator.score(&schedule, &employees, &shifts), 0.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FitnessEvaluator {
    weights: PenaltyWeights,
    required_attribute: Option<String>,
}

impl FitnessEvaluator {
    /// Evaluator with default weights and no coverage rule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires at least one employee with `attribute` on every shift.
    pub fn with_coverage(mut self, attribute: impl Into<String>) -> Self {
        self.required_attribute = Some(attribute.into());
        self
    }

    /// Overrides the penalty weights.
    pub fn with_weights(mut self, weights: PenaltyWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn weights(&self) -> &PenaltyWeights {
        &self.weights
    }

    pub fn required_attribute(&self) -> Option<&str> {
        self.required_attribute.as_deref()
    }

    /// Scores each term separately.
    pub fn breakdown(
        &self,
        schedule: &Schedule,
        employees: &[Employee],
        shifts: &ShiftSet,
    ) -> FitnessBreakdown {
        FitnessBreakdown {
            double_booking: -self.weights.double_booking
                * double_bookings(schedule, employees.len(), shifts) as f64,
            imbalance: -self.weights.imbalance * imbalance(schedule, employees.len(), shifts),
            coverage: match &self.required_attribute {
                Some(attr) => {
                    -self.weights.missing_coverage
                        * uncovered_shifts(schedule, employees, attr) as f64
                }
                None => 0.0,
            },
        }
    }
}

impl Objective for FitnessEvaluator {
    fn score(&self, schedule: &Schedule, employees: &[Employee], shifts: &ShiftSet) -> f64 {
        self.breakdown(schedule, employees, shifts).total()
    }
}

/// Number of (employee, day) pairs where the employee works more than one
/// shift that day.
fn double_bookings(schedule: &Schedule, employee_count: usize, shifts: &ShiftSet) -> usize {
    (0..shifts.day_count())
        .map(|day| {
            (0..employee_count)
                .filter(|&e| {
                    shifts
                        .day_range(day)
                        .filter(|&s| schedule.works(s, e))
                        .count()
                        > 1
                })
                .count()
        })
        .sum()
}

/// Sum of absolute deviations from the perfectly even shift count.
fn imbalance(schedule: &Schedule, employee_count: usize, shifts: &ShiftSet) -> f64 {
    if employee_count == 0 {
        return 0.0;
    }
    let target = (shifts.len() * CREW_SIZE) as f64 / employee_count as f64;
    schedule
        .shift_counts(employee_count)
        .into_iter()
        .map(|count| (count as f64 - target).abs())
        .sum()
}

fn uncovered_shifts(schedule: &Schedule, employees: &[Employee], attribute: &str) -> usize {
    schedule
        .crews()
        .iter()
        .filter(|crew| !crew.iter().any(|&e| employees[e].has_attribute(attribute)))
        .count()
}

/// Scores every schedule, preserving population order.
///
/// Uses the rayon pool when `parallel` is set and the `parallel` feature is
/// enabled; the result is identical either way.
pub fn evaluate_population<O: Objective>(
    objective: &O,
    population: &[Schedule],
    employees: &[Employee],
    shifts: &ShiftSet,
    parallel: bool,
) -> Vec<f64> {
    if parallel {
        return evaluate_parallel(objective, population, employees, shifts);
    }
    population
        .iter()
        .map(|schedule| objective.score(schedule, employees, shifts))
        .collect()
}

#[cfg(feature = "parallel")]
fn evaluate_parallel<O: Objective>(
    objective: &O,
    population: &[Schedule],
    employees: &[Employee],
    shifts: &ShiftSet,
) -> Vec<f64> {
    // indexed collect keeps population order
    population
        .par_iter()
        .map(|schedule| objective.score(schedule, employees, shifts))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn evaluate_parallel<O: Objective>(
    objective: &O,
    population: &[Schedule],
    employees: &[Employee],
    shifts: &ShiftSet,
) -> Vec<f64> {
    evaluate_population(objective, population, employees, shifts, false)
}
