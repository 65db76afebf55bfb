//! Schedule chromosome.
//!
//! # Encoding
//!
//! One gene per shift, aligned with [`ShiftSet`] order. Each gene is a
//! [`Crew`]: the indices of the two employees staffing that shift, into the
//! employee slice the search was built with.

use super::{Employee, Shift, ShiftSet};

/// Number of employees staffing one shift.
pub const CREW_SIZE: usize = 2;

/// Employee indices assigned to one shift.
pub type Crew = [usize; CREW_SIZE];

/// A complete candidate assignment of crews to shifts.
///
/// Schedules are plain values: crossover and mutation always work on an
/// owned copy, so no two candidates share storage.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Schedule {
    crews: Vec<Crew>,
}

impl Schedule {
    /// Wraps a crew list (one entry per shift).
    pub fn from_crews(crews: Vec<Crew>) -> Self {
        Self { crews }
    }

    /// Number of shifts covered.
    pub fn len(&self) -> usize {
        self.crews.len()
    }

    pub fn is_empty(&self) -> bool {
        self.crews.is_empty()
    }

    /// Crew of shift `shift`.
    ///
    /// # Panics
    /// Panics if `shift` is out of range.
    pub fn crew(&self, shift: usize) -> Crew {
        self.crews[shift]
    }

    pub fn crews(&self) -> &[Crew] {
        &self.crews
    }

    /// Replaces the crew of shift `shift`.
    pub fn set_crew(&mut self, shift: usize, crew: Crew) {
        self.crews[shift] = crew;
    }

    /// Whether employee `employee` works shift `shift`.
    pub fn works(&self, shift: usize, employee: usize) -> bool {
        self.crews[shift].contains(&employee)
    }

    /// Total shifts assigned to each employee, indexed like the roster.
    pub fn shift_counts(&self, employee_count: usize) -> Vec<usize> {
        let mut counts = vec![0usize; employee_count];
        for crew in &self.crews {
            for &e in crew {
                if let Some(c) = counts.get_mut(e) {
                    *c += 1;
                }
            }
        }
        counts
    }

    /// Structural check: one crew per shift, indices in range, no employee
    /// twice in the same crew.
    pub fn is_valid(&self, employee_count: usize, shift_count: usize) -> bool {
        self.crews.len() == shift_count
            && self.crews.iter().all(|crew| {
                crew.iter().all(|&e| e < employee_count) && crew[0] != crew[1]
            })
    }

    /// Resolves every crew against the calendar and roster.
    ///
    /// # Panics
    /// Panics if a crew index is outside `employees`.
    pub fn assignments<'a>(
        &'a self,
        shifts: &'a ShiftSet,
        employees: &'a [Employee],
    ) -> impl Iterator<Item = (&'a Shift, [&'a Employee; CREW_SIZE])> + 'a {
        shifts
            .shifts()
            .iter()
            .zip(&self.crews)
            .map(move |(shift, crew)| (shift, crew.map(|e| &employees[e])))
    }
}
