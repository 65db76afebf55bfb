//! Output boundary for presentation layers.
//!
//! Hosts print or chart these views; nothing here does I/O.

use crate::models::{Employee, Schedule, ShiftSet};

/// Shifts worked by one employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftCount<'a> {
    pub employee: &'a Employee,
    pub shifts: usize,
}

/// Shift totals per employee, in roster order.
///
/// # Examples
///
/// ```
/// use u_roster::models::{Employee, Schedule};
/// use u_roster::report::shift_counts;
///
/// let employees = vec![
///     Employee::new("Alice", "F"),
///     Employee::new("Bob", "M"),
///     Employee::new("Carol", "F"),
/// ];
/// let schedule = Schedule::from_crews(vec![[0, 1], [0, 2]]);
///
/// let counts: Vec<(&str, usize)> = shift_counts(&schedule, &employees)
///     .iter()
///     .map(|c| (c.employee.name.as_str(), c.shifts))
///     .collect();
/// assert_eq!(counts, vec![("Alice", 2), ("Bob", 1), ("Carol", 1)]);
/// ```
pub fn shift_counts<'a>(schedule: &Schedule, employees: &'a [Employee]) -> Vec<ShiftCount<'a>> {
    employees
        .iter()
        .zip(schedule.shift_counts(employees.len()))
        .map(|(employee, shifts)| ShiftCount { employee, shifts })
        .collect()
}

/// One labelled row per shift: `(label, crew names)`.
pub fn roster_view(
    schedule: &Schedule,
    shifts: &ShiftSet,
    employees: &[Employee],
) -> Vec<(String, Vec<String>)> {
    schedule
        .assignments(shifts, employees)
        .map(|(shift, crew)| {
            (
                shift.label(),
                crew.iter().map(|e| e.name.clone()).collect(),
            )
        })
        .collect()
}
