//! Domain model: employees, the shift calendar, and schedules.

mod employee;
mod schedule;
mod shift;

pub use employee::Employee;
pub use schedule::{Crew, Schedule, CREW_SIZE};
pub use shift::{Shift, ShiftSet, DAY_PERIODS, WEEKDAYS};
