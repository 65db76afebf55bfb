//! Workforce shift rostering by genetic search.
//!
//! Assigns two employees to every shift of a calendar (by default seven days
//! of Morning and Evening shifts) while trading off three soft constraints:
//!
//! - nobody works two shifts on the same day
//! - shifts are spread evenly across the roster
//! - every shift has at least one employee carrying a required attribute
//!
//! Violations cost fitness instead of being forbidden, and selection pressure
//! drives the population towards schedules that satisfy all three.
//!
//! # Modules
//!
//! - [`models`]: employees, the shift calendar, schedules
//! - [`ga`]: population, fitness, selection, operators, the search loop
//! - [`report`]: per-employee shift counts and labelled rosters for hosts
//!
//! # Example
//!
//! ```
//! use u_roster::ga::{Scheduler, SearchConfig};
//! use u_roster::models::{Employee, ShiftSet};
//!
//! let employees = vec![
//!     Employee::new("Alice", "F"),
//!     Employee::new("Bob", "M"),
//!     Employee::new("Carol", "F"),
//!     Employee::new("Dan", "M"),
//! ];
//! let config = SearchConfig::default().with_seed(7);
//!
//! let scheduler = Scheduler::new(employees, ShiftSet::weekly(), config)?
//!     .with_coverage("M");
//! let result = scheduler.run();
//!
//! for count in result.shift_counts(scheduler.employees()) {
//!     println!("{}: {}", count.employee.name, count.shifts);
//! }
//! # Ok::<(), u_roster::RosterError>(())
//! ```
//!
//! # Features
//!
//! - `parallel`: score each generation on the rayon thread pool
//! - `serde`: `Serialize`/`Deserialize` for models and configuration

pub mod error;
pub mod ga;
pub mod models;
pub mod report;

pub use error::{Result, RosterError};
