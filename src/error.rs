//! Error taxonomy for roster construction and search setup.
//!
//! Every variant is a precondition failure detected before the first
//! generation runs. Constraint violations inside a candidate schedule are
//! never errors; they are fitness penalties.

/// Errors raised while building or configuring a roster search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RosterError {
    /// Too few employees to staff every period of a day with distinct crews.
    #[error("insufficient employees: need at least {required}, got {found}")]
    InsufficientEmployees { required: usize, found: usize },

    /// Population too small to run a tournament.
    #[error("population too small: need at least {required}, got {found}")]
    PopulationTooSmall { required: usize, found: usize },

    /// Malformed search configuration or shift calendar.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RosterError>;
