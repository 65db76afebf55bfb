//! Employee model.

use std::hash::{Hash, Hasher};

/// A person who can be assigned to shifts.
///
/// Identity is the name: two employees with the same name compare equal
/// regardless of their attribute. The attribute is a free-form categorical
/// value consumed by the coverage rule (e.g. `"M"` / `"F"`).
///
/// # Examples
///
/// ```
/// use u_roster::models::Employee;
///
/// let bob = Employee::new("Bob", "M");
/// assert_eq!(bob, Employee::new("Bob", "unknown"));
/// assert!(bob.has_attribute("M"));
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Employee {
    /// Unique name.
    pub name: String,
    /// Categorical attribute value.
    pub attribute: String,
}

impl Employee {
    /// Creates an employee.
    pub fn new(name: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attribute: attribute.into(),
        }
    }

    /// Whether this employee carries the given attribute value.
    pub fn has_attribute(&self, value: &str) -> bool {
        self.attribute == value
    }
}

impl PartialEq for Employee {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Employee {}

impl Hash for Employee {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}
