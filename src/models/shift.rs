//! Shift calendar.
//!
//! A [`ShiftSet`] is the cross product of day labels and period labels,
//! stored in day-major order. Shift indices are the gene positions of every
//! [`Schedule`](super::Schedule).

use std::collections::HashSet;
use std::fmt;
use std::ops::Range;

use crate::error::{Result, RosterError};

/// Default day labels for a weekly calendar.
pub const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Default period labels within a day.
pub const DAY_PERIODS: [&str; 2] = ["Morning", "Evening"];

/// A single (day, period) slot, e.g. "Wednesday Evening".
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shift {
    /// Day label.
    pub day: String,
    /// Period label within the day.
    pub period: String,
}

impl Shift {
    /// Creates a shift.
    pub fn new(day: impl Into<String>, period: impl Into<String>) -> Self {
        Self {
            day: day.into(),
            period: period.into(),
        }
    }

    /// Human-readable label, `"{day} {period}"`.
    pub fn label(&self) -> String {
        format!("{} {}", self.day, self.period)
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.day, self.period)
    }
}

/// The fixed set of shifts a schedule must staff.
///
/// # Examples
///
/// ```
/// use u_roster::models::ShiftSet;
///
/// let week = ShiftSet::weekly();
/// assert_eq!(week.len(), 14);
/// assert_eq!(week.shift(5).label(), "Wednesday Evening");
/// ```
///
/// With the `serde` feature only the day and period labels are serialized.
/// Deserializing goes through [`ShiftSet::new`], so the same checks apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftSet {
    days: Vec<String>,
    periods: Vec<String>,
    shifts: Vec<Shift>,
}

impl ShiftSet {
    /// Builds the calendar from day and period labels.
    ///
    /// # Errors
    /// [`RosterError::InvalidConfig`] when either list is empty or contains
    /// a duplicate label.
    pub fn new<D, P>(days: D, periods: P) -> Result<Self>
    where
        D: IntoIterator,
        D::Item: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        let days: Vec<String> = days.into_iter().map(Into::into).collect();
        let periods: Vec<String> = periods.into_iter().map(Into::into).collect();

        if days.is_empty() {
            return Err(RosterError::InvalidConfig(
                "shift calendar needs at least one day".into(),
            ));
        }
        if periods.is_empty() {
            return Err(RosterError::InvalidConfig(
                "shift calendar needs at least one period per day".into(),
            ));
        }
        if let Some(dup) = first_duplicate(&days) {
            return Err(RosterError::InvalidConfig(format!("duplicate day label '{dup}'")));
        }
        if let Some(dup) = first_duplicate(&periods) {
            return Err(RosterError::InvalidConfig(format!(
                "duplicate period label '{dup}'"
            )));
        }

        let shifts = days
            .iter()
            .flat_map(|day| periods.iter().map(move |period| Shift::new(day, period)))
            .collect();

        Ok(Self {
            days,
            periods,
            shifts,
        })
    }

    /// Seven days, Morning and Evening each: 14 shifts.
    pub fn weekly() -> Self {
        let days: Vec<String> = WEEKDAYS.iter().map(|d| d.to_string()).collect();
        let periods: Vec<String> = DAY_PERIODS.iter().map(|p| p.to_string()).collect();
        let shifts = days
            .iter()
            .flat_map(|day| periods.iter().map(move |period| Shift::new(day, period)))
            .collect();
        Self {
            days,
            periods,
            shifts,
        }
    }

    /// Total number of shifts.
    pub fn len(&self) -> usize {
        self.shifts.len()
    }

    /// Always `false` for a constructed calendar.
    pub fn is_empty(&self) -> bool {
        self.shifts.is_empty()
    }

    pub fn days(&self) -> &[String] {
        &self.days
    }

    pub fn periods(&self) -> &[String] {
        &self.periods
    }

    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    pub fn periods_per_day(&self) -> usize {
        self.periods.len()
    }

    /// All shifts in day-major order.
    pub fn shifts(&self) -> &[Shift] {
        &self.shifts
    }

    /// Shift at `index`.
    ///
    /// # Panics
    /// Panics if `index >= self.len()`.
    pub fn shift(&self, index: usize) -> &Shift {
        &self.shifts[index]
    }

    /// Shift indices belonging to day `day`.
    pub fn day_range(&self, day: usize) -> Range<usize> {
        let per_day = self.periods.len();
        day * per_day..(day + 1) * per_day
    }

    /// Index of the shift whose label matches `label`.
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.shifts.iter().position(|s| s.label() == label)
    }
}

impl Default for ShiftSet {
    fn default() -> Self {
        Self::weekly()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ShiftSet {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("ShiftSet", 2)?;
        state.serialize_field("days", &self.days)?;
        state.serialize_field("periods", &self.periods)?;
        state.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ShiftSet {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Labels {
            days: Vec<String>,
            periods: Vec<String>,
        }

        let labels = Labels::deserialize(deserializer)?;
        ShiftSet::new(labels.days, labels.periods).map_err(serde::de::Error::custom)
    }
}

fn first_duplicate(labels: &[String]) -> Option<&str> {
    let mut seen = HashSet::new();
    labels
        .iter()
        .find(|label| !seen.insert(label.as_str()))
        .map(|s| s.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekly_layout() {
        let week = ShiftSet::weekly();
        assert_eq!(week.len(), 14);
        assert_eq!(week.day_count(), 7);
        assert_eq!(week.periods_per_day(), 2);
        assert_eq!(week.shift(0).label(), "Monday Morning");
        assert_eq!(week.shift(1).label(), "Monday Evening");
        assert_eq!(week.shift(13).label(), "Sunday Evening");
        assert_eq!(week.day_range(2), 4..6);
    }

    #[test]
    fn test_custom_calendar() {
        let set = ShiftSet::new(["Sat", "Sun"], ["Early", "Mid", "Late"]).unwrap();
        assert_eq!(set.len(), 6);
        assert_eq!(set.day_range(1), 3..6);
        assert_eq!(set.index_of("Sun Mid"), Some(4));
        assert_eq!(set.index_of("Mon Mid"), None);
    }

    #[test]
    fn test_new_matches_weekly() {
        let built = ShiftSet::new(WEEKDAYS, DAY_PERIODS).unwrap();
        assert_eq!(built, ShiftSet::weekly());
    }

    #[test]
    fn test_empty_labels_rejected() {
        let no_days: Vec<String> = vec![];
        assert!(matches!(
            ShiftSet::new(no_days, ["Morning"]),
            Err(RosterError::InvalidConfig(_))
        ));
        let no_periods: Vec<&str> = vec![];
        assert!(matches!(
            ShiftSet::new(["Monday"], no_periods),
            Err(RosterError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_duplicate_labels_rejected() {
        let err = ShiftSet::new(["Monday", "Monday"], ["Morning"]).unwrap_err();
        assert_eq!(
            err,
            RosterError::InvalidConfig("duplicate day label 'Monday'".into())
        );
        assert!(ShiftSet::new(["Monday"], ["Morning", "Morning"]).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_labels_only() {
        let week = ShiftSet::weekly();
        let json = serde_json::to_string(&week).unwrap();
        assert!(!json.contains("\"shifts\""));
        let back: ShiftSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, week);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_rebuilds_shifts() {
        let json = r#"{"days":["Mon"],"periods":["Morning","Evening"],"shifts":[]}"#;
        let set: ShiftSet = serde_json::from_str(json).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.shift(1).label(), "Mon Evening");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_rejects_invalid_calendar() {
        for json in [
            r#"{"days":[],"periods":["Morning"]}"#,
            r#"{"days":["Mon"],"periods":[]}"#,
            r#"{"days":["Mon","Mon"],"periods":["Morning"]}"#,
            r#"{"days":["Mon"],"periods":["Late","Late"]}"#,
        ] {
            let err = serde_json::from_str::<ShiftSet>(json).unwrap_err();
            assert!(err.to_string().contains("invalid config"), "{json}: {err}");
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Shift::new("Friday", "Evening").to_string(), "Friday Evening");
    }
}
