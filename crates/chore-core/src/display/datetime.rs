//! DateTime display utilities.
//!
//! Wrapper types that format a civil `DateTime` either in the canonical
//! machine form written to the todo file, or in the human forms used on a
//! todo card.

use std::fmt;

use jiff::civil::DateTime;

/// Canonical timestamp text: `YYYY-MM-DDTHH:MM`, or `YYYY-MM-DDTHH:MM:SS`
/// when the seconds are not zero.
///
/// Fractional seconds are not written. [`crate::TodoRecord`] never holds
/// them, so for a record's due date the output parses back to the same
/// value with [`crate::validation::parse_due_date`].
pub struct CanonicalDateTime<'a>(pub &'a DateTime);

impl fmt::Display for CanonicalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.second() == 0 {
            write!(f, "{}", self.0.strftime("%Y-%m-%dT%H:%M"))
        } else {
            write!(f, "{}", self.0.strftime("%Y-%m-%dT%H:%M:%S"))
        }
    }
}

/// Day a todo is due, e.g. `Tuesday 1 of January 2030`.
pub struct DueDay<'a>(pub &'a DateTime);

impl fmt::Display for DueDay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} of {} {}",
            self.0.strftime("%A"),
            self.0.day(),
            self.0.strftime("%B"),
            self.0.year()
        )
    }
}

/// Time of day a todo is due, as 24-hour `HH:MM`.
pub struct DueTime<'a>(pub &'a DateTime);

impl fmt::Display for DueTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%H:%M"))
    }
}
