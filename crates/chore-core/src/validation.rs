//! Field validation for todo titles and due dates.
//!
//! Titles are checked against a fixed character set and length. Due dates
//! are parsed from `YYYY-MM-DDTHH:MM[:SS]` and then checked against a floor
//! that depends on whether the todo is being created or edited:
//!
//! - [`DueDateMode::New`]: the due date must be strictly after the current
//!   wall-clock time.
//! - [`DueDateMode::Update`]: the due date must be strictly after
//!   [`RELEASE_FLOOR`], a fixed instant that does not move with the clock.

use std::str::FromStr;

use jiff::{
    Zoned,
    civil::{self, DateTime},
};

use crate::error::{Result, TodoError};

/// Maximum number of characters in a title.
pub const TITLE_MAX_LEN: usize = 30;

/// Floor for due dates set through an update: 2021-05-06T09:00.
pub const RELEASE_FLOOR: DateTime = civil::datetime(2021, 5, 6, 9, 0, 0, 0);

const MINUTE_SHAPE: &[u8] = b"dddd-dd-ddTdd:dd";
const SECOND_SHAPE: &[u8] = b"dddd-dd-ddTdd:dd:dd";

/// Which floor a due date is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueDateMode {
    /// Creating a todo: must be due after now
    New,
    /// Editing a todo: must be due after [`RELEASE_FLOOR`]
    Update,
}

impl FromStr for DueDateMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "new" => Ok(DueDateMode::New),
            "update" => Ok(DueDateMode::Update),
            _ => Err(format!("Invalid due date mode: {s}")),
        }
    }
}

/// Check that a title is 1-30 characters of letters, digits, spaces and
/// apostrophes, and is not a lone apostrophe.
///
/// ```rust
/// use chore_core::validation::validate_title;
///
/// assert!(validate_title("Call Bob's mum").is_ok());
/// assert!(validate_title("'").is_err());
/// assert!(validate_title("").is_err());
/// ```
pub fn validate_title(title: &str) -> Result<()> {
    if title.is_empty() {
        return Err(TodoError::invalid_field("title").with_reason("title cannot be empty"));
    }

    if let Some(bad) = title.chars().find(|c| !is_title_char(*c)) {
        return Err(TodoError::invalid_field("title").with_reason(format!(
            "'{bad}' is not allowed; use only letters, digits, spaces and apostrophes"
        )));
    }

    // Every accepted character is ASCII, so the byte length is the char count.
    if title.len() > TITLE_MAX_LEN {
        return Err(TodoError::invalid_field("title").with_reason(format!(
            "title is {} characters long, the maximum is {TITLE_MAX_LEN}",
            title.len()
        )));
    }

    if title == "'" {
        return Err(
            TodoError::invalid_field("title").with_reason("title cannot be a single apostrophe")
        );
    }

    Ok(())
}

fn is_title_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == ' ' || c == '\''
}

/// Parse a `YYYY-MM-DDTHH:MM` or `YYYY-MM-DDTHH:MM:SS` timestamp.
///
/// Anything that does not have exactly one of those shapes, or that names a
/// day or time that does not exist, fails with
/// [`TodoError::UnparsableDate`].
pub fn parse_due_date(raw: &str) -> Result<DateTime> {
    let unparsable = || TodoError::UnparsableDate {
        input: raw.to_string(),
    };

    if !has_timestamp_shape(raw) {
        return Err(unparsable());
    }

    // jiff clamps a leap second to :59 instead of failing.
    if raw.get(17..) == Some("60") {
        return Err(unparsable());
    }

    raw.parse::<DateTime>().map_err(|_| unparsable())
}

/// Check that a due date has no fractional seconds.
///
/// The todo file stores at most whole seconds, so anything finer would be
/// lost on the next save.
pub fn validate_whole_seconds(due: DateTime) -> Result<DateTime> {
    if due.subsec_nanosecond() != 0 {
        return Err(TodoError::invalid_field("due")
            .with_reason("due dates are stored to the second; drop the fraction"));
    }
    Ok(due)
}

fn has_timestamp_shape(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    let shape = match bytes.len() {
        16 => MINUTE_SHAPE,
        19 => SECOND_SHAPE,
        _ => return false,
    };

    bytes.iter().zip(shape).all(|(b, expected)| match expected {
        b'd' => b.is_ascii_digit(),
        _ => b == expected,
    })
}

/// Parse a due date and check it against the floor for `mode`, using the
/// current local wall-clock time as "now".
pub fn validate_due_date(raw: &str, mode: DueDateMode) -> Result<DateTime> {
    validate_due_date_at(raw, mode, Zoned::now().datetime())
}

/// Parse a due date and check it against the floor for `mode`, with an
/// explicit "now".
pub fn validate_due_date_at(raw: &str, mode: DueDateMode, now: DateTime) -> Result<DateTime> {
    let due = parse_due_date(raw)?;

    match mode {
        DueDateMode::New if due <= now => Err(TodoError::invalid_field("due")
            .with_reason("a new todo can't be due for completion in the past")),
        DueDateMode::Update if due <= RELEASE_FLOOR => Err(TodoError::invalid_field("due")
            .with_reason("a todo can't be due before 2021-05-06T09:00")),
        _ => Ok(due),
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    fn now() -> DateTime {
        date(2026, 3, 14).at(12, 0, 0, 0)
    }

    #[test]
    fn test_title_accepts_allowed_charset() {
        for title in [
            "a",
            "Buy milk",
            "Call Bob's mum",
            "''",
            " ",
            "0123456789",
            "abcdefghijklmnopqrstuvwxyzABCD",
        ] {
            assert!(validate_title(title).is_ok(), "expected '{title}' to be valid");
        }
    }

    #[test]
    fn test_title_rejects_bad_input() {
        let too_long = "a".repeat(TITLE_MAX_LEN + 1);
        for title in [
            "",
            "'",
            too_long.as_str(),
            "Buy milk, eggs",
            "semi;colon",
            "tab\there",
            "new\nline",
            "café",
            "dash-ed",
        ] {
            let err = validate_title(title).expect_err(title);
            assert!(
                matches!(err, TodoError::InvalidField { ref field, .. } if field == "title"),
                "unexpected error for '{title}': {err:?}"
            );
        }
    }

    #[test]
    fn test_title_length_boundary() {
        assert!(validate_title(&"x".repeat(30)).is_ok());
        assert!(validate_title(&"x".repeat(31)).is_err());
    }

    #[test]
    fn test_parse_minute_and_second_forms() {
        assert_eq!(
            parse_due_date("2030-01-01T09:00").unwrap(),
            date(2030, 1, 1).at(9, 0, 0, 0)
        );
        assert_eq!(
            parse_due_date("2030-01-01T09:00:42").unwrap(),
            date(2030, 1, 1).at(9, 0, 42, 0)
        );
    }

    #[test]
    fn test_parse_rejects_other_shapes() {
        for raw in [
            "",
            "2030-01-01",
            "2030-01-01 09:00",
            "2030-1-01T09:00",
            "2030-01-01T9:00",
            "2030-01-01T09:00:00.5",
            "2030-01-01T09:00Z",
            "2030-01-01T09:00+01:00",
            "tomorrow",
            " 2030-01-01T09:00",
        ] {
            assert!(
                matches!(parse_due_date(raw), Err(TodoError::UnparsableDate { .. })),
                "expected '{raw}' to be unparsable"
            );
        }
    }

    #[test]
    fn test_parse_rejects_impossible_values() {
        for raw in [
            "2030-13-01T09:00",
            "2030-02-30T09:00",
            "2030-01-01T24:00",
            "2030-01-01T09:60",
            "2030-12-31T23:59:60",
            "2030-01-01T09:00:61",
        ] {
            assert!(
                matches!(parse_due_date(raw), Err(TodoError::UnparsableDate { .. })),
                "expected '{raw}' to be unparsable"
            );
        }
    }

    #[test]
    fn test_whole_seconds() {
        let exact = date(2030, 1, 1).at(9, 0, 30, 0);
        assert_eq!(validate_whole_seconds(exact).unwrap(), exact);

        let err = validate_whole_seconds(date(2030, 1, 1).at(9, 0, 0, 500_000_000)).unwrap_err();
        assert!(matches!(err, TodoError::InvalidField { ref field, .. } if field == "due"));
    }

    #[test]
    fn test_new_mode_requires_future() {
        assert!(validate_due_date_at("2026-03-14T12:01", DueDateMode::New, now()).is_ok());

        for raw in ["2026-03-14T12:00", "2026-03-14T11:59", "2022-01-01T00:00"] {
            let err = validate_due_date_at(raw, DueDateMode::New, now()).expect_err(raw);
            assert!(matches!(err, TodoError::InvalidField { ref field, .. } if field == "due"));
        }
    }

    #[test]
    fn test_update_mode_uses_release_floor() {
        // Past relative to now, but after the floor.
        assert!(validate_due_date_at("2022-01-01T00:00", DueDateMode::Update, now()).is_ok());
        assert!(validate_due_date_at("2021-05-06T09:01", DueDateMode::Update, now()).is_ok());

        for raw in ["2021-05-06T09:00", "2021-05-06T08:59:59", "2020-01-01T00:00"] {
            let err = validate_due_date_at(raw, DueDateMode::Update, now()).expect_err(raw);
            assert!(matches!(err, TodoError::InvalidField { ref field, .. } if field == "due"));
        }
    }

    #[test]
    fn test_unparsable_wins_over_floor() {
        let err = validate_due_date_at("2020-01-01", DueDateMode::Update, now()).unwrap_err();
        assert!(matches!(err, TodoError::UnparsableDate { .. }));
    }

    #[test]
    fn test_validate_due_date_uses_wall_clock() {
        assert!(validate_due_date("2999-12-31T23:59", DueDateMode::New).is_ok());
        assert!(validate_due_date("2022-06-01T10:00", DueDateMode::New).is_err());
    }

    #[test]
    fn test_due_date_mode_from_str() {
        assert_eq!("new".parse::<DueDateMode>().unwrap(), DueDateMode::New);
        assert_eq!("UPDATE".parse::<DueDateMode>().unwrap(), DueDateMode::Update);
        assert!("edit".parse::<DueDateMode>().is_err());
    }
}
