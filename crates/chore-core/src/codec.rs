//! Flat-text serialization of todo collections.
//!
//! One todo per line, five comma-separated fields:
//!
//! ```text
//! title,due_at,category,priority,status
//! Buy milk,2030-01-01T09:00,blue,low,pending
//! ```
//!
//! There is no header and no quoting. Titles cannot contain commas because
//! [`crate::validation::validate_title`] rejects them, which is the only thing
//! keeping the format unambiguous.

use crate::{
    display::CanonicalDateTime,
    error::{Result, TodoError},
    models::{Category, Priority, Status, TodoRecord},
    validation,
};

/// Separator between the fields of a line.
pub const FIELD_SEPARATOR: char = ',';

const FIELD_COUNT: usize = 5;

/// Encode a collection, one `\n`-terminated line per todo.
pub fn save(records: &[TodoRecord]) -> String {
    records.iter().map(encode_record).collect()
}

/// Encode a single todo as one `\n`-terminated line.
pub fn encode_record(record: &TodoRecord) -> String {
    format!(
        "{title},{due},{category},{priority},{status}\n",
        title = record.title(),
        due = CanonicalDateTime(&record.due_at()),
        category = record.category().as_str(),
        priority = record.priority().as_str(),
        status = record.status().as_str(),
    )
}

/// Decode a whole file.
///
/// The first line that cannot be decoded fails the entire load with
/// `TodoError::MalformedRecord`; nothing is returned for the lines before it.
///
/// # Examples
///
/// ```rust
/// use chore_core::codec;
///
/// let text = "Buy milk,2030-01-01T09:00,blue,low,pending\n";
/// let records = codec::load(text).unwrap();
/// assert_eq!(records[0].title(), "Buy milk");
/// assert_eq!(codec::save(&records), text);
/// ```
pub fn load(text: &str) -> Result<Vec<TodoRecord>> {
    text.lines()
        .enumerate()
        .map(|(index, line)| decode_record(line, index + 1))
        .collect()
}

/// Decode one line. `line_number` is 1-based and only used in errors.
///
/// Fields past the fifth are ignored.
pub fn decode_record(line: &str, line_number: usize) -> Result<TodoRecord> {
    let malformed = |reason: String| TodoError::malformed(line_number).with_reason(reason);

    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    if fields.len() < FIELD_COUNT {
        return Err(malformed(format!(
            "expected {FIELD_COUNT} comma-separated fields, found {}",
            fields.len()
        )));
    }

    let due_at = validation::parse_due_date(fields[1]).map_err(|e| malformed(e.to_string()))?;
    let category = fields[2].parse::<Category>().map_err(malformed)?;
    let priority = fields[3].parse::<Priority>().map_err(malformed)?;
    let status = fields[4].parse::<Status>().map_err(malformed)?;

    TodoRecord::restore(fields[0], due_at, category, priority, status)
        .map_err(|e| malformed(e.to_string()))
}
