//! Free-text notes kept next to the plan
//!
//! Notes live in their own storage entry, separate from the planner snapshot,
//! so saving them never rewrites planner state.

use crate::core::error::PlannerError;
use crate::core::storage::Storage;
use crate::warn;

/// Storage key holding the notes text
pub const NOTES_KEY: &str = "notes";

/// Read the saved notes; missing or unreadable notes are empty
#[must_use]
pub fn read_notes<S: Storage>(storage: &S) -> String {
    let decoded = storage
        .read(NOTES_KEY)
        .map_err(|e| e.to_string())
        .and_then(|raw| {
            raw.map_or(Ok(String::new()), |json| {
                serde_json::from_str::<String>(&json).map_err(|e| e.to_string())
            })
        });

    decoded.unwrap_or_else(|reason| {
        let error = PlannerError::PersistenceRead {
            key: NOTES_KEY.to_string(),
            reason,
        };
        warn!("{error}; showing empty notes");
        String::new()
    })
}

/// Replace the saved notes with `text`
///
/// # Errors
/// [`PlannerError::PersistenceWrite`] if the notes could not be saved.
pub fn write_notes<S: Storage>(storage: &mut S, text: &str) -> Result<(), PlannerError> {
    let failed = |reason: String| PlannerError::PersistenceWrite {
        key: NOTES_KEY.to_string(),
        reason,
    };
    let json = serde_json::to_string(text).map_err(|e| failed(e.to_string()))?;
    storage
        .write(NOTES_KEY, &json)
        .map_err(|e| failed(e.to_string()))
}

/// Append `line` to the saved notes on a new line, returning the new text
///
/// # Errors
/// [`PlannerError::PersistenceWrite`] if the notes could not be saved.
pub fn append_note<S: Storage>(storage: &mut S, line: &str) -> Result<String, PlannerError> {
    let mut text = read_notes(storage);
    if !text.is_empty() && !text.ends_with('\n') {
        text.push('\n');
    }
    text.push_str(line);
    write_notes(storage, &text)?;
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::storage::MemoryStorage;

    #[test]
    fn test_missing_notes_are_empty() {
        assert_eq!(read_notes(&MemoryStorage::new()), "");
    }

    #[test]
    fn test_write_then_read() {
        let mut storage = MemoryStorage::new();
        write_notes(&mut storage, "Ask advisor about \"PSY 495\"\nsecond line").unwrap();

        assert_eq!(
            read_notes(&storage),
            "Ask advisor about \"PSY 495\"\nsecond line"
        );
    }

    #[test]
    fn test_append_adds_a_line() {
        let mut storage = MemoryStorage::new();
        append_note(&mut storage, "first").unwrap();
        let text = append_note(&mut storage, "second").unwrap();

        assert_eq!(text, "first\nsecond");
        assert_eq!(read_notes(&storage), "first\nsecond");
    }

    #[test]
    fn test_corrupt_notes_read_as_empty() {
        let storage = MemoryStorage::with_entries([(NOTES_KEY, "not a json string")]);
        assert_eq!(read_notes(&storage), "");
    }

    #[test]
    fn test_failed_write_is_reported() {
        let mut storage = MemoryStorage::new();
        storage.set_fail_writes(true);

        let err = write_notes(&mut storage, "lost").unwrap_err();
        assert!(matches!(err, PlannerError::PersistenceWrite { .. }));
    }
}
