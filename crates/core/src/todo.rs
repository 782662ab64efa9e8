//! Todo field limits, validation, and display formatting.

use crate::error::CoreError;
use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of a todo title in characters.
pub const MAX_TITLE_LENGTH: usize = 30;

/// Maximum length of a todo description in characters.
pub const MAX_DESCRIPTION_LENGTH: usize = 40;

/// `strftime` pattern used when showing a todo's creation time.
pub const DISPLAY_TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M";

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate a todo title: non-blank and at most [`MAX_TITLE_LENGTH`] characters.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    validate_required_text("Title", title, MAX_TITLE_LENGTH)
}

/// Validate a todo description: non-blank and at most
/// [`MAX_DESCRIPTION_LENGTH`] characters.
pub fn validate_description(description: &str) -> Result<(), CoreError> {
    validate_required_text("Description", description, MAX_DESCRIPTION_LENGTH)
}

fn validate_required_text(field: &str, value: &str, max_len: usize) -> Result<(), CoreError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(CoreError::Validation(format!("{field} is required")));
    }
    let len = value.chars().count();
    if len > max_len {
        return Err(CoreError::Validation(format!(
            "{field} is {len} characters, maximum is {max_len}"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

/// Format a creation timestamp as `DD/MM/YYYY HH:MM`.
pub fn format_display_timestamp(ts: &Timestamp) -> String {
    ts.format(DISPLAY_TIMESTAMP_FORMAT).to_string()
}
