//! Category naming and color rules.
//!
//! Colors are stored as `#RRGGBB`. An omitted or blank color falls back to
//! [`DEFAULT_CATEGORY_COLOR`].

use crate::error::CoreError;

/// Color assigned to a category when none is supplied.
pub const DEFAULT_CATEGORY_COLOR: &str = "#007bff";

/// Validate a category name: must be non-blank.
///
/// Long names are allowed; truncation is left to the presentation layer.
pub fn validate_category_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation("Category name is required".to_string()));
    }
    Ok(())
}

/// Validate that a color string matches `#RRGGBB` hex format.
pub fn validate_color_hex(color: &str) -> Result<(), CoreError> {
    if color.len() != 7 {
        return Err(CoreError::Validation(format!(
            "Invalid color '{color}'. Must be in #RRGGBB hex format"
        )));
    }

    if !color.starts_with('#') {
        return Err(CoreError::Validation(format!(
            "Invalid color '{color}'. Must start with '#'"
        )));
    }

    let hex_part = &color[1..];
    if !hex_part.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(CoreError::Validation(format!(
            "Invalid color '{color}'. Must contain only hex digits after '#'"
        )));
    }

    Ok(())
}

/// Resolve the color to store for a category.
///
/// `None` and blank strings become [`DEFAULT_CATEGORY_COLOR`]; anything else
/// must pass [`validate_color_hex`].
pub fn normalize_color(color: Option<&str>) -> Result<String, CoreError> {
    match color.map(str::trim) {
        None | Some("") => Ok(DEFAULT_CATEGORY_COLOR.to_string()),
        Some(color) => {
            validate_color_hex(color)?;
            Ok(color.to_string())
        }
    }
}
