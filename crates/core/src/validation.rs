//! Request-shaped validation shared by the engine and the HTTP layer.

use crate::error::CoreError;

/// Maximum accepted thumbnail size (2 MiB).
pub const MAX_THUMBNAIL_BYTES: usize = 2 * 1024 * 1024;

/// Maximum length of a project name, in characters.
pub const MAX_PROJECT_NAME_LEN: usize = 200;

/// Maximum length of a project description, in characters.
pub const MAX_DESCRIPTION_LEN: usize = 10_000;

/// Maximum length of a display name, in characters.
pub const MAX_DISPLAY_NAME_LEN: usize = 100;

/// Validate a project name: required, trimmed non-empty, bounded.
pub fn validate_project_name(name: &str) -> Result<(), CoreError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CoreError::InvalidRequest("name is required".into()));
    }
    if trimmed.chars().count() > MAX_PROJECT_NAME_LEN {
        return Err(CoreError::InvalidRequest(format!(
            "name must be at most {MAX_PROJECT_NAME_LEN} characters"
        )));
    }
    Ok(())
}

pub fn validate_description(description: &str) -> Result<(), CoreError> {
    if description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(CoreError::InvalidRequest(format!(
            "description must be at most {MAX_DESCRIPTION_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate an optional thumbnail. Empty uploads are treated as absent by callers.
pub fn validate_thumbnail(thumbnail: Option<&[u8]>) -> Result<(), CoreError> {
    match thumbnail {
        Some(bytes) if bytes.len() > MAX_THUMBNAIL_BYTES => Err(CoreError::InvalidRequest(
            "thumbnail too large (max 2MB)".into(),
        )),
        _ => Ok(()),
    }
}

/// Validate a display name that will be written to the name cache.
pub fn validate_display_name(name: &str) -> Result<(), CoreError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CoreError::InvalidRequest("name must not be empty".into()));
    }
    if trimmed.chars().count() > MAX_DISPLAY_NAME_LEN {
        return Err(CoreError::InvalidRequest(format!(
            "name must be at most {MAX_DISPLAY_NAME_LEN} characters"
        )));
    }
    Ok(())
}
