//! Input rules for catalog entities edited in the back office: cities and FAQs.

use crate::error::CoreError;

/// Maximum length of a city slug.
pub const MAX_SLUG_LENGTH: usize = 64;

/// Maximum length of display names (city and country).
pub const MAX_NAME_LENGTH: usize = 120;

/// Maximum length of an FAQ question.
pub const MAX_QUESTION_LENGTH: usize = 500;

/// Validate a URL slug: lowercase ASCII letters, digits and single hyphens,
/// not starting or ending with a hyphen.
pub fn validate_slug(slug: &str) -> Result<(), CoreError> {
    let well_formed = !slug.is_empty()
        && slug.len() <= MAX_SLUG_LENGTH
        && slug
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && !slug.contains("--");
    if !well_formed {
        return Err(CoreError::Validation(format!(
            "Invalid slug '{slug}'. Use lowercase letters, digits and hyphens (max {MAX_SLUG_LENGTH})"
        )));
    }
    Ok(())
}

/// Validate a required display name such as a city or country name.
pub fn validate_name(label: &str, value: &str) -> Result<(), CoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(format!("{label} must not be empty")));
    }
    if trimmed.chars().count() > MAX_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "{label} must be at most {MAX_NAME_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate an FAQ entry's question and answer.
pub fn validate_faq(question: &str, answer: &str) -> Result<(), CoreError> {
    if question.trim().is_empty() || answer.trim().is_empty() {
        return Err(CoreError::Validation(
            "FAQ question and answer must not be empty".to_string(),
        ));
    }
    if question.chars().count() > MAX_QUESTION_LENGTH {
        return Err(CoreError::Validation(format!(
            "FAQ question must be at most {MAX_QUESTION_LENGTH} characters"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
