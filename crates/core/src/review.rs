//! Customer review validation and rating summaries.

use crate::error::CoreError;

/// Lowest accepted star rating.
pub const MIN_RATING: i16 = 1;

/// Highest accepted star rating.
pub const MAX_RATING: i16 = 5;

/// Maximum length for a reviewer's display name.
pub const MAX_AUTHOR_NAME_LENGTH: usize = 100;

/// Maximum length for a review comment.
pub const MAX_COMMENT_LENGTH: usize = 5_000;

/// Validate that a rating is within 1..=5 stars.
pub fn validate_rating(rating: i16) -> Result<(), CoreError> {
    if (MIN_RATING..=MAX_RATING).contains(&rating) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Rating must be between {MIN_RATING} and {MAX_RATING}, got {rating}"
        )))
    }
}

/// Validate a reviewer name: non-blank and at most 100 characters.
pub fn validate_author_name(name: &str) -> Result<(), CoreError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(
            "Author name must not be empty".to_string(),
        ));
    }
    if trimmed.chars().count() > MAX_AUTHOR_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "Author name exceeds maximum length of {MAX_AUTHOR_NAME_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate a review comment length.
pub fn validate_comment(comment: &str) -> Result<(), CoreError> {
    if comment.chars().count() > MAX_COMMENT_LENGTH {
        return Err(CoreError::Validation(format!(
            "Comment exceeds maximum length of {MAX_COMMENT_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Mean rating rounded to one decimal, or `None` when there are no reviews.
pub fn average_rating(rating_sum: i64, review_count: i64) -> Option<f64> {
    if review_count <= 0 {
        return None;
    }
    let mean = rating_sum as f64 / review_count as f64;
    Some((mean * 10.0).round() / 10.0)
}
