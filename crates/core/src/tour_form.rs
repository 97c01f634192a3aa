//! Per-language required-field checks for tour content.
//!
//! Missing fields are advisory: the create flow records them as warnings,
//! while the edit flow rejects them unless the caller explicitly overrides.
//! Both go through [`validate_tour_form`]; only the `allow_override` flag
//! differs.

use serde::Serialize;

use crate::error::CoreError;
use crate::language::Language;
use crate::wizard::{FormField, FormRecord};

/// Fields every translation of a tour must fill in.
pub const REQUIRED_FIELDS: [FormField; 4] = [
    FormField::Title,
    FormField::Category,
    FormField::Duration,
    FormField::Description,
];

/// Result of validating one translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub language: Language,
    /// Wire names of empty required fields. Empty when the form is complete.
    pub missing: Vec<&'static str>,
    /// `true` when fields were missing and the caller chose to proceed.
    pub overridden: bool,
}

impl ValidationReport {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Required fields that are empty or whitespace-only, in form order.
pub fn missing_required_fields(form: &FormRecord) -> Vec<FormField> {
    REQUIRED_FIELDS
        .into_iter()
        .filter(|&f| form.get(f).trim().is_empty())
        .collect()
}

/// Check a translation for missing required fields.
///
/// With `allow_override` the missing fields come back as warnings inside the
/// report; without it they become [`CoreError::MissingRequiredFields`].
/// Nothing else is checked, so an override always succeeds.
pub fn validate_tour_form(
    language: Language,
    form: &FormRecord,
    allow_override: bool,
) -> Result<ValidationReport, CoreError> {
    let missing: Vec<&'static str> = missing_required_fields(form)
        .into_iter()
        .map(FormField::name)
        .collect();

    if !missing.is_empty() && !allow_override {
        return Err(CoreError::MissingRequiredFields {
            language: language.as_code(),
            fields: missing,
        });
    }

    Ok(ValidationReport {
        language,
        overridden: !missing.is_empty(),
        missing,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
