//! Tour creation wizard: step definitions, the shared form record, and the
//! linear step state machine used by the admin back office.
//!
//! The wizard is a caller-owned value. Every transition consumes the current
//! [`TourWizard`] and returns the next one, so the API layer can load a
//! session row, apply exactly one transition, and persist the result.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Session status
// ---------------------------------------------------------------------------

/// Status values for a persisted wizard session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStatus {
    InProgress,
    Completed,
    Abandoned,
}

impl WizardStatus {
    /// Parse a status string from the database.
    pub fn from_str_db(s: &str) -> Result<Self, CoreError> {
        match s {
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            "abandoned" => Ok(Self::Abandoned),
            _ => Err(CoreError::Validation(format!(
                "Invalid wizard status '{s}'. Must be one of: in_progress, completed, abandoned"
            ))),
        }
    }

    /// Convert to a database-compatible string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Abandoned => "abandoned",
        }
    }
}

/// Reject any operation on a session that is no longer in progress.
///
/// `action` is a short verb phrase used in the error message
/// (e.g. "advance", "edit").
pub fn ensure_in_progress(status: &str, action: &str) -> Result<(), CoreError> {
    if status != WizardStatus::InProgress.as_str() {
        return Err(CoreError::Validation(format!(
            "Cannot {action} a wizard session with status '{status}'"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Form fields
// ---------------------------------------------------------------------------

/// The fields collected by the tour wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FormField {
    Title,
    Category,
    Availability,
    Duration,
    Description,
    Highlights,
    Included,
    NotIncluded,
    TakeWith,
    Program,
}

impl FormField {
    /// Every field, in form order.
    pub const ALL: [FormField; 10] = [
        Self::Title,
        Self::Category,
        Self::Availability,
        Self::Duration,
        Self::Description,
        Self::Highlights,
        Self::Included,
        Self::NotIncluded,
        Self::TakeWith,
        Self::Program,
    ];

    /// Wire name of the field, as used in JSON payloads.
    pub fn name(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Category => "category",
            Self::Availability => "availability",
            Self::Duration => "duration",
            Self::Description => "description",
            Self::Highlights => "highlights",
            Self::Included => "included",
            Self::NotIncluded => "notIncluded",
            Self::TakeWith => "takeWith",
            Self::Program => "program",
        }
    }

    /// Parse a wire name. Unknown names are rejected.
    pub fn from_name(name: &str) -> Result<Self, CoreError> {
        Self::ALL
            .into_iter()
            .find(|f| f.name() == name)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Unknown form field '{name}'. Must be one of: {}",
                    Self::ALL.map(|f| f.name()).join(", ")
                ))
            })
    }

    /// The wizard step whose screen edits this field.
    pub fn step(self) -> WizardStep {
        match self {
            Self::Title | Self::Category | Self::Availability | Self::Duration => {
                WizardStep::BasicInfo
            }
            _ => WizardStep::Description,
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Form record
// ---------------------------------------------------------------------------

/// Accumulated key/value form data for one wizard session.
///
/// Every field is always present and defaults to the empty string; edits
/// only ever overwrite.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormRecord {
    pub title: String,
    pub category: String,
    pub availability: String,
    pub duration: String,
    pub description: String,
    pub highlights: String,
    pub included: String,
    pub not_included: String,
    pub take_with: String,
    pub program: String,
}

impl FormRecord {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title,
            FormField::Category => &self.category,
            FormField::Availability => &self.availability,
            FormField::Duration => &self.duration,
            FormField::Description => &self.description,
            FormField::Highlights => &self.highlights,
            FormField::Included => &self.included,
            FormField::NotIncluded => &self.not_included,
            FormField::TakeWith => &self.take_with,
            FormField::Program => &self.program,
        }
    }

    /// Overwrite a single field.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Title => &mut self.title,
            FormField::Category => &mut self.category,
            FormField::Availability => &mut self.availability,
            FormField::Duration => &mut self.duration,
            FormField::Description => &mut self.description,
            FormField::Highlights => &mut self.highlights,
            FormField::Included => &mut self.included,
            FormField::NotIncluded => &mut self.not_included,
            FormField::TakeWith => &mut self.take_with,
            FormField::Program => &mut self.program,
        };
        *slot = value.into();
    }

    /// All `(field, value)` pairs in form order.
    pub fn entries(&self) -> impl Iterator<Item = (FormField, &str)> + '_ {
        FormField::ALL.into_iter().map(move |f| (f, self.get(f)))
    }
}

// ---------------------------------------------------------------------------
// Wizard steps
// ---------------------------------------------------------------------------

/// The five steps of the tour creation wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    BasicInfo,
    Description,
    Details,
    Review,
    Complete,
}

/// Total number of steps in the wizard.
pub const TOTAL_STEPS: u8 = 5;

/// Minimum step number (1-based).
pub const MIN_STEP: u8 = 1;

/// Maximum step number (1-based).
pub const MAX_STEP: u8 = 5;

impl WizardStep {
    /// Every step, in order.
    pub const ALL: [WizardStep; TOTAL_STEPS as usize] = [
        Self::BasicInfo,
        Self::Description,
        Self::Details,
        Self::Review,
        Self::Complete,
    ];

    /// Convert a 1-based step number to a `WizardStep`.
    pub fn from_number(n: u8) -> Result<Self, CoreError> {
        validate_step_number(n)?;
        Ok(Self::ALL[usize::from(n - MIN_STEP)])
    }

    /// Convert to a 1-based step number.
    pub fn to_number(self) -> u8 {
        match self {
            Self::BasicInfo => 1,
            Self::Description => 2,
            Self::Details => 3,
            Self::Review => 4,
            Self::Complete => 5,
        }
    }

    /// Human-readable label for the step.
    pub fn label(self) -> &'static str {
        match self {
            Self::BasicInfo => "Basic Info",
            Self::Description => "Description",
            Self::Details => "Details",
            Self::Review => "Review",
            Self::Complete => "Complete",
        }
    }

    /// Fields edited on this step's screen. Details, Review and Complete
    /// carry no fields of their own.
    pub fn fields(self) -> &'static [FormField] {
        match self {
            Self::BasicInfo => &[
                FormField::Title,
                FormField::Category,
                FormField::Availability,
                FormField::Duration,
            ],
            Self::Description => &[
                FormField::Description,
                FormField::Highlights,
                FormField::Included,
                FormField::NotIncluded,
                FormField::TakeWith,
                FormField::Program,
            ],
            Self::Details | Self::Review | Self::Complete => &[],
        }
    }
}

/// Validate that a step number is within the valid range.
pub fn validate_step_number(step: u8) -> Result<(), CoreError> {
    if !(MIN_STEP..=MAX_STEP).contains(&step) {
        return Err(CoreError::Validation(format!(
            "Step {step} is out of range ({MIN_STEP}..{MAX_STEP})"
        )));
    }
    Ok(())
}

/// Convert a step number read from an `INT` column.
pub fn step_from_db(step: i32) -> Result<u8, CoreError> {
    let step = u8::try_from(step)
        .map_err(|_| CoreError::Internal(format!("Stored wizard step {step} is out of range")))?;
    validate_step_number(step).map_err(|e| CoreError::Internal(e.to_string()))?;
    Ok(step)
}

/// One entry of the step indicator shown above the wizard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepIndicator {
    pub ordinal: u8,
    pub label: &'static str,
    pub completed: bool,
    pub current: bool,
}

/// Derive the step indicator for a given current step.
///
/// A step is completed exactly when the current step is past it.
pub fn step_indicators(current_step: u8) -> Vec<StepIndicator> {
    WizardStep::ALL
        .into_iter()
        .map(|step| {
            let ordinal = step.to_number();
            StepIndicator {
                ordinal,
                label: step.label(),
                completed: current_step > ordinal,
                current: current_step == ordinal,
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Wizard controller
// ---------------------------------------------------------------------------

/// Linear five-step controller over a shared [`FormRecord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TourWizard {
    current_step: u8,
    form: FormRecord,
}

impl Default for TourWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl TourWizard {
    /// Open a fresh wizard on step 1 with an empty form.
    pub fn new() -> Self {
        Self {
            current_step: MIN_STEP,
            form: FormRecord::default(),
        }
    }

    /// Rebuild a wizard from persisted state.
    pub fn resume(current_step: u8, form: FormRecord) -> Result<Self, CoreError> {
        validate_step_number(current_step)?;
        Ok(Self { current_step, form })
    }

    pub fn current_step(&self) -> u8 {
        self.current_step
    }

    pub fn step(&self) -> WizardStep {
        WizardStep::ALL[usize::from(self.current_step - MIN_STEP)]
    }

    pub fn form(&self) -> &FormRecord {
        &self.form
    }

    pub fn is_final_step(&self) -> bool {
        self.current_step == MAX_STEP
    }

    pub fn is_step_completed(&self, step: WizardStep) -> bool {
        self.current_step > step.to_number()
    }

    pub fn steps(&self) -> Vec<StepIndicator> {
        step_indicators(self.current_step)
    }

    /// Overwrite one field. No validation happens here.
    #[must_use]
    pub fn set_field(mut self, field: FormField, value: impl Into<String>) -> Self {
        self.form.set(field, value);
        self
    }

    /// Move to the next step. No-op on the final step.
    #[must_use]
    pub fn advance(mut self) -> Self {
        if self.current_step < MAX_STEP {
            self.current_step += 1;
        }
        self
    }

    /// Move to the previous step. No-op on the first step.
    #[must_use]
    pub fn retreat(mut self) -> Self {
        if self.current_step > MIN_STEP {
            self.current_step -= 1;
        }
        self
    }

    /// The `(field, value)` pairs a step contributes to the final payload.
    pub fn step_payload(&self, step: WizardStep) -> Vec<(FormField, &str)> {
        step.fields()
            .iter()
            .map(|&f| (f, self.form.get(f)))
            .collect()
    }

    /// Finish the session, handing back the whole form record.
    ///
    /// Only allowed from the final step.
    pub fn complete(self) -> Result<FormRecord, CoreError> {
        if !self.is_final_step() {
            return Err(CoreError::Validation(format!(
                "Cannot complete wizard: must be on step {MAX_STEP} ({}), currently on step {}",
                WizardStep::Complete.label(),
                self.current_step
            )));
        }
        Ok(self.form)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
