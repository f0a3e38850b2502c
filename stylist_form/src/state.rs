//! Form state store and the handle through which it is reached.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::fields::{Field, FormErrors, FormFields};

/// Where the form is in its submit lifecycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Submitted,
    /// The last submit reached the submitter and it failed. Fields are kept;
    /// submitting again is the retry.
    Failed { reason: String },
}

impl SubmissionStatus {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionStatus::Submitting)
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self, SubmissionStatus::Submitted)
    }

    /// Idle or Failed: the form is shown and may be submitted.
    pub fn accepts_submit(&self) -> bool {
        matches!(self, SubmissionStatus::Idle | SubmissionStatus::Failed { .. })
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            SubmissionStatus::Failed { reason } => Some(reason),
            _ => None,
        }
    }
}

/// Field values, field errors and submission status of one form instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    fields: FormFields,
    errors: FormErrors,
    status: SubmissionStatus,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn field(&self, field: Field) -> &str {
        self.fields.get(field)
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    /// Overwrites one field and drops its error, if any.
    ///
    /// The error is cleared without re-validating the new value: the user is
    /// typing, the next submit decides.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.fields.set(field, value.into());
        self.errors.clear(field);
    }

    pub fn set_errors(&mut self, errors: FormErrors) {
        self.errors = errors;
    }

    /// Empties every field and every error. Status is left alone.
    pub fn reset(&mut self) {
        self.fields = FormFields::default();
        self.errors = FormErrors::default();
    }

    pub(crate) fn set_status(&mut self, status: SubmissionStatus) {
        self.status = status;
    }
}

/// Non-owning access to a [`FormState`] that lives elsewhere.
///
/// Both methods return `None` once the owner is gone (the component was
/// unmounted); callers must treat that as "do nothing".
pub trait FormHandle {
    fn with_state<R>(&self, f: impl FnOnce(&FormState) -> R) -> Option<R>;

    fn update_state<R>(&self, f: impl FnOnce(&mut FormState) -> R) -> Option<R>;
}

/// Owner of a form state for non-reactive hosts.
#[derive(Debug, Default)]
pub struct LocalForm {
    state: Rc<RefCell<FormState>>,
}

impl LocalForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle(&self) -> LocalHandle {
        LocalHandle {
            state: Rc::downgrade(&self.state),
        }
    }

    pub fn snapshot(&self) -> FormState {
        self.state.borrow().clone()
    }

    pub fn set_field(&self, field: Field, value: impl Into<String>) {
        self.state.borrow_mut().set_field(field, value);
    }
}

/// Weak handle into a [`LocalForm`].
#[derive(Debug, Clone)]
pub struct LocalHandle {
    state: Weak<RefCell<FormState>>,
}

impl FormHandle for LocalHandle {
    fn with_state<R>(&self, f: impl FnOnce(&FormState) -> R) -> Option<R> {
        let state = self.state.upgrade()?;
        let state = state.borrow();
        Some(f(&state))
    }

    fn update_state<R>(&self, f: impl FnOnce(&mut FormState) -> R) -> Option<R> {
        let state = self.state.upgrade()?;
        let mut state = state.borrow_mut();
        Some(f(&mut state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use pretty_assertions::assert_eq;

    fn with_errors() -> FormState {
        let mut state = FormState::new();
        state.set_errors(
            [
                (Field::Name, ValidationError::Required),
                (Field::Email, ValidationError::InvalidFormat),
            ]
            .into_iter()
            .collect(),
        );
        state
    }

    #[test]
    fn editing_clears_only_that_fields_error() {
        let mut state = with_errors();

        state.set_field(Field::Email, "still bad");

        assert!(!state.errors().contains(Field::Email));
        assert!(state.errors().contains(Field::Name));
        assert_eq!(state.field(Field::Email), "still bad");
    }

    #[test]
    fn editing_to_an_invalid_value_still_clears() {
        let mut state = with_errors();

        state.set_field(Field::Name, "");

        assert_eq!(state.errors().get(Field::Name), None);
    }

    #[test]
    fn set_errors_replaces_wholesale() {
        let mut state = with_errors();

        state.set_errors(
            [(Field::Message, ValidationError::TooShort { min: 10 })]
                .into_iter()
                .collect(),
        );

        assert_eq!(state.errors().len(), 1);
        assert!(state.errors().contains(Field::Message));
    }

    #[test]
    fn reset_empties_fields_and_errors() {
        let mut state = with_errors();
        state.set_field(Field::Message, "Hallo zusammen");

        state.reset();

        assert!(state.fields().is_empty());
        assert!(state.errors().is_empty());
    }

    #[test]
    fn local_handle_detaches_when_owner_drops() {
        let form = LocalForm::new();
        let handle = form.handle();
        form.set_field(Field::Name, "Ana");

        assert_eq!(
            handle.with_state(|s| s.field(Field::Name).to_owned()),
            Some("Ana".to_owned())
        );

        drop(form);

        assert_eq!(handle.with_state(|s| s.status().clone()), None);
        assert_eq!(handle.update_state(|s| s.reset()), None);
    }

    #[test]
    fn failed_status_accepts_submit_again() {
        let failed = SubmissionStatus::Failed {
            reason: "offline".into(),
        };
        assert!(failed.accepts_submit());
        assert_eq!(failed.failure(), Some("offline"));
        assert!(!SubmissionStatus::Submitting.accepts_submit());
        assert!(!SubmissionStatus::Submitted.accepts_submit());
    }
}
