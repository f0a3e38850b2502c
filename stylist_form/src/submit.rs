//! Validate-then-submit sequencing.
//!
//! ```text
//! Idle ──submit (valid)──▶ Submitting ──ok──▶ Submitted ──reset_after_success──▶ Idle
//!   ▲                          │
//!   └──── submit (valid) ──── Failed ◀──err──┘
//! ```
//!
//! An invalid submit never changes the status; it only publishes the field
//! errors. The submit is split in two so the synchronous half (validation and
//! the switch to `Submitting`) happens before the caller hands the remote call
//! to an executor.

use std::future::Future;
use std::time::Duration;

use futures_timer::Delay;
use tracing::{debug, error, info};

use crate::error::{SubmissionError, SubmitRejected};
use crate::fields::{Field, FormErrors, FormFields};
use crate::state::{FormHandle, FormState, SubmissionStatus};
use crate::validate::validate;

/// Delay of the simulated remote call when none is configured.
pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(1000);

/// The remote side of a contact request.
pub trait Submitter {
    fn submit(&self, fields: FormFields) -> impl Future<Output = Result<(), SubmissionError>>;
}

/// Stand-in for a real endpoint: waits, logs the payload, succeeds.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedSubmitter {
    delay: Duration,
}

impl SimulatedSubmitter {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self::new(DEFAULT_SUBMIT_DELAY)
    }
}

impl Submitter for SimulatedSubmitter {
    async fn submit(&self, fields: FormFields) -> Result<(), SubmissionError> {
        let payload = serde_json::to_string(&fields)?;
        Delay::new(self.delay).await;
        info!(%payload, "contact request submitted (simulated)");
        Ok(())
    }
}

/// Result of a submission that reached the submitter.
#[derive(Debug)]
pub enum SubmitOutcome {
    Submitted,
    Failed(SubmissionError),
    /// The form went away while the call was in flight; nothing was changed.
    Detached,
}

/// Drives one form instance through its submit lifecycle.
#[derive(Debug, Clone)]
pub struct SubmissionCoordinator<H, S> {
    handle: H,
    submitter: S,
}

impl<H, S> SubmissionCoordinator<H, S>
where
    H: FormHandle + Clone,
    S: Submitter + Clone,
{
    pub fn new(handle: H, submitter: S) -> Self {
        Self { handle, submitter }
    }

    /// User edit of one field. Returns `false` if the form is gone.
    pub fn set_field(&self, field: Field, value: String) -> bool {
        self.handle
            .update_state(|state| state.set_field(field, value))
            .is_some()
    }

    /// Synchronous half of a submit.
    ///
    /// Validates the current fields. On failure the errors are published and
    /// the status stays where it was. On success the status becomes
    /// `Submitting` and the returned [`PendingSubmission`] carries a snapshot
    /// of the fields.
    pub fn request_submit(&self) -> Result<PendingSubmission<H, S>, SubmitRejected> {
        match self.begin() {
            Ok(fields) => {
                info!("contact request accepted, submitting");
                Ok(PendingSubmission {
                    handle: self.handle.clone(),
                    submitter: self.submitter.clone(),
                    fields,
                })
            }
            Err(rejected) => {
                debug!(reason = %rejected, "contact submit refused");
                Err(rejected)
            }
        }
    }

    fn begin(&self) -> Result<FormFields, SubmitRejected> {
        // Refusals that change nothing are decided on a read, so a reactive
        // host is not notified for them.
        let status = self
            .handle
            .with_state(|state| state.status().clone())
            .ok_or(SubmitRejected::Detached)?;
        match status {
            SubmissionStatus::Submitting => return Err(SubmitRejected::Busy),
            SubmissionStatus::Submitted => return Err(SubmitRejected::AlreadySubmitted),
            SubmissionStatus::Idle | SubmissionStatus::Failed { .. } => {}
        }

        self.handle
            .update_state(validate_and_start)
            .unwrap_or(Err(SubmitRejected::Detached))
    }

    /// Both halves of a submit, awaited in place.
    pub async fn submit(&self) -> Result<SubmitOutcome, SubmitRejected> {
        Ok(self.request_submit()?.complete().await)
    }

    /// "Send another request": only from `Submitted`. Clears the form and
    /// returns to `Idle`.
    pub fn reset_after_success(&self) -> Result<(), SubmitRejected> {
        let submitted = self
            .handle
            .with_state(|state| state.status().is_submitted())
            .ok_or(SubmitRejected::Detached)?;
        if !submitted {
            return Err(SubmitRejected::NotSubmitted);
        }

        self.handle
            .update_state(|state| {
                state.reset();
                state.set_status(SubmissionStatus::Idle);
            })
            .ok_or(SubmitRejected::Detached)
    }
}

fn validate_and_start(state: &mut FormState) -> Result<FormFields, SubmitRejected> {
    let errors = validate(state.fields());
    if !errors.is_empty() {
        state.set_errors(errors.clone());
        return Err(SubmitRejected::Invalid(errors));
    }

    state.set_errors(FormErrors::new());
    state.set_status(SubmissionStatus::Submitting);
    Ok(state.fields().clone())
}

/// A submit that passed validation and is waiting on the submitter.
#[must_use = "the form stays in Submitting until the submission is completed"]
pub struct PendingSubmission<H, S> {
    handle: H,
    submitter: S,
    fields: FormFields,
}

impl<H, S> PendingSubmission<H, S>
where
    H: FormHandle,
    S: Submitter,
{
    /// The fields as they were when the submit was accepted.
    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    /// Awaits the submitter and applies the result, unless the form is gone.
    pub async fn complete(self) -> SubmitOutcome {
        let result = self.submitter.submit(self.fields).await;

        if let Err(err) = &result {
            error!(error = %err, "contact request failed");
        }

        let status = match &result {
            Ok(()) => SubmissionStatus::Submitted,
            Err(err) => SubmissionStatus::Failed {
                reason: err.to_string(),
            },
        };

        if self
            .handle
            .update_state(|state| state.set_status(status))
            .is_none()
        {
            debug!("form unmounted before the submission completed, result dropped");
            return SubmitOutcome::Detached;
        }

        match result {
            Ok(()) => {
                info!("contact request submitted");
                SubmitOutcome::Submitted
            }
            Err(err) => SubmitOutcome::Failed(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::LocalForm;
    use pretty_assertions::assert_eq;

    fn filled(name: &str, email: &str, message: &str) -> LocalForm {
        let form = LocalForm::new();
        form.set_field(Field::Name, name);
        form.set_field(Field::Email, email);
        form.set_field(Field::Message, message);
        form
    }

    #[tokio::test]
    async fn simulated_submitter_completes() {
        let form = filled("Al", "a@b.co", "1234567890");
        let coordinator =
            SubmissionCoordinator::new(form.handle(), SimulatedSubmitter::new(Duration::ZERO));

        let outcome = coordinator.submit().await.expect("valid form is accepted");

        assert!(matches!(outcome, SubmitOutcome::Submitted));
        assert_eq!(form.snapshot().status(), &SubmissionStatus::Submitted);
    }

    #[test]
    fn invalid_submit_publishes_errors_and_stays_idle() {
        let form = filled("", "bad", "short");
        let coordinator = SubmissionCoordinator::new(form.handle(), SimulatedSubmitter::default());

        let rejected = coordinator.request_submit().err();

        let state = form.snapshot();
        assert_eq!(rejected, Some(SubmitRejected::Invalid(state.errors().clone())));
        assert_eq!(state.errors().len(), 3);
        assert_eq!(state.status(), &SubmissionStatus::Idle);
    }

    #[test]
    fn reset_is_refused_before_success() {
        let form = filled("Ana", "ana@site.org", "Ich möchte Partner werden.");
        let coordinator = SubmissionCoordinator::new(form.handle(), SimulatedSubmitter::default());

        assert_eq!(
            coordinator.reset_after_success(),
            Err(SubmitRejected::NotSubmitted)
        );
        assert_eq!(form.snapshot().field(Field::Name), "Ana");
    }

    #[test]
    fn detached_form_refuses_everything() {
        let form = LocalForm::new();
        let coordinator = SubmissionCoordinator::new(form.handle(), SimulatedSubmitter::default());
        drop(form);

        assert_eq!(coordinator.request_submit().err(), Some(SubmitRejected::Detached));
        assert_eq!(coordinator.reset_after_success(), Err(SubmitRejected::Detached));
        assert!(!coordinator.set_field(Field::Name, "Ana".into()));
    }
}
