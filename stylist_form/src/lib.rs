//! # stylist-form
//!
//! Validation and submission state machine behind the "Partner werden"
//! contact form of the Mein Stylist landing site.
//!
//! The crate knows nothing about the DOM. The site keeps a [`FormState`] in a
//! reactive signal and reaches it through a [`FormHandle`]; tests and other
//! non-reactive hosts use [`LocalForm`].
//!
//! ## Quick Start
//!
//! ```rust
//! use std::time::Duration;
//! use stylist_form::{Field, LocalForm, SimulatedSubmitter, SubmissionCoordinator};
//!
//! let form = LocalForm::new();
//! let coordinator =
//!     SubmissionCoordinator::new(form.handle(), SimulatedSubmitter::new(Duration::ZERO));
//!
//! coordinator.set_field(Field::Name, "Al".into());
//! coordinator.set_field(Field::Email, "a@b.co".into());
//!
//! // The message is missing: the submit is refused and the error published.
//! assert!(coordinator.request_submit().is_err());
//! assert!(form.snapshot().errors().contains(Field::Message));
//! ```
//!
//! ## Modules
//!
//! - [`validate`] - pure field rules
//! - [`state`] - the form state store and the handle seam
//! - [`submit`] - the coordinator and the injectable submitter
//! - [`copy`] - per-locale labels and messages
//! - [`config`] - build-time site configuration
//! - [`error`] - error types

pub mod config;
pub mod copy;
pub mod error;
pub mod fields;
pub mod state;
pub mod submit;
pub mod validate;

pub use config::SiteConfig;
pub use copy::{FieldCopy, FormCopy, Locale};
pub use error::{ConfigError, SubmissionError, SubmitRejected, ValidationError};
pub use fields::{Field, FormErrors, FormFields};
pub use state::{FormHandle, FormState, LocalForm, LocalHandle, SubmissionStatus};
pub use submit::{
    PendingSubmission, SimulatedSubmitter, SubmissionCoordinator, SubmitOutcome, Submitter,
};
pub use validate::{validate, validate_field};
