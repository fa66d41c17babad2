//! Validation session and submission guard.
//!
//! A [`ValidationSession`] owns the current error map for one form. Its
//! [`handle_submit`](ValidationSession::handle_submit) produces a guard that
//! cancels the event's default action, clears stale errors, validates, and
//! branches into the success or error callback.

pub mod event;
pub mod session;

pub use event::{noop, FormSubmission, SubmitEvent};
pub use session::{SessionState, SubmitOutcome, ValidationSession};
