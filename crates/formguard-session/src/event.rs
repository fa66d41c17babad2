/// A "submission attempted" occurrence with a cancelable default action.
pub trait SubmitEvent {
    fn prevent_default(&mut self);

    fn is_default_prevented(&self) -> bool;
}

/// Plain submission event for hosts without their own event type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSubmission {
    form: String,
    default_prevented: bool,
}

impl FormSubmission {
    pub fn new(form: impl Into<String>) -> Self {
        Self {
            form: form.into(),
            default_prevented: false,
        }
    }

    /// Name of the submitted form.
    pub fn form(&self) -> &str {
        &self.form
    }
}

impl SubmitEvent for FormSubmission {
    fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Callback that ignores the event. Default `on_error`.
pub fn noop<E>(_event: &mut E) {}
