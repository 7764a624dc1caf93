use super::{
    contact_form::{ContactFormState, FormField, FormValidation},
    handoff::HandoffPayload,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionOutcome {
    #[default]
    Idle,
    Submitting,
    Succeeded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BeginSubmissionError {
    /// A submission is already running or waiting for reset.
    NotIdle(SubmissionOutcome),
    /// At least one field failed; errors are stored on the form.
    Invalid(FormValidation),
}

/// Contact form fields plus the submission lifecycle around them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactForm {
    state: ContactFormState,
    outcome: SubmissionOutcome,
}

impl ContactForm {
    pub fn state(&self) -> &ContactFormState {
        &self.state
    }

    pub fn outcome(&self) -> SubmissionOutcome {
        self.outcome
    }

    pub fn update_field(&mut self, field: FormField, value: impl Into<String>) {
        self.state.update_field(field, value);
    }

    /// Validates and, when every field passes, moves to `Submitting` and
    /// returns the payload built from the current values.
    pub fn begin_submission(
        &mut self,
        firm_name: &str,
    ) -> Result<HandoffPayload, BeginSubmissionError> {
        if self.outcome != SubmissionOutcome::Idle {
            return Err(BeginSubmissionError::NotIdle(self.outcome));
        }

        let validation = self.state.validate();
        if !validation.is_valid() {
            return Err(BeginSubmissionError::Invalid(validation));
        }

        self.outcome = SubmissionOutcome::Submitting;
        Ok(HandoffPayload::from_form(firm_name, &self.state))
    }

    /// Finishes a running submission: clears all fields and errors.
    pub fn complete_submission(&mut self) {
        if self.outcome == SubmissionOutcome::Submitting {
            self.state.clear();
            self.outcome = SubmissionOutcome::Succeeded;
        }
    }

    pub fn reset_after_success(&mut self) {
        if self.outcome == SubmissionOutcome::Succeeded {
            self.outcome = SubmissionOutcome::Idle;
        }
    }
}
