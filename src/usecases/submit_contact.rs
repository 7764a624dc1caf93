//! Use case for handing a validated contact form off to the messaging app.

use std::time::Duration;

use crate::{
    domain::{
        contact_form::FormValidation,
        submission::{BeginSubmissionError, ContactForm, SubmissionOutcome},
    },
    infra::{
        config::{FirmConfig, HandoffConfig},
        contracts::{ExternalOpener, Pause},
    },
};

const HANDOFF_OPEN_FAILED: &str = "HANDOFF_OPEN_FAILED";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitContactReport {
    /// The fully built hand-off link.
    pub link: String,
    /// False when the host could not open the link; the submission still counts.
    pub opened: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitContactError {
    /// Validation failed; field errors are stored on the form.
    Invalid(FormValidation),
    /// A previous submission has not been reset yet.
    NotIdle(SubmissionOutcome),
}

/// Submits the form.
///
/// On success the form goes `Idle -> Submitting -> Succeeded`: the payload is
/// built from the current values, the flow waits `submit_delay_ms`, the link is
/// handed to `opener`, and the fields are cleared. Opening is fire-and-forget;
/// its failure is logged and reported in the returned report only.
pub fn submit_contact(
    form: &mut ContactForm,
    firm: &FirmConfig,
    handoff: &HandoffConfig,
    opener: &dyn ExternalOpener,
    pause: &dyn Pause,
) -> Result<SubmitContactReport, SubmitContactError> {
    let payload = form
        .begin_submission(&firm.name)
        .map_err(|error| match error {
            BeginSubmissionError::Invalid(validation) => {
                tracing::debug!(
                    invalid_fields = validation.errors.len(),
                    "contact form rejected by validation"
                );
                SubmitContactError::Invalid(validation)
            }
            BeginSubmissionError::NotIdle(outcome) => SubmitContactError::NotIdle(outcome),
        })?;

    let link = payload.link(&handoff.base_url);

    pause.pause(Duration::from_millis(handoff.submit_delay_ms));

    let opened = match opener.open(&link) {
        Ok(()) => true,
        Err(error) => {
            tracing::warn!(
                code = HANDOFF_OPEN_FAILED,
                error = %error,
                "messaging hand-off link could not be opened"
            );
            false
        }
    };

    form.complete_submission();
    tracing::info!(opened, "contact form handed off");

    Ok(SubmitContactReport { link, opened })
}
