//! Contact submission state machine.
//!
//! Defines a pure state transition function for the contact form.

use serde::{Deserialize, Serialize};

use crate::contact::validation::validate;
use crate::contact::{ContactMessage, DeliveryFailure, FieldErrors, FormField, FormFields};

/// Submission status of one contact form.
///
/// Field errors only exist while idle and a delivery failure only while in
/// `Error`, so the two never mix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SubmissionState {
    /// Accepting input; carries the errors of the last rejected attempt.
    Idle { errors: FieldErrors },
    /// One delivery is in flight.
    Submitting,
    /// Delivered; fields have been cleared.
    Success,
    /// Delivery failed; fields are kept for a retry.
    Error { failure: DeliveryFailure },
}

impl SubmissionState {
    pub fn idle() -> Self {
        SubmissionState::Idle {
            errors: FieldErrors::new(),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, SubmissionState::Idle { .. })
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }

    /// `Success` and `Error` are shown for a limited time.
    pub fn is_notice(&self) -> bool {
        matches!(self, SubmissionState::Success | SubmissionState::Error { .. })
    }
}

impl Default for SubmissionState {
    fn default() -> Self {
        Self::idle()
    }
}

/// Events that drive the submission flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionEvent {
    /// User pressed send with the given field values.
    Submit { fields: FormFields },
    /// User edited a field.
    FieldEdited { field: FormField },
    /// Delivery collaborator resolved.
    DeliverySucceeded,
    /// Delivery collaborator failed, rejected or timed out.
    DeliveryFailed { failure: DeliveryFailure },
    /// User dismissed the success/error notice.
    Dismiss,
    /// Notice display duration ran out.
    DisplayElapsed,
}

/// Side-effects produced by state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionAction {
    /// Hand the message to the delivery collaborator.
    Deliver { message: ContactMessage },
    /// Reset the held form fields.
    ClearFields,
    /// Arm the notice display timer.
    StartDisplayTimer,
    /// Disarm the notice display timer.
    StopDisplayTimer,
}

/// Pure submission state machine: no side-effects.
pub struct SubmissionStateMachine;

impl SubmissionStateMachine {
    pub fn transition(
        state: SubmissionState,
        event: SubmissionEvent,
    ) -> (SubmissionState, Vec<SubmissionAction>) {
        match (state, event) {
            (SubmissionState::Idle { .. }, SubmissionEvent::Submit { fields }) => {
                Self::gate_submit(&fields, Vec::new())
            }
            // Retry straight from the error notice: it closes first.
            (SubmissionState::Error { .. }, SubmissionEvent::Submit { fields }) => {
                Self::gate_submit(&fields, vec![SubmissionAction::StopDisplayTimer])
            }
            (SubmissionState::Idle { mut errors }, SubmissionEvent::FieldEdited { field }) => {
                errors.remove(field);
                (SubmissionState::Idle { errors }, Vec::new())
            }
            (SubmissionState::Submitting, SubmissionEvent::DeliverySucceeded) => (
                SubmissionState::Success,
                vec![
                    SubmissionAction::ClearFields,
                    SubmissionAction::StartDisplayTimer,
                ],
            ),
            (SubmissionState::Submitting, SubmissionEvent::DeliveryFailed { failure }) => (
                SubmissionState::Error { failure },
                vec![SubmissionAction::StartDisplayTimer],
            ),
            (state, SubmissionEvent::Dismiss) if state.is_notice() => (
                SubmissionState::idle(),
                vec![SubmissionAction::StopDisplayTimer],
            ),
            (state, SubmissionEvent::DisplayElapsed) if state.is_notice() => {
                (SubmissionState::idle(), Vec::new())
            }
            (state, _event) => (state, Vec::new()),
        }
    }

    /// Validation gate in front of `Submitting`.
    fn gate_submit(
        fields: &FormFields,
        mut actions: Vec<SubmissionAction>,
    ) -> (SubmissionState, Vec<SubmissionAction>) {
        let errors = validate(fields);
        if !errors.is_empty() {
            return (SubmissionState::Idle { errors }, actions);
        }
        actions.push(SubmissionAction::Deliver {
            message: ContactMessage::from_validated(fields),
        });
        (SubmissionState::Submitting, actions)
    }
}
