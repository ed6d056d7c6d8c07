//! Submission state machine, kept free of DOM types so it can be driven by
//! fakes in tests.

use crate::components::notification::Severity;
use crate::config::{GENERIC_FAILURE_MESSAGE, SUBMIT_BUSY_LABEL};
use crate::contact::error::SubmitError;
use crate::contact::response::FormSubmissionResult;
use log::{debug, info, warn};
use std::cell::Cell;
use std::future::Future;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionPhase {
    Idle,
    Submitting,
    Succeeded,
}

/// How a finished submission was reconciled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settled {
    Accepted,
    Rejected,
    Unreachable,
}

/// The submit button, as far as the flow is concerned.
pub trait SubmitControl {
    fn label(&self) -> String;
    fn show_busy(&self, label: &str);
    fn restore(&self, label: &str);
}

/// The parts of the form the outcome is written to.
pub trait FormSurface {
    fn show_success(&self);
    fn mark_invalid(&self, field: &str);
    fn notify(&self, message: &str, severity: Severity);
}

#[derive(Debug)]
pub struct SubmissionState {
    phase: Cell<SubmissionPhase>,
}

impl Default for SubmissionState {
    fn default() -> Self {
        Self {
            phase: Cell::new(SubmissionPhase::Idle),
        }
    }
}

impl SubmissionState {
    pub fn phase(&self) -> SubmissionPhase {
        self.phase.get()
    }

    /// Puts the control into its busy state. Returns `None` while another
    /// submission is in flight or after the form was accepted.
    pub fn begin<'a, C: SubmitControl>(&'a self, control: &'a C) -> Option<BusyGuard<'a, C>> {
        if self.phase.get() != SubmissionPhase::Idle {
            return None;
        }
        self.phase.set(SubmissionPhase::Submitting);
        let original = control.label();
        control.show_busy(SUBMIT_BUSY_LABEL);
        Some(BusyGuard {
            control,
            original,
            state: self,
        })
    }
}

/// Restores the submit control when dropped, including during unwinding.
pub struct BusyGuard<'a, C: SubmitControl> {
    control: &'a C,
    original: String,
    state: &'a SubmissionState,
}

impl<C: SubmitControl> Drop for BusyGuard<'_, C> {
    fn drop(&mut self) {
        self.control.restore(&self.original);
        if self.state.phase.get() == SubmissionPhase::Submitting {
            self.state.phase.set(SubmissionPhase::Idle);
        }
    }
}

/// Writes an outcome to the form. Success is terminal for the state.
pub fn reconcile<S: FormSurface>(
    outcome: Result<FormSubmissionResult, SubmitError>,
    surface: &S,
    state: &SubmissionState,
) -> Settled {
    match outcome {
        Ok(FormSubmissionResult::Success { message }) => {
            info!("Contact form accepted: {}", message.as_deref().unwrap_or("-"));
            state.phase.set(SubmissionPhase::Succeeded);
            surface.show_success();
            Settled::Accepted
        }
        Ok(FormSubmissionResult::ValidationFailure(errors)) => {
            debug!("Contact form rejected: {:?}", errors);
            for field in errors.field_names() {
                surface.mark_invalid(field);
            }
            surface.notify(&errors.summary(), Severity::Error);
            Settled::Rejected
        }
        Err(e) => {
            warn!("Contact form submission failed: {}", e);
            surface.notify(GENERIC_FAILURE_MESSAGE, Severity::Error);
            Settled::Unreachable
        }
    }
}

/// Runs one submission end to end. Returns `None` when the call was ignored
/// because the form is busy or already accepted.
pub async fn run<C, S, F, Fut>(
    state: &SubmissionState,
    control: &C,
    surface: &S,
    send: F,
) -> Option<Settled>
where
    C: SubmitControl,
    S: FormSurface,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<FormSubmissionResult, SubmitError>>,
{
    let Some(busy) = state.begin(control) else {
        debug!("Submission ignored in phase {:?}", state.phase());
        return None;
    };
    let outcome = send().await;
    let settled = reconcile(outcome, surface, state);
    drop(busy);
    Some(settled)
}
