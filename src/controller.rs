// src/controller.rs
//! Bridges one form submit to one signup request and mirrors the result on
//! the success popup.
use crate::client::SignupClient;
use crate::dom::{Panel, SubmitEvent, TextField};
use crate::error::SignupError;
use crate::models::{SignupRequest, SubmitOutcome};
use std::cell::Cell;

/// What happens when the form is submitted again before the previous
/// request settled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResubmitPolicy {
    /// Every submit sends a request, even with one already in flight.
    #[default]
    Allow,
    /// Submits are dropped while a request is in flight.
    GuardInFlight,
}

pub struct SignupFormController<C, F, P> {
    client: C,
    first_name: F,
    last_name: F,
    email: F,
    popup: P,
    policy: ResubmitPolicy,
    in_flight: Cell<bool>,
}

impl<C, F, P> SignupFormController<C, F, P>
where
    C: SignupClient,
    F: TextField,
    P: Panel,
{
    pub fn new(client: C, first_name: F, last_name: F, email: F, popup: P) -> Self {
        Self {
            client,
            first_name,
            last_name,
            email,
            popup,
            policy: ResubmitPolicy::default(),
            in_flight: Cell::new(false),
        }
    }

    pub fn with_policy(mut self, policy: ResubmitPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> ResubmitPolicy {
        self.policy
    }

    pub fn popup(&self) -> &P {
        &self.popup
    }

    /// Handles a submit event end to end.
    ///
    /// A transport failure comes back as `Err` with the popup untouched;
    /// callers in the browser drop it so the page stays silent.
    pub async fn on_submit<E>(&self, event: &E) -> Result<SubmitOutcome, SignupError>
    where
        E: SubmitEvent + ?Sized,
    {
        match self.begin_submit(event) {
            Some(request) => self.finish_submit(request).await,
            None => Ok(SubmitOutcome::Skipped),
        }
    }

    /// Synchronous half of a submit: suppresses the default navigation and
    /// snapshots the three fields as they are right now.
    ///
    /// Returns `None` only under [`ResubmitPolicy::GuardInFlight`] while
    /// another request is pending.
    pub fn begin_submit<E>(&self, event: &E) -> Option<SignupRequest>
    where
        E: SubmitEvent + ?Sized,
    {
        event.prevent_default();

        if self.policy == ResubmitPolicy::GuardInFlight && self.in_flight.replace(true) {
            tracing::debug!("Signup already in flight, ignoring submit");
            return None;
        }

        Some(SignupRequest {
            first_name: self.first_name.current_value(),
            last_name: self.last_name.current_value(),
            email: self.email.current_value(),
        })
    }

    /// Asynchronous half of a submit: sends the request and shows the popup
    /// on a 2xx response.
    pub async fn finish_submit(
        &self,
        request: SignupRequest,
    ) -> Result<SubmitOutcome, SignupError> {
        let result = self.client.send(&request).await;
        self.in_flight.set(false);

        let status = result.map_err(|e| {
            tracing::debug!(error = %e, "Signup request failed");
            e
        })?;

        let outcome = SubmitOutcome::from_status(status);
        match outcome {
            SubmitOutcome::Confirmed(status) => {
                tracing::info!(%status, "Signup confirmed");
                self.popup.show();
            }
            SubmitOutcome::Rejected(status) => {
                tracing::debug!(%status, "Signup rejected");
            }
            SubmitOutcome::Skipped => {}
        }

        Ok(outcome)
    }

    pub fn on_close_popup(&self) {
        self.popup.hide();
    }
}
