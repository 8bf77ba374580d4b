// src/models.rs
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

pub const DEFAULT_SIGNUP_ENDPOINT: &str = "/api/signup";

// Request/Response types

/// Body of `POST /api/signup`. Field names go over the wire capitalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SignupRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl SignupRequest {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
        }
    }
}

/// What a settled submit did to the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// 2xx response, the success popup is now visible.
    Confirmed(StatusCode),
    /// Any other status. Nothing on the page changes.
    Rejected(StatusCode),
    /// A submit was already in flight and the guard is on.
    Skipped,
}

impl SubmitOutcome {
    pub fn from_status(status: StatusCode) -> Self {
        if status.is_success() {
            SubmitOutcome::Confirmed(status)
        } else {
            SubmitOutcome::Rejected(status)
        }
    }

    pub fn is_confirmed(&self) -> bool {
        matches!(self, SubmitOutcome::Confirmed(_))
    }
}
