// src/lib.rs
//! Newsletter signup form: submits first name, last name and email to
//! `/api/signup` and shows a success popup when the server accepts it.
pub mod client;
pub mod config;
pub mod controller;
pub mod dom;
pub mod error;
pub mod models;
pub mod templates;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use client::{HttpSignupClient, SignupClient};
pub use config::Config;
pub use controller::{ResubmitPolicy, SignupFormController};
pub use error::SignupError;
pub use models::{SignupRequest, SubmitOutcome};
