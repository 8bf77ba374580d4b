// src/config.rs
use crate::controller::ResubmitPolicy;
use crate::error::SignupError;
use crate::models::DEFAULT_SIGNUP_ENDPOINT;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    pub endpoint: String,
    pub resubmit_policy: ResubmitPolicy,
}

impl Config {
    pub fn from_env() -> Result<Self, SignupError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<L>(lookup: L) -> Result<Self, SignupError>
    where
        L: Fn(&str) -> Option<String>,
    {
        let guard = lookup("SIGNUP_GUARD_RESUBMIT").unwrap_or_else(|| "false".to_string());
        let resubmit_policy = match guard.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" => ResubmitPolicy::GuardInFlight,
            "false" | "0" | "no" | "" => ResubmitPolicy::Allow,
            other => {
                return Err(SignupError::Config(format!(
                    "SIGNUP_GUARD_RESUBMIT must be true or false, got {:?}",
                    other
                )))
            }
        };

        Ok(Self {
            base_url: lookup("SIGNUP_BASE_URL")
                .unwrap_or_else(|| "http://127.0.0.1:8000".to_string()),
            endpoint: lookup("SIGNUP_ENDPOINT")
                .unwrap_or_else(|| DEFAULT_SIGNUP_ENDPOINT.to_string()),
            resubmit_policy,
        })
    }
}
