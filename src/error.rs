// src/error.rs

#[derive(Debug)]
pub enum SignupError {
    /// The request never produced a response (connection refused, DNS, CORS...)
    Network(Box<dyn std::error::Error + Send + Sync>),
    Encode(serde_json::Error),
    InvalidUrl(url::ParseError),
    Config(String),
}

impl std::fmt::Display for SignupError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            SignupError::Network(e) => write!(f, "Signup request failed: {}", e),
            SignupError::Encode(e) => write!(f, "Failed to encode signup request: {}", e),
            SignupError::InvalidUrl(e) => write!(f, "Invalid signup URL: {}", e),
            SignupError::Config(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for SignupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SignupError::Network(e) => Some(e.as_ref()),
            SignupError::Encode(e) => Some(e),
            SignupError::InvalidUrl(e) => Some(e),
            SignupError::Config(_) => None,
        }
    }
}

impl From<reqwest::Error> for SignupError {
    fn from(e: reqwest::Error) -> Self {
        SignupError::Network(Box::new(e))
    }
}

impl From<serde_json::Error> for SignupError {
    fn from(e: serde_json::Error) -> Self {
        SignupError::Encode(e)
    }
}

impl From<url::ParseError> for SignupError {
    fn from(e: url::ParseError) -> Self {
        SignupError::InvalidUrl(e)
    }
}
