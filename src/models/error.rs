use thiserror::Error;

#[derive(Error, Debug)]
pub enum AirdropCheckError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("{service} unavailable: {message}")]
    UpstreamUnavailable { service: String, message: String },

    #[error("No profile found for identifier {0}")]
    ProfileNotFound(u64),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl AirdropCheckError {
    pub fn upstream(service: &str, message: impl Into<String>) -> Self {
        Self::UpstreamUnavailable {
            service: service.to_string(),
            message: message.into(),
        }
    }

    /// Errors the caller can fix by changing the request.
    pub fn is_user_error(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    /// Message safe to show the caller. Upstream details stay in the logs.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidInput(message) => message.clone(),
            _ => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }
}

pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to fetch data. Please try again.";

pub type Result<T> = std::result::Result<T, AirdropCheckError>;
