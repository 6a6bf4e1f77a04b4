//! Backend client errors.

use thiserror::Error;

/// Login failure
#[derive(Error, Debug)]
pub enum AuthError {
    /// Backend answered with a non-success status
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Transport or response decoding failure
    #[error("Network failure: {0}")]
    NetworkFailure(#[from] reqwest::Error),
}

/// Failure fetching authenticated data
#[derive(Error, Debug)]
pub enum FetchError {
    /// Missing, expired or rejected token (401 / 403)
    #[error("Session rejected by backend")]
    Unauthorized,

    #[error("Backend returned status {0}")]
    Status(u16),

    #[error("Network failure: {0}")]
    Network(#[from] reqwest::Error),
}

impl FetchError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, FetchError::Unauthorized)
    }
}

/// Public site lookup failure
#[derive(Error, Debug)]
pub enum SiteError {
    /// Backend answered with a non-success status
    #[error("Site not found")]
    NotFound,

    #[error("Network failure: {0}")]
    NetworkFailure(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_rejected_sessions_are_unauthorized() {
        assert!(FetchError::Unauthorized.is_unauthorized());
        assert!(!FetchError::Status(403).is_unauthorized());
        assert!(!FetchError::Status(500).is_unauthorized());
    }
}
