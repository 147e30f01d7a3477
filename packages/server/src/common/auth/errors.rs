use thiserror::Error;

/// Authorization errors for the Surplus Share platform
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Authentication required")]
    AuthenticationRequired,

    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("Only {0} accounts can do this")]
    WrongRole(&'static str),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),
}
