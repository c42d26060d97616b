//! # Centralized Error Handling
//!
//! Error types for the coaching view model, following the `thiserror` pattern.
//!
//! ## Error Layers
//!
//! 1. **Capability errors** - raised by the external collaborators
//!    - [`WalletError`] from the wallet capability
//!    - [`ContractError`] from the contract client
//!
//! 2. **Handler errors** - [`CoachingError`], the taxonomy every handler reports
//!    - [`CapabilityUnavailable`](CoachingError::CapabilityUnavailable) - wallet extension missing
//!    - [`AuthorizationDenied`](CoachingError::AuthorizationDenied) - user refused access
//!    - [`ReadError`](CoachingError::ReadError) - address retrieval failed
//!    - [`Validation`](CoachingError::Validation) - empty or malformed input
//!    - [`NotConnected`](CoachingError::NotConnected) - stats requested before connecting
//!    - [`Fetch`](CoachingError::Fetch) - contract or network failure
//!
//! Capability errors convert into [`CoachingError`] with `?`.
//!
//! ## Usage Example
//!
//! ```rust
//! use lib_core::error::{CoachingError, ContractError, ErrorKind};
//!
//! let err: CoachingError = ContractError::NotFound(7).into();
//! assert_eq!(err.kind(), ErrorKind::Fetch);
//! assert_eq!(err.user_message(), "Error fetching data: session 7 not found");
//! ```

use thiserror::Error;

/// Convenience type alias for `Result<T, CoachingError>`.
pub type Result<T> = std::result::Result<T, CoachingError>;

/// Failures reported by the wallet capability.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WalletError {
    /// The wallet extension is not installed or not reachable.
    #[error("wallet extension is not available")]
    Unavailable,

    #[error("authorization denied: {0}")]
    AuthorizationDenied(String),

    #[error("failed to read address: {0}")]
    Read(String),
}

/// Failures reported by the contract client.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ContractError {
    #[error("session {0} not found")]
    NotFound(u64),

    #[error("network error: {0}")]
    Network(String),

    /// The contract rejected the call because of the stored state.
    #[error("invalid state: {0}")]
    InvalidState(String),
}

/// Error taxonomy surfaced by the view handlers.
///
/// Every variant is converted into a user notification at the handler
/// boundary; none of them are fatal.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoachingError {
    #[error("Wallet capability unavailable")]
    CapabilityUnavailable,

    #[error("Authorization denied: {0}")]
    AuthorizationDenied(String),

    #[error("Read error: {0}")]
    ReadError(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Wallet not connected")]
    NotConnected,

    #[error("Fetch error: {0}")]
    Fetch(String),
}

/// Discriminant of [`CoachingError`], convenient for assertions and metrics labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    CapabilityUnavailable,
    AuthorizationDenied,
    ReadError,
    Validation,
    NotConnected,
    Fetch,
}

impl CoachingError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoachingError::CapabilityUnavailable => ErrorKind::CapabilityUnavailable,
            CoachingError::AuthorizationDenied(_) => ErrorKind::AuthorizationDenied,
            CoachingError::ReadError(_) => ErrorKind::ReadError,
            CoachingError::Validation(_) => ErrorKind::Validation,
            CoachingError::NotConnected => ErrorKind::NotConnected,
            CoachingError::Fetch(_) => ErrorKind::Fetch,
        }
    }

    /// Get the message shown to the user.
    pub fn user_message(&self) -> String {
        match self {
            CoachingError::CapabilityUnavailable => {
                "Please install the Freighter extension".to_string()
            }
            CoachingError::AuthorizationDenied(msg) => {
                format!("Error connecting with Freighter: {}", msg)
            }
            CoachingError::ReadError(msg) => format!("Error connecting with Freighter: {}", msg),
            CoachingError::Validation(msg) => msg.clone(),
            CoachingError::NotConnected => "Connect your wallet first".to_string(),
            CoachingError::Fetch(msg) => format!("Error fetching data: {}", msg),
        }
    }
}

impl From<WalletError> for CoachingError {
    fn from(err: WalletError) -> Self {
        match err {
            WalletError::Unavailable => CoachingError::CapabilityUnavailable,
            WalletError::AuthorizationDenied(msg) => CoachingError::AuthorizationDenied(msg),
            WalletError::Read(msg) => CoachingError::ReadError(msg),
        }
    }
}

impl From<ContractError> for CoachingError {
    fn from(err: ContractError) -> Self {
        CoachingError::Fetch(err.to_string())
    }
}
