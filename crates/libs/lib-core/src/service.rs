//! # Capability Traits
//!
//! The view model reaches the outside world only through these traits, so the
//! browser bindings and the test fakes are interchangeable.
//!
//! Futures are `?Send`: wallet calls resolve JavaScript promises, which cannot
//! leave the browser thread. Implementors themselves must be `Send + Sync` so
//! the controller can be shared through reactive context.

use async_trait::async_trait;
use shared::dto::coaching::{ClientStats, SessionRecord};

use crate::error::{ContractError, WalletError};

/// Wallet extension that custodies the user's identity.
#[async_trait(?Send)]
pub trait WalletCapability: Send + Sync {
    /// Whether the extension is installed and reachable.
    async fn is_available(&self) -> bool;

    /// Ask the user to authorize this site.
    async fn request_authorization(&self) -> Result<(), WalletError>;

    /// Read the address of the authorized account.
    async fn get_address(&self) -> Result<String, WalletError>;
}

/// Read access to the coaching contract.
#[async_trait(?Send)]
pub trait ContractClient: Send + Sync {
    async fn get_session(&self, id: u64) -> Result<SessionRecord, ContractError>;

    async fn get_client_stats(&self, address: &str) -> Result<ClientStats, ContractError>;
}

/// Severity of a user notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// Message shown to the user after a handler settles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// Synchronous user-facing notification sink.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Notifier that only writes to the trace log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Info => tracing::info!("{}", notice.message),
            NoticeLevel::Error => tracing::warn!("{}", notice.message),
        }
    }
}
