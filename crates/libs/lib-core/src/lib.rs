//! # Core Library
//!
//! View-state model of the coaching page: configuration, errors, capability
//! traits, the controller that owns the state, and the render models derived
//! from it.
//!
//! ```text
//! user action ──► CoachingController ──► WalletCapability / ContractClient
//!                        │                          │
//!                        ▼                          │ (async, settles later)
//!                    ViewState ◄────────────────────┘
//!                        │
//!                        ▼
//!                 render::render_page ──► components
//! ```

pub mod config;
pub mod contract;
pub mod controller;
pub mod error;
pub mod render;
pub mod service;
pub mod state;

// Re-export commonly used types
pub use config::{core_config, init_config, ContractConfig};
pub use controller::CoachingController;
pub use error::{CoachingError, ContractError, ErrorKind, Result, WalletError};
pub use service::{ContractClient, LogNotifier, Notice, NoticeLevel, Notifier, WalletCapability};
pub use state::{ConnectionState, LoadPhase, OperationKind, ViewState};
