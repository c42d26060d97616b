//! # Coaching Controller
//!
//! Owns the [`ViewState`] and the three user-triggered handlers:
//!
//! - [`CoachingController::connect`] - authorize the wallet and store the identity
//! - [`CoachingController::fetch_session`] - look up one session record
//! - [`CoachingController::fetch_stats`] - load statistics for the connected identity
//!
//! ## State Management Pattern
//!
//! State lives in `Arc<RwLock<ViewState>>`. Locks are taken for the duration
//! of a single mutation and never held across an `.await`, so transitions are
//! applied in the order their fetches complete.
//!
//! ## Error Propagation
//!
//! Every failure is turned into a [`Notice`] at the handler boundary and
//! logged. The handler still returns the error so callers can compose or
//! assert on it; the UI discards it.
//!
//! ## Usage Example
//!
//! ```rust
//! use std::sync::Arc;
//! use lib_core::contract::DemoContractClient;
//! use lib_core::controller::CoachingController;
//! use lib_core::service::{LogNotifier, WalletCapability};
//! use lib_core::error::WalletError;
//!
//! struct NoWallet;
//!
//! #[async_trait::async_trait(?Send)]
//! impl WalletCapability for NoWallet {
//!     async fn is_available(&self) -> bool { false }
//!     async fn request_authorization(&self) -> Result<(), WalletError> { Err(WalletError::Unavailable) }
//!     async fn get_address(&self) -> Result<String, WalletError> { Err(WalletError::Unavailable) }
//! }
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let controller = CoachingController::new(
//!     Arc::new(NoWallet),
//!     Arc::new(DemoContractClient::new()),
//!     Arc::new(LogNotifier),
//! );
//!
//! let record = controller.fetch_session("1").await.unwrap();
//! assert_eq!(record.id, 1);
//! assert!(controller.connect().await.is_err());
//! # });
//! ```

use std::sync::Arc;

use lib_utils::validation::parse_unsigned_id;
use parking_lot::RwLock;
use shared::dto::coaching::{ClientStats, SessionRecord};

use crate::error::{CoachingError, ErrorKind, Result};
use crate::service::{ContractClient, Notice, Notifier, WalletCapability};
use crate::state::{ConnectionState, OperationKind, ViewState};

/// Callback invoked with a snapshot after every state transition.
pub type StateObserver = Arc<dyn Fn(&ViewState) + Send + Sync>;

/// Label used in validation messages for the session identifier.
const SESSION_ID_FIELD: &str = "Session ID";

#[derive(Clone)]
pub struct CoachingController {
    state: Arc<RwLock<ViewState>>,
    wallet: Arc<dyn WalletCapability>,
    contract: Arc<dyn ContractClient>,
    notifier: Arc<dyn Notifier>,
    observer: Option<StateObserver>,
}

impl CoachingController {
    pub fn new(
        wallet: Arc<dyn WalletCapability>,
        contract: Arc<dyn ContractClient>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            state: Arc::new(RwLock::new(ViewState::new())),
            wallet,
            contract,
            notifier,
            observer: None,
        }
    }

    /// Register a callback that receives every new state.
    pub fn with_observer(mut self, observer: impl Fn(&ViewState) + Send + Sync + 'static) -> Self {
        self.observer = Some(Arc::new(observer));
        self
    }

    /// Clone of the current state.
    pub fn snapshot(&self) -> ViewState {
        self.state.read().clone()
    }

    /// Read the current state without cloning it.
    pub fn read<R>(&self, f: impl FnOnce(&ViewState) -> R) -> R {
        f(&self.state.read())
    }

    /// Record the identifier typed by the operator.
    pub fn set_session_query(&self, query: impl Into<String>) {
        let query = query.into();
        self.update(|state| state.session_query = query);
    }

    /// Connect the wallet capability.
    ///
    /// The flow is not guarded against re-entry: calling it while connected
    /// runs the whole authorization again.
    pub async fn connect(&self) -> Result<String> {
        match self.authorize().await {
            Ok(address) => {
                tracing::info!(address = %address, "Wallet connected");
                let stored = address.clone();
                self.update(|state| {
                    state.connection = ConnectionState::Connected { address: stored };
                });
                let prefix: String = address.chars().take(8).collect();
                self.notifier
                    .notify(Notice::info(format!("Connected: {}...", prefix)));
                Ok(address)
            }
            Err(err) => Err(self.report(err)),
        }
    }

    async fn authorize(&self) -> Result<String> {
        if !self.wallet.is_available().await {
            return Err(CoachingError::CapabilityUnavailable);
        }
        self.wallet.request_authorization().await?;
        let address = self.wallet.get_address().await?;
        Ok(address)
    }

    /// Look up a session by the identifier the operator typed.
    ///
    /// Empty, whitespace-only, or non-numeric input is rejected before any
    /// fetch. On failure the previously displayed record is kept.
    pub async fn fetch_session(&self, raw_id: &str) -> Result<SessionRecord> {
        let id = match parse_unsigned_id(raw_id, SESSION_ID_FIELD) {
            Ok(id) => id,
            Err(msg) => return Err(self.report(CoachingError::Validation(msg))),
        };

        let pending = self.begin(OperationKind::SessionLookup);
        match self.contract.get_session(id).await {
            Ok(record) => {
                tracing::info!(session_id = record.id, "Session loaded");
                let stored = record.clone();
                pending.settle_with(|state| state.session = Some(stored));
                self.notifier.notify(Notice::info("Session loaded"));
                Ok(record)
            }
            Err(err) => {
                pending.settle_with(|_| {});
                Err(self.report(err.into()))
            }
        }
    }

    /// Load statistics for the connected identity.
    pub async fn fetch_stats(&self) -> Result<ClientStats> {
        let Some(address) = self.read(|state| state.address().map(str::to_owned)) else {
            return Err(self.report(CoachingError::NotConnected));
        };

        let pending = self.begin(OperationKind::ClientStats);
        match self.contract.get_client_stats(&address).await {
            Ok(stats) => {
                if let Err(reason) = stats.validate() {
                    tracing::warn!(address = %address, "Inconsistent client stats: {}", reason);
                } else if !stats.is_balanced() {
                    tracing::debug!(
                        address = %address,
                        pending = stats.pending_sessions().unwrap_or_default(),
                        "Client has sessions without recorded attendance"
                    );
                }
                let stored = stats.clone();
                pending.settle_with(|state| state.stats = Some(stored));
                self.notifier.notify(Notice::info("Statistics loaded"));
                Ok(stats)
            }
            Err(err) => {
                pending.settle_with(|_| {});
                Err(self.report(err.into()))
            }
        }
    }

    fn begin(&self, kind: OperationKind) -> Pending<'_> {
        tracing::debug!("Starting {}", kind.label());
        self.update(|state| state.begin(kind));
        Pending {
            controller: self,
            kind,
            settled: false,
        }
    }

    fn update(&self, mutate: impl FnOnce(&mut ViewState)) {
        let snapshot = {
            let mut state = self.state.write();
            mutate(&mut state);
            self.observer.as_ref().map(|_| state.clone())
        }; // Drop the lock guard before calling out

        if let (Some(observer), Some(snapshot)) = (&self.observer, snapshot) {
            observer(&snapshot);
        }
    }

    /// Log the failure, notify the user, and hand the error back.
    fn report(&self, err: CoachingError) -> CoachingError {
        match err.kind() {
            ErrorKind::Validation | ErrorKind::NotConnected => {
                tracing::warn!("Rejected: {}", err);
            }
            _ => tracing::error!("Handler failed: {}", err),
        }
        self.notifier.notify(Notice::error(err.user_message()));
        err
    }
}

/// Marks one operation as in flight until it is settled or dropped.
struct Pending<'a> {
    controller: &'a CoachingController,
    kind: OperationKind,
    settled: bool,
}

impl Pending<'_> {
    /// Apply the outcome and clear the in-flight marker in one transition.
    fn settle_with(mut self, apply: impl FnOnce(&mut ViewState)) {
        self.settled = true;
        let kind = self.kind;
        self.controller.update(|state| {
            apply(state);
            state.settle(kind);
        });
    }
}

impl Drop for Pending<'_> {
    fn drop(&mut self) {
        if !self.settled {
            let kind = self.kind;
            self.controller.update(|state| state.settle(kind));
        }
    }
}
