//! # View State
//!
//! The single state object behind the page: connection, session query,
//! client statistics, and per-operation loading markers.
//!
//! Each slot has one owning handler in [`crate::controller`]; rendering only
//! ever reads snapshots.

use shared::dto::coaching::{ClientStats, SessionRecord};

/// Wallet connection state.
///
/// There is no disconnect path: once connected the page stays connected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConnectionState {
    #[default]
    Disconnected,
    Connected {
        address: String,
    },
}

impl ConnectionState {
    pub fn is_connected(&self) -> bool {
        matches!(self, ConnectionState::Connected { .. })
    }

    pub fn address(&self) -> Option<&str> {
        match self {
            ConnectionState::Connected { address } => Some(address),
            ConnectionState::Disconnected => None,
        }
    }
}

/// Fetch operations that can be in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    SessionLookup,
    ClientStats,
}

impl OperationKind {
    pub fn all() -> &'static [OperationKind] {
        &[OperationKind::SessionLookup, OperationKind::ClientStats]
    }

    pub fn label(&self) -> &'static str {
        match self {
            OperationKind::SessionLookup => "session lookup",
            OperationKind::ClientStats => "client stats",
        }
    }
}

/// Loading phase of one operation kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Idle,
    Pending(OperationKind),
}

impl LoadPhase {
    pub fn is_pending(&self) -> bool {
        matches!(self, LoadPhase::Pending(_))
    }
}

/// In-flight call counters, one per operation kind.
///
/// Overlapping calls of the same kind keep the phase pending until the last
/// of them settles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct InFlight {
    session_lookup: u32,
    client_stats: u32,
}

impl InFlight {
    fn slot(&mut self, kind: OperationKind) -> &mut u32 {
        match kind {
            OperationKind::SessionLookup => &mut self.session_lookup,
            OperationKind::ClientStats => &mut self.client_stats,
        }
    }

    fn count(&self, kind: OperationKind) -> u32 {
        match kind {
            OperationKind::SessionLookup => self.session_lookup,
            OperationKind::ClientStats => self.client_stats,
        }
    }
}

/// Complete state of the coaching page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub connection: ConnectionState,
    /// Identifier typed by the operator, kept verbatim.
    pub session_query: String,
    pub session: Option<SessionRecord>,
    pub stats: Option<ClientStats>,
    in_flight: InFlight,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_connected(&self) -> bool {
        self.connection.is_connected()
    }

    pub fn address(&self) -> Option<&str> {
        self.connection.address()
    }

    pub fn phase(&self, kind: OperationKind) -> LoadPhase {
        if self.in_flight.count(kind) > 0 {
            LoadPhase::Pending(kind)
        } else {
            LoadPhase::Idle
        }
    }

    /// True while any fetch is in flight.
    pub fn is_loading(&self) -> bool {
        OperationKind::all()
            .iter()
            .any(|kind| self.phase(*kind).is_pending())
    }

    pub fn pending_operations(&self) -> Vec<OperationKind> {
        OperationKind::all()
            .iter()
            .copied()
            .filter(|kind| self.phase(*kind).is_pending())
            .collect()
    }

    pub(crate) fn begin(&mut self, kind: OperationKind) {
        let slot = self.in_flight.slot(kind);
        *slot = slot.saturating_add(1);
    }

    pub(crate) fn settle(&mut self, kind: OperationKind) {
        let slot = self.in_flight.slot(kind);
        *slot = slot.saturating_sub(1);
    }
}
