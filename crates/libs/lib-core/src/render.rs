//! # Render Models
//!
//! Pure functions from [`ViewState`] to display-ready values. The web
//! components only lay these out; they never inspect the raw records.

use lib_utils::time::format_unix_timestamp;
use shared::dto::coaching::{ClientStats, SessionRecord};
use shared::utils::format_stroops;

use crate::config::ContractConfig;
use crate::state::{OperationKind, ViewState};

/// Currency code shown next to amounts.
pub const CURRENCY: &str = "XLM";
/// Fractional digits shown for amounts.
pub const AMOUNT_DECIMALS: usize = 1;

pub const LOADING_LABEL: &str = "Loading...";
pub const CONNECT_LABEL: &str = "Connect Freighter";
pub const FETCH_SESSION_LABEL: &str = "Get Session";
pub const FETCH_STATS_LABEL: &str = "View My Statistics";

/// Connection panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionView {
    /// Show the connect button.
    Prompt { label: &'static str },
    Connected { address: String },
}

/// Contract information panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractView {
    pub name: String,
    pub contract_id: String,
    pub network: &'static str,
    pub network_passphrase: String,
    pub rpc_url: String,
    pub description: Option<String>,
    pub version: Option<String>,
}

/// Submit button of a query form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonView {
    pub label: &'static str,
    pub disabled: bool,
}

/// A loaded session record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionView {
    pub id: String,
    pub client: String,
    pub coach: String,
    /// Amount in XLM, e.g. `1.0`.
    pub amount: String,
    pub currency: &'static str,
    pub scheduled: String,
    pub attended: bool,
    pub attended_label: &'static str,
    pub completed: bool,
    pub completed_label: &'static str,
}

/// Risk indicator of the statistics panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskIndicator {
    Safe,
    AtRisk,
}

impl RiskIndicator {
    pub fn from_flag(at_risk: bool) -> Self {
        if at_risk {
            RiskIndicator::AtRisk
        } else {
            RiskIndicator::Safe
        }
    }

    pub fn is_at_risk(&self) -> bool {
        matches!(self, RiskIndicator::AtRisk)
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskIndicator::Safe => "No Risk",
            RiskIndicator::AtRisk => "At Risk",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            RiskIndicator::Safe => "✅",
            RiskIndicator::AtRisk => "⚠️",
        }
    }

    /// CSS class of the stat card.
    pub fn css_class(&self) -> &'static str {
        match self {
            RiskIndicator::Safe => "safe",
            RiskIndicator::AtRisk => "at-risk",
        }
    }
}

/// Loaded client statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsView {
    pub total: u64,
    pub attended: u64,
    pub missed: u64,
    pub risk: RiskIndicator,
}

/// Everything the page displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub connection: ConnectionView,
    pub contract: ContractView,
    pub session_button: ButtonView,
    pub session: Option<SessionView>,
    pub stats_button: ButtonView,
    pub stats: Option<StatsView>,
}

pub fn render_page(state: &ViewState, config: &ContractConfig) -> PageView {
    PageView {
        connection: render_connection(state),
        contract: render_contract(config),
        session_button: session_button(state),
        session: state.session.as_ref().map(render_session),
        stats_button: stats_button(state),
        stats: state.stats.as_ref().map(render_stats),
    }
}

pub fn render_connection(state: &ViewState) -> ConnectionView {
    match state.address() {
        Some(address) => ConnectionView::Connected {
            address: address.to_string(),
        },
        None => ConnectionView::Prompt {
            label: CONNECT_LABEL,
        },
    }
}

pub fn render_contract(config: &ContractConfig) -> ContractView {
    let metadata = config.metadata();
    ContractView {
        name: metadata.name,
        contract_id: metadata.contract_id,
        network: metadata.network.name(),
        network_passphrase: metadata.network_passphrase,
        rpc_url: metadata.rpc_url,
        description: metadata.description,
        version: metadata.version,
    }
}

/// The lookup button is disabled while any fetch is in flight.
pub fn session_button(state: &ViewState) -> ButtonView {
    ButtonView {
        label: if state.is_loading() {
            LOADING_LABEL
        } else {
            FETCH_SESSION_LABEL
        },
        disabled: state.is_loading(),
    }
}

/// The stats button also requires a connected wallet.
pub fn stats_button(state: &ViewState) -> ButtonView {
    ButtonView {
        label: if state.is_loading() {
            LOADING_LABEL
        } else {
            FETCH_STATS_LABEL
        },
        disabled: state.is_loading() || !state.is_connected(),
    }
}

/// Whether a specific operation is the one still running.
pub fn is_pending(state: &ViewState, kind: OperationKind) -> bool {
    state.phase(kind).is_pending()
}

pub fn render_session(record: &SessionRecord) -> SessionView {
    SessionView {
        id: record.id.to_string(),
        client: record.client_address.clone(),
        coach: record.coach_address.clone(),
        amount: format_stroops(record.amount, AMOUNT_DECIMALS),
        currency: CURRENCY,
        scheduled: format_unix_timestamp(record.scheduled_time),
        attended: record.attended,
        attended_label: if record.attended { "✅ Yes" } else { "❌ No" },
        completed: record.completed,
        completed_label: if record.completed {
            "✅ Yes"
        } else {
            "⏳ Pending"
        },
    }
}

pub fn render_stats(stats: &ClientStats) -> StatsView {
    StatsView {
        total: stats.total_sessions,
        attended: stats.attended_sessions,
        missed: stats.missed_sessions,
        risk: RiskIndicator::from_flag(stats.at_risk),
    }
}
