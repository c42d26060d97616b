//! # View Flow Tests
//!
//! End-to-end behavior of the controller against the demo and in-memory
//! contract clients: preconditions, loading markers, completion ordering,
//! and the rendered output.

use std::sync::Arc;

use async_trait::async_trait;
use lib_core::contract::{DemoContractClient, InMemoryContract};
use lib_core::error::{ContractError, ErrorKind, WalletError};
use lib_core::render::{render_page, render_session, render_stats, RiskIndicator};
use lib_core::service::{ContractClient, Notice, NoticeLevel, Notifier, WalletCapability};
use lib_core::{CoachingController, ContractConfig, OperationKind, ViewState};
use parking_lot::Mutex;
use proptest::prelude::*;
use shared::dto::coaching::{ClientStats, SessionRecord};
use tokio::sync::Notify;

const ADDRESS: &str = "GAX63FSGPPYSD6ZTOZ7VMVEVHSIMFMW573UXHZGW5UFXQZDELCV37X5I";

struct FixedWallet(Option<String>);

#[async_trait(?Send)]
impl WalletCapability for FixedWallet {
    async fn is_available(&self) -> bool {
        self.0.is_some()
    }

    async fn request_authorization(&self) -> Result<(), WalletError> {
        Ok(())
    }

    async fn get_address(&self) -> Result<String, WalletError> {
        self.0.clone().ok_or(WalletError::Unavailable)
    }
}

#[derive(Default)]
struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.lock().push(notice);
    }
}

/// Demo client whose answers wait until the test releases them.
#[derive(Default)]
struct GatedContract {
    session_gate: Notify,
    stats_gate: Notify,
}

#[async_trait(?Send)]
impl ContractClient for GatedContract {
    async fn get_session(&self, id: u64) -> Result<SessionRecord, ContractError> {
        self.session_gate.notified().await;
        Ok(DemoContractClient::demo_session(id))
    }

    async fn get_client_stats(&self, _address: &str) -> Result<ClientStats, ContractError> {
        self.stats_gate.notified().await;
        Ok(DemoContractClient::demo_stats())
    }
}

/// Yield to the other joined futures until `ready` holds (bounded).
async fn wait_until(ready: impl Fn() -> bool) {
    for _ in 0..100 {
        if ready() {
            return;
        }
        tokio::task::yield_now().await;
    }
}

fn demo_controller(wallet: Option<&str>) -> (CoachingController, Arc<RecordingNotifier>) {
    let notifier = Arc::new(RecordingNotifier::default());
    let controller = CoachingController::new(
        Arc::new(FixedWallet(wallet.map(str::to_string))),
        Arc::new(DemoContractClient::new()),
        notifier.clone(),
    );
    (controller, notifier)
}

#[tokio::test]
async fn test_session_lookup_renders_one_xlm() {
    // Arrange
    let (controller, _notifier) = demo_controller(None);

    // Act
    let record = controller.fetch_session("1").await.unwrap();

    // Assert
    assert_eq!(
        record,
        SessionRecord {
            id: 1,
            client_address: ADDRESS.to_string(),
            coach_address: "GC4OTBH4ZDDWVXORRUAZI2GFWDZ2UVRBBFROA7KMC5EKBJR7QEZL6D63".to_string(),
            amount: 10_000_000,
            scheduled_time: 1_700_000_000,
            attended: true,
            completed: true,
        }
    );
    let page = render_page(&controller.snapshot(), &ContractConfig::default());
    let session = page.session.unwrap();
    assert_eq!(session.amount, "1.0");
    assert_eq!(render_session(&record), session);
}

#[tokio::test]
async fn test_stats_render_safe_indicator() {
    let (controller, notifier) = demo_controller(Some(ADDRESS));
    controller.connect().await.unwrap();

    let stats = controller.fetch_stats().await.unwrap();

    assert_eq!(
        stats,
        ClientStats {
            total_sessions: 1,
            attended_sessions: 1,
            missed_sessions: 0,
            at_risk: false,
        }
    );
    assert_eq!(render_stats(&stats).risk, RiskIndicator::Safe);
    assert!(notifier
        .notices
        .lock()
        .iter()
        .all(|notice| notice.level == NoticeLevel::Info));
}

#[tokio::test]
async fn test_failed_connect_leaves_identity_unset() {
    let (controller, notifier) = demo_controller(None);

    let err = controller.connect().await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::CapabilityUnavailable);
    assert_eq!(controller.snapshot(), ViewState::new());
    assert_eq!(
        notifier.notices.lock().as_slice(),
        [Notice::error("Please install the Freighter extension")]
    );
}

#[tokio::test]
async fn test_stats_before_connect_rejected() {
    let (controller, _notifier) = demo_controller(Some(ADDRESS));

    let err = controller.fetch_stats().await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NotConnected);
    assert_eq!(controller.snapshot().stats, None);
    assert!(!controller.snapshot().is_loading());
}

#[tokio::test]
async fn test_loading_held_for_whole_flight() {
    // Arrange
    let contract = Arc::new(GatedContract::default());
    let history: Arc<Mutex<Vec<bool>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = history.clone();
    let controller = CoachingController::new(
        Arc::new(FixedWallet(None)),
        contract.clone(),
        Arc::new(RecordingNotifier::default()),
    )
    .with_observer(move |state| sink.lock().push(state.is_loading()));
    assert!(!controller.snapshot().is_loading());

    // Act
    let (result, _) = tokio::join!(controller.fetch_session("7"), async {
        wait_until(|| controller.snapshot().is_loading()).await;
        assert!(controller.snapshot().is_loading());
        assert!(controller
            .snapshot()
            .phase(OperationKind::SessionLookup)
            .is_pending());
        contract.session_gate.notify_one();
    });

    // Assert
    assert_eq!(result.unwrap().id, 7);
    assert!(!controller.snapshot().is_loading());
    assert_eq!(history.lock().as_slice(), [true, false]);
}

#[tokio::test]
async fn test_transitions_apply_in_completion_order() {
    // Arrange
    let contract = Arc::new(GatedContract::default());
    let controller = CoachingController::new(
        Arc::new(FixedWallet(Some(ADDRESS.to_string()))),
        contract.clone(),
        Arc::new(RecordingNotifier::default()),
    );
    controller.connect().await.unwrap();

    // Act: session lookup is issued first but released last
    let (session, stats, _) = tokio::join!(
        controller.fetch_session("3"),
        controller.fetch_stats(),
        async {
            wait_until(|| controller.snapshot().pending_operations().len() == 2).await;
            contract.stats_gate.notify_one();
            wait_until(|| controller.snapshot().stats.is_some()).await;

            let state = controller.snapshot();
            assert!(state.stats.is_some());
            assert!(state.session.is_none());
            assert!(state.is_loading());
            assert!(!state.phase(OperationKind::ClientStats).is_pending());

            contract.session_gate.notify_one();
        }
    );

    // Assert
    assert!(session.is_ok());
    assert!(stats.is_ok());
    let state = controller.snapshot();
    assert_eq!(state.session.as_ref().map(|s| s.id), Some(3));
    assert!(!state.is_loading());
}

#[tokio::test]
async fn test_in_memory_ledger_through_controller() {
    // Arrange
    let ledger = Arc::new(InMemoryContract::default());
    ledger.initialize("CTOKEN").unwrap();
    ledger.mint(ADDRESS, 50_000_000).unwrap();
    let booked = ledger
        .create_session(ADDRESS, "GCOACH", 20_000_000, 1_700_000_000)
        .unwrap();
    ledger.mark_attendance(booked, false).unwrap();
    let second = ledger.create_session(ADDRESS, "GCOACH", 20_000_000, 1_700_086_400).unwrap();
    ledger.mark_attendance(second, false).unwrap();

    let notifier = Arc::new(RecordingNotifier::default());
    let controller = CoachingController::new(
        Arc::new(FixedWallet(Some(ADDRESS.to_string()))),
        ledger.clone(),
        notifier.clone(),
    );
    controller.connect().await.unwrap();

    // Act
    let stats = controller.fetch_stats().await.unwrap();
    let missing = controller.fetch_session("99").await;

    // Assert
    assert_eq!(stats.missed_sessions, 2);
    assert_eq!(render_stats(&stats).risk, RiskIndicator::AtRisk);
    assert_eq!(missing.unwrap_err().kind(), ErrorKind::Fetch);
    assert_eq!(
        notifier.notices.lock().last().map(|n| n.message.clone()),
        Some("Error fetching data: session 99 not found".to_string())
    );

    let record = controller.fetch_session(&booked.to_string()).await.unwrap();
    assert_eq!(render_session(&record).amount, "2.0");
    assert_eq!(render_session(&record).attended_label, "❌ No");
}

proptest! {
    #[test]
    fn test_blank_session_ids_never_mutate_state(raw in "[ \t\r\n]{0,8}") {
        let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
        let (controller, notifier) = demo_controller(Some(ADDRESS));

        let err = runtime.block_on(controller.fetch_session(&raw)).unwrap_err();

        prop_assert_eq!(err.kind(), ErrorKind::Validation);
        prop_assert_eq!(controller.snapshot(), ViewState::new());
        prop_assert_eq!(notifier.notices.lock().len(), 1);
    }
}
