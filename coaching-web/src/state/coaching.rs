//! Coaching page state management
//!
//! The controller owns the authoritative [`ViewState`]; this context mirrors
//! every snapshot into a signal so components re-render on change.

use std::sync::Arc;

use leptos::prelude::*;
use lib_core::contract::DemoContractClient;
use lib_core::{CoachingController, Notice, ViewState};

use crate::services::contract::SimulatedLatency;
use crate::services::notify::SignalNotifier;
use crate::services::wallet::FreighterWallet;
use crate::utils::constants::CONTRACT_LATENCY_MS;

/// Global coaching context
#[derive(Clone)]
pub struct CoachingContext {
    controller: CoachingController,
    pub view: RwSignal<ViewState>,
    pub notice: RwSignal<Option<Notice>>,
}

impl CoachingContext {
    pub fn new() -> Self {
        let view = RwSignal::new(ViewState::new());
        let notice = RwSignal::new(None::<Notice>);

        let contract = SimulatedLatency::new(DemoContractClient::new(), CONTRACT_LATENCY_MS);
        let controller = CoachingController::new(
            Arc::new(FreighterWallet::new()),
            Arc::new(contract),
            Arc::new(SignalNotifier::new(notice)),
        )
        .with_observer(move |state| view.set(state.clone()));

        Self {
            controller,
            view,
            notice,
        }
    }

    pub fn set_session_query(&self, query: String) {
        self.controller.set_session_query(query);
    }

    pub fn connect(&self) {
        let controller = self.controller.clone();
        leptos::task::spawn_local(async move {
            // Failures are already reported through the notifier
            let _ = controller.connect().await;
        });
    }

    pub fn fetch_session(&self) {
        let controller = self.controller.clone();
        let query = self.view.with_untracked(|state| state.session_query.clone());
        leptos::task::spawn_local(async move {
            let _ = controller.fetch_session(&query).await;
        });
    }

    pub fn fetch_stats(&self) {
        let controller = self.controller.clone();
        leptos::task::spawn_local(async move {
            let _ = controller.fetch_stats().await;
        });
    }

    pub fn dismiss_notice(&self) {
        self.notice.set(None);
    }
}

impl Default for CoachingContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_coaching_context() -> CoachingContext {
    let context = CoachingContext::new();
    provide_context(context.clone());
    context
}

pub fn use_coaching_context() -> CoachingContext {
    expect_context::<CoachingContext>()
}
