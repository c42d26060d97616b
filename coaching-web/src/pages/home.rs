//! Dashboard page: wallet, contract, session lookup and statistics

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::{ConnectionCard, ContractInfoCard, SessionLookupCard, StatsCard};
use crate::state::coaching::use_coaching_context;
use crate::utils::constants::SESSION_QUERY_PARAM;
use crate::utils::url::get_query_param;

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_coaching_context();
    let query = use_query_map();

    // Pre-fill the lookup from `?session=<id>`; router first, then the raw URL
    let prefill = query
        .with_untracked(|params| params.get(SESSION_QUERY_PARAM))
        .or_else(|| get_query_param(SESSION_QUERY_PARAM));
    if let Some(session_id) = prefill {
        log::debug!("Session lookup pre-filled from URL: {}", session_id);
        ctx.set_session_query(session_id);
    }

    view! {
        <main class="dashboard">
            <div class="grid">
                <ConnectionCard/>
                <ContractInfoCard/>
            </div>
            <div class="grid">
                <SessionLookupCard/>
                <StatsCard/>
            </div>
        </main>
    }
}
