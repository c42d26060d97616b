//! Client statistics card

use leptos::prelude::*;
use lib_core::render::{render_stats, stats_button, StatsView};

use crate::state::coaching::use_coaching_context;

#[component]
pub fn StatsCard() -> impl IntoView {
    let ctx = use_coaching_context();
    let view_state = ctx.view;

    let button = move || view_state.with(stats_button);
    let stats = move || view_state.with(|state| state.stats.as_ref().map(render_stats));
    let connected = move || view_state.with(|state| state.is_connected());

    view! {
        <section class="card">
            <h2>"📊 My Statistics"</h2>
            <Show when=move || !connected()>
                <p class="hint">"Connect your wallet to see your statistics."</p>
            </Show>
            <button
                class="btn btn-secondary"
                disabled=move || button().disabled
                on:click=move |_| ctx.fetch_stats()
            >
                {move || button().label}
            </button>
            {move || stats().map(|stats| view! { <StatsGrid stats=stats/> })}
        </section>
    }
}

#[component]
fn StatsGrid(stats: StatsView) -> impl IntoView {
    let risk = stats.risk;

    view! {
        <div class="stats-grid">
            <StatTile label="Total Sessions" value=stats.total.to_string()/>
            <StatTile label="Attended" value=stats.attended.to_string()/>
            <StatTile label="Missed" value=stats.missed.to_string()/>
            <div class=format!("stat-card {}", risk.css_class())>
                <span class="stat-value">{risk.icon()}</span>
                <span class="stat-label">{risk.label()}</span>
            </div>
        </div>
    }
}

#[component]
fn StatTile(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-value">{value}</span>
            <span class="stat-label">{label}</span>
        </div>
    }
}
