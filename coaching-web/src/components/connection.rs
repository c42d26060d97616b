//! Wallet connection card

use leptos::prelude::*;
use lib_core::render::{render_connection, ConnectionView};

use crate::state::coaching::use_coaching_context;

#[component]
pub fn ConnectionCard() -> impl IntoView {
    let ctx = use_coaching_context();
    let view_state = ctx.view;

    view! {
        <section class="card">
            <h2>"🔐 Wallet"</h2>
            {move || match view_state.with(render_connection) {
                ConnectionView::Prompt { label } => {
                    let ctx = ctx.clone();
                    view! {
                        <button class="btn btn-primary" on:click=move |_| ctx.connect()>
                            {label}
                        </button>
                    }
                        .into_any()
                }
                ConnectionView::Connected { address } => view! {
                    <div class="connected-info">
                        <p class="connected-label">"✅ Connected"</p>
                        <p class="address">{address}</p>
                    </div>
                }
                    .into_any(),
            }}
        </section>
    }
}
