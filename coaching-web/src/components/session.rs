//! Session lookup card

use leptos::prelude::*;
use lib_core::render::{render_session, session_button, SessionView, CURRENCY};

use crate::state::coaching::use_coaching_context;

#[component]
pub fn SessionLookupCard() -> impl IntoView {
    let ctx = use_coaching_context();
    let view_state = ctx.view;

    let query = move || view_state.with(|state| state.session_query.clone());
    let button = move || view_state.with(session_button);
    let session = move || view_state.with(|state| state.session.as_ref().map(render_session));

    let on_input = {
        let ctx = ctx.clone();
        move |ev: web_sys::Event| ctx.set_session_query(event_target_value(&ev))
    };
    let on_submit = move |_: web_sys::MouseEvent| ctx.fetch_session();

    view! {
        <section class="card">
            <h2>"🔍 Look Up Session"</h2>
            <div class="form-group">
                <input
                    type="number"
                    min="0"
                    class="input"
                    placeholder="Session ID (e.g. 1)"
                    prop:value=query
                    on:input=on_input
                />
                <button
                    class="btn btn-primary"
                    disabled=move || button().disabled
                    on:click=on_submit
                >
                    {move || button().label}
                </button>
            </div>
            {move || session().map(|session| view! { <SessionDetails session=session/> })}
        </section>
    }
}

#[component]
fn SessionDetails(session: SessionView) -> impl IntoView {
    view! {
        <div class="session-details">
            <h3>{format!("Session #{}", session.id)}</h3>
            <DetailRow label="Client" value=session.client/>
            <DetailRow label="Coach" value=session.coach/>
            <DetailRow label="Amount" value=format!("{} {}", session.amount, CURRENCY)/>
            <DetailRow label="Scheduled" value=session.scheduled/>
            <DetailRow label="Attended" value=session.attended_label.to_string()/>
            <DetailRow label="Completed" value=session.completed_label.to_string()/>
        </div>
    }
}

#[component]
fn DetailRow(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="info-row">
            <span class="info-label">{label}</span>
            <span class="info-value">{value}</span>
        </div>
    }
}
