//! Contract information card

use leptos::prelude::*;
use lib_core::core_config;
use lib_core::render::render_contract;

#[component]
pub fn ContractInfoCard() -> impl IntoView {
    let contract = render_contract(core_config());

    view! {
        <section class="card">
            <h2>{format!("📜 {}", contract.name)}</h2>
            {contract.description.map(|text| view! { <p class="hint">{text}</p> })}
            <div class="info-row">
                <span class="info-label">"Contract ID"</span>
                <code class="address">{contract.contract_id}</code>
            </div>
            <div class="info-row">
                <span class="info-label">"Network"</span>
                <span>{contract.network}</span>
            </div>
            <div class="info-row">
                <span class="info-label">"Passphrase"</span>
                <span>{contract.network_passphrase}</span>
            </div>
            <div class="info-row">
                <span class="info-label">"RPC"</span>
                <code>{contract.rpc_url}</code>
            </div>
            {contract.version.map(|version| view! {
                <div class="info-row">
                    <span class="info-label">"Version"</span>
                    <span>{version}</span>
                </div>
            })}
        </section>
    }
}
