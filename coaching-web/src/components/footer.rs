use leptos::prelude::*;
use lib_core::core_config;

#[component]
pub fn Footer() -> impl IntoView {
    let network = core_config().network_name();

    view! {
        <footer>
            <p>{format!("Coaching Flow · Stellar {} · Freighter wallet", network)}</p>
        </footer>
    }
}
