//! Navigation Bar Component

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav>
            <div class="nav-inner">
                <A href="/" attr:class="nav-link-clean">
                    <span class="nav-title">"🎓 Coaching Flow"</span>
                </A>
                <span class="nav-subtitle">"Coaching sessions on Stellar"</span>
            </div>
        </nav>
    }
}
