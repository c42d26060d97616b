//! Coaching Flow Web App - Leptos Frontend

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes, A},
    path,
};

use crate::components::{Footer, Navbar, NoticeBanner};
use crate::pages::HomePage;
use crate::state::coaching::provide_coaching_context;

#[component]
pub fn App() -> impl IntoView {
    provide_coaching_context();

    view! {
        <Router>
            <div class="app-container">
                <Navbar/>
                <NoticeBanner/>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=HomePage/>
                </Routes>
                <Footer/>
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="card not-found">
            <h1>"404 - Page Not Found"</h1>
            <p>"The page you're looking for doesn't exist."</p>
            <A href="/">
                <span class="btn">"Go to Home"</span>
            </A>
        </div>
    }
}
