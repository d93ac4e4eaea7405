//! Red & White Army Whitelist - Leptos Frontend

use leptos::prelude::*;
use leptos_router::{
    components::{A, Route, Router, Routes},
    path,
};
use shared::WhitelistConfig;

use crate::components::Navbar;
use crate::pages::HomePage;
use crate::state::whitelist::provide_whitelist_context;

#[component]
pub fn App(config: WhitelistConfig) -> impl IntoView {
    let ctx = provide_whitelist_context(config);
    let account = Signal::derive(move || ctx.page.with(|state| state.account.map(|a| a.to_string())));

    view! {
        <Router>
            <div class="app-container">
                <Navbar account=account/>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=HomePage/>
                </Routes>
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="main">
            <div class="description">
                <h1 class="title">"404 - Page Not Found"</h1>
                <p>"The page you're looking for doesn't exist."</p>
                <A href="/">
                    <span class="button">"Back to the Whitelist"</span>
                </A>
            </div>
        </div>
    }
}

/// Shown instead of the page when the build-time configuration is invalid.
#[component]
pub fn ConfigError(message: String) -> impl IntoView {
    view! {
        <div class="main">
            <div class="description">
                <h1 class="title">"Misconfigured build"</h1>
                <p>{message}</p>
            </div>
        </div>
    }
}
