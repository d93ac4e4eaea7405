//! Navigation Bar Component

use leptos::prelude::*;
use leptos_router::components::A;
use shared::utils::truncate_address;

/// Brand link plus the connected account, once known.
#[component]
pub fn Navbar(#[prop(into)] account: Signal<Option<String>>) -> impl IntoView {
    view! {
        <nav>
            <div class="nav-inner">
                <A href="/" attr:class="nav-link-clean">
                    <span class="nav-title">
                        <span class="red">"Red"</span>" & "<span class="white">"White"</span>
                    </span>
                </A>
                {move || account.get().map(|address| view! {
                    <span class="wallet-address" title=address.clone()>
                        {truncate_address(&address)}
                    </span>
                })}
            </div>
        </nav>
    }
}
