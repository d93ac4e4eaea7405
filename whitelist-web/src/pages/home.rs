//! Whitelist Page - fan count, call to action and hero image

use leptos::prelude::*;

use crate::components::WhitelistAction;
use crate::state::whitelist::use_whitelist_context;
use crate::utils::constants::{DESCRIPTION, FOOTER, HERO_ALT, HERO_IMAGE, TITLE};
use crate::utils::format::fan_count_text;

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_whitelist_context();

    // Auto-connect on mount and whenever the page is still disconnected.
    // Tracks only `wallet_connected`, so `connecting` flips do not re-trigger it.
    let connected = Memo::new(move |_| ctx.is_connected());
    Effect::new(move || {
        if !connected.get() {
            log::info!("[CONNECT] Auto-connecting on mount");
            ctx.connect();
        }
    });

    view! {
        <div>
            <div class="main">
                <div>
                    <h1 class="title">{TITLE}</h1>
                    <div class="description">{DESCRIPTION}</div>
                    <div class="description">
                        {move || fan_count_text(ctx.number_of_whitelisted())}
                    </div>
                    <WhitelistAction/>
                </div>
                <div>
                    <img class="image" src=HERO_IMAGE alt=HERO_ALT/>
                </div>
            </div>
            <footer class="footer">{FOOTER}</footer>
        </div>
    }
}
