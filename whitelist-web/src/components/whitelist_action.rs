//! The single call-to-action below the fan count: connect, join, spinner or thanks.

use leptos::prelude::*;
use shared::PageView;

use crate::state::whitelist::use_whitelist_context;
use crate::utils::constants::{CONNECT_LABEL, CONNECTING_LABEL, JOINED_TEXT, JOIN_LABEL};

#[component]
pub fn WhitelistAction() -> impl IntoView {
    let ctx = use_whitelist_context();

    move || match ctx.view() {
        PageView::Disconnected => view! {
            <button
                class="button"
                disabled=move || ctx.is_connecting()
                on:click=move |_| ctx.connect()
            >
                {move || if ctx.is_connecting() { CONNECTING_LABEL } else { CONNECT_LABEL }}
            </button>
        }
        .into_any(),
        PageView::ConnectedNotJoined => view! {
            <button
                class="button"
                disabled=move || ctx.is_join_requested()
                on:click=move |_| ctx.join()
            >
                <span class="join-text">{JOIN_LABEL}</span>
                " "
                <span class="join-heart">"🚀"</span>
            </button>
        }
        .into_any(),
        PageView::Joining => view! { <div class="spinner"></div> }.into_any(),
        PageView::Joined => view! {
            <div class="description">
                <p class="joined-text">{JOINED_TEXT}</p>
            </div>
        }
        .into_any(),
    }
}
