//! Whitelist page state management

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use shared::{reduce, PageEvent, PageState, PageView, Session, WhitelistConfig, WhitelistController};

use crate::services::ethereum::{BrowserAlert, InjectedProvider};

/// Global page context
#[derive(Clone, Copy)]
pub struct WhitelistContext {
    pub page: RwSignal<PageState>,
    session: StoredValue<Rc<Session<InjectedProvider>>, LocalStorage>,
}

impl WhitelistContext {
    pub fn new(config: WhitelistConfig) -> Self {
        let provider = InjectedProvider::new(config.receipt_poll_ms);
        Self {
            page: RwSignal::new(PageState::default()),
            session: StoredValue::new_local(Rc::new(Session::new(provider, config))),
        }
    }

    pub fn view(&self) -> PageView {
        self.page.with(|state| state.view())
    }

    pub fn is_connected(&self) -> bool {
        self.page.with(|state| state.wallet_connected)
    }

    pub fn is_connecting(&self) -> bool {
        self.page.with(|state| state.connecting)
    }

    pub fn is_join_requested(&self) -> bool {
        self.page.with(|state| state.join_requested)
    }

    pub fn number_of_whitelisted(&self) -> u64 {
        self.page.with(|state| state.number_of_whitelisted)
    }

    pub fn dispatch(&self, event: PageEvent) {
        log::debug!("[STATE] {:?}", event);
        self.page.update(|state| reduce(state, event));
    }

    /// Connect in the background; no-op while an attempt is running.
    pub fn connect(&self) {
        if self.page.with_untracked(|state| state.connecting) {
            return;
        }
        let ctx = *self;
        let session = self.session.get_value();
        spawn_local(async move {
            ctx.controller().connect(&session).await;
        });
    }

    /// Join the whitelist in the background; no-op while a join is running.
    pub fn join(&self) {
        if !self.page.with_untracked(|state| state.can_request_join()) {
            log::debug!("[JOIN] Join already in progress");
            return;
        }
        // Mark the join before the task starts so a second click sees it.
        self.dispatch(PageEvent::JoinRequested);
        let ctx = *self;
        let session = self.session.get_value();
        spawn_local(async move {
            ctx.controller().join(&session).await;
        });
    }

    fn controller(self) -> WhitelistController<BrowserAlert, impl Fn(PageEvent)> {
        WhitelistController::new(BrowserAlert, move |event| self.dispatch(event))
    }
}

pub fn provide_whitelist_context(config: WhitelistConfig) -> WhitelistContext {
    let context = WhitelistContext::new(config);
    provide_context(context);
    context
}

pub fn use_whitelist_context() -> WhitelistContext {
    expect_context::<WhitelistContext>()
}
