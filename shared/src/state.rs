//! # Page State
//!
//! In-memory state of the whitelist page and the single reducer that
//! changes it. Async operations never touch state directly; they emit
//! [`PageEvent`]s and the front end folds them in with [`reduce`].
//!
//! ## State Machine
//!
//! ```text
//! Disconnected ──connect──▶ ConnectedNotJoined ──join──▶ Joining ──confirm──▶ Joined
//!       │                         ▲                         │
//!       └──membership=true──▶ Joined                        └──fail──▶ ConnectedNotJoined
//! ```
//!
//! `Joined` is terminal and `wallet_connected` is never reset.

use crate::types::Address;

/// What the page renders. Exactly one branch is active at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageView {
    /// "Connect your wallet" button.
    Disconnected,
    /// "Join the Whitelist" button.
    ConnectedNotJoined,
    /// Spinner while the join transaction is pending.
    Joining,
    /// Thank-you message.
    Joined,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageState {
    pub wallet_connected: bool,
    pub joined_whitelist: bool,
    pub loading: bool,
    pub number_of_whitelisted: u64,
    /// A connect attempt is in flight. Does not select a branch.
    pub connecting: bool,
    /// Account the wallet signs with, once a signer has been obtained.
    pub account: Option<Address>,
    /// A join is in flight, including the wallet prompt before submission.
    /// Does not select a branch.
    pub join_requested: bool,
}

impl PageState {
    /// Branch selection from `(wallet_connected, joined_whitelist, loading)`.
    pub fn view(&self) -> PageView {
        if !self.wallet_connected {
            PageView::Disconnected
        } else if self.joined_whitelist {
            PageView::Joined
        } else if self.loading {
            PageView::Joining
        } else {
            PageView::ConnectedNotJoined
        }
    }

    /// Whether the join button may start a new join.
    pub fn can_request_join(&self) -> bool {
        self.view() == PageView::ConnectedNotJoined && !self.join_requested
    }
}

/// State transitions emitted by the controller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageEvent {
    ConnectRequested,
    Connected,
    ConnectFailed,
    AccountResolved(Address),
    MembershipRefreshed(bool),
    CountRefreshed(u64),
    JoinRequested,
    JoinSubmitted,
    JoinConfirmed,
    JoinFailed,
    JoinCompleted,
    JoinSettled,
}

/// Apply one event.
pub fn reduce(state: &mut PageState, event: PageEvent) {
    match event {
        PageEvent::ConnectRequested => {
            if !state.wallet_connected {
                state.connecting = true;
            }
        }
        PageEvent::Connected => {
            state.wallet_connected = true;
            state.connecting = false;
        }
        PageEvent::ConnectFailed => {
            state.connecting = false;
        }
        PageEvent::AccountResolved(address) => {
            state.account = Some(address);
        }
        PageEvent::MembershipRefreshed(joined) => {
            if !state.joined_whitelist {
                state.joined_whitelist = joined;
            }
        }
        PageEvent::CountRefreshed(count) => {
            state.number_of_whitelisted = count;
        }
        PageEvent::JoinRequested => {
            if state.can_request_join() {
                state.join_requested = true;
            }
        }
        PageEvent::JoinSubmitted => {
            if state.wallet_connected && !state.joined_whitelist {
                state.loading = true;
            }
        }
        PageEvent::JoinConfirmed | PageEvent::JoinFailed => {
            state.loading = false;
        }
        PageEvent::JoinCompleted => {
            state.loading = false;
            state.joined_whitelist = true;
        }
        PageEvent::JoinSettled => {
            state.join_requested = false;
        }
    }
}
