//! # Whitelist Page Controller
//!
//! The four page operations: connect, refresh count, refresh membership and
//! join. Each takes the owned [`Session`] explicitly and reports progress
//! as [`PageEvent`]s through the dispatch sink.
//!
//! Errors never escape. They are logged and the page simply does not
//! advance. A wrong network is additionally surfaced through [`Alert`],
//! once per failed handle acquisition.

use crate::error::{Result, WhitelistError};
use crate::provider::{Alert, WalletProvider};
use crate::session::{Handle, Session};
use crate::state::PageEvent;

pub struct WhitelistController<A, D> {
    alert: A,
    dispatch: D,
}

impl<A, D> WhitelistController<A, D>
where
    A: Alert,
    D: Fn(PageEvent),
{
    pub fn new(alert: A, dispatch: D) -> Self {
        Self { alert, dispatch }
    }

    /// Connect the wallet, then refresh membership and count.
    pub async fn connect<P: WalletProvider>(&self, session: &Session<P>) {
        (self.dispatch)(PageEvent::ConnectRequested);
        match self.operational_handle(session, false).await {
            Ok(_) => {
                log::info!("[CONNECT] Wallet connected on chain {}", session.config().chain_id);
                (self.dispatch)(PageEvent::Connected);
                futures::join!(self.refresh_membership(session), self.refresh_count(session));
            }
            Err(e) => {
                log::error!("[CONNECT] {}", e);
                (self.dispatch)(PageEvent::ConnectFailed);
            }
        }
    }

    /// Reader or signer handle, alerting the visitor on a network mismatch.
    pub async fn operational_handle<P: WalletProvider>(
        &self,
        session: &Session<P>,
        needs_signer: bool,
    ) -> Result<Handle> {
        let result = session.operational_handle(needs_signer).await;
        if let Err(e) = &result {
            if e.is_network_mismatch() {
                self.alert.alert(&e.user_message(&session.config().network_name));
            }
        }
        result
    }

    /// Read `numAddressesWhitelisted` into the page.
    pub async fn refresh_count<P: WalletProvider>(&self, session: &Session<P>) {
        match self.read_count(session).await {
            Ok(count) => {
                log::debug!("[COUNT] {} addresses whitelisted", count);
                (self.dispatch)(PageEvent::CountRefreshed(count));
            }
            Err(e) => log::error!("[COUNT] {}", e),
        }
    }

    /// Read whether the connected address is whitelisted.
    pub async fn refresh_membership<P: WalletProvider>(&self, session: &Session<P>) {
        match self.read_membership(session).await {
            Ok(joined) => {
                log::debug!("[MEMBERSHIP] whitelisted={}", joined);
                (self.dispatch)(PageEvent::MembershipRefreshed(joined));
            }
            Err(e) => log::error!("[MEMBERSHIP] {}", e),
        }
    }

    /// Submit `addAddressToWhitelist`, wait for it, then refresh the count.
    ///
    /// Bracketed by `JoinRequested` / `JoinSettled` so the page can refuse
    /// a second join while the wallet prompt is still open.
    pub async fn join<P: WalletProvider>(&self, session: &Session<P>) {
        (self.dispatch)(PageEvent::JoinRequested);
        if let Err(e) = self.try_join(session).await {
            log::error!("[JOIN] {}", e);
        }
        (self.dispatch)(PageEvent::JoinSettled);
    }

    async fn try_join<P: WalletProvider>(&self, session: &Session<P>) -> Result<()> {
        let handle = self.operational_handle(session, true).await?;
        let pending = session.contract(handle).add_address_to_whitelist().await?;
        (self.dispatch)(PageEvent::JoinSubmitted);

        if let Err(e) = pending.wait().await {
            (self.dispatch)(PageEvent::JoinFailed);
            return Err(e);
        }
        (self.dispatch)(PageEvent::JoinConfirmed);
        log::info!("[JOIN] Address added to whitelist");

        self.refresh_count(session).await;
        (self.dispatch)(PageEvent::JoinCompleted);
        Ok(())
    }

    async fn read_count<P: WalletProvider>(&self, session: &Session<P>) -> Result<u64> {
        let handle = self.operational_handle(session, false).await?;
        session.contract(handle).num_addresses_whitelisted().await
    }

    async fn read_membership<P: WalletProvider>(&self, session: &Session<P>) -> Result<bool> {
        let handle = self.operational_handle(session, true).await?;
        let address = *handle.signer_address().ok_or(WhitelistError::NoAccounts)?;
        (self.dispatch)(PageEvent::AccountResolved(address));
        session.contract(handle).whitelisted_addresses(&address).await
    }
}
