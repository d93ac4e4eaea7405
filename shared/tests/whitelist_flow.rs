//! End-to-end page flows against a simulated chain shared by several wallets.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;

use async_trait::async_trait;
use shared::abi::{self, WhitelistCall, WORD_LEN};
use shared::{
    reduce, Address, PageEvent, PageState, PageView, Receipt, Session, TxHash, WalletProvider, WhitelistConfig,
    WhitelistController, WhitelistError,
};

const GOERLI: u64 = 5;
const CONTRACT: &str = "0x00000000000000000000000000000000000c0de5";

#[derive(Default)]
struct Chain {
    members: BTreeSet<[u8; 20]>,
    mempool: HashMap<TxHash, [u8; 20]>,
    nonce: u64,
}

/// One visitor's browser wallet pointed at the shared chain.
struct Wallet {
    chain: Rc<RefCell<Chain>>,
    account: Address,
    chain_id: Cell<u64>,
    /// Receipt polls that fail before the node answers.
    failing_polls: Cell<u32>,
}

impl Wallet {
    fn new(chain: &Rc<RefCell<Chain>>, byte: u8, chain_id: u64) -> Self {
        Self {
            chain: Rc::clone(chain),
            account: Address::from_bytes([byte; 20]),
            chain_id: Cell::new(chain_id),
            failing_polls: Cell::new(0),
        }
    }
}

fn word(value: u64) -> Vec<u8> {
    let mut word = vec![0u8; WORD_LEN];
    word[WORD_LEN - 8..].copy_from_slice(&value.to_be_bytes());
    word
}

#[async_trait(?Send)]
impl WalletProvider for Wallet {
    async fn request_accounts(&self) -> shared::Result<Vec<Address>> {
        Ok(vec![self.account])
    }

    async fn chain_id(&self) -> shared::Result<u64> {
        Ok(self.chain_id.get())
    }

    async fn call(&self, _to: &Address, data: &[u8]) -> shared::Result<Vec<u8>> {
        let chain = self.chain.borrow();
        if data == WhitelistCall::NumAddressesWhitelisted.encode().as_slice() {
            return Ok(word(chain.members.len() as u64));
        }
        if data.starts_with(&abi::WHITELISTED_ADDRESSES) {
            let mut bytes = [0u8; 20];
            bytes.copy_from_slice(&data[data.len() - 20..]);
            return Ok(word(chain.members.contains(&bytes) as u64));
        }
        Err(WhitelistError::Rpc("execution reverted".to_string()))
    }

    async fn send_transaction(&self, from: &Address, _to: &Address, data: &[u8]) -> shared::Result<TxHash> {
        assert_eq!(data, WhitelistCall::AddAddressToWhitelist.encode().as_slice());
        let mut chain = self.chain.borrow_mut();
        chain.nonce += 1;
        let hash: TxHash = format!("0x{:064x}", chain.nonce).parse()?;
        chain.mempool.insert(hash, *from.as_bytes());
        Ok(hash)
    }

    async fn transaction_receipt(&self, hash: &TxHash) -> shared::Result<Option<Receipt>> {
        if self.failing_polls.get() > 0 {
            self.failing_polls.set(self.failing_polls.get() - 1);
            return Err(WhitelistError::Rpc("eth_getTransactionReceipt: header not found".to_string()));
        }
        let mut chain = self.chain.borrow_mut();
        let sender = chain
            .mempool
            .remove(hash)
            .ok_or_else(|| WhitelistError::Transaction("dropped".to_string()))?;
        // The contract reverts on a second join from the same address.
        let succeeded = chain.members.insert(sender);
        Ok(Some(Receipt {
            transaction_hash: *hash,
            block_number: chain.nonce,
            succeeded,
        }))
    }

    async fn poll_delay(&self) {}
}

/// A page instance: in-memory state plus alert and event logs.
#[derive(Default)]
struct Page {
    state: RefCell<PageState>,
    events: RefCell<Vec<PageEvent>>,
    alerts: RefCell<Vec<String>>,
    /// `(loading, joined)` after every event, to check ordering.
    trace: RefCell<Vec<(bool, bool)>>,
}

impl Page {
    fn controller(&self) -> WhitelistController<impl Fn(&str) + '_, impl Fn(PageEvent) + '_> {
        WhitelistController::new(
            move |message: &str| self.alerts.borrow_mut().push(message.to_string()),
            move |event: PageEvent| {
                let mut state = self.state.borrow_mut();
                reduce(&mut state, event.clone());
                self.trace.borrow_mut().push((state.loading, state.joined_whitelist));
                self.events.borrow_mut().push(event);
            },
        )
    }

    fn state(&self) -> PageState {
        self.state.borrow().clone()
    }
}

fn session(wallet: Wallet) -> Session<Wallet> {
    Session::new(wallet, WhitelistConfig::new(CONTRACT, GOERLI, "Goerli").unwrap())
}

fn seeded_chain(members: u8) -> Rc<RefCell<Chain>> {
    let chain = Rc::new(RefCell::new(Chain::default()));
    for byte in 0..members {
        chain.borrow_mut().members.insert([0xa0 + byte; 20]);
    }
    chain
}

#[tokio::test]
async fn test_connect_then_join_scenario() {
    let chain = seeded_chain(3);
    let page = Page::default();
    let controller = page.controller();
    let session = session(Wallet::new(&chain, 0x01, GOERLI));

    assert_eq!(page.state().view(), PageView::Disconnected);

    controller.connect(&session).await;
    let state = page.state();
    assert_eq!(state.view(), PageView::ConnectedNotJoined);
    assert!(!state.joined_whitelist);
    assert_eq!(state.number_of_whitelisted, 3);

    controller.join(&session).await;
    let state = page.state();
    assert_eq!(state.view(), PageView::Joined);
    assert!(!state.loading);
    assert_eq!(state.number_of_whitelisted, 4);
    assert!(page.alerts.borrow().is_empty());

    // loading went true then false, and joined only flipped after that.
    let trace = page.trace.borrow();
    let loading_on = trace.iter().position(|(loading, _)| *loading).unwrap();
    let loading_off = loading_on + trace[loading_on..].iter().position(|(loading, _)| !*loading).unwrap();
    let joined_at = trace.iter().position(|(_, joined)| *joined).unwrap();
    assert!(loading_on < loading_off && loading_off <= joined_at);
    assert!(trace.iter().all(|(loading, joined)| !(*loading && *joined)));
}

#[tokio::test]
async fn test_wrong_network_scenario() {
    let chain = seeded_chain(2);
    let page = Page::default();
    let controller = page.controller();
    let session = session(Wallet::new(&chain, 0x01, 1));

    controller.connect(&session).await;

    let state = page.state();
    assert!(!state.wallet_connected);
    assert_eq!(state.view(), PageView::Disconnected);
    assert_eq!(*page.alerts.borrow(), vec!["Change the network to Goerli".to_string()]);
    assert_eq!(
        *page.events.borrow(),
        vec![PageEvent::ConnectRequested, PageEvent::ConnectFailed]
    );
}

#[tokio::test]
async fn test_switching_network_then_reconnecting() {
    let chain = seeded_chain(0);
    let page = Page::default();
    let controller = page.controller();
    let session = session(Wallet::new(&chain, 0x01, 1));

    controller.connect(&session).await;
    assert_eq!(page.state().view(), PageView::Disconnected);

    session.provider().chain_id.set(GOERLI);
    controller.connect(&session).await;
    assert_eq!(page.state().view(), PageView::ConnectedNotJoined);
    assert_eq!(page.alerts.borrow().len(), 1);
}

#[tokio::test]
async fn test_second_visitor_sees_new_count() {
    let chain = seeded_chain(5);

    let first = Page::default();
    let first_session = session(Wallet::new(&chain, 0x01, GOERLI));
    let first_controller = first.controller();
    first_controller.connect(&first_session).await;
    first_controller.join(&first_session).await;
    assert_eq!(first.state().number_of_whitelisted, 6);

    let second = Page::default();
    let second_session = session(Wallet::new(&chain, 0x02, GOERLI));
    second.controller().connect(&second_session).await;
    let state = second.state();
    assert_eq!(state.view(), PageView::ConnectedNotJoined);
    assert_eq!(state.number_of_whitelisted, 6);
}

#[tokio::test]
async fn test_reload_starts_from_defaults_but_chain_remembers() {
    let chain = seeded_chain(1);
    {
        let page = Page::default();
        let session = session(Wallet::new(&chain, 0x01, GOERLI));
        let controller = page.controller();
        controller.connect(&session).await;
        controller.join(&session).await;
        assert_eq!(page.state().view(), PageView::Joined);
    }

    let reloaded = Page::default();
    assert_eq!(reloaded.state(), PageState::default());

    let session = session(Wallet::new(&chain, 0x01, GOERLI));
    reloaded.controller().connect(&session).await;
    assert_eq!(reloaded.state().view(), PageView::Joined);
    assert_eq!(reloaded.state().number_of_whitelisted, 2);
}

#[tokio::test]
async fn test_duplicate_join_reverts_and_keeps_state() {
    let chain = seeded_chain(0);
    let page = Page::default();
    let session = session(Wallet::new(&chain, 0x01, GOERLI));
    let controller = page.controller();
    controller.connect(&session).await;

    // Someone joins from the same account in another tab before this one does.
    chain.borrow_mut().members.insert([0x01; 20]);
    controller.join(&session).await;

    let state = page.state();
    assert!(!state.loading);
    assert!(!state.joined_whitelist);
    assert_eq!(state.number_of_whitelisted, 0);
    assert!(page.events.borrow().contains(&PageEvent::JoinFailed));
    assert!(!state.join_requested);
}

#[tokio::test]
async fn test_join_survives_flaky_receipt_polls() {
    let chain = seeded_chain(2);
    let page = Page::default();
    let session = session(Wallet::new(&chain, 0x01, GOERLI));
    let controller = page.controller();
    controller.connect(&session).await;

    session.provider().failing_polls.set(3);
    controller.join(&session).await;

    let state = page.state();
    assert_eq!(state.view(), PageView::Joined);
    assert_eq!(state.number_of_whitelisted, 3);
    assert!(!page.events.borrow().contains(&PageEvent::JoinFailed));
    assert_eq!(chain.borrow().nonce, 1);
}
