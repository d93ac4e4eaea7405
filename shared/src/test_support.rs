//! In-memory wallet and contract used by unit tests.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet, VecDeque};
use std::rc::Rc;

use async_trait::async_trait;

use crate::abi::{self, WORD_LEN};
use crate::error::{Result, WhitelistError};
use crate::provider::WalletProvider;
use crate::state::{reduce, PageEvent, PageState};
use crate::types::{Address, Receipt, TxHash};

pub fn account(n: u8) -> Address {
    Address::from_bytes([n; 20])
}

pub fn contract_address() -> Address {
    Address::from_bytes([0xc0; 20])
}

pub struct FakeProvider {
    chain_id: Cell<u64>,
    accounts: Vec<Address>,
    members: RefCell<HashSet<Address>>,
    count: Cell<u64>,
    pending: RefCell<HashMap<TxHash, Address>>,
    sent: Cell<usize>,
    polls: Cell<usize>,
    poll_errors: RefCell<VecDeque<WhitelistError>>,
    reject_send: bool,
    revert: bool,
    fail_reads: Cell<bool>,
    fail_reads_after_send: bool,
}

impl FakeProvider {
    pub fn on_chain(chain_id: u64) -> Self {
        Self {
            chain_id: Cell::new(chain_id),
            accounts: vec![account(1)],
            members: RefCell::new(HashSet::new()),
            count: Cell::new(0),
            pending: RefCell::new(HashMap::new()),
            sent: Cell::new(0),
            polls: Cell::new(0),
            poll_errors: RefCell::new(VecDeque::new()),
            reject_send: false,
            revert: false,
            fail_reads: Cell::new(false),
            fail_reads_after_send: false,
        }
    }

    pub fn with_accounts(mut self, accounts: Vec<Address>) -> Self {
        self.accounts = accounts;
        self
    }

    pub fn with_count(self, count: u64) -> Self {
        self.count.set(count);
        self
    }

    pub fn with_member(self, address: Address) -> Self {
        self.members.borrow_mut().insert(address);
        self
    }

    pub fn rejecting(mut self) -> Self {
        self.reject_send = true;
        self
    }

    pub fn reverting(mut self) -> Self {
        self.revert = true;
        self
    }

    pub fn failing_reads(self) -> Self {
        self.fail_reads.set(true);
        self
    }

    /// Reads succeed until a transaction has been sent.
    pub fn failing_reads_after_send(mut self) -> Self {
        self.fail_reads_after_send = true;
        self
    }

    /// The next receipt polls fail with these errors, in order.
    pub fn failing_polls(self, errors: Vec<WhitelistError>) -> Self {
        self.poll_errors.borrow_mut().extend(errors);
        self
    }

    pub fn receipt_polls(&self) -> usize {
        self.polls.get()
    }

    pub fn switch_chain(&self, chain_id: u64) {
        self.chain_id.set(chain_id);
    }

    pub fn sent_transactions(&self) -> usize {
        self.sent.get()
    }

    fn word(value: u64) -> Vec<u8> {
        let mut word = vec![0u8; WORD_LEN];
        word[WORD_LEN - 8..].copy_from_slice(&value.to_be_bytes());
        word
    }
}

#[async_trait(?Send)]
impl WalletProvider for FakeProvider {
    async fn request_accounts(&self) -> Result<Vec<Address>> {
        Ok(self.accounts.clone())
    }

    async fn chain_id(&self) -> Result<u64> {
        Ok(self.chain_id.get())
    }

    async fn call(&self, _to: &Address, data: &[u8]) -> Result<Vec<u8>> {
        if self.fail_reads.get() {
            return Err(WhitelistError::Rpc("header not found".to_string()));
        }
        match data.get(..4) {
            Some(selector) if selector == &abi::NUM_ADDRESSES_WHITELISTED[..] => Ok(Self::word(self.count.get())),
            Some(selector) if selector == &abi::WHITELISTED_ADDRESSES[..] => {
                let raw = data
                    .get(4 + WORD_LEN - Address::LEN..4 + WORD_LEN)
                    .ok_or_else(|| WhitelistError::Rpc("short calldata".to_string()))?;
                let mut bytes = [0u8; 20];
                bytes.copy_from_slice(raw);
                let member = self.members.borrow().contains(&Address::from_bytes(bytes));
                Ok(Self::word(member as u64))
            }
            _ => Err(WhitelistError::Rpc("execution reverted".to_string())),
        }
    }

    async fn send_transaction(&self, from: &Address, _to: &Address, _data: &[u8]) -> Result<TxHash> {
        if self.reject_send {
            return Err(WhitelistError::Wallet("User denied transaction signature.".to_string()));
        }
        let n = self.sent.get() + 1;
        self.sent.set(n);
        if self.fail_reads_after_send {
            self.fail_reads.set(true);
        }
        let hash: TxHash = format!("0x{}", format!("{:02x}", n).repeat(32)).parse()?;
        self.pending.borrow_mut().insert(hash, *from);
        Ok(hash)
    }

    async fn transaction_receipt(&self, hash: &TxHash) -> Result<Option<Receipt>> {
        self.polls.set(self.polls.get() + 1);
        if let Some(err) = self.poll_errors.borrow_mut().pop_front() {
            return Err(err);
        }
        let from = self
            .pending
            .borrow_mut()
            .remove(hash)
            .ok_or_else(|| WhitelistError::Transaction(format!("unknown transaction {}", hash)))?;
        if !self.revert && self.members.borrow_mut().insert(from) {
            self.count.set(self.count.get() + 1);
        }
        Ok(Some(Receipt {
            transaction_hash: *hash,
            block_number: 100 + self.sent.get() as u64,
            succeeded: !self.revert,
        }))
    }

    async fn poll_delay(&self) {}
}

/// Records every dispatched event and folds it into a [`PageState`].
#[derive(Clone, Default)]
pub struct Recorder {
    pub events: Rc<RefCell<Vec<PageEvent>>>,
    pub state: Rc<RefCell<PageState>>,
}

impl Recorder {
    pub fn sink(&self) -> impl Fn(PageEvent) {
        let recorder = self.clone();
        move |event| {
            reduce(&mut recorder.state.borrow_mut(), event.clone());
            recorder.events.borrow_mut().push(event);
        }
    }

    pub fn events(&self) -> Vec<PageEvent> {
        self.events.borrow().clone()
    }

    pub fn state(&self) -> PageState {
        self.state.borrow().clone()
    }
}

/// Counts alerts and remembers the last message.
#[derive(Clone, Default)]
pub struct AlertLog {
    pub messages: Rc<RefCell<Vec<String>>>,
}

impl AlertLog {
    pub fn sink(&self) -> impl Fn(&str) {
        let messages = self.messages.clone();
        move |message: &str| messages.borrow_mut().push(message.to_string())
    }

    pub fn count(&self) -> usize {
        self.messages.borrow().len()
    }
}
