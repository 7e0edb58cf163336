//! Address lookup: the fetched record, placeholder panels, and the local
//! mint/transfer forms shown beside it.

use crate::api::{AddressRecord, GenerationApi, RemoteCallFailed};
use crate::chain::Chain;
use crate::notify::{Notification, Notifier};
use crate::ui::components::TextField;

pub const LOOKUP_FAILED: &str = "Failed to get address info.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainBalance {
    pub chain: &'static str,
    pub balance: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub user_address: &'static str,
    pub text: &'static str,
    pub stars: u8,
}

/// Placeholder balances; there is no balance lookup.
pub const MOCK_BALANCES: &[ChainBalance] = &[
    ChainBalance { chain: "Bitcoin", balance: "0.5 BTC" },
    ChainBalance { chain: "Ethereum", balance: "2 ETH" },
    ChainBalance { chain: "Polygon", balance: "88 MATIC" },
    ChainBalance { chain: "Harmony", balance: "1000 ONE" },
];

pub const MOCK_REVIEWS: &[Review] = &[
    Review { user_address: "0x1234...5678", text: "Great service!", stars: 4 },
    Review { user_address: "0xabcd...efgh", text: "Fast and efficient.", stars: 4 },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTicket {
    pub seq: u64,
    pub address: String,
}

#[derive(Debug, Default)]
pub struct LookupState {
    address: String,
    record: Option<AddressRecord>,
    is_loading: bool,
    seq: u64,
}

impl LookupState {
    pub fn new(address: impl Into<String>) -> Self {
        Self { address: address.into(), ..Self::default() }
    }

    pub fn address(&self) -> &str { &self.address }
    pub fn record(&self) -> Option<&AddressRecord> { self.record.as_ref() }
    pub fn is_loading(&self) -> bool { self.is_loading }

    pub fn begin_fetch(&mut self) -> LookupTicket {
        self.seq += 1;
        self.is_loading = true;
        tracing::info!(seq = self.seq, address = %self.address, "address lookup started");
        LookupTicket { seq: self.seq, address: self.address.clone() }
    }

    /// Apply a fetch result. Returns false when the ticket was superseded.
    pub fn complete_fetch(
        &mut self,
        ticket: &LookupTicket,
        result: Result<AddressRecord, RemoteCallFailed>,
        notifier: &mut dyn Notifier,
    ) -> bool {
        if ticket.seq != self.seq {
            tracing::debug!(seq = ticket.seq, latest = self.seq, "discarding stale lookup result");
            return false;
        }
        self.is_loading = false;
        match result {
            Ok(rec) => {
                tracing::info!(name = %rec.name, "address record loaded");
                self.record = Some(rec);
            }
            Err(e) => {
                tracing::warn!(error = %e, "address lookup failed");
                self.record = None;
                notifier.notify(Notification::error(LOOKUP_FAILED));
            }
        }
        true
    }
}

/// Fetch once and apply. No retry.
pub async fn load_address(api: &dyn GenerationApi, state: &mut LookupState, notifier: &mut dyn Notifier) {
    let ticket = state.begin_fetch();
    let result = api.fetch_address(&ticket.address).await;
    state.complete_fetch(&ticket, result, notifier);
}

/* ───────────────────────── Mint ───────────────────────── */

#[derive(Debug, Clone, Default)]
pub struct MintForm {
    pub chain: Option<Chain>,
    pub amount: TextField,
}

impl MintForm {
    pub fn can_submit(&self) -> bool {
        self.chain.is_some() && valid_amount(&self.amount.text)
    }

    /// Returns false (and does nothing) while the submit control is disabled.
    pub fn submit(&self, notifier: &mut dyn Notifier) -> bool {
        let Some(chain) = self.chain.filter(|_| self.can_submit()) else {
            return false;
        };
        notifier.notify(Notification::info(
            "Minting Initiated",
            format!("Minting {} tokens on {}...", self.amount.text.trim(), chain),
        ));
        true
    }
}

/// Mint and transfer amounts must read as a finite, non-negative number.
fn valid_amount(text: &str) -> bool {
    text.trim().parse::<f64>().is_ok_and(|v| v.is_finite() && v >= 0.0)
}

/* ───────────────────────── Transfer ───────────────────────── */

#[derive(Debug, Clone, Default)]
pub struct TransferForm {
    from: Option<Chain>,
    to: Option<Chain>,
    pub amount: TextField,
}

impl TransferForm {
    pub fn from(&self) -> Option<Chain> { self.from }
    pub fn to(&self) -> Option<Chain> { self.to }

    /// Picking the chain already chosen as destination clears the destination.
    pub fn set_from(&mut self, chain: Option<Chain>) {
        if chain.is_some() && chain == self.to {
            self.to = None;
        }
        self.from = chain;
    }

    pub fn set_to(&mut self, chain: Option<Chain>) {
        if chain.is_some() && chain == self.from {
            self.from = None;
        }
        self.to = chain;
    }

    /// Destinations offered: everything except the source.
    pub fn to_options(&self, all: &[Chain]) -> Vec<Chain> {
        all.iter().copied().filter(|c| Some(*c) != self.from).collect()
    }

    pub fn can_submit(&self) -> bool {
        matches!((self.from, self.to), (Some(f), Some(t)) if f != t) && valid_amount(&self.amount.text)
    }

    pub fn submit(&self, notifier: &mut dyn Notifier) -> bool {
        let (Some(from), Some(to)) = (self.from, self.to) else {
            return false;
        };
        if !self.can_submit() {
            return false;
        }
        notifier.notify(Notification::info(
            "Transfer Initiated",
            format!("Transferring {} from {} to {}...", self.amount.text.trim(), from, to),
        ));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::RemoteOp;

    #[test]
    fn failed_lookup_leaves_display_empty() {
        let mut s = LookupState::new("0xabc");
        let mut n = Vec::new();
        let t = s.begin_fetch();
        assert!(s.is_loading());
        s.complete_fetch(&t, Err(RemoteCallFailed::new(RemoteOp::FetchAddress, "HTTP 404")), &mut n);
        assert!(s.record().is_none());
        assert!(!s.is_loading());
        assert_eq!(n.len(), 1);
        assert_eq!(n[0].description, LOOKUP_FAILED);
    }

    #[test]
    fn mint_needs_chain_and_amount() {
        let mut m = MintForm::default();
        let mut n = Vec::new();
        assert!(!m.submit(&mut n));
        m.chain = Some(Chain::MasterChain);
        assert!(!m.can_submit());
        m.amount.set("5");
        assert!(m.submit(&mut n));
        assert_eq!(n[0].description, "Minting 5 tokens on masterchain...");
    }

    #[test]
    fn transfer_chains_stay_distinct() {
        let mut t = TransferForm::default();
        t.set_to(Some(Chain::Polygon));
        t.set_from(Some(Chain::Polygon));
        assert_eq!(t.from(), Some(Chain::Polygon));
        assert_eq!(t.to(), None);
        assert!(!t.can_submit());

        t.set_to(Some(Chain::Base));
        t.amount.set("3");
        assert!(t.can_submit());
        t.set_to(Some(Chain::Polygon));
        assert_eq!(t.from(), None);
        assert!(!t.can_submit());
    }

    #[test]
    fn transfer_needs_amount() {
        let mut t = TransferForm::default();
        let mut n = Vec::new();
        t.set_from(Some(Chain::Ethereum));
        t.set_to(Some(Chain::Base));
        assert!(!t.can_submit());
        assert!(!t.submit(&mut n));
        assert!(n.is_empty());

        t.amount.set("  ");
        assert!(!t.submit(&mut n));
        t.amount.set("0.5");
        assert!(t.submit(&mut n));
        assert_eq!(n[0].description, "Transferring 0.5 from ethereum to base...");
    }

    #[test]
    fn malformed_amounts_disable_mint_and_transfer() {
        let mut m = MintForm { chain: Some(Chain::Polygon), ..Default::default() };
        let mut t = TransferForm::default();
        t.set_from(Some(Chain::Polygon));
        t.set_to(Some(Chain::Solana));
        let mut n = Vec::new();

        for bad in ["1.2.3", ".", "", "-1", "inf", "NaN"] {
            m.amount.set(bad);
            t.amount.set(bad);
            assert!(!m.can_submit(), "mint accepted {bad:?}");
            assert!(!t.can_submit(), "transfer accepted {bad:?}");
            assert!(!m.submit(&mut n));
            assert!(!t.submit(&mut n));
        }
        assert!(n.is_empty());

        for good in ["0", "12", "1.5", ".5", "2."] {
            m.amount.set(good);
            t.amount.set(good);
            assert!(m.can_submit(), "mint refused {good:?}");
            assert!(t.can_submit(), "transfer refused {good:?}");
        }
    }

    #[test]
    fn destination_options_exclude_source() {
        let mut t = TransferForm::default();
        t.set_from(Some(Chain::Bitcoin));
        let opts = t.to_options(crate::chain::LOOKUP_CHAINS);
        assert!(!opts.contains(&Chain::Bitcoin));
        assert_eq!(opts.len(), crate::chain::LOOKUP_CHAINS.len() - 1);
    }
}
