//! Known chains and their display metadata.
//!
//! Chains are a closed set. Configured chain lists are parsed into [`Chain`]
//! values when the config is loaded, so nothing downstream deals in raw strings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Chain {
    MasterChain,
    Bitcoin,
    Ethereum,
    Polygon,
    Harmony,
    Arbitrum,
    Base,
    Solana,
    Avalanche,
}

/// Display metadata for one chain: `value` is the wire/config id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainInfo {
    pub value: &'static str,
    pub label: &'static str,
    pub symbol: &'static str,
}

/// Chains offered by the launch form.
pub const LAUNCH_CHAINS: &[Chain] = &[
    Chain::Bitcoin,
    Chain::Ethereum,
    Chain::Polygon,
    Chain::Harmony,
    Chain::Arbitrum,
    Chain::Base,
    Chain::Solana,
    Chain::Avalanche,
];

/// Chains offered on the lookup screen (mint/transfer). MasterChain comes first.
pub const LOOKUP_CHAINS: &[Chain] = &[
    Chain::MasterChain,
    Chain::Bitcoin,
    Chain::Ethereum,
    Chain::Polygon,
    Chain::Harmony,
    Chain::Arbitrum,
    Chain::Base,
    Chain::Solana,
    Chain::Avalanche,
];

/// The static "Supported Chains" panel on the lookup screen.
pub const SUPPORTED_CHAINS: &[Chain] = &[Chain::MasterChain, Chain::Polygon, Chain::Harmony];

impl Chain {
    pub const fn info(self) -> ChainInfo {
        let (value, label, symbol) = match self {
            Chain::MasterChain => ("masterchain", "MasterChain", "MAS"),
            Chain::Bitcoin => ("bitcoin", "Bitcoin", "BTC"),
            Chain::Ethereum => ("ethereum", "Ethereum", "ETH"),
            Chain::Polygon => ("polygon", "Polygon", "MATIC"),
            Chain::Harmony => ("harmony", "Harmony", "ONE"),
            Chain::Arbitrum => ("arbitrum", "Arbitrum", "ARB"),
            Chain::Base => ("base", "Base", "BASE"),
            Chain::Solana => ("solana", "Solana", "SOL"),
            Chain::Avalanche => ("avalanche", "Avalanche", "AVAX"),
        };
        ChainInfo { value, label, symbol }
    }

    pub fn value(self) -> &'static str { self.info().value }
    pub fn label(self) -> &'static str { self.info().label }
    pub fn symbol(self) -> &'static str { self.info().symbol }

    /// "Label (SYM)", the form used in selectors.
    pub fn option_label(self) -> String {
        format!("{} ({})", self.label(), self.symbol())
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown chain `{0}`")]
pub struct UnknownChain(pub String);

impl FromStr for Chain {
    type Err = UnknownChain;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        LOOKUP_CHAINS
            .iter()
            .copied()
            .find(|c| c.value() == wanted)
            .ok_or_else(|| UnknownChain(s.to_string()))
    }
}

/// Cycle through `list` starting from `current`. `None` picks the first (or last) entry.
pub fn cycle(list: &[Chain], current: Option<Chain>, forward: bool) -> Option<Chain> {
    if list.is_empty() {
        return None;
    }
    let len = list.len();
    let next = match current.and_then(|c| list.iter().position(|x| *x == c)) {
        None if forward => 0,
        None => len - 1,
        Some(i) if forward => (i + 1) % len,
        Some(i) => (i + len - 1) % len,
    };
    Some(list[next])
}
