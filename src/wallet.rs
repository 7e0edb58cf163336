/// Connection state reported by the wallet provider.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalletState {
    pub connected: bool,
    pub address: Option<String>,
}

impl WalletState {
    pub fn connected(address: impl Into<String>) -> Self {
        Self { connected: true, address: Some(address.into()) }
    }

    /// `0x742d...f44e` style display form.
    pub fn short_address(&self) -> Option<String> {
        self.address.as_deref().map(shorten_address)
    }
}

/// First six and last four chars joined by `...`; short inputs pass through.
pub fn shorten_address(addr: &str) -> String {
    let chars: Vec<char> = addr.chars().collect();
    if chars.len() <= 10 {
        return addr.to_string();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}...{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shortens_long_addresses() {
        let w = WalletState::connected("0x742d35Cc6634C0532925a3b844Bc454e4438f44e");
        assert_eq!(w.short_address().as_deref(), Some("0x742d...f44e"));
        assert_eq!(shorten_address("0xabc"), "0xabc");
    }

    #[test]
    fn default_wallet_is_disconnected() {
        let w = WalletState::default();
        assert!(!w.connected);
        assert_eq!(w.short_address(), None);
    }
}
