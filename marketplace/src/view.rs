//! Text rendering of the marketplace.
use std::fmt;

use crate::{
    chain::WalletProvider, Alert, LoadPhase, Marketplace, MarketplaceState,
};

/// Renders a [`MarketplaceState`] as a header followed by one card per
/// KryptoBird.
#[derive(Debug, Clone, Copy)]
pub struct View<'a> {
    state: &'a MarketplaceState,
}

impl<'a> View<'a> {
    /// Creates a view of `state`.
    #[must_use]
    pub fn new(state: &'a MarketplaceState) -> Self {
        Self { state }
    }
}

impl<W: WalletProvider, A: Alert> Marketplace<W, A> {
    /// Returns a printable view of the marketplace.
    #[must_use]
    pub fn view(&self) -> View<'_> {
        View::new(&self.state)
    }
}

impl fmt::Display for View<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "KryptoBirdz - NFT Marketplace")?;
        match self.state.account {
            Some(account) => writeln!(f, "account:  {account}")?,
            None => writeln!(f, "account:  not connected")?,
        }
        if let Some(contract) = self.state.contract_address {
            writeln!(f, "contract: {contract}")?;
        }

        if self.state.phase != LoadPhase::Loaded {
            return writeln!(f, "\nno KryptoBirdz loaded");
        }

        for (position, krypto_bird) in self.state.krypto_birdz.iter().enumerate()
        {
            writeln!(f)?;
            writeln!(f, "#{}", position + 1)?;
            writeln!(f, "  image:    {krypto_bird}")?;
            writeln!(f, "  download: {krypto_bird}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloy::primitives::{address, uint};

    use super::*;

    #[test]
    fn renders_cards_in_token_order() {
        let state = MarketplaceState {
            account: Some(address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266")),
            contract_address: Some(address!(
                "5FbDB2315678afecb367f032d93F642f64180aa3"
            )),
            total_supply: uint!(2_U256),
            krypto_birdz: vec!["https...1".to_owned(), "https...2".to_owned()],
            phase: LoadPhase::Loaded,
        };

        let expected = "\
KryptoBirdz - NFT Marketplace
account:  0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266
contract: 0x5FbDB2315678afecb367f032d93F642f64180aa3

#1
  image:    https...1
  download: https...1

#2
  image:    https...2
  download: https...2
";
        assert_eq!(expected, View::new(&state).to_string());
    }

    #[test]
    fn renders_placeholder_when_not_loaded() {
        let state = MarketplaceState::default();

        let expected = "\
KryptoBirdz - NFT Marketplace
account:  not connected

no KryptoBirdz loaded
";
        assert_eq!(expected, View::new(&state).to_string());
    }
}
