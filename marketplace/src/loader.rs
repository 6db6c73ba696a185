//! Loading the collection from the chain.
use alloy::primitives::U256;
use tracing::{debug, info, warn};

use crate::{
    alert::{Alert, CONTRACT_NOT_DEPLOYED},
    chain::{KryptoBirdzContract, WalletProvider},
    ContractArtifact, Error, LoadPhase, MarketplaceState,
};

/// What the marketplace runs against: the detected wallet, if any, and the
/// artifact naming where the collection is deployed.
#[derive(Debug)]
pub struct MarketplaceContext<W> {
    pub(crate) wallet: Option<W>,
    pub(crate) artifact: ContractArtifact,
}

impl<W: WalletProvider> MarketplaceContext<W> {
    /// Creates a context from a detected `wallet` and `artifact`.
    pub fn new(wallet: Option<W>, artifact: ContractArtifact) -> Self {
        Self { wallet, artifact }
    }
}

/// The KryptoBirdz marketplace client.
pub struct Marketplace<W: WalletProvider, A> {
    pub(crate) context: MarketplaceContext<W>,
    pub(crate) alert: A,
    pub(crate) contract: Option<W::Contract>,
    pub(crate) state: MarketplaceState,
}

impl<W: WalletProvider, A: Alert> Marketplace<W, A> {
    /// Creates a marketplace that has not loaded anything yet.
    pub fn new(context: MarketplaceContext<W>, alert: A) -> Self {
        Self {
            context,
            alert,
            contract: None,
            state: MarketplaceState::default(),
        }
    }

    /// Returns what the marketplace currently knows.
    #[must_use]
    pub fn state(&self) -> &MarketplaceState {
        &self.state
    }

    /// Loads the account, the collection handle and every minted URI.
    ///
    /// URIs are read one at a time, in token order. Without a wallet nothing
    /// happens and the phase stays [`LoadPhase::NotLoaded`]. When a read
    /// fails, the URIs read before it stay in the state.
    ///
    /// # Errors
    ///
    /// * [`Error::NoAccount`] - If the wallet exposes no account.
    /// * [`Error::ContractNotDeployed`] - If the artifact has no deployment
    ///   for the connected network. The user is alerted and only the account
    ///   is kept.
    /// * Any error raised while talking to the chain.
    pub async fn load(&mut self) -> Result<(), Error> {
        let Some(wallet) = self.context.wallet.as_ref() else {
            warn!("no wallet detected, the marketplace is disabled");
            return Ok(());
        };
        self.state.phase = LoadPhase::ProviderReady;

        let fetched = Self::fetch(
            wallet,
            &self.context.artifact,
            &self.alert,
            &mut self.state,
        )
        .await;
        match fetched {
            Ok(contract) => {
                self.contract = Some(contract);
                self.state.phase = LoadPhase::Loaded;
                info!(
                    total_supply = %self.state.total_supply,
                    "loaded KryptoBirdz"
                );
                Ok(())
            }
            Err(e) => {
                self.state.phase = LoadPhase::LoadFailed;
                Err(e)
            }
        }
    }

    async fn fetch(
        wallet: &W,
        artifact: &ContractArtifact,
        alert: &A,
        state: &mut MarketplaceState,
    ) -> Result<W::Contract, Error> {
        let account =
            wallet.accounts().await?.first().copied().ok_or(Error::NoAccount)?;
        state.account = Some(account);
        debug!(%account, "using account");

        let network_id = wallet.network_id().await?;
        let Some(address) = artifact.address_for(network_id) else {
            alert.alert(CONTRACT_NOT_DEPLOYED);
            return Err(Error::ContractNotDeployed { network_id });
        };
        let contract = wallet.contract(address);
        state.contract_address = Some(address);

        let total_supply = contract.total_supply().await?;
        state.total_supply = total_supply;
        state.krypto_birdz.clear();

        let mut i = U256::ONE;
        while i <= total_supply {
            let krypto_bird = contract.krypto_birdz(i - U256::ONE).await?;
            debug!(token_id = %i, uri = %krypto_bird, "read KryptoBird");
            state.krypto_birdz.push(krypto_bird);
            i += U256::ONE;
        }

        Ok(contract)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use alloy::primitives::{address, uint, Address};

    use super::*;
    use crate::{
        alert::tests::RecordingAlert,
        chain::tests::{MockChain, MockWallet},
    };

    pub(crate) const NETWORK_ID: u64 = 5777;
    pub(crate) const ALICE: Address =
        address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
    const KRYPTOBIRDZ: Address =
        address!("5FbDB2315678afecb367f032d93F642f64180aa3");

    pub(crate) fn artifact() -> ContractArtifact {
        ContractArtifact::from_json(&format!(
            r#"{{
                "contractName": "KryptoBirdz",
                "abi": [],
                "networks": {{ "{NETWORK_ID}": {{ "address": "{KRYPTOBIRDZ}" }} }}
            }}"#
        ))
        .expect("should parse the artifact")
    }

    pub(crate) fn marketplace(
        chain: &MockChain,
        network_id: u64,
    ) -> Marketplace<MockWallet, RecordingAlert> {
        let wallet = MockWallet {
            accounts: vec![ALICE],
            network_id,
            chain: chain.clone(),
        };
        Marketplace::new(
            MarketplaceContext::new(Some(wallet), artifact()),
            RecordingAlert::default(),
        )
    }

    #[tokio::test]
    async fn does_nothing_without_wallet() {
        let mut marketplace: Marketplace<MockWallet, RecordingAlert> =
            Marketplace::new(
                MarketplaceContext::new(None, artifact()),
                RecordingAlert::default(),
            );

        marketplace.load().await.expect("should not fail without a wallet");

        assert_eq!(&MarketplaceState::default(), marketplace.state());
        assert!(marketplace.alert.messages().is_empty());
    }

    #[tokio::test]
    async fn reads_each_krypto_bird_in_order() {
        let expected = ["https...1", "https...2", "https...3", "https...4"];
        let chain = MockChain::with_krypto_birdz(&expected);
        let mut marketplace = marketplace(&chain, NETWORK_ID);

        marketplace.load().await.expect("should load the collection");

        let state = marketplace.state();
        assert_eq!(LoadPhase::Loaded, state.phase);
        assert_eq!(Some(ALICE), state.account);
        assert_eq!(Some(KRYPTOBIRDZ), state.contract_address);
        assert_eq!(uint!(4_U256), state.total_supply);
        assert_eq!(chain.krypto_birdz(), state.krypto_birdz);
        assert_eq!(
            vec![U256::ZERO, uint!(1_U256), uint!(2_U256), uint!(3_U256)],
            chain.reads()
        );
    }

    #[tokio::test]
    async fn loads_empty_collection() {
        let chain = MockChain::default();
        let mut marketplace = marketplace(&chain, NETWORK_ID);

        marketplace.load().await.expect("should load the collection");

        assert_eq!(LoadPhase::Loaded, marketplace.state().phase);
        assert!(marketplace.state().krypto_birdz.is_empty());
        assert!(chain.reads().is_empty());
    }

    #[tokio::test]
    async fn reload_replaces_krypto_birdz() {
        let chain = MockChain::with_krypto_birdz(&["https...1"]);
        let mut marketplace = marketplace(&chain, NETWORK_ID);
        marketplace.load().await.expect("should load the collection");

        chain.mint_directly(ALICE, "https...2");
        marketplace.load().await.expect("should reload the collection");

        assert_eq!(
            vec!["https...1".to_owned(), "https...2".to_owned()],
            marketplace.state().krypto_birdz
        );
        assert_eq!(uint!(2_U256), marketplace.state().total_supply);
    }

    #[tokio::test]
    async fn alerts_when_contract_is_not_deployed() {
        let chain = MockChain::with_krypto_birdz(&["https...1"]);
        let mut marketplace = marketplace(&chain, 1);

        let err = marketplace
            .load()
            .await
            .expect_err("should fail on an unknown network");

        assert!(matches!(err, Error::ContractNotDeployed { network_id: 1 }));
        assert_eq!(
            vec![CONTRACT_NOT_DEPLOYED.to_owned()],
            marketplace.alert.messages()
        );

        let state = marketplace.state();
        assert_eq!(LoadPhase::LoadFailed, state.phase);
        assert_eq!(Some(ALICE), state.account);
        assert_eq!(None, state.contract_address);
        assert_eq!(U256::ZERO, state.total_supply);
        assert!(state.krypto_birdz.is_empty());
        assert!(marketplace.contract.is_none());
        assert!(chain.reads().is_empty());
    }

    #[tokio::test]
    async fn error_when_a_read_fails_midway() {
        let chain = MockChain::with_krypto_birdz(&[
            "https...1",
            "https...2",
            "https...3",
            "https...4",
        ]);
        chain.fail_read_at(uint!(2_U256));
        let mut marketplace = marketplace(&chain, NETWORK_ID);

        let err = marketplace
            .load()
            .await
            .expect_err("should fail when a read fails");

        assert!(matches!(
            err,
            Error::Io(ref e) if e.kind() == std::io::ErrorKind::ConnectionReset
        ));
        let state = marketplace.state();
        assert_eq!(LoadPhase::LoadFailed, state.phase);
        assert!(marketplace.contract.is_none());
        assert_eq!(
            vec![U256::ZERO, uint!(1_U256), uint!(2_U256)],
            chain.reads()
        );
        assert_eq!(
            vec!["https...1".to_owned(), "https...2".to_owned()],
            state.krypto_birdz
        );
        assert!(marketplace.alert.messages().is_empty());
    }

    #[tokio::test]
    async fn error_when_wallet_has_no_account() {
        let chain = MockChain::default();
        let wallet =
            MockWallet { accounts: vec![], network_id: NETWORK_ID, chain };
        let mut marketplace = Marketplace::new(
            MarketplaceContext::new(Some(wallet), artifact()),
            RecordingAlert::default(),
        );

        let err = marketplace
            .load()
            .await
            .expect_err("should fail without an account");

        assert!(matches!(err, Error::NoAccount));
        assert_eq!(LoadPhase::LoadFailed, marketplace.state().phase);
        assert_eq!(None, marketplace.state().account);
    }
}
