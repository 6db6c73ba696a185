//! Seams between the marketplace and the chain.
//!
//! [`WalletProvider`] stands for the connected wallet and
//! [`KryptoBirdzContract`] for a handle on the deployed collection. The
//! alloy-backed implementations live in [`crate::provider`].
use alloy::primitives::{Address, B256, U256};
use async_trait::async_trait;

use crate::Error;

/// Outcome of a mined `mint` transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MintReceipt {
    /// Hash of the mint transaction.
    pub transaction_hash: B256,
    /// Token id carried by the receipt's `Transfer` event, if one was found.
    pub token_id: Option<U256>,
}

/// A connected wallet.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Contract handle produced by [`WalletProvider::contract`].
    type Contract: KryptoBirdzContract;

    /// Returns the accounts the wallet can act for, preferred one first.
    ///
    /// # Errors
    ///
    /// May fail if the wallet endpoint can't be reached.
    async fn accounts(&self) -> Result<Vec<Address>, Error>;

    /// Returns the id of the network the wallet is connected to.
    ///
    /// # Errors
    ///
    /// May fail if the wallet endpoint can't be reached.
    async fn network_id(&self) -> Result<u64, Error>;

    /// Binds a contract handle to `address`.
    fn contract(&self, address: Address) -> Self::Contract;
}

/// The KryptoBirdz methods the marketplace calls.
#[async_trait]
pub trait KryptoBirdzContract: Send + Sync {
    /// Address the handle is bound to.
    fn address(&self) -> Address;

    /// Reads `totalSupply()`.
    ///
    /// # Errors
    ///
    /// May fail if the call is rejected.
    async fn total_supply(&self) -> Result<U256, Error>;

    /// Reads `kryptoBirdz(index)`, the URI at zero-based `index`.
    ///
    /// # Errors
    ///
    /// May fail if the call is rejected.
    async fn krypto_birdz(&self, index: U256) -> Result<String, Error>;

    /// Sends `mint(krypto_bird)` from `from` and waits for its receipt.
    ///
    /// # Errors
    ///
    /// May fail if the transaction is rejected or reverts.
    async fn mint(
        &self,
        from: Address,
        krypto_bird: String,
    ) -> Result<MintReceipt, Error>;
}

#[cfg(test)]
pub(crate) mod tests {
    //! In-memory wallet and collection.
    use std::sync::{Arc, Mutex};

    use super::*;

    #[derive(Debug, Default)]
    struct Ledger {
        krypto_birdz: Vec<String>,
        owners: Vec<Address>,
        reads: Vec<U256>,
        failing_read: Option<U256>,
        omit_transfer_events: bool,
    }

    /// An in-memory collection that rejects duplicate URIs.
    #[derive(Debug, Clone, Default)]
    pub(crate) struct MockChain {
        ledger: Arc<Mutex<Ledger>>,
    }

    impl MockChain {
        pub(crate) fn with_krypto_birdz(krypto_birdz: &[&str]) -> Self {
            let chain = Self::default();
            for krypto_bird in krypto_birdz {
                chain.mint_directly(Address::ZERO, krypto_bird);
            }
            chain
        }

        /// Mints outside of the marketplace, as another client would.
        pub(crate) fn mint_directly(&self, owner: Address, krypto_bird: &str) {
            let mut ledger = self.ledger.lock().expect("should lock ledger");
            ledger.krypto_birdz.push(krypto_bird.to_owned());
            ledger.owners.push(owner);
        }

        /// Makes the read of `index` fail as a dropped connection would.
        pub(crate) fn fail_read_at(&self, index: U256) {
            self.ledger.lock().expect("should lock ledger").failing_read =
                Some(index);
        }

        /// Mints keep succeeding but their receipts carry no `Transfer`.
        pub(crate) fn omit_transfer_events(&self) {
            self.ledger.lock().expect("should lock ledger").omit_transfer_events =
                true;
        }

        pub(crate) fn reads(&self) -> Vec<U256> {
            self.ledger.lock().expect("should lock ledger").reads.clone()
        }

        pub(crate) fn krypto_birdz(&self) -> Vec<String> {
            self.ledger.lock().expect("should lock ledger").krypto_birdz.clone()
        }

        pub(crate) fn owners(&self) -> Vec<Address> {
            self.ledger.lock().expect("should lock ledger").owners.clone()
        }
    }

    pub(crate) struct MockContract {
        address: Address,
        chain: MockChain,
    }

    #[async_trait]
    impl KryptoBirdzContract for MockContract {
        fn address(&self) -> Address {
            self.address
        }

        async fn total_supply(&self) -> Result<U256, Error> {
            let ledger = self.chain.ledger.lock().expect("should lock ledger");
            Ok(U256::from(ledger.krypto_birdz.len()))
        }

        async fn krypto_birdz(&self, index: U256) -> Result<String, Error> {
            let mut ledger =
                self.chain.ledger.lock().expect("should lock ledger");
            ledger.reads.push(index);
            if ledger.failing_read == Some(index) {
                return Err(Error::Io(std::io::Error::new(
                    std::io::ErrorKind::ConnectionReset,
                    "connection reset by peer",
                )));
            }
            let position: usize = index.to();
            Ok(ledger.krypto_birdz[position].clone())
        }

        async fn mint(
            &self,
            from: Address,
            krypto_bird: String,
        ) -> Result<MintReceipt, Error> {
            let mut ledger =
                self.chain.ledger.lock().expect("should lock ledger");
            let transaction_hash =
                B256::with_last_byte(u8::try_from(ledger.krypto_birdz.len() + 1)
                    .expect("should fit in a byte"));
            if ledger.krypto_birdz.contains(&krypto_bird) {
                return Err(Error::MintReverted(transaction_hash));
            }
            ledger.krypto_birdz.push(krypto_bird);
            ledger.owners.push(from);
            let token_id = (!ledger.omit_transfer_events)
                .then(|| U256::from(ledger.krypto_birdz.len()));
            Ok(MintReceipt { transaction_hash, token_id })
        }
    }

    pub(crate) struct MockWallet {
        pub(crate) accounts: Vec<Address>,
        pub(crate) network_id: u64,
        pub(crate) chain: MockChain,
    }

    #[async_trait]
    impl WalletProvider for MockWallet {
        type Contract = MockContract;

        async fn accounts(&self) -> Result<Vec<Address>, Error> {
            Ok(self.accounts.clone())
        }

        async fn network_id(&self) -> Result<u64, Error> {
            Ok(self.network_id)
        }

        fn contract(&self, address: Address) -> MockContract {
            MockContract { address, chain: self.chain.clone() }
        }
    }
}
