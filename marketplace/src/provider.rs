//! Wallet detection backed by an alloy JSON-RPC provider.
use std::fmt;

use alloy::{
    network::EthereumWallet,
    primitives::{Address, U256},
    providers::{DynProvider, Provider, ProviderBuilder},
    rpc::types::TransactionReceipt,
    signers::local::PrivateKeySigner,
    transports::http::reqwest::Url,
};
use async_trait::async_trait;
use tracing::{debug, warn};

use crate::{
    abi::KryptoBirdz::{self, KryptoBirdzInstance},
    chain::{KryptoBirdzContract, MintReceipt, WalletProvider},
    Error, WalletConfig,
};

/// Detects the wallet described by `config`.
///
/// Returns `None` when no endpoint is configured. Nothing is requested from
/// the endpoint at this point.
///
/// # Errors
///
/// * [`Error::InvalidRpcUrl`] - If the endpoint is not a valid URL.
/// * [`Error::InvalidPrivateKey`] - If the signing key can't be parsed.
pub fn detect_provider(
    config: &WalletConfig,
) -> Result<Option<AlloyWallet>, Error> {
    let Some(rpc_url) = config.rpc_url.as_deref() else {
        warn!("no wallet endpoint configured, set RPC_URL to connect one");
        return Ok(None);
    };
    let url: Url = rpc_url
        .parse()
        .map_err(|_| Error::InvalidRpcUrl(rpc_url.to_owned()))?;

    let wallet = match config.private_key.as_deref() {
        Some(private_key) => {
            let signer: PrivateKeySigner = private_key
                .parse()
                .map_err(|e| Error::InvalidPrivateKey(format!("{e}")))?;
            let signer_address = signer.address();
            let provider = ProviderBuilder::new()
                .wallet(EthereumWallet::from(signer))
                .connect_http(url)
                .erased();
            AlloyWallet { provider, signer: Some(signer_address) }
        }
        None => {
            let provider = ProviderBuilder::new().connect_http(url).erased();
            AlloyWallet { provider, signer: None }
        }
    };

    debug!(%rpc_url, signer = ?wallet.signer, "detected wallet");
    Ok(Some(wallet))
}

/// A wallet reached over JSON-RPC.
#[derive(Clone)]
pub struct AlloyWallet {
    provider: DynProvider,
    signer: Option<Address>,
}

impl fmt::Debug for AlloyWallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlloyWallet")
            .field("signer", &self.signer)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl WalletProvider for AlloyWallet {
    type Contract = AlloyContract;

    async fn accounts(&self) -> Result<Vec<Address>, Error> {
        if let Some(signer) = self.signer {
            return Ok(vec![signer]);
        }
        Ok(self.provider.get_accounts().await?)
    }

    async fn network_id(&self) -> Result<u64, Error> {
        Ok(self.provider.get_net_version().await?)
    }

    fn contract(&self, address: Address) -> AlloyContract {
        AlloyContract {
            instance: KryptoBirdz::new(address, self.provider.clone()),
        }
    }
}

/// Handle on a deployed KryptoBirdz contract.
#[derive(Clone)]
pub struct AlloyContract {
    instance: KryptoBirdzInstance<DynProvider>,
}

#[async_trait]
impl KryptoBirdzContract for AlloyContract {
    fn address(&self) -> Address {
        *self.instance.address()
    }

    async fn total_supply(&self) -> Result<U256, Error> {
        Ok(self.instance.totalSupply().call().await?)
    }

    async fn krypto_birdz(&self, index: U256) -> Result<String, Error> {
        Ok(self.instance.kryptoBirdz(index).call().await?)
    }

    async fn mint(
        &self,
        from: Address,
        krypto_bird: String,
    ) -> Result<MintReceipt, Error> {
        let receipt = self
            .instance
            .mint(krypto_bird)
            .from(from)
            .send()
            .await?
            .get_receipt()
            .await?;

        mint_receipt(self.address(), &receipt)
    }
}

/// Reads the outcome of a `mint` sent to `contract` from its receipt.
///
/// The token id comes from the first `Transfer` log emitted by `contract`.
fn mint_receipt(
    contract: Address,
    receipt: &TransactionReceipt,
) -> Result<MintReceipt, Error> {
    let transaction_hash = receipt.transaction_hash;
    if !receipt.status() {
        return Err(Error::MintReverted(transaction_hash));
    }

    let token_id = receipt
        .inner
        .logs()
        .iter()
        .filter(|log| log.address() == contract)
        .find_map(|log| {
            log.log_decode::<KryptoBirdz::Transfer>()
                .ok()
                .map(|transfer| transfer.inner.data.tokenId)
        });
    Ok(MintReceipt { transaction_hash, token_id })
}
