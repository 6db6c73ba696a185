//! Errors raised by the marketplace client.
use alloy::{
    primitives::B256,
    providers::PendingTransactionError,
    transports::TransportError,
};
use thiserror::Error;

/// A marketplace client error.
#[derive(Debug, Error)]
pub enum Error {
    /// The configured RPC endpoint is not a valid URL.
    #[error("invalid RPC endpoint `{0}`")]
    InvalidRpcUrl(String),

    /// The configured signing key can't be parsed.
    #[error("invalid private key: {0}")]
    InvalidPrivateKey(String),

    /// The wallet exposes no account to act with.
    #[error("wallet exposes no account")]
    NoAccount,

    /// The artifact has no deployment for the connected network.
    #[error("smart contract not deployed to network {network_id}")]
    ContractNotDeployed {
        /// Id of the connected network.
        network_id: u64,
    },

    /// An action needs the collection to be loaded first.
    #[error("marketplace is not loaded")]
    NotLoaded,

    /// The mint transaction was mined but reverted.
    #[error("mint transaction {0} reverted")]
    MintReverted(B256),

    /// A contract call or transaction was rejected.
    #[error(transparent)]
    Contract(#[from] alloy::contract::Error),

    /// The wallet endpoint failed to answer.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Waiting for a transaction receipt failed.
    #[error(transparent)]
    PendingTransaction(#[from] PendingTransactionError),

    /// Reading the contract artifact failed.
    #[error("failed to read contract artifact: {0}")]
    Io(#[from] std::io::Error),

    /// The contract artifact is malformed.
    #[error("malformed contract artifact: {0}")]
    Json(#[from] serde_json::Error),
}
