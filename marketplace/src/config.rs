//! Command-line and environment configuration.
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::artifact::DEFAULT_ARTIFACT_PATH;

/// Browse and mint KryptoBirdz.
#[derive(Debug, Parser)]
#[command(name = "kryptobirdz", version, about)]
pub struct Cli {
    /// Wallet connection settings.
    #[command(flatten)]
    pub wallet: WalletConfig,

    /// Path to the contract artifact holding deployment addresses.
    #[arg(long, env = "KRYPTOBIRDZ_ARTIFACT", default_value = DEFAULT_ARTIFACT_PATH)]
    pub artifact: PathBuf,

    /// Action to run once the collection is loaded.
    #[command(subcommand)]
    pub command: Command,
}

/// How to reach the wallet.
#[derive(Debug, Clone, Default, Args)]
pub struct WalletConfig {
    /// JSON-RPC endpoint of the wallet. Without it no wallet is detected.
    #[arg(long, env = "RPC_URL")]
    pub rpc_url: Option<String>,

    /// Hex-encoded key used to sign mint transactions locally. When absent,
    /// the endpoint's own accounts are used.
    #[arg(long, env = "PRIVATE_KEY", hide_env_values = true)]
    pub private_key: Option<String>,
}

/// Marketplace actions.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Show every KryptoBird in the collection.
    List,
    /// Mint a KryptoBird for `uri`, then show the collection.
    Mint {
        /// Location of the KryptoBird image.
        uri: String,
    },
}
