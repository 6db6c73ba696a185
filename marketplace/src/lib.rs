//! Command-line marketplace for the KryptoBirdz collection.
//!
//! The client detects a wallet endpoint, resolves where the collection is
//! deployed on the connected network, reads every minted URI in order and
//! mints new ones.
//!
//! ```rust,no_run
//! use kryptobirdz_marketplace::{
//!     detect_provider, ContractArtifact, Marketplace, MarketplaceContext,
//!     StderrAlert, WalletConfig,
//! };
//!
//! # async fn run() -> Result<(), kryptobirdz_marketplace::Error> {
//! let config = WalletConfig {
//!     rpc_url: Some("http://localhost:8547".to_owned()),
//!     private_key: None,
//! };
//! let artifact = ContractArtifact::load("abis/KryptoBirdz.json")?;
//! let context = MarketplaceContext::new(detect_provider(&config)?, artifact);
//!
//! let mut marketplace = Marketplace::new(context, StderrAlert);
//! marketplace.load().await?;
//! println!("{}", marketplace.view());
//! # Ok(())
//! # }
//! ```
pub mod abi;
pub mod alert;
pub mod artifact;
pub mod chain;
pub mod config;
pub mod error;
pub mod loader;
pub mod mint;
pub mod provider;
pub mod state;
pub mod view;

pub use alert::{Alert, StderrAlert};
pub use artifact::ContractArtifact;
pub use chain::{KryptoBirdzContract, MintReceipt, WalletProvider};
pub use config::{Cli, Command, WalletConfig};
pub use error::Error;
pub use loader::{Marketplace, MarketplaceContext};
pub use provider::{detect_provider, AlloyWallet};
pub use state::{LoadPhase, MarketplaceState};
pub use view::View;
