//! Local view of the collection.
use alloy::primitives::{Address, U256};

/// Where the marketplace is in its bootstrap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadPhase {
    /// No wallet, or loading has not started.
    #[default]
    NotLoaded,
    /// A wallet is available and loading is under way.
    ProviderReady,
    /// Every minted URI has been read.
    Loaded,
    /// Loading stopped, see the error returned by the load.
    LoadFailed,
}

/// What the marketplace knows about the collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarketplaceState {
    /// Account acting in the marketplace.
    pub account: Option<Address>,
    /// Address of the collection on the connected network.
    pub contract_address: Option<Address>,
    /// Supply reported when the collection was loaded. Mints made afterwards
    /// are not counted.
    pub total_supply: U256,
    /// Minted URIs, where position `i` holds token `i + 1`.
    pub krypto_birdz: Vec<String>,
    /// Bootstrap progress.
    pub phase: LoadPhase,
}
