//! Collection name and symbol.
//!
//! `tokenURI` is left to the embedding contract, which knows where its URIs
//! live.

use alloc::string::String;

use alloy_primitives::{aliases::B32, fixed_bytes};
use stylus_sdk::{prelude::*, storage::StorageString};

use crate::utils::introspection::erc165::{self, IErc165};

/// ERC-165 id advertised for the metadata interface.
///
/// The id covers `name()`, `symbol()` and `tokenURI(uint256)`.
pub const INTERFACE_ID: B32 = fixed_bytes!("5b5e139f");

/// Name and symbol storage.
#[storage]
pub struct Erc721Metadata {
    name: StorageString,
    symbol: StorageString,
}

/// Name and symbol getters of an ERC-721 collection.
pub trait IErc721Metadata {
    /// Human readable collection name.
    fn name(&self) -> String;

    /// Ticker of the collection.
    fn symbol(&self) -> String;
}

#[public]
#[implements(IErc721Metadata, IErc165)]
impl Erc721Metadata {}

#[public]
impl IErc721Metadata for Erc721Metadata {
    fn name(&self) -> String {
        self.name.get_string()
    }

    fn symbol(&self) -> String {
        self.symbol.get_string()
    }
}

#[public]
impl IErc165 for Erc721Metadata {
    fn supports_interface(&self, interface_id: B32) -> bool {
        interface_id == INTERFACE_ID || interface_id == erc165::INTERFACE_ID
    }
}

impl Erc721Metadata {
    /// Stores `name` and `symbol`. Call it from the collection's
    /// constructor.
    pub fn constructor(&mut self, name: String, symbol: String) {
        self.name.set_str(name);
        self.symbol.set_str(symbol);
    }
}
