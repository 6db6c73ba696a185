//! The KryptoBirdz collection.
//!
//! An enumerable ERC-721 where anyone can mint a token for a URI nobody
//! minted before. Token ids are assigned sequentially starting at `1`, and
//! `kryptoBirdz(i)` returns the URI of token `i + 1`.
#![cfg_attr(not(any(test, feature = "export-abi")), no_main)]
#![allow(clippy::used_underscore_items)]
extern crate alloc;

use alloc::string::String;

use alloy_primitives::{aliases::B32, Address, U256};
use kryptobirdz_contracts::{
    token::erc721::{
        self,
        extensions::{
            enumerable, Erc721Enumerable, Erc721Metadata, IErc721Enumerable,
            IErc721Metadata,
        },
        Erc721, IErc721,
    },
    utils::introspection::erc165::IErc165,
};
pub use sol::*;
use stylus_sdk::{
    prelude::*,
    storage::{StorageBool, StorageMap, StorageString, StorageVec},
};

/// Name of the collection.
pub const NAME: &str = "KryptoBird";
/// Symbol of the collection.
pub const SYMBOL: &str = "KBIRDZ";

#[cfg_attr(coverage_nightly, coverage(off))]
mod sol {
    use alloy_sol_macro::sol;

    sol! {
        /// Indicates that `krypto_bird` has already been minted.
        ///
        /// * `krypto_bird` - URI of the token.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error KryptoBirdAlreadyExists(string krypto_bird);

        /// Indicates a `kryptoBirdz` query past the end of the collection.
        ///
        /// * `index` - Zero-based position that was requested.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error KryptoBirdOutOfBoundsIndex(uint256 index);
    }
}

/// A [`KryptoBirdz`] error.
#[derive(SolidityError, Debug)]
pub enum Error {
    /// Indicates that an address can't be an owner.
    InvalidOwner(erc721::ERC721InvalidOwner),
    /// Indicates a `token_id` whose `owner` is the zero address.
    NonexistentToken(erc721::ERC721NonexistentToken),
    /// Indicates an error related to the ownership over a particular token.
    IncorrectOwner(erc721::ERC721IncorrectOwner),
    /// Indicates a failure with the token `sender`.
    InvalidSender(erc721::ERC721InvalidSender),
    /// Indicates a failure with the token `receiver`.
    InvalidReceiver(erc721::ERC721InvalidReceiver),
    /// Indicates a failure with the `operator`'s approval.
    InsufficientApproval(erc721::ERC721InsufficientApproval),
    /// Indicates a failure with the `approver` of a token to be approved.
    InvalidApprover(erc721::ERC721InvalidApprover),
    /// Indicates a failure with the `operator` to be approved.
    InvalidOperator(erc721::ERC721InvalidOperator),
    /// Indicates an owner or global enumeration query out of bounds.
    OutOfBoundsIndex(enumerable::ERC721OutOfBoundsIndex),
    /// Indicates that the URI has already been minted.
    AlreadyExists(KryptoBirdAlreadyExists),
    /// Indicates a `kryptoBirdz` query past the end of the collection.
    KryptoBirdOutOfBoundsIndex(KryptoBirdOutOfBoundsIndex),
}

impl From<erc721::Error> for Error {
    fn from(value: erc721::Error) -> Self {
        match value {
            erc721::Error::InvalidOwner(e) => Error::InvalidOwner(e),
            erc721::Error::NonexistentToken(e) => Error::NonexistentToken(e),
            erc721::Error::IncorrectOwner(e) => Error::IncorrectOwner(e),
            erc721::Error::InvalidSender(e) => Error::InvalidSender(e),
            erc721::Error::InvalidReceiver(e) => Error::InvalidReceiver(e),
            erc721::Error::InsufficientApproval(e) => {
                Error::InsufficientApproval(e)
            }
            erc721::Error::InvalidApprover(e) => Error::InvalidApprover(e),
            erc721::Error::InvalidOperator(e) => Error::InvalidOperator(e),
        }
    }
}

impl From<enumerable::Error> for Error {
    fn from(value: enumerable::Error) -> Self {
        match value {
            enumerable::Error::OutOfBoundsIndex(e) => {
                Error::OutOfBoundsIndex(e)
            }
        }
    }
}

/// State of the [`KryptoBirdz`] collection.
#[entrypoint]
#[storage]
pub struct KryptoBirdz {
    erc721: Erc721,
    enumerable: Erc721Enumerable,
    metadata: Erc721Metadata,
    /// URIs in mint order; position `i` belongs to token `i + 1`.
    krypto_birdz: StorageVec<StorageString>,
    /// URIs that have been minted.
    krypto_birdz_exists: StorageMap<String, StorageBool>,
}

#[public]
#[implements(IErc721<Error = Error>, IErc721Enumerable<Error = Error>, IErc721Metadata, IErc165)]
impl KryptoBirdz {
    /// Names the collection `KryptoBird` with symbol `KBIRDZ`.
    #[constructor]
    pub fn constructor(&mut self) {
        self.metadata.constructor(NAME.into(), SYMBOL.into());
    }

    /// Mints the next token id to the caller for the `krypto_bird` URI.
    ///
    /// # Errors
    ///
    /// * [`Error::AlreadyExists`] - If `krypto_bird` was minted before.
    ///
    /// # Events
    ///
    /// * [`erc721::Transfer`].
    pub fn mint(&mut self, krypto_bird: String) -> Result<(), Error> {
        if self.krypto_birdz_exists.get(krypto_bird.clone()) {
            return Err(KryptoBirdAlreadyExists { krypto_bird }.into());
        }

        self.krypto_birdz.grow().set_str(&krypto_bird);
        let token_id = U256::from(self.krypto_birdz.len());
        let to = self.vm().msg_sender();
        self._mint(to, token_id)?;
        self.krypto_birdz_exists.setter(krypto_bird).set(true);
        Ok(())
    }

    /// Returns the URI stored at zero-based `index`.
    ///
    /// # Errors
    ///
    /// * [`Error::KryptoBirdOutOfBoundsIndex`] - If `index` is past the end.
    pub fn krypto_birdz(&self, index: U256) -> Result<String, Error> {
        self.krypto_birdz
            .getter(index)
            .map(|krypto_bird| krypto_bird.get_string())
            .ok_or(KryptoBirdOutOfBoundsIndex { index }.into())
    }

    /// Returns the URI of `token_id`.
    ///
    /// # Errors
    ///
    /// * [`Error::NonexistentToken`] - If the token does not exist.
    #[selector(name = "tokenURI")]
    pub fn token_uri(&self, token_id: U256) -> Result<String, Error> {
        self.erc721._require_owned(token_id)?;
        self.krypto_birdz(token_id - U256::ONE)
    }
}

impl KryptoBirdz {
    fn _mint(&mut self, to: Address, token_id: U256) -> Result<(), Error> {
        self.erc721._mint(to, token_id)?;
        self.enumerable._record_mint(to, token_id);
        Ok(())
    }
}

#[public]
impl IErc721 for KryptoBirdz {
    type Error = Error;

    fn balance_of(&self, owner: Address) -> Result<U256, Error> {
        Ok(self.erc721.balance_of(owner)?)
    }

    fn owner_of(&self, token_id: U256) -> Result<Address, Error> {
        Ok(self.erc721.owner_of(token_id)?)
    }

    fn transfer_from(
        &mut self,
        from: Address,
        to: Address,
        token_id: U256,
    ) -> Result<(), Error> {
        self.erc721.transfer_from(from, to, token_id)?;
        self.enumerable._record_transfer(from, to, token_id);
        Ok(())
    }

    fn approve(&mut self, to: Address, token_id: U256) -> Result<(), Error> {
        Ok(self.erc721.approve(to, token_id)?)
    }

    fn set_approval_for_all(
        &mut self,
        operator: Address,
        approved: bool,
    ) -> Result<(), Error> {
        Ok(self.erc721.set_approval_for_all(operator, approved)?)
    }

    fn get_approved(&self, token_id: U256) -> Result<Address, Error> {
        Ok(self.erc721.get_approved(token_id)?)
    }

    fn is_approved_for_all(&self, owner: Address, operator: Address) -> bool {
        self.erc721.is_approved_for_all(owner, operator)
    }
}

#[public]
impl IErc721Enumerable for KryptoBirdz {
    type Error = Error;

    fn token_of_owner_by_index(
        &self,
        owner: Address,
        index: U256,
    ) -> Result<U256, Error> {
        Ok(self.enumerable.token_of_owner_by_index(owner, index)?)
    }

    fn total_supply(&self) -> U256 {
        self.enumerable.total_supply()
    }

    fn token_by_index(&self, index: U256) -> Result<U256, Error> {
        Ok(self.enumerable.token_by_index(index)?)
    }
}

#[public]
impl IErc721Metadata for KryptoBirdz {
    fn name(&self) -> String {
        self.metadata.name()
    }

    fn symbol(&self) -> String {
        self.metadata.symbol()
    }
}

#[public]
impl IErc165 for KryptoBirdz {
    fn supports_interface(&self, interface_id: B32) -> bool {
        self.erc721.supports_interface(interface_id)
            || self.enumerable.supports_interface(interface_id)
            || self.metadata.supports_interface(interface_id)
    }
}
