//! Token enumeration for an ERC-721 collection.
//!
//! [`Erc721Enumerable`] keeps a list of every token in mint order and one
//! list per owner. The embedding contract reports each mint with
//! [`Erc721Enumerable::_record_mint`] and each transfer with
//! [`Erc721Enumerable::_record_transfer`].
//!
//! An owner's list is unordered: removing a token moves the owner's last
//! token into the vacated slot.
use alloc::vec::Vec;

use alloy_primitives::{aliases::B32, fixed_bytes, Address, U256};
pub use sol::*;
use stylus_sdk::{
    call::MethodError,
    prelude::*,
    storage::{StorageMap, StorageU256, StorageVec},
};

use crate::utils::introspection::erc165::{self, IErc165};

/// ERC-165 id advertised for [`IErc721Enumerable`].
pub const INTERFACE_ID: B32 = fixed_bytes!("780e9d63");

#[cfg_attr(coverage_nightly, coverage(off))]
mod sol {
    use alloy_sol_macro::sol;

    sol! {
        /// `index` is past the end of `owner`'s tokens, or past the end of
        /// the collection when `owner` is zero.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error ERC721OutOfBoundsIndex(address owner, uint256 index);
    }
}

/// Reverts raised by [`Erc721Enumerable`].
#[derive(SolidityError, Debug)]
pub enum Error {
    /// Index query past the end of a list.
    OutOfBoundsIndex(ERC721OutOfBoundsIndex),
}

#[cfg_attr(coverage_nightly, coverage(off))]
impl MethodError for Error {
    fn encode(self) -> Vec<u8> {
        self.into()
    }
}

/// Enumeration state.
#[storage]
pub struct Erc721Enumerable {
    all_tokens: StorageVec<StorageU256>,
    owned_tokens: StorageMap<Address, StorageVec<StorageU256>>,
    /// Position of a token in its owner's list, plus one. Zero when the
    /// token is not tracked.
    slots: StorageMap<U256, StorageU256>,
}

/// Enumeration methods of an ERC-721 collection.
pub trait IErc721Enumerable {
    /// Revert type of the implementor.
    type Error: Into<Vec<u8>>;

    /// Token at `index` of `owner`'s list.
    ///
    /// # Errors
    ///
    /// * [`Error::OutOfBoundsIndex`] - If `owner` holds `index` tokens or
    ///   fewer.
    fn token_of_owner_by_index(
        &self,
        owner: Address,
        index: U256,
    ) -> Result<U256, Self::Error>;

    /// Number of minted tokens.
    fn total_supply(&self) -> U256;

    /// Token minted in position `index`, counting from zero.
    ///
    /// # Errors
    ///
    /// * [`Error::OutOfBoundsIndex`] - If `index` is not below
    ///   [`Self::total_supply`].
    fn token_by_index(&self, index: U256) -> Result<U256, Self::Error>;
}

#[public]
#[implements(IErc721Enumerable<Error = Error>, IErc165)]
impl Erc721Enumerable {}

#[public]
impl IErc721Enumerable for Erc721Enumerable {
    type Error = Error;

    fn token_of_owner_by_index(
        &self,
        owner: Address,
        index: U256,
    ) -> Result<U256, Error> {
        self.owned_tokens
            .getter(owner)
            .get(index)
            .ok_or(ERC721OutOfBoundsIndex { owner, index }.into())
    }

    fn total_supply(&self) -> U256 {
        U256::from(self.all_tokens.len())
    }

    fn token_by_index(&self, index: U256) -> Result<U256, Error> {
        self.all_tokens
            .get(index)
            .ok_or(ERC721OutOfBoundsIndex { owner: Address::ZERO, index }.into())
    }
}

#[public]
impl IErc165 for Erc721Enumerable {
    fn supports_interface(&self, interface_id: B32) -> bool {
        interface_id == INTERFACE_ID || interface_id == erc165::INTERFACE_ID
    }
}

impl Erc721Enumerable {
    /// Appends a freshly minted `token_id` to the collection and to `to`'s
    /// list.
    pub fn _record_mint(&mut self, to: Address, token_id: U256) {
        self.all_tokens.push(token_id);
        self.track(to, token_id);
    }

    /// Moves `token_id` from `from`'s list to `to`'s list. A transfer to
    /// the current owner leaves both lists untouched.
    pub fn _record_transfer(
        &mut self,
        from: Address,
        to: Address,
        token_id: U256,
    ) {
        if from == to {
            return;
        }
        self.untrack(from, token_id);
        self.track(to, token_id);
    }

    fn track(&mut self, owner: Address, token_id: U256) {
        let mut tokens = self.owned_tokens.setter(owner);
        tokens.push(token_id);
        let slot = U256::from(tokens.len());
        self.slots.setter(token_id).set(slot);
    }

    fn untrack(&mut self, owner: Address, token_id: U256) {
        let slot = self.slots.get(token_id);
        if slot.is_zero() {
            return;
        }

        let mut tokens = self.owned_tokens.setter(owner);
        let Some(last) = tokens.pop() else {
            return;
        };
        if last != token_id {
            if let Some(mut vacated) = tokens.setter(slot - U256::ONE) {
                vacated.set(last);
            }
            self.slots.setter(last).set(slot);
        }
        self.slots.delete(token_id);
    }
}
