//! Ownership, balances and approvals of an ERC-721 collection.
//!
//! [`Erc721`] does not know about enumeration. A collection that embeds
//! [`extensions::Erc721Enumerable`] next to it updates the enumeration itself
//! after every successful [`Erc721::_mint`] or [`IErc721::transfer_from`].
use alloc::vec::Vec;

use alloy_primitives::{aliases::B32, fixed_bytes, Address, U256};
pub use sol::*;
use stylus_sdk::{
    call::MethodError,
    prelude::*,
    storage::{StorageAddress, StorageBool, StorageMap, StorageU256},
    stylus_core::log,
};

use crate::utils::introspection::erc165::{self, IErc165};

pub mod extensions;

/// ERC-165 id advertised for [`IErc721`].
pub const INTERFACE_ID: B32 = fixed_bytes!("80ac58cd");

#[cfg_attr(coverage_nightly, coverage(off))]
mod sol {
    use alloy_sol_macro::sol;

    sol! {
        /// A token changed hands. `from` is zero on mint.
        #[derive(Debug)]
        #[allow(missing_docs)]
        event Transfer(
            address indexed from,
            address indexed to,
            uint256 indexed token_id
        );

        /// `approved` may now move `token_id` on behalf of `owner`.
        #[derive(Debug)]
        #[allow(missing_docs)]
        event Approval(
            address indexed owner,
            address indexed approved,
            uint256 indexed token_id
        );

        /// `operator` was granted or denied access to every token of `owner`.
        #[derive(Debug)]
        #[allow(missing_docs)]
        event ApprovalForAll(address indexed owner, address indexed operator, bool approved);
    }

    // Error names and fields follow ERC-6093 so wallets can decode them.
    sol! {
        /// Balance query for the zero address.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error ERC721InvalidOwner(address owner);

        /// `token_id` was never minted.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error ERC721NonexistentToken(uint256 token_id);

        /// `sender` tried to move `token_id`, which belongs to `owner`.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error ERC721IncorrectOwner(address sender, uint256 token_id, address owner);

        /// Mint of a token id that is already owned.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error ERC721InvalidSender(address sender);

        /// Transfer or mint to the zero address.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error ERC721InvalidReceiver(address receiver);

        /// `operator` may not move `token_id`.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error ERC721InsufficientApproval(address operator, uint256 token_id);

        /// `approver` is neither the owner nor an operator of the owner.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error ERC721InvalidApprover(address approver);

        /// The zero address can't be made an operator.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error ERC721InvalidOperator(address operator);
    }
}

/// Reverts raised by [`Erc721`].
#[derive(SolidityError, Debug)]
pub enum Error {
    /// Balance query for the zero address.
    InvalidOwner(ERC721InvalidOwner),
    /// The token was never minted.
    NonexistentToken(ERC721NonexistentToken),
    /// The `from` of a transfer does not own the token.
    IncorrectOwner(ERC721IncorrectOwner),
    /// The token id is already owned.
    InvalidSender(ERC721InvalidSender),
    /// The receiver is the zero address.
    InvalidReceiver(ERC721InvalidReceiver),
    /// The caller may not move the token.
    InsufficientApproval(ERC721InsufficientApproval),
    /// The caller may not approve for the token.
    InvalidApprover(ERC721InvalidApprover),
    /// The operator is the zero address.
    InvalidOperator(ERC721InvalidOperator),
}

#[cfg_attr(coverage_nightly, coverage(off))]
impl MethodError for Error {
    fn encode(self) -> Vec<u8> {
        self.into()
    }
}

/// Token ownership state.
#[storage]
pub struct Erc721 {
    owners: StorageMap<U256, StorageAddress>,
    balances: StorageMap<Address, StorageU256>,
    token_approvals: StorageMap<U256, StorageAddress>,
    operators: StorageMap<Address, StorageMap<Address, StorageBool>>,
}

unsafe impl TopLevelStorage for Erc721 {}

/// The ERC-721 methods a collection exposes.
///
/// Safe transfers are not part of this surface.
pub trait IErc721 {
    /// Revert type of the implementor.
    type Error: Into<Vec<u8>>;

    /// Number of tokens held by `owner`.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidOwner`] - If `owner` is [`Address::ZERO`].
    fn balance_of(&self, owner: Address) -> Result<U256, Self::Error>;

    /// Current owner of `token_id`.
    ///
    /// # Errors
    ///
    /// * [`Error::NonexistentToken`] - If the token was never minted.
    fn owner_of(&self, token_id: U256) -> Result<Address, Self::Error>;

    /// Moves `token_id` from `from` to `to`.
    ///
    /// The caller must own the token, be approved for it, or be an operator
    /// of its owner. The token's single approval is cleared.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidReceiver`] - If `to` is [`Address::ZERO`].
    /// * [`Error::NonexistentToken`] - If the token was never minted.
    /// * [`Error::InsufficientApproval`] - If the caller may not move it.
    /// * [`Error::IncorrectOwner`] - If `from` is not the owner.
    ///
    /// # Events
    ///
    /// * [`Transfer`].
    fn transfer_from(
        &mut self,
        from: Address,
        to: Address,
        token_id: U256,
    ) -> Result<(), Self::Error>;

    /// Lets `to` move `token_id`. Passing [`Address::ZERO`] revokes.
    ///
    /// # Errors
    ///
    /// * [`Error::NonexistentToken`] - If the token was never minted.
    /// * [`Error::InvalidApprover`] - If the caller is neither the owner nor
    ///   one of its operators.
    ///
    /// # Events
    ///
    /// * [`Approval`].
    fn approve(&mut self, to: Address, token_id: U256)
        -> Result<(), Self::Error>;

    /// Grants or revokes `operator` over every token of the caller.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidOperator`] - If `operator` is [`Address::ZERO`].
    ///
    /// # Events
    ///
    /// * [`ApprovalForAll`].
    fn set_approval_for_all(
        &mut self,
        operator: Address,
        approved: bool,
    ) -> Result<(), Self::Error>;

    /// Account approved for `token_id`, or [`Address::ZERO`].
    ///
    /// # Errors
    ///
    /// * [`Error::NonexistentToken`] - If the token was never minted.
    fn get_approved(&self, token_id: U256) -> Result<Address, Self::Error>;

    /// Whether `operator` manages every token of `owner`.
    fn is_approved_for_all(&self, owner: Address, operator: Address) -> bool;
}

#[public]
#[implements(IErc721<Error = Error>, IErc165)]
impl Erc721 {}

#[public]
impl IErc721 for Erc721 {
    type Error = Error;

    fn balance_of(&self, owner: Address) -> Result<U256, Error> {
        if owner.is_zero() {
            return Err(ERC721InvalidOwner { owner }.into());
        }
        Ok(self.balances.get(owner))
    }

    fn owner_of(&self, token_id: U256) -> Result<Address, Error> {
        self._require_owned(token_id)
    }

    fn transfer_from(
        &mut self,
        from: Address,
        to: Address,
        token_id: U256,
    ) -> Result<(), Error> {
        if to.is_zero() {
            return Err(ERC721InvalidReceiver { receiver: to }.into());
        }
        let owner = self._require_owned(token_id)?;
        let operator = self.vm().msg_sender();
        if !self.may_move(owner, operator, token_id) {
            return Err(
                ERC721InsufficientApproval { operator, token_id }.into()
            );
        }
        if owner != from {
            return Err(
                ERC721IncorrectOwner { sender: from, token_id, owner }.into()
            );
        }

        self.token_approvals.delete(token_id);
        self.set_balance(from, |balance| balance - U256::ONE);
        self.set_balance(to, |balance| balance + U256::ONE);
        self.owners.setter(token_id).set(to);
        log(self.vm(), Transfer { from, to, token_id });
        Ok(())
    }

    fn approve(&mut self, to: Address, token_id: U256) -> Result<(), Error> {
        let owner = self._require_owned(token_id)?;
        let approver = self.vm().msg_sender();
        if approver != owner && !self.is_approved_for_all(owner, approver) {
            return Err(ERC721InvalidApprover { approver }.into());
        }

        self.token_approvals.setter(token_id).set(to);
        log(self.vm(), Approval { owner, approved: to, token_id });
        Ok(())
    }

    fn set_approval_for_all(
        &mut self,
        operator: Address,
        approved: bool,
    ) -> Result<(), Error> {
        if operator.is_zero() {
            return Err(ERC721InvalidOperator { operator }.into());
        }

        let owner = self.vm().msg_sender();
        self.operators.setter(owner).setter(operator).set(approved);
        log(self.vm(), ApprovalForAll { owner, operator, approved });
        Ok(())
    }

    fn get_approved(&self, token_id: U256) -> Result<Address, Error> {
        self._require_owned(token_id)?;
        Ok(self.token_approvals.get(token_id))
    }

    fn is_approved_for_all(&self, owner: Address, operator: Address) -> bool {
        self.operators.getter(owner).get(operator)
    }
}

#[public]
impl IErc165 for Erc721 {
    fn supports_interface(&self, interface_id: B32) -> bool {
        interface_id == INTERFACE_ID || interface_id == erc165::INTERFACE_ID
    }
}

impl Erc721 {
    /// Creates `token_id` owned by `to`.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidReceiver`] - If `to` is [`Address::ZERO`].
    /// * [`Error::InvalidSender`] - If `token_id` is already owned.
    ///
    /// # Events
    ///
    /// * [`Transfer`] from [`Address::ZERO`].
    pub fn _mint(&mut self, to: Address, token_id: U256) -> Result<(), Error> {
        if to.is_zero() {
            return Err(ERC721InvalidReceiver { receiver: to }.into());
        }
        if !self.owners.get(token_id).is_zero() {
            return Err(ERC721InvalidSender { sender: Address::ZERO }.into());
        }

        self.set_balance(to, |balance| balance + U256::ONE);
        self.owners.setter(token_id).set(to);
        log(self.vm(), Transfer { from: Address::ZERO, to, token_id });
        Ok(())
    }

    /// Owner of `token_id`.
    ///
    /// # Errors
    ///
    /// * [`Error::NonexistentToken`] - If the token was never minted.
    pub fn _require_owned(&self, token_id: U256) -> Result<Address, Error> {
        let owner = self.owners.get(token_id);
        if owner.is_zero() {
            return Err(ERC721NonexistentToken { token_id }.into());
        }
        Ok(owner)
    }

    fn may_move(
        &self,
        owner: Address,
        operator: Address,
        token_id: U256,
    ) -> bool {
        operator == owner
            || self.is_approved_for_all(owner, operator)
            || self.token_approvals.get(token_id) == operator
    }

    // Balances stay within `0..=minted`, so the arithmetic can't wrap.
    fn set_balance(
        &mut self,
        account: Address,
        next: impl FnOnce(U256) -> U256,
    ) {
        let mut balance = self.balances.setter(account);
        let value = next(balance.get());
        balance.set(value);
    }
}
