/*!
# KryptoBirdz contracts

The ERC-721 pieces the KryptoBirdz collection is assembled from:

- [`token::erc721::Erc721`] for ownership, balances and approvals,
- [`token::erc721::extensions::Erc721Enumerable`] for mint-order and
  per-owner token lists,
- [`token::erc721::extensions::Erc721Metadata`] for the collection name and
  symbol.

Embed them in an `#[entrypoint]` contract and record every mint and transfer
with the enumeration as well:

```ignore
use kryptobirdz_contracts::token::erc721::{
    extensions::Erc721Enumerable, Erc721,
};
use stylus_sdk::prelude::*;

#[entrypoint]
#[storage]
struct MyCollection {
    erc721: Erc721,
    enumerable: Erc721Enumerable,
}

impl MyCollection {
    fn mint(&mut self, to: Address, token_id: U256) -> Result<(), Error> {
        self.erc721._mint(to, token_id)?;
        self.enumerable._record_mint(to, token_id);
        Ok(())
    }
}
```
*/

#![allow(clippy::module_name_repetitions, clippy::used_underscore_items)]
#![cfg_attr(not(any(test, feature = "std", feature = "export-abi")), no_std)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![deny(rustdoc::broken_intra_doc_links)]
extern crate alloc;

pub mod token;
pub mod utils;
