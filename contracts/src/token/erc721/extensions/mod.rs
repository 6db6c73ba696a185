//! Common extensions to the ERC-721 standard.
pub mod enumerable;
pub mod metadata;

pub use enumerable::{Erc721Enumerable, IErc721Enumerable};
pub use metadata::{Erc721Metadata, IErc721Metadata};
