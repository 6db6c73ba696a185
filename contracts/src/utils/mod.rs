//! Introspection helpers shared by the token contracts.
pub mod introspection;
