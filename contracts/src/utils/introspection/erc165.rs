//! ERC-165 interface detection.
//!
//! Each building block answers for its own interface id and for
//! [`INTERFACE_ID`]. A collection ORs the answers of the blocks it embeds.

use alloy_primitives::{aliases::B32, fixed_bytes};

/// Id of `supportsInterface(bytes4)`.
pub const INTERFACE_ID: B32 = fixed_bytes!("01ffc9a7");

/// Answers which interfaces a contract implements.
pub trait IErc165 {
    /// Whether the contract implements `interface_id`.
    ///
    /// Collections re-export this under `#[public]`:
    ///
    /// ```rust,ignore
    /// #[public]
    /// impl IErc165 for MyCollection {
    ///     fn supports_interface(&self, interface_id: B32) -> bool {
    ///         self.erc721.supports_interface(interface_id)
    ///             || self.enumerable.supports_interface(interface_id)
    ///     }
    /// }
    /// ```
    fn supports_interface(&self, interface_id: B32) -> bool;
}

#[cfg(test)]
mod tests {
    use alloy_primitives::aliases::B32;
    use stylus_sdk::function_selector;

    #[test]
    fn interface_id_matches_selector() {
        let selector: B32 =
            function_selector!("supportsInterface", B32).into();
        assert_eq!(super::INTERFACE_ID, selector);
    }
}
