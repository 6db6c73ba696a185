//! Client bindings for the KryptoBirdz contract.
#![allow(missing_docs)]

use alloy::sol;

sol!(
    #[sol(rpc)]
    contract KryptoBirdz {
        function totalSupply() external view returns (uint256 totalSupply);
        function kryptoBirdz(uint256 index) external view returns (string kryptoBird);
        function mint(string kryptoBird) external;

        event Transfer(address indexed from, address indexed to, uint256 indexed tokenId);

        error KryptoBirdAlreadyExists(string kryptoBird);
        error KryptoBirdOutOfBoundsIndex(uint256 index);
    }
);
