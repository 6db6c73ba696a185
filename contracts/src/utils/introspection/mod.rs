//! Interface detection.
pub mod erc165;
