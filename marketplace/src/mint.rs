//! Minting new KryptoBirdz.
use alloy::primitives::U256;
use tracing::{info, warn};

use crate::{
    chain::{KryptoBirdzContract, MintReceipt, WalletProvider},
    Alert, Error, LoadPhase, Marketplace,
};

impl<W: WalletProvider, A: Alert> Marketplace<W, A> {
    /// Mints `krypto_bird` from the current account.
    ///
    /// Once the transaction is mined the URI is appended to the local list;
    /// the collection is not read again.
    ///
    /// # Errors
    ///
    /// * [`Error::NotLoaded`] - If the collection has not been loaded.
    /// * Any error raised while sending the transaction or waiting for its
    ///   receipt. The local list is left unchanged.
    pub async fn mint(
        &mut self,
        krypto_bird: String,
    ) -> Result<MintReceipt, Error> {
        let (Some(contract), Some(account), LoadPhase::Loaded) =
            (self.contract.as_ref(), self.state.account, self.state.phase)
        else {
            return Err(Error::NotLoaded);
        };

        info!(%account, uri = %krypto_bird, "minting KryptoBird");
        let receipt = contract.mint(account, krypto_bird.clone()).await?;

        let expected = U256::from(self.state.krypto_birdz.len() + 1);
        match receipt.token_id {
            Some(token_id) if token_id != expected => warn!(
                %token_id,
                %expected,
                "minted token id does not match its position in the local list"
            ),
            None => warn!(
                tx = %receipt.transaction_hash,
                "mint receipt carries no Transfer event"
            ),
            Some(_) => {}
        }

        self.state.krypto_birdz.push(krypto_bird);
        info!(tx = %receipt.transaction_hash, "minted KryptoBird");
        Ok(receipt)
    }
}
