//! Deployment descriptor shipped with the compiled contract.
use std::{collections::BTreeMap, fs, path::Path};

use alloy::primitives::{Address, B256};
use serde::Deserialize;

use crate::Error;

/// Default location of the artifact, relative to the working directory.
pub const DEFAULT_ARTIFACT_PATH: &str = "abis/KryptoBirdz.json";

/// A Truffle-style contract artifact.
///
/// Only the network table is interpreted; the ABI is carried as-is.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractArtifact {
    /// Name of the compiled contract.
    pub contract_name: String,
    /// Interface description of the contract.
    #[serde(default)]
    pub abi: serde_json::Value,
    /// Deployments keyed by network id.
    #[serde(default)]
    pub networks: BTreeMap<String, Deployment>,
}

/// Where the contract lives on a single network.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deployment {
    /// Address of the deployed contract.
    pub address: Address,
    /// Hash of the deployment transaction.
    #[serde(default)]
    pub transaction_hash: Option<B256>,
}

impl ContractArtifact {
    /// Parses an artifact from its JSON representation.
    ///
    /// # Errors
    ///
    /// * [`Error::Json`] - If `json` is not a valid artifact.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses the artifact stored at `path`.
    ///
    /// # Errors
    ///
    /// * [`Error::Io`] - If the file can't be read.
    /// * [`Error::Json`] - If the file is not a valid artifact.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Returns the deployed address for `network_id`, if any.
    #[must_use]
    pub fn address_for(&self, network_id: u64) -> Option<Address> {
        self.networks
            .get(&network_id.to_string())
            .map(|deployment| deployment.address)
    }
}
