use crate::constants::DEFAULT_HASH_METHOD;
use crate::digest::HashMethod;
use crate::error::Result;
use crate::hashing::HashEngine;
use serde::{Deserialize, Serialize};

/// Settings an embedding application can deserialize from wherever it keeps
/// its configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainConfig {
    pub hash_method: String,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            hash_method: DEFAULT_HASH_METHOD.to_string(),
        }
    }
}

impl ChainConfig {
    /// SHA-2 engine for the configured method. Unknown methods fail here
    /// rather than on the first hash.
    pub fn engine(&self) -> Result<HashEngine> {
        let method: HashMethod = self.hash_method.parse()?;
        Ok(HashEngine::sha2(method.name()))
    }
}
