use crate::constants::{DEFAULT_HASH_METHOD, PAYLOAD_SEPARATOR};
use crate::digest::{DigestProvider, Sha2Digest};
use crate::error::Result;
use std::fmt::{self, Display};
use std::sync::Arc;

/// `"{previous_hash},{name},{data}"`, the bytes a block hash covers.
pub fn canonical_payload<T: Display, U: Display>(
    previous_hash: &str,
    name: &T,
    data: &U,
) -> String {
    format!("{previous_hash}{PAYLOAD_SEPARATOR}{name}{PAYLOAD_SEPARATOR}{data}")
}

/// Hash `(previous_hash, name, data)` with `method` from `provider`.
///
/// Provider failures are converted into [`ChainError`](crate::ChainError)
/// here and nowhere else.
pub fn compute_block_hash<P, T, U>(
    provider: &P,
    method: &str,
    previous_hash: &str,
    name: &T,
    data: &U,
) -> Result<String>
where
    P: DigestProvider + ?Sized,
    T: Display,
    U: Display,
{
    let payload = canonical_payload(previous_hash, name, data);
    Ok(provider.digest(method, payload.as_bytes())?)
}

/// A digest provider paired with the algorithm name a chain hashes with.
#[derive(Clone)]
pub struct HashEngine {
    provider: Arc<dyn DigestProvider>,
    method: String,
}

impl HashEngine {
    pub fn new(provider: Arc<dyn DigestProvider>, method: impl Into<String>) -> Self {
        Self {
            provider,
            method: method.into(),
        }
    }

    /// SHA-2 engine for `method`. The name is not checked until first use.
    pub fn sha2(method: impl Into<String>) -> Self {
        Self::new(Arc::new(Sha2Digest), method)
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn block_hash<T: Display, U: Display>(
        &self,
        previous_hash: &str,
        name: &T,
        data: &U,
    ) -> Result<String> {
        compute_block_hash(self.provider.as_ref(), &self.method, previous_hash, name, data)
    }
}

impl Default for HashEngine {
    fn default() -> Self {
        Self::sha2(DEFAULT_HASH_METHOD)
    }
}

impl fmt::Debug for HashEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashEngine")
            .field("method", &self.method)
            .finish_non_exhaustive()
    }
}
