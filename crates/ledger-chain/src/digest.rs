use crate::error::DigestError;
use sha2::{Digest, Sha224, Sha256, Sha384, Sha512, Sha512_224, Sha512_256};
use std::fmt;
use std::str::FromStr;

/// SHA-2 algorithms understood by [`Sha2Digest`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum HashMethod {
    Sha224,
    #[default]
    Sha256,
    Sha384,
    Sha512,
    Sha512_224,
    Sha512_256,
}

impl HashMethod {
    pub const ALL: [HashMethod; 6] = [
        HashMethod::Sha224,
        HashMethod::Sha256,
        HashMethod::Sha384,
        HashMethod::Sha512,
        HashMethod::Sha512_224,
        HashMethod::Sha512_256,
    ];

    pub fn name(self) -> &'static str {
        match self {
            HashMethod::Sha224 => "SHA-224",
            HashMethod::Sha256 => "SHA-256",
            HashMethod::Sha384 => "SHA-384",
            HashMethod::Sha512 => "SHA-512",
            HashMethod::Sha512_224 => "SHA-512/224",
            HashMethod::Sha512_256 => "SHA-512/256",
        }
    }

    pub fn digest_hex(self, bytes: &[u8]) -> String {
        match self {
            HashMethod::Sha224 => hex::encode(Sha224::digest(bytes)),
            HashMethod::Sha256 => hex::encode(Sha256::digest(bytes)),
            HashMethod::Sha384 => hex::encode(Sha384::digest(bytes)),
            HashMethod::Sha512 => hex::encode(Sha512::digest(bytes)),
            HashMethod::Sha512_224 => hex::encode(Sha512_224::digest(bytes)),
            HashMethod::Sha512_256 => hex::encode(Sha512_256::digest(bytes)),
        }
    }
}

impl fmt::Display for HashMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashMethod {
    type Err = DigestError;

    /// Names are matched case-insensitively. Unknown names are an error,
    /// never a fallback to the default.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HashMethod::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| DigestError::Unavailable(s.to_string()))
    }
}

/// Source of digest functions, selected by algorithm name.
pub trait DigestProvider: Send + Sync {
    fn digest(&self, method: &str, bytes: &[u8]) -> Result<String, DigestError>;
}

/// Default provider backed by the `sha2` crate.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sha2Digest;

impl DigestProvider for Sha2Digest {
    fn digest(&self, method: &str, bytes: &[u8]) -> Result<String, DigestError> {
        let method: HashMethod = method.parse()?;
        Ok(method.digest_hex(bytes))
    }
}

/// Digest `bytes` with the default provider.
pub fn digest_hex(method: &str, bytes: &[u8]) -> Result<String, DigestError> {
    Sha2Digest.digest(method, bytes)
}
