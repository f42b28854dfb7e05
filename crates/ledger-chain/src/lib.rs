//! Append-only, hash-chained block ledger core.
//!
//! A [`Chain`] is an immutable sequence of [`Block`]s where each block names
//! its predecessor's hash and carries a hash of
//! `"{previous_hash},{name},{data}"`. Chains only grow by validated appends
//! and every transition returns a new chain or a [`ChainError`].
//!
//! ```
//! use ledger_chain::{create_genesis_chain, ChainError};
//!
//! let chain = create_genesis_chain("SHA-256", "author", "genesis")?;
//! let block = chain.generate_block("AAA-9999", "100km")?;
//! let chain = chain.append_block(block)?;
//! assert_eq!(chain.len(), 2);
//! # Ok::<(), ChainError>(())
//! ```

pub mod block;
pub mod chain;
pub mod config;
pub mod constants;
pub mod digest;
pub mod error;
pub mod hashing;
pub mod offload;
pub mod operations;

pub use block::Block;
pub use chain::Chain;
pub use config::ChainConfig;
pub use digest::{DigestProvider, HashMethod, Sha2Digest};
pub use error::{ChainError, DigestError, InvalidBlockReason, Result};
pub use hashing::{canonical_payload, compute_block_hash, HashEngine};
pub use operations::create_genesis_chain;
