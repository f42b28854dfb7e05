use crate::block::Block;
use crate::constants::{GENESIS_INDEX, GENESIS_PREVIOUS_HASH};
use crate::error::{ChainError, InvalidBlockReason, Result};
use crate::hashing::HashEngine;
use rayon::prelude::*;
use std::fmt::Display;
use std::sync::Arc;
use tracing::{debug, warn};

/// Immutable, append-only sequence of blocks. Transitions return a new chain.
#[derive(Debug)]
pub struct Chain<T, U> {
    blocks: Vec<Arc<Block<T, U>>>,
    engine: HashEngine,
}

impl<T, U> Chain<T, U> {
    /// Empty chain hashing with SHA-256.
    pub fn new() -> Self {
        Self::with_engine(HashEngine::default())
    }

    pub fn with_engine(engine: HashEngine) -> Self {
        Self {
            blocks: Vec::new(),
            engine,
        }
    }

    pub fn engine(&self) -> &HashEngine {
        &self.engine
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn blocks(&self) -> &[Arc<Block<T, U>>] {
        &self.blocks
    }

    pub fn iter(&self) -> impl Iterator<Item = &Block<T, U>> {
        self.blocks.iter().map(Arc::as_ref)
    }

    /// Start the chain with a caller-trusted first block.
    pub fn append_genesis(&self, block: Block<T, U>) -> Result<Self> {
        if !self.blocks.is_empty() {
            return Err(ChainError::GenesisAlreadyExists);
        }
        Ok(self.grow(block))
    }

    /// The trailing `min(count, len)` blocks, oldest first.
    pub fn last_blocks(&self, count: usize) -> Result<&[Arc<Block<T, U>>]> {
        if self.blocks.is_empty() {
            return Err(ChainError::EmptyChain);
        }
        let start = self.blocks.len() - count.min(self.blocks.len());
        Ok(&self.blocks[start..])
    }

    pub fn last_block(&self) -> Result<&Block<T, U>> {
        self.last_blocks(1)?
            .last()
            .map(Arc::as_ref)
            .ok_or(ChainError::EmptyChain)
    }

    fn grow(&self, block: Block<T, U>) -> Self {
        let mut blocks = Vec::with_capacity(self.blocks.len() + 1);
        blocks.extend(self.blocks.iter().cloned());
        blocks.push(Arc::new(block));
        Self {
            blocks,
            engine: self.engine.clone(),
        }
    }
}

impl<T, U> Chain<T, U>
where
    T: Display + PartialEq,
    U: Display + PartialEq,
{
    /// Check `candidate` against `previous`, which must be a member of this
    /// chain. Returns the candidate unchanged on success.
    pub fn validate_block<'a>(
        &self,
        previous: &Block<T, U>,
        candidate: &'a Block<T, U>,
    ) -> Result<&'a Block<T, U>> {
        if !self.blocks.iter().rev().any(|b| b.as_ref() == previous) {
            return Err(ChainError::BlockNotFound);
        }
        check_link(&self.engine, previous, candidate)?;
        Ok(candidate)
    }

    /// Append `candidate` after the current last block.
    pub fn append_block(&self, candidate: Block<T, U>) -> Result<Self> {
        // The tail is a member by construction, so only the link is checked.
        let last = self.last_block()?;
        if let Err(e) = check_link(&self.engine, last, &candidate) {
            warn!(index = candidate.index(), error = %e, "rejected block");
            return Err(e);
        }
        debug!(index = candidate.index(), hash = candidate.hash(), "appended block");
        Ok(self.grow(candidate))
    }
}

impl<T, U> Chain<T, U>
where
    T: Display + PartialEq + Send + Sync,
    U: Display + PartialEq + Send + Sync,
{
    /// Re-check every invariant over the whole chain: genesis shape, index
    /// continuity, previous-hash links and recomputed hashes. Reports the
    /// earliest offending block.
    pub fn verify(&self) -> Result<()> {
        let Some(first) = self.blocks.first() else {
            return Ok(());
        };
        if first.index() != GENESIS_INDEX || first.previous_hash() != GENESIS_PREVIOUS_HASH {
            return Err(ChainError::InvalidBlock(InvalidBlockReason::GenesisMismatch));
        }

        let earliest = self
            .blocks
            .par_windows(2)
            .enumerate()
            .filter_map(|(i, pair)| {
                let (prev, next) = (pair[0].as_ref(), pair[1].as_ref());
                let checked = if prev.index().checked_add(1) != Some(next.index()) {
                    Err(ChainError::InvalidBlock(InvalidBlockReason::IndexMismatch))
                } else {
                    check_link(&self.engine, prev, next)
                };
                checked.err().map(|e| (i, e))
            })
            .min_by_key(|(i, _)| *i);

        match earliest {
            Some((_, e)) => Err(e),
            None => Ok(()),
        }
    }
}

impl<T, U> Clone for Chain<T, U> {
    fn clone(&self) -> Self {
        Self {
            blocks: self.blocks.clone(),
            engine: self.engine.clone(),
        }
    }
}

impl<T, U> Default for Chain<T, U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq, U: PartialEq> PartialEq for Chain<T, U> {
    fn eq(&self, other: &Self) -> bool {
        self.blocks == other.blocks
    }
}

/// Previous-hash and recomputed-hash checks. Either mismatch alone rejects.
fn check_link<T: Display, U: Display>(
    engine: &HashEngine,
    previous: &Block<T, U>,
    candidate: &Block<T, U>,
) -> Result<()> {
    let expected = engine.block_hash(previous.hash(), candidate.name(), candidate.data())?;
    if candidate.previous_hash() != previous.hash() {
        return Err(ChainError::InvalidBlock(InvalidBlockReason::PreviousHashMismatch));
    }
    if candidate.hash() != expected {
        return Err(ChainError::InvalidBlock(InvalidBlockReason::HashMismatch));
    }
    Ok(())
}
