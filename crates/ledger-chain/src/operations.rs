use crate::block::Block;
use crate::chain::Chain;
use crate::constants::{GENESIS_INDEX, GENESIS_PREVIOUS_HASH};
use crate::error::{ChainError, InvalidBlockReason, Result};
use crate::hashing::HashEngine;
use std::fmt::Display;
use tracing::{debug, info};

/// Build a one-block chain hashing with `method` from the default provider.
pub fn create_genesis_chain<T: Display, U: Display>(
    method: &str,
    name: T,
    data: U,
) -> Result<Chain<T, U>> {
    Chain::genesis(HashEngine::sha2(method), name, data)
}

impl<T: Display, U: Display> Chain<T, U> {
    /// Build a one-block chain whose genesis hash covers `("none", name, data)`.
    pub fn genesis(engine: HashEngine, name: T, data: U) -> Result<Self> {
        let hash = engine.block_hash(GENESIS_PREVIOUS_HASH, &name, &data)?;
        info!(method = engine.method(), %hash, "created genesis block");
        let block = Block::new(
            GENESIS_INDEX,
            hash,
            GENESIS_PREVIOUS_HASH.to_string(),
            name,
            data,
        );
        Chain::with_engine(engine).append_genesis(block)
    }

    /// Hash that a block carrying `name` and `data` would need to follow the
    /// current last block.
    pub fn next_block_hash(&self, name: &T, data: &U) -> Result<String> {
        let last = self.last_block()?;
        self.engine().block_hash(last.hash(), name, data)
    }

    /// Build the next candidate block. It is not appended.
    pub fn generate_block(&self, name: T, data: U) -> Result<Block<T, U>> {
        let last = self.last_block()?;
        let index = last
            .index()
            .checked_add(1)
            .ok_or(ChainError::InvalidBlock(InvalidBlockReason::IndexOverflow))?;
        let previous_hash = last.hash().to_string();
        let hash = self.next_block_hash(&name, &data)?;
        debug!(index, %hash, "generated block");
        Ok(Block::new(index, hash, previous_hash, name, data))
    }
}

impl<T, U> Chain<T, U>
where
    T: Display + PartialEq,
    U: Display + PartialEq,
{
    /// Generate the next block and append it in one step.
    pub fn push(&self, name: T, data: U) -> Result<Self> {
        let block = self.generate_block(name, data)?;
        self.append_block(block)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_HASH_METHOD;

    const GENESIS_HASH: &str = "b3a151bdb2cbb253e811e23019446bfdca91c29ebe18f3b70ebb4fed2c453c31";
    const NEXT_HASH: &str = "0b301d685da1fdf13ec3d970e371d4b064c62205cb1efad9f7537607963c210c";

    fn genesis_chain() -> Chain<&'static str, &'static str> {
        create_genesis_chain(
            DEFAULT_HASH_METHOD,
            "author: Alisson Morais",
            "GitHub: github.com/alissonfpmorais",
        )
        .unwrap()
    }

    #[test]
    fn genesis_chain_example() {
        let chain = genesis_chain();
        let genesis = chain.last_block().unwrap();
        assert_eq!(chain.len(), 1);
        assert_eq!(genesis.index(), 1);
        assert_eq!(genesis.previous_hash(), "none");
        assert_eq!(genesis.hash(), GENESIS_HASH);
        assert!(chain.verify().is_ok());
    }

    #[test]
    fn genesis_with_unknown_method() {
        let res = create_genesis_chain("ABCDEFGHIJKLMNOPQRSTUVWXYZ", "a", "b");
        assert_eq!(
            res.err(),
            Some(ChainError::DigestUnavailable(
                "ABCDEFGHIJKLMNOPQRSTUVWXYZ".to_string()
            ))
        );
    }

    #[test]
    fn next_block_hash_example() {
        let chain = genesis_chain();
        assert_eq!(chain.next_block_hash(&"AAA-9999", &"100km").unwrap(), NEXT_HASH);
    }

    #[test]
    fn next_block_hash_on_empty_chain() {
        let chain: Chain<&str, &str> = Chain::new();
        assert_eq!(
            chain.next_block_hash(&"AAA-9999", &"100km"),
            Err(ChainError::EmptyChain)
        );
    }

    #[test]
    fn generate_block_example() {
        let chain = genesis_chain();
        let block = chain.generate_block("AAA-9999", "100km").unwrap();
        assert_eq!(block.index(), 2);
        assert_eq!(block.hash(), NEXT_HASH);
        assert_eq!(block.previous_hash(), GENESIS_HASH);
        assert_eq!(*block.name(), "AAA-9999");
        assert_eq!(*block.data(), "100km");
        // generation alone does not grow the chain
        assert_eq!(chain.len(), 1);
    }

    #[test]
    fn generate_block_on_empty_chain() {
        let chain: Chain<&str, &str> = Chain::new();
        assert_eq!(
            chain.generate_block("AAA-9999", "100km"),
            Err(ChainError::EmptyChain)
        );
    }

    #[test]
    fn generate_after_max_index_is_rejected() {
        let engine = HashEngine::default();
        let hash = engine.block_hash(GENESIS_PREVIOUS_HASH, &"a", &"b").unwrap();
        let last = Block::new(u64::MAX, hash, GENESIS_PREVIOUS_HASH.to_string(), "a", "b");
        let chain = Chain::with_engine(engine).append_genesis(last).unwrap();
        assert_eq!(
            chain.generate_block("c", "d"),
            Err(ChainError::InvalidBlock(InvalidBlockReason::IndexOverflow))
        );
        assert_eq!(
            chain.push("c", "d").err(),
            Some(ChainError::InvalidBlock(InvalidBlockReason::IndexOverflow))
        );
    }

    #[test]
    fn generated_block_only_fits_its_own_chain() {
        let chain = genesis_chain();
        let block = chain.generate_block("AAA-9999", "100km").unwrap();
        let empty: Chain<&str, &str> = Chain::new();
        assert_eq!(empty.append_block(block.clone()), Err(ChainError::EmptyChain));

        let other = create_genesis_chain(DEFAULT_HASH_METHOD, "someone else", "x").unwrap();
        assert_eq!(
            other.append_block(block.clone()),
            Err(ChainError::InvalidBlock(
                InvalidBlockReason::PreviousHashMismatch
            ))
        );

        let grown = chain.append_block(block.clone()).unwrap();
        assert_eq!(grown.last_block().unwrap(), &block);
    }

    #[test]
    fn push_grows_by_one() {
        let chain = genesis_chain()
            .push("AAA-9999", "100km")
            .and_then(|c| c.push("BBB-0000", "250km"))
            .unwrap();
        assert_eq!(chain.len(), 3);
        assert_eq!(chain.last_block().unwrap().index(), 3);
        assert!(chain.verify().is_ok());
    }

    #[test]
    fn other_methods_chain_consistently() {
        let chain = create_genesis_chain("SHA-512", 1u32, 2u32)
            .and_then(|c| c.push(3, 4))
            .unwrap();
        assert_eq!(chain.engine().method(), "SHA-512");
        assert_eq!(chain.last_block().unwrap().hash().len(), 128);
        assert!(chain.verify().is_ok());
    }
}
