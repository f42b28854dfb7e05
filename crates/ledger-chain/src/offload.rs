use crate::block::Block;
use crate::chain::Chain;
use crate::error::{ChainError, Result};
use std::fmt::Display;

/// [`Chain::generate_block`] on a blocking thread. The block only exists
/// once it is fully built, so dropping the future never leaks a partial one.
pub async fn generate_block<T, U>(chain: Chain<T, U>, name: T, data: U) -> Result<Block<T, U>>
where
    T: Display + Send + Sync + 'static,
    U: Display + Send + Sync + 'static,
{
    tokio::task::spawn_blocking(move || chain.generate_block(name, data))
        .await
        .map_err(|e| ChainError::Unknown(e.to_string()))?
}

/// Generate on the blocking pool, then append to `chain`. Nothing orders
/// concurrent pushes onto one logical chain; callers serialize them.
pub async fn push<T, U>(chain: Chain<T, U>, name: T, data: U) -> Result<Chain<T, U>>
where
    T: Display + PartialEq + Send + Sync + 'static,
    U: Display + PartialEq + Send + Sync + 'static,
{
    let block = generate_block(chain.clone(), name, data).await?;
    chain.append_block(block)
}
