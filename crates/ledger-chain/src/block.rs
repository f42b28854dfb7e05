use crate::constants::{GENESIS_INDEX, GENESIS_PREVIOUS_HASH};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// One hash-linked record. Fields are only readable once built.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block<T, U> {
    index: u64,
    hash: String,
    previous_hash: String,
    timestamp: u64,
    name: T,
    data: U,
}

impl<T, U> Block<T, U> {
    /// Build a block stamped with the current time. `hash` is expected to come
    /// from a [`HashEngine`](crate::HashEngine).
    pub fn new(index: u64, hash: String, previous_hash: String, name: T, data: U) -> Self {
        Self::with_timestamp(index, hash, previous_hash, now_millis(), name, data)
    }

    pub fn with_timestamp(
        index: u64,
        hash: String,
        previous_hash: String,
        timestamp: u64,
        name: T,
        data: U,
    ) -> Self {
        Self {
            index,
            hash,
            previous_hash,
            timestamp,
            name,
            data,
        }
    }

    pub fn index(&self) -> u64 {
        self.index
    }

    pub fn hash(&self) -> &str {
        &self.hash
    }

    pub fn previous_hash(&self) -> &str {
        &self.previous_hash
    }

    /// Milliseconds since the Unix epoch. Not covered by the hash.
    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }

    pub fn name(&self) -> &T {
        &self.name
    }

    pub fn data(&self) -> &U {
        &self.data
    }

    pub fn is_genesis(&self) -> bool {
        self.index == GENESIS_INDEX && self.previous_hash == GENESIS_PREVIOUS_HASH
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}
