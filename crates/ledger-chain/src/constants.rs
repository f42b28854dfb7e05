pub const DEFAULT_HASH_METHOD: &str = "SHA-256";
pub const GENESIS_INDEX: u64 = 1;
pub const GENESIS_PREVIOUS_HASH: &str = "none";
pub const PAYLOAD_SEPARATOR: char = ',';
