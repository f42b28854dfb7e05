use ledger_chain::{create_genesis_chain, Chain};
use rand::{distributions::Alphanumeric, Rng};
use tracing_subscriber::{fmt, EnvFilter};

pub const GENESIS_NAME: &str = "author: Alisson Morais";
pub const GENESIS_DATA: &str = "GitHub: github.com/alissonfpmorais";
pub const GENESIS_HASH: &str = "b3a151bdb2cbb253e811e23019446bfdca91c29ebe18f3b70ebb4fed2c453c31";
pub const SECOND_HASH: &str = "0b301d685da1fdf13ec3d970e371d4b064c62205cb1efad9f7537607963c210c";

pub fn init_tracing() {
    // Another test may already have installed it.
    let _ = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn genesis_chain() -> Chain<String, String> {
    create_genesis_chain(
        "SHA-256",
        GENESIS_NAME.to_string(),
        GENESIS_DATA.to_string(),
    )
    .expect("genesis chain")
}

pub fn random_text<R: Rng>(rng: &mut R, len: usize) -> String {
    rng.sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

pub fn grow_random(chain: Chain<String, String>, blocks: usize) -> Chain<String, String> {
    let mut rng = rand::thread_rng();
    let mut chain = chain;
    for _ in 0..blocks {
        let name = random_text(&mut rng, 8);
        let data = random_text(&mut rng, 32);
        chain = chain.push(name, data).expect("push");
    }
    chain
}
