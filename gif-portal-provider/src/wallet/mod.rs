//! Wallet implementations

#[cfg(feature = "solana")]
mod keypair;
mod memory;
mod trust_store;

#[cfg(feature = "solana")]
pub use keypair::KeypairWallet;
pub use memory::MemoryWallet;
pub use trust_store::{TrustStore, TrustedWallet};
