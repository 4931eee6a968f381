//! List service implementations

mod memory;
#[cfg(feature = "solana")]
pub(crate) mod solana;

pub use memory::InMemoryListService;
#[cfg(feature = "solana")]
pub use solana::{PayerSource, SolanaListService};
