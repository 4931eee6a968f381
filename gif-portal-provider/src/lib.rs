//! # gif-portal-provider
//!
//! Wallet and remote list service abstractions for GIF Portal.
//!
//! ## Backends
//!
//! | Backend | Feature Flag | What it is |
//! |---------|-------------|------------|
//! | [`KeypairWallet`] | `solana` | Solana CLI keypair file plus a store of approved addresses |
//! | [`SolanaListService`] | `solana` | Client for the Anchor GIF list program over JSON-RPC |
//! | [`MemoryWallet`] | always | In-process wallet for demo mode and tests |
//! | [`InMemoryListService`] | always | In-process list for demo mode and tests |
//!
//! ## Usage
//!
//! ```rust,no_run
//! use gif_portal_provider::{
//!     create_backend, Commitment, ConnectMode, ListAccountId, ListSettings, WalletSettings,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let backend = create_backend(
//!         WalletSettings::Keypair {
//!             keypair_path: "/home/me/.config/solana/id.json".into(),
//!             trust_store_path: "/home/me/.local/share/gif-portal/trusted_wallets.json".into(),
//!         },
//!         ListSettings::Solana {
//!             rpc_url: "https://api.devnet.solana.com".to_string(),
//!             program_id: "GifPortaL1111111111111111111111111111111111".to_string(),
//!             commitment: Commitment::Processed,
//!             list_account_keypair: None,
//!         },
//!     )?;
//!
//!     let me = backend.wallet.connect(ConnectMode::Interactive).await?;
//!     let list = backend
//!         .list_service
//!         .read_account(&ListAccountId::new("Base1111111111111111111111111111111111111111"))
//!         .await?;
//!     for item in &list.items {
//!         println!("{} (by {})", item.link, item.submitter);
//!     }
//!     println!("connected as {me}");
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns [`Result<T, ProviderError>`](ProviderError). Nothing is
//! retried automatically; [`ProviderError::is_expected`] separates user-caused
//! outcomes (declined connection, account not created yet) from real failures.

mod error;
mod factory;
mod list;
mod traits;
mod types;
mod utils;
mod wallet;

pub use error::{ProviderError, Result};

pub use factory::{Backend, create_backend};

pub use traits::{ListService, Wallet};

pub use types::{
    Commitment, ConnectMode, Identity, ListAccountId, ListSettings, RemoteItem, RemoteList,
    WalletSettings,
};

pub use utils::log_sanitizer;

pub use list::InMemoryListService;
#[cfg(feature = "solana")]
pub use list::{PayerSource, SolanaListService};

pub use wallet::{MemoryWallet, TrustStore, TrustedWallet};
#[cfg(feature = "solana")]
pub use wallet::KeypairWallet;
