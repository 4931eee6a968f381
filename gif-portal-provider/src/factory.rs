//! Backend factory functions.

use std::sync::Arc;

use crate::error::{ProviderError, Result};
use crate::list::InMemoryListService;
use crate::traits::{ListService, Wallet};
use crate::types::{Identity, ListAccountId, ListSettings, RemoteItem, WalletSettings};
use crate::wallet::MemoryWallet;

#[cfg(feature = "solana")]
use crate::list::{PayerSource, SolanaListService};
#[cfg(feature = "solana")]
use crate::wallet::{KeypairWallet, TrustStore};

/// A wallet and a list service that work together.
///
/// The Solana list service signs with the keypair wallet, so the two are built as a pair.
pub struct Backend {
    pub wallet: Arc<dyn Wallet>,
    pub list_service: Arc<dyn ListService>,
}

impl std::fmt::Debug for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Backend")
            .field("wallet", &self.wallet.id())
            .field("list_service", &self.list_service.id())
            .finish()
    }
}

/// Creates a [`Backend`] from wallet and list settings.
///
/// # Examples
///
/// ```rust,no_run
/// use gif_portal_provider::{create_backend, ListAccountId, ListSettings, WalletSettings};
///
/// let backend = create_backend(
///     WalletSettings::Memory,
///     ListSettings::Memory { account: ListAccountId::new("demo"), seed: None },
/// ).unwrap();
/// ```
pub fn create_backend(wallet: WalletSettings, list: ListSettings) -> Result<Backend> {
    match (wallet, list) {
        #[cfg(feature = "solana")]
        (
            WalletSettings::Keypair {
                keypair_path,
                trust_store_path,
            },
            ListSettings::Solana {
                rpc_url,
                program_id,
                commitment,
                list_account_keypair,
            },
        ) => {
            let wallet = Arc::new(KeypairWallet::new(
                keypair_path,
                TrustStore::new(trust_store_path),
            ));
            let payer: Arc<dyn PayerSource> = wallet.clone();
            let list_service = SolanaListService::new(
                rpc_url,
                &program_id,
                commitment,
                payer,
                list_account_keypair,
            )?;
            log::info!("Backend: keypair wallet + solana list at {}", list_service.rpc_url());
            Ok(Backend {
                wallet,
                list_service: Arc::new(list_service),
            })
        }
        #[cfg(feature = "solana")]
        (
            WalletSettings::Keypair {
                keypair_path,
                trust_store_path,
            },
            ListSettings::Memory { account, seed },
        ) => Ok(Backend {
            wallet: Arc::new(KeypairWallet::new(
                keypair_path,
                TrustStore::new(trust_store_path),
            )),
            list_service: Arc::new(memory_list(account, seed)),
        }),
        (WalletSettings::Memory, ListSettings::Memory { account, seed }) => {
            log::info!("Backend: in-memory wallet + in-memory list");
            Ok(Backend {
                wallet: Arc::new(MemoryWallet::new(generated_identity())),
                list_service: Arc::new(memory_list(account, seed)),
            })
        }
        #[allow(unreachable_patterns)]
        _ => Err(ProviderError::InvalidParameter {
            provider: "factory".to_string(),
            param: "wallet".to_string(),
            detail: "this wallet cannot sign for this list service".to_string(),
        }),
    }
}

fn memory_list(account: ListAccountId, seed: Option<Vec<RemoteItem>>) -> InMemoryListService {
    match seed {
        Some(items) => InMemoryListService::with_account(account, items),
        None => InMemoryListService::new(),
    }
}

#[cfg(feature = "solana")]
fn generated_identity() -> Identity {
    use solana_sdk::signature::Signer;
    use solana_sdk::signer::keypair::Keypair;

    Identity::new(Keypair::new().pubkey().to_string())
}

#[cfg(not(feature = "solana"))]
fn generated_identity() -> Identity {
    Identity::new(format!("memory-{}", chrono::Utc::now().timestamp_millis()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ConnectMode;

    #[tokio::test]
    async fn memory_backend_with_seed() {
        let account = ListAccountId::new("demo");
        let backend = create_backend(
            WalletSettings::Memory,
            ListSettings::Memory {
                account: account.clone(),
                seed: Some(vec![RemoteItem::new("https://a/b.gif", Identity::new("x"))]),
            },
        )
        .unwrap();

        let id = backend.wallet.connect(ConnectMode::Interactive).await.unwrap();
        assert!(!id.as_str().is_empty());
        let list = backend.list_service.read_account(&account).await.unwrap();
        assert_eq!(list.items.len(), 1);
    }

    #[tokio::test]
    async fn memory_backend_without_seed_has_no_account() {
        let account = ListAccountId::new("demo");
        let backend = create_backend(
            WalletSettings::Memory,
            ListSettings::Memory {
                account: account.clone(),
                seed: None,
            },
        )
        .unwrap();
        assert!(backend.list_service.read_account(&account).await.is_err());
    }

    #[test]
    fn backend_debug_names_its_parts() {
        let backend = create_backend(
            WalletSettings::Memory,
            ListSettings::Memory {
                account: ListAccountId::new("demo"),
                seed: None,
            },
        )
        .unwrap();
        let printed = format!("{backend:?}");
        assert!(printed.contains("wallet: \"memory\""), "{printed}");
        assert!(printed.contains("list_service: \"memory\""), "{printed}");
    }

    #[cfg(feature = "solana")]
    #[test]
    fn memory_wallet_cannot_sign_for_solana() {
        let result = create_backend(
            WalletSettings::Memory,
            ListSettings::Solana {
                rpc_url: "http://127.0.0.1:8899".to_string(),
                program_id: "11111111111111111111111111111111".to_string(),
                commitment: crate::types::Commitment::Processed,
                list_account_keypair: None,
            },
        );
        assert!(matches!(
            result,
            Err(ProviderError::InvalidParameter { param, .. }) if param == "wallet"
        ));
    }

    #[cfg(feature = "solana")]
    #[test]
    fn keypair_backend_with_solana_list() {
        let dir = tempfile::tempdir().unwrap();
        let backend = create_backend(
            WalletSettings::Keypair {
                keypair_path: dir.path().join("id.json"),
                trust_store_path: dir.path().join("trusted.json"),
            },
            ListSettings::Solana {
                rpc_url: "http://127.0.0.1:8899".to_string(),
                program_id: "11111111111111111111111111111111".to_string(),
                commitment: crate::types::Commitment::Confirmed,
                list_account_keypair: None,
            },
        )
        .unwrap();
        assert_eq!(backend.wallet.id(), "keypair");
        assert_eq!(backend.list_service.id(), "solana");
        assert!(!backend.wallet.is_present());
    }
}
