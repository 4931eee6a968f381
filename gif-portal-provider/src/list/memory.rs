//! 内存列表服务
//!
//! Stores exactly what it is given. Used by demo mode and tests.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{ProviderError, Result};
use crate::traits::ListService;
use crate::types::{Identity, ListAccountId, RemoteItem, RemoteList};
use crate::utils::log_sanitizer::link_for_log;

const PROVIDER_NAME: &str = "memory";

/// 内存列表服务
#[derive(Default)]
pub struct InMemoryListService {
    accounts: RwLock<HashMap<ListAccountId, RemoteList>>,
}

impl InMemoryListService {
    pub fn new() -> Self {
        Self::default()
    }

    /// 创建带有已存在账户的服务
    pub fn with_account(account: ListAccountId, items: Vec<RemoteItem>) -> Self {
        let list = RemoteList {
            total_count: items.len() as u64,
            items,
        };
        Self {
            accounts: RwLock::new(HashMap::from([(account, list)])),
        }
    }
}

#[async_trait]
impl ListService for InMemoryListService {
    fn id(&self) -> &'static str {
        PROVIDER_NAME
    }

    async fn read_account(&self, account: &ListAccountId) -> Result<RemoteList> {
        self.accounts
            .read()
            .await
            .get(account)
            .cloned()
            .ok_or_else(|| ProviderError::AccountNotFound {
                provider: PROVIDER_NAME.to_string(),
                account: account.to_string(),
            })
    }

    async fn create_account(&self, account: &ListAccountId, owner: &Identity) -> Result<()> {
        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(account) {
            return Err(ProviderError::TransactionFailed {
                provider: PROVIDER_NAME.to_string(),
                raw_message: Some(format!("account {account} already in use")),
            });
        }
        accounts.insert(account.clone(), RemoteList::default());
        log::info!("[{PROVIDER_NAME}] Account {account} created by {owner}");
        Ok(())
    }

    async fn append_item(
        &self,
        account: &ListAccountId,
        link: &str,
        submitter: &Identity,
    ) -> Result<()> {
        let mut accounts = self.accounts.write().await;
        let list = accounts
            .get_mut(account)
            .ok_or_else(|| ProviderError::AccountNotFound {
                provider: PROVIDER_NAME.to_string(),
                account: account.to_string(),
            })?;
        list.items.push(RemoteItem::new(link, submitter.clone()));
        list.total_count += 1;
        log::debug!(
            "[{PROVIDER_NAME}] Appended {} to {account}",
            link_for_log(link)
        );
        Ok(())
    }
}
