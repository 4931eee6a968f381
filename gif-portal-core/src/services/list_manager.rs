//! 共享列表管理

use std::sync::Arc;

use gif_portal_provider::log_sanitizer::link_for_log;

use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::types::{Identity, ListState, PortalState};

/// 共享列表管理
pub struct ListManager {
    ctx: Arc<ServiceContext>,
}

impl ListManager {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// 读取远程列表并整体替换本地列表
    ///
    /// Any read failure (including "account not found") becomes
    /// [`ListState::Uninitialized`]; the cause is only logged.
    pub async fn fetch_list(&self) -> CoreResult<ListState> {
        self.ctx.snapshot().require_connected()?;
        let account = &self.ctx.config.list_account;

        let ticket = FetchTicket::issue(&self.ctx);
        let result = self.ctx.list_service.read_account(account).await;

        let list = match result {
            Ok(remote) => {
                log::debug!("Got list account {account}: {} items", remote.items.len());
                ListState::from(remote)
            }
            Err(e) => {
                if e.is_expected() {
                    log::warn!("Error in fetch_list: {e}");
                } else {
                    log::error!("Error in fetch_list: {e}");
                }
                ListState::Uninitialized
            }
        };

        ticket.settle(|state| state.list = list.clone());
        Ok(list)
    }

    /// 一次性创建远程列表账户，成功后重新读取
    pub async fn initialize_account(&self) -> CoreResult<ListState> {
        let snapshot = self.ctx.snapshot();
        let owner = snapshot.require_connected()?;
        if snapshot.list != ListState::Uninitialized {
            return Err(CoreError::InvalidState(format!(
                "list account is already {}",
                snapshot.list.label()
            )));
        }

        let account = &self.ctx.config.list_account;
        log::info!("Creating list account {account} for {owner}");
        if let Err(e) = self.ctx.list_service.create_account(account, &owner).await {
            let err = CoreError::from(e);
            self.ctx.log_failure("Create list account", &err);
            return Err(err);
        }

        log::info!("Created list account {account}");
        self.fetch_list().await
    }

    /// 提交一条链接，成功后重新读取
    ///
    /// The input buffer is cleared before the remote call and is not restored
    /// if the call fails. An empty link is rejected without touching anything.
    pub async fn submit(&self, link: &str) -> CoreResult<ListState> {
        if link.is_empty() {
            log::info!("No gif link given!");
            return Err(CoreError::EmptyLink);
        }
        let submitter = self.begin(PortalState::begin_submission)?;
        self.send(link, &submitter).await
    }

    /// 提交当前输入内容
    pub async fn submit_input(&self) -> CoreResult<ListState> {
        let (link, submitter) = match self.begin(PortalState::take_input_for_submission) {
            Err(CoreError::EmptyLink) => {
                log::info!("No gif link given!");
                return Err(CoreError::EmptyLink);
            }
            taken => taken?,
        };
        self.send(&link, &submitter).await
    }

    /// 在一次状态更新内检查前置条件；失败时不通知订阅者
    fn begin<T>(
        &self,
        f: impl FnOnce(&mut PortalState, bool) -> CoreResult<T>,
    ) -> CoreResult<T> {
        let guard = self.ctx.config.guard_concurrent_submissions;
        let mut outcome = Err(CoreError::NotConnected);
        self.ctx.update_if(|state| {
            outcome = f(state, guard);
            outcome.is_ok()
        });
        outcome
    }

    async fn send(&self, link: &str, submitter: &Identity) -> CoreResult<ListState> {
        log::info!("Gif link: {}", link_for_log(link));
        let result = self
            .ctx
            .list_service
            .append_item(&self.ctx.config.list_account, link, submitter)
            .await;
        self.ctx.update(|state| {
            state.submissions_in_flight = state.submissions_in_flight.saturating_sub(1);
        });

        if let Err(e) = result {
            let err = CoreError::from(e);
            self.ctx.log_failure("Sending gif", &err);
            return Err(err);
        }

        log::info!("Gif successfully sent to program");
        self.fetch_list().await
    }

    pub fn set_input(&self, text: impl Into<String>) {
        let text = text.into();
        self.ctx.update_if(|state| {
            if state.input == text {
                return false;
            }
            state.input = text;
            true
        });
    }

    /// 原地编辑输入内容
    pub fn edit_input(&self, f: impl FnOnce(&mut String)) {
        self.ctx.update(|state| f(&mut state.input));
    }
}

/// 进行中的一次读取
///
/// Dropped without [`FetchTicket::settle`] (the task was aborted), it still
/// gives the count back.
struct FetchTicket<'a> {
    ctx: &'a ServiceContext,
    settled: bool,
}

impl<'a> FetchTicket<'a> {
    fn issue(ctx: &'a ServiceContext) -> Self {
        ctx.update(|state| state.fetches_in_flight += 1);
        Self {
            ctx,
            settled: false,
        }
    }

    /// 归还计数并在同一次更新里写入结果
    fn settle(mut self, f: impl FnOnce(&mut PortalState)) {
        self.ctx.update(|state| {
            state.fetches_in_flight = state.fetches_in_flight.saturating_sub(1);
            f(state);
        });
        self.settled = true;
    }
}

impl Drop for FetchTicket<'_> {
    fn drop(&mut self) {
        if !self.settled {
            self.ctx.update(|state| {
                state.fetches_in_flight = state.fetches_in_flight.saturating_sub(1);
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{MockWallet, create_test_context, item};
    use crate::types::ConnectionState;

    fn connect(ctx: &ServiceContext, address: &str) {
        ctx.update(|state| state.connection = ConnectionState::Connected(Identity::new(address)));
    }

    #[tokio::test]
    async fn fetch_requires_connection() {
        let (ctx, mocks) = create_test_context(MockWallet::new("me"));
        let manager = ListManager::new(ctx);
        assert!(matches!(
            manager.fetch_list().await,
            Err(CoreError::NotConnected)
        ));
        assert_eq!(mocks.list.reads(), 0);
    }

    #[tokio::test]
    async fn missing_account_is_uninitialized() {
        let (ctx, _mocks) = create_test_context(MockWallet::new("me"));
        connect(&ctx, "me");
        let manager = ListManager::new(ctx.clone());
        assert_eq!(manager.fetch_list().await.unwrap(), ListState::Uninitialized);
    }

    #[tokio::test]
    async fn read_failure_collapses_to_uninitialized() {
        let (ctx, mocks) = create_test_context(MockWallet::new("me"));
        mocks.list.seed(vec![item("https://a/1.gif", "u")]).await;
        connect(&ctx, "me");
        let manager = ListManager::new(ctx.clone());

        assert!(matches!(
            manager.fetch_list().await.unwrap(),
            ListState::Populated(_)
        ));
        mocks.list.fail_reads(true);
        assert_eq!(manager.fetch_list().await.unwrap(), ListState::Uninitialized);
        assert_eq!(ctx.snapshot().list, ListState::Uninitialized);
    }

    #[tokio::test]
    async fn fetch_is_idempotent_without_writes() {
        let (ctx, mocks) = create_test_context(MockWallet::new("me"));
        mocks
            .list
            .seed(vec![item("https://a/1.gif", "u1"), item("https://a/2.gif", "u2")])
            .await;
        connect(&ctx, "me");
        let manager = ListManager::new(ctx.clone());

        let first = manager.fetch_list().await.unwrap();
        let second = manager.fetch_list().await.unwrap();
        assert_eq!(first, second);
        assert!(!ctx.snapshot().is_fetching());
    }

    #[tokio::test]
    async fn initialize_then_empty() {
        let (ctx, mocks) = create_test_context(MockWallet::new("me"));
        connect(&ctx, "me");
        let manager = ListManager::new(ctx.clone());

        assert_eq!(manager.initialize_account().await.unwrap(), ListState::Empty);
        assert_eq!(mocks.list.creates(), 1);
    }

    #[tokio::test]
    async fn initialize_rejected_when_list_exists() {
        let (ctx, mocks) = create_test_context(MockWallet::new("me"));
        mocks.list.seed(vec![]).await;
        connect(&ctx, "me");
        let manager = ListManager::new(ctx.clone());
        manager.fetch_list().await.unwrap();

        assert!(matches!(
            manager.initialize_account().await,
            Err(CoreError::InvalidState(_))
        ));
        assert_eq!(mocks.list.creates(), 0);
    }

    #[tokio::test]
    async fn failed_initialize_stays_uninitialized() {
        let (ctx, mocks) = create_test_context(MockWallet::new("me"));
        mocks.list.fail_writes(true);
        connect(&ctx, "me");
        let manager = ListManager::new(ctx.clone());

        assert!(manager.initialize_account().await.is_err());
        assert_eq!(ctx.snapshot().list, ListState::Uninitialized);
    }

    #[tokio::test]
    async fn submit_appends_with_connected_address() {
        let (ctx, mocks) = create_test_context(MockWallet::new("me"));
        mocks.list.seed(vec![item("https://a/1.gif", "u")]).await;
        connect(&ctx, "me");
        let manager = ListManager::new(ctx.clone());
        manager.fetch_list().await.unwrap();

        manager.submit("https://x/y.gif").await.unwrap();
        let list = manager.fetch_list().await.unwrap();
        let last = list.items().last().unwrap();
        assert_eq!(last.link, "https://x/y.gif");
        assert_eq!(last.submitter, Identity::new("me"));
    }

    #[tokio::test]
    async fn empty_submit_touches_nothing() {
        let (ctx, mocks) = create_test_context(MockWallet::new("me"));
        mocks.list.seed(vec![]).await;
        connect(&ctx, "me");
        let manager = ListManager::new(ctx.clone());
        manager.fetch_list().await.unwrap();
        let before = ctx.snapshot();

        assert!(matches!(manager.submit("").await, Err(CoreError::EmptyLink)));
        assert_eq!(mocks.list.appends(), 0);
        assert_eq!(ctx.snapshot(), before);
    }

    #[tokio::test]
    async fn failed_submit_keeps_input_cleared() {
        let (ctx, mocks) = create_test_context(MockWallet::new("me"));
        mocks.list.seed(vec![]).await;
        connect(&ctx, "me");
        let manager = ListManager::new(ctx.clone());
        manager.fetch_list().await.unwrap();

        manager.set_input("https://x/y.gif");
        mocks.list.fail_writes(true);
        assert!(manager.submit_input().await.is_err());

        let state = ctx.snapshot();
        assert!(state.input.is_empty());
        assert_eq!(state.list, ListState::Empty);
        assert_eq!(state.submissions_in_flight, 0);
    }

    #[tokio::test]
    async fn submit_requires_initialized_list() {
        let (ctx, mocks) = create_test_context(MockWallet::new("me"));
        connect(&ctx, "me");
        let manager = ListManager::new(ctx.clone());
        manager.set_input("https://x/y.gif");

        assert!(matches!(
            manager.submit_input().await,
            Err(CoreError::InvalidState(_))
        ));
        assert_eq!(mocks.list.appends(), 0);
        assert_eq!(ctx.snapshot().input, "https://x/y.gif");
    }

    #[tokio::test]
    async fn whitespace_link_is_sent_as_is() {
        let (ctx, mocks) = create_test_context(MockWallet::new("me"));
        mocks.list.seed(vec![]).await;
        connect(&ctx, "me");
        let manager = ListManager::new(ctx.clone());
        manager.fetch_list().await.unwrap();

        manager.submit(" ").await.unwrap();
        assert_eq!(mocks.list.appends(), 1);
    }

    #[tokio::test]
    async fn typing_during_submission_is_kept() {
        let (ctx, mocks) = create_test_context(MockWallet::new("me"));
        mocks.list.seed(vec![]).await;
        connect(&ctx, "me");
        let manager = Arc::new(ListManager::new(ctx.clone()));
        manager.fetch_list().await.unwrap();
        manager.set_input("https://a/1.gif");
        mocks.list.hold_appends();

        let pending = {
            let manager = Arc::clone(&manager);
            tokio::spawn(async move { manager.submit_input().await })
        };
        let mut rx = ctx.subscribe();
        rx.wait_for(|state| state.submissions_in_flight == 1)
            .await
            .unwrap();
        assert!(ctx.snapshot().input.is_empty());

        manager.edit_input(|input| input.push_str("https://b/"));
        mocks.list.release_appends();
        let list = pending.await.unwrap().unwrap();

        assert_eq!(list.items().len(), 1);
        assert_eq!(list.items()[0].link, "https://a/1.gif");
        assert_eq!(ctx.snapshot().input, "https://b/");
    }

    #[test]
    fn edit_input_in_place() {
        let (ctx, _mocks) = create_test_context(MockWallet::new("me"));
        let manager = ListManager::new(ctx.clone());
        manager.set_input("abc");
        manager.edit_input(|input| {
            input.pop();
        });
        assert_eq!(ctx.snapshot().input, "ab");
    }
}
