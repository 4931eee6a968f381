//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use gif_portal_provider::{
    ConnectMode, Identity, ListAccountId, ListService, ProviderError, RemoteItem, RemoteList,
    Result, Wallet,
};
use tokio::sync::{RwLock, watch};

use crate::services::{PortalView, ServiceContext};
use crate::traits::Notifier;
use crate::types::{Notice, PortalConfig};

/// 放行/阻塞异步调用的闸门
struct Gate(watch::Sender<bool>);

impl Gate {
    fn open() -> Self {
        Self(watch::Sender::new(true))
    }

    fn hold(&self) {
        self.0.send_replace(false);
    }

    fn release(&self) {
        self.0.send_replace(true);
    }

    async fn pass(&self) {
        let mut rx = self.0.subscribe();
        let _ = rx.wait_for(|open| *open).await;
    }
}

// ===== MockWallet =====

pub struct MockWallet {
    identity: Identity,
    present: bool,
    known: bool,
    trusted: AtomicBool,
    declines: bool,
    connect_calls: AtomicUsize,
    gate: Gate,
}

impl MockWallet {
    pub fn new(address: &str) -> Self {
        Self {
            identity: Identity::new(address),
            present: true,
            known: true,
            trusted: AtomicBool::new(false),
            declines: false,
            connect_calls: AtomicUsize::new(0),
            gate: Gate::open(),
        }
    }

    pub fn absent() -> Self {
        Self {
            present: false,
            known: false,
            ..Self::new("")
        }
    }

    pub fn unknown(self) -> Self {
        Self {
            known: false,
            ..self
        }
    }

    pub fn trusted(self) -> Self {
        self.trusted.store(true, Ordering::SeqCst);
        self
    }

    /// 用户拒绝所有交互式连接
    pub fn declining(self) -> Self {
        Self {
            declines: true,
            ..self
        }
    }

    pub fn connect_calls(&self) -> usize {
        self.connect_calls.load(Ordering::SeqCst)
    }

    pub fn hold_connects(&self) {
        self.gate.hold();
    }

    pub fn release_connects(&self) {
        self.gate.release();
    }

    fn declined() -> ProviderError {
        ProviderError::ConnectionDeclined {
            provider: "mock".to_string(),
            raw_message: None,
        }
    }
}

#[async_trait]
impl Wallet for MockWallet {
    fn id(&self) -> &'static str {
        "mock"
    }

    fn is_present(&self) -> bool {
        self.present
    }

    fn is_known_provider(&self) -> bool {
        self.known
    }

    async fn connect(&self, mode: ConnectMode) -> Result<Identity> {
        self.connect_calls.fetch_add(1, Ordering::SeqCst);
        self.gate.pass().await;

        if !self.present {
            return Err(ProviderError::WalletNotFound {
                provider: "mock".to_string(),
                detail: "no wallet".to_string(),
            });
        }
        match mode {
            ConnectMode::TrustedOnly if !self.trusted.load(Ordering::SeqCst) => {
                Err(Self::declined())
            }
            ConnectMode::Interactive if self.declines => Err(Self::declined()),
            _ => {
                self.trusted.store(true, Ordering::SeqCst);
                Ok(self.identity.clone())
            }
        }
    }
}

// ===== MockListService =====

pub struct MockListService {
    list: RwLock<Option<RemoteList>>,
    reads: AtomicUsize,
    creates: AtomicUsize,
    appends: AtomicUsize,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    gate: Gate,
    read_gate: Gate,
}

impl MockListService {
    pub fn new() -> Self {
        Self {
            list: RwLock::new(None),
            reads: AtomicUsize::new(0),
            creates: AtomicUsize::new(0),
            appends: AtomicUsize::new(0),
            fail_reads: AtomicBool::new(false),
            fail_writes: AtomicBool::new(false),
            gate: Gate::open(),
            read_gate: Gate::open(),
        }
    }

    /// 预先创建账户
    pub async fn seed(&self, items: Vec<RemoteItem>) {
        *self.list.write().await = Some(RemoteList {
            total_count: items.len() as u64,
            items,
        });
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn hold_appends(&self) {
        self.gate.hold();
    }

    pub fn release_appends(&self) {
        self.gate.release();
    }

    pub fn hold_reads(&self) {
        self.read_gate.hold();
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    pub fn creates(&self) -> usize {
        self.creates.load(Ordering::SeqCst)
    }

    pub fn appends(&self) -> usize {
        self.appends.load(Ordering::SeqCst)
    }

    fn write_error(&self) -> Option<ProviderError> {
        self.fail_writes
            .load(Ordering::SeqCst)
            .then(|| ProviderError::TransactionFailed {
                provider: "mock".to_string(),
                raw_message: Some("rejected".to_string()),
            })
    }

    fn not_found(account: &ListAccountId) -> ProviderError {
        ProviderError::AccountNotFound {
            provider: "mock".to_string(),
            account: account.to_string(),
        }
    }
}

#[async_trait]
impl ListService for MockListService {
    fn id(&self) -> &'static str {
        "mock"
    }

    async fn read_account(&self, account: &ListAccountId) -> Result<RemoteList> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.read_gate.pass().await;
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(ProviderError::NetworkError {
                provider: "mock".to_string(),
                detail: "unreachable".to_string(),
            });
        }
        self.list
            .read()
            .await
            .clone()
            .ok_or_else(|| Self::not_found(account))
    }

    async fn create_account(&self, _account: &ListAccountId, _owner: &Identity) -> Result<()> {
        self.creates.fetch_add(1, Ordering::SeqCst);
        if let Some(e) = self.write_error() {
            return Err(e);
        }
        *self.list.write().await = Some(RemoteList::default());
        Ok(())
    }

    async fn append_item(
        &self,
        account: &ListAccountId,
        link: &str,
        submitter: &Identity,
    ) -> Result<()> {
        self.appends.fetch_add(1, Ordering::SeqCst);
        self.gate.pass().await;
        if let Some(e) = self.write_error() {
            return Err(e);
        }
        let mut guard = self.list.write().await;
        let list = guard.as_mut().ok_or_else(|| Self::not_found(account))?;
        list.items.push(RemoteItem::new(link, submitter.clone()));
        list.total_count += 1;
        Ok(())
    }
}

// ===== MockNotifier =====

pub struct MockNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl MockNotifier {
    pub fn new() -> Self {
        Self {
            notices: Mutex::new(Vec::new()),
        }
    }

    pub fn count(&self) -> usize {
        self.notices.lock().unwrap().len()
    }
}

impl Notifier for MockNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }
}

// ===== 工厂方法 =====

pub struct Mocks {
    pub wallet: Arc<MockWallet>,
    pub list: Arc<MockListService>,
    pub notifier: Arc<MockNotifier>,
}

fn build(wallet: MockWallet, guard: bool) -> (ServiceContext, Mocks) {
    let mocks = Mocks {
        wallet: Arc::new(wallet),
        list: Arc::new(MockListService::new()),
        notifier: Arc::new(MockNotifier::new()),
    };
    let ctx = ServiceContext::new(
        mocks.wallet.clone(),
        mocks.list.clone(),
        mocks.notifier.clone(),
        PortalConfig::new(ListAccountId::new("test-list")).with_submission_guard(guard),
    );
    (ctx, mocks)
}

/// 创建测试用 `ServiceContext`
pub fn create_test_context(wallet: MockWallet) -> (Arc<ServiceContext>, Mocks) {
    let (ctx, mocks) = build(wallet, false);
    (Arc::new(ctx), mocks)
}

/// 创建测试用 `PortalView`
pub fn create_test_view(wallet: MockWallet, guard: bool) -> (Arc<PortalView>, Mocks) {
    let (ctx, mocks) = build(wallet, guard);
    (Arc::new(PortalView::new(ctx)), mocks)
}

pub fn item(link: &str, submitter: &str) -> RemoteItem {
    RemoteItem::new(link, Identity::new(submitter))
}
