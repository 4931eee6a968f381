use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::types::{ConnectMode, Identity, ListAccountId, RemoteList};

/// RPC 调用失败的原始形态，尚未分类
#[derive(Debug, Clone)]
pub(crate) struct RpcFailure {
    /// JSON-RPC 错误码，或 `rpc.rs` 中的伪错误码
    pub code: Option<String>,
    pub message: String,
}

impl RpcFailure {
    pub fn bare(message: impl Into<String>) -> Self {
        Self::build(None, message.into())
    }

    pub fn coded(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::build(Some(code.into()), message.into())
    }

    fn build(code: Option<String>, message: String) -> Self {
        Self { code, message }
    }
}

/// 分类时需要的调用信息
#[derive(Debug, Clone, Default)]
pub(crate) struct FailureContext {
    /// 被访问的列表账户
    pub account: Option<String>,
    /// 交易类调用失败时归为 `TransactionFailed`
    pub is_write: bool,
}

/// `RpcFailure` → `ProviderError`
pub(crate) trait FailureMapper {
    fn provider_name(&self) -> &'static str;

    fn map_error(&self, raw: RpcFailure, context: FailureContext) -> ProviderError;

    fn bad_account_data(&self, account: &str, detail: impl ToString) -> ProviderError {
        ProviderError::InvalidAccountData {
            provider: self.provider_name().into(),
            account: account.into(),
            detail: detail.to_string(),
        }
    }

    fn bad_parameter(&self, param: &str, detail: impl ToString) -> ProviderError {
        ProviderError::InvalidParameter {
            provider: self.provider_name().into(),
            param: param.into(),
            detail: detail.to_string(),
        }
    }

    /// 无法归类时原样保留错误码与消息
    fn unclassified(&self, RpcFailure { code, message }: RpcFailure) -> ProviderError {
        ProviderError::Unknown {
            provider: self.provider_name().into(),
            raw_code: code,
            raw_message: message,
        }
    }
}

/// 钱包能力 Trait
///
/// Host-provided capability that holds the user's identity and authorizes
/// actions on its behalf.
#[async_trait]
pub trait Wallet: Send + Sync {
    /// 钱包实现标识符
    fn id(&self) -> &'static str;

    /// 宿主环境中是否存在钱包
    fn is_present(&self) -> bool;

    /// 是否为本应用认识的钱包类型
    fn is_known_provider(&self) -> bool;

    /// 请求连接
    ///
    /// `ConnectMode::TrustedOnly` never prompts; an address that was never
    /// approved yields [`ProviderError::ConnectionDeclined`].
    async fn connect(&self, mode: ConnectMode) -> Result<Identity>;
}

/// 远程列表服务 Trait
#[async_trait]
pub trait ListService: Send + Sync {
    /// 服务标识符
    fn id(&self) -> &'static str;

    /// 读取列表账户
    ///
    /// Returns [`ProviderError::AccountNotFound`] when the account was never created.
    async fn read_account(&self, account: &ListAccountId) -> Result<RemoteList>;

    /// 创建列表账户（一次性操作）
    ///
    /// # Arguments
    /// * `account` - 列表账户地址
    /// * `owner` - 付费并签名的钱包地址
    async fn create_account(&self, account: &ListAccountId, owner: &Identity) -> Result<()>;

    /// 追加一条链接
    ///
    /// # Arguments
    /// * `account` - 列表账户地址
    /// * `link` - 提交的链接（不做校验）
    /// * `submitter` - 提交者钱包地址
    async fn append_item(
        &self,
        account: &ListAccountId,
        link: &str,
        submitter: &Identity,
    ) -> Result<()>;
}
