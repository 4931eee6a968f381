use serde::{Deserialize, Serialize};

use super::ListAccountId;

/// Portal 运行配置
///
/// Fixed for the lifetime of a [`PortalView`](crate::PortalView).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortalConfig {
    /// 远程列表账户
    pub list_account: ListAccountId,
    /// 是否拒绝重叠提交
    #[serde(default)]
    pub guard_concurrent_submissions: bool,
}

impl PortalConfig {
    pub fn new(list_account: ListAccountId) -> Self {
        Self {
            list_account,
            guard_concurrent_submissions: false,
        }
    }

    #[must_use]
    pub fn with_submission_guard(mut self, enabled: bool) -> Self {
        self.guard_concurrent_submissions = enabled;
        self
    }
}
