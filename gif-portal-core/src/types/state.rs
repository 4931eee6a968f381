use serde::Serialize;

use super::{ConnectionState, Identity, ListState, RenderState};
use crate::error::{CoreError, CoreResult};

/// 启动阶段（静默重连）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum StartupPhase {
    #[default]
    NotMounted,
    /// Silent reconnect is running.
    Pending,
    /// Silent reconnect finished (or was torn down).
    Done,
}

/// Portal 状态快照
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortalState {
    pub connection: ConnectionState,
    pub list: ListState,
    /// 待提交的输入内容
    pub input: String,
    pub fetches_in_flight: usize,
    pub submissions_in_flight: usize,
    pub startup: StartupPhase,
}

impl PortalState {
    pub fn render_state(&self) -> RenderState {
        RenderState::select(&self.connection, &self.list)
    }

    pub fn is_fetching(&self) -> bool {
        self.fetches_in_flight > 0
    }

    pub(crate) fn require_connected(&self) -> CoreResult<Identity> {
        self.connection
            .identity()
            .cloned()
            .ok_or(CoreError::NotConnected)
    }

    /// 检查提交前置条件；通过时清空输入并登记一次进行中的提交。
    ///
    /// Leaves the state untouched on error.
    pub(crate) fn begin_submission(&mut self, guard: bool) -> CoreResult<Identity> {
        let submitter = self.require_connected()?;
        if !self.list.accepts_submissions() {
            return Err(CoreError::InvalidState(format!(
                "cannot submit while the list is {}",
                self.list.label()
            )));
        }
        if guard && self.submissions_in_flight > 0 {
            return Err(CoreError::SubmissionInFlight);
        }
        self.input.clear();
        self.submissions_in_flight += 1;
        Ok(submitter)
    }

    /// 取走当前输入作为待提交链接，并登记提交
    ///
    /// Reading and clearing the buffer happen in the same state update, so an
    /// edit made later is never cleared without being sent.
    pub(crate) fn take_input_for_submission(
        &mut self,
        guard: bool,
    ) -> CoreResult<(String, Identity)> {
        if self.input.is_empty() {
            return Err(CoreError::EmptyLink);
        }
        let link = self.input.clone();
        let submitter = self.begin_submission(guard)?;
        Ok((link, submitter))
    }
}
