use serde::{Deserialize, Serialize};

use super::Identity;

/// 钱包连接状态
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "address", rename_all = "camelCase")]
pub enum ConnectionState {
    #[default]
    Disconnected,
    Connected(Identity),
}

impl ConnectionState {
    pub fn is_connected(&self) -> bool {
        matches!(self, Self::Connected(_))
    }

    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Self::Connected(identity) => Some(identity),
            Self::Disconnected => None,
        }
    }
}
