use gif_portal_provider::{RemoteItem, RemoteList};
use serde::{Deserialize, Serialize};

use super::Identity;

/// 列表中的一条提交
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListItem {
    pub link: String,
    pub submitter: Identity,
}

impl From<RemoteItem> for ListItem {
    fn from(item: RemoteItem) -> Self {
        Self {
            link: item.link,
            submitter: item.submitter,
        }
    }
}

/// 本地已知的列表状态
///
/// `Uninitialized` covers both "account never created" and "could not read it".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "items", rename_all = "camelCase")]
pub enum ListState {
    #[default]
    Uninitialized,
    Empty,
    Populated(Vec<ListItem>),
}

impl ListState {
    /// Whether the submission form is available.
    pub fn accepts_submissions(&self) -> bool {
        matches!(self, Self::Empty | Self::Populated(_))
    }

    pub fn items(&self) -> &[ListItem] {
        match self {
            Self::Populated(items) => items,
            Self::Uninitialized | Self::Empty => &[],
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Uninitialized => "uninitialized",
            Self::Empty => "empty",
            Self::Populated(_) => "populated",
        }
    }
}

impl From<RemoteList> for ListState {
    fn from(list: RemoteList) -> Self {
        if list.items.is_empty() {
            Self::Empty
        } else {
            Self::Populated(list.items.into_iter().map(ListItem::from).collect())
        }
    }
}
