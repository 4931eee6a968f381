use serde::Serialize;

use super::{ConnectionState, ListState};

/// 渲染分支
///
/// Pure projection of the connection and list state; exactly one branch is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RenderState {
    /// Single "connect" action.
    Unconnected,
    /// Single "initialize" action.
    ConnectedUninitialized,
    /// Submission form, no items.
    ConnectedEmpty,
    /// Submission form and the item grid.
    ConnectedPopulated,
}

impl RenderState {
    pub fn select(connection: &ConnectionState, list: &ListState) -> Self {
        match (connection, list) {
            (ConnectionState::Disconnected, _) => Self::Unconnected,
            (ConnectionState::Connected(_), ListState::Uninitialized) => {
                Self::ConnectedUninitialized
            }
            (ConnectionState::Connected(_), ListState::Empty) => Self::ConnectedEmpty,
            (ConnectionState::Connected(_), ListState::Populated(_)) => Self::ConnectedPopulated,
        }
    }

    /// Whether the input and submit button are shown.
    pub fn shows_form(self) -> bool {
        matches!(self, Self::ConnectedEmpty | Self::ConnectedPopulated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Identity, ListItem};

    fn connected() -> ConnectionState {
        ConnectionState::Connected(Identity::new("me"))
    }

    #[test]
    fn disconnected_wins_over_list_state() {
        let populated = ListState::Populated(vec![ListItem {
            link: "https://a/1.gif".to_string(),
            submitter: Identity::new("u"),
        }]);
        for list in [ListState::Uninitialized, ListState::Empty, populated] {
            assert_eq!(
                RenderState::select(&ConnectionState::Disconnected, &list),
                RenderState::Unconnected
            );
        }
    }

    #[test]
    fn connected_branches() {
        assert_eq!(
            RenderState::select(&connected(), &ListState::Uninitialized),
            RenderState::ConnectedUninitialized
        );
        assert_eq!(
            RenderState::select(&connected(), &ListState::Empty),
            RenderState::ConnectedEmpty
        );
        assert!(RenderState::ConnectedEmpty.shows_form());
        assert!(!RenderState::ConnectedUninitialized.shows_form());
    }
}
