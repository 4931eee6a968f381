use std::path::PathBuf;

use serde::{Deserialize, Serialize};

// ============ Identities ============

/// Public address of a connected wallet.
///
/// Opaque to everything above the provider layer: it is only ever displayed,
/// compared, and handed back to the list service as the submitter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(String);

impl Identity {
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Shortened form for narrow UIs: `AbCd…WxYz`.
    #[must_use]
    pub fn short(&self) -> String {
        let chars: Vec<char> = self.0.chars().collect();
        if chars.len() <= 10 {
            return self.0.clone();
        }
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{head}…{tail}")
    }
}

impl std::fmt::Display for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Address of the remote list account.
///
/// Fixed configuration for the lifetime of a portal, never runtime state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListAccountId(String);

impl ListAccountId {
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ListAccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ============ Remote list ============

/// One submitted link as stored by the remote program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteItem {
    /// Submitted image URL.
    pub link: String,
    /// Address of the wallet that submitted it.
    pub submitter: Identity,
}

impl RemoteItem {
    pub fn new(link: impl Into<String>, submitter: Identity) -> Self {
        Self {
            link: link.into(),
            submitter,
        }
    }
}

/// Decoded content of the remote list account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteList {
    /// Counter kept by the program alongside the items.
    pub total_count: u64,
    /// Items in submission order.
    pub items: Vec<RemoteItem>,
}

// ============ Wallet ============

/// How a connection is requested from the wallet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConnectMode {
    /// Only succeed if this application was approved before; never prompts.
    TrustedOnly,
    /// Full connection request; the request itself counts as the user's approval.
    Interactive,
}

// ============ Settings ============

/// Cluster commitment level used for reads and confirmations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Commitment {
    #[default]
    Processed,
    Confirmed,
    Finalized,
}

impl Commitment {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Processed => "processed",
            Self::Confirmed => "confirmed",
            Self::Finalized => "finalized",
        }
    }
}

/// Which wallet implementation to build, and from where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletSettings {
    /// Solana CLI keypair file plus a trust store of approved addresses.
    Keypair {
        keypair_path: PathBuf,
        trust_store_path: PathBuf,
    },
    /// In-process wallet with a freshly generated address.
    Memory,
}

/// Which list service implementation to build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListSettings {
    /// Anchor list program reached over JSON-RPC.
    Solana {
        rpc_url: String,
        program_id: String,
        commitment: Commitment,
        /// Keypair of the list account; only needed to create the account.
        list_account_keypair: Option<PathBuf>,
    },
    /// In-process list. With `seed`, `account` starts out created and holding those items.
    Memory {
        account: ListAccountId,
        seed: Option<Vec<RemoteItem>>,
    },
}
