//! Solana 错误映射

use crate::error::ProviderError;
use crate::traits::{FailureContext, FailureMapper, RpcFailure};

use super::SolanaListService;
use super::rpc::{CODE_NETWORK, CODE_SIGNING, CODE_TRANSACTION};

/// JSON-RPC 错误码映射
/// Reference: <https://solana.com/docs/rpc>
impl FailureMapper for SolanaListService {
    fn provider_name(&self) -> &'static str {
        "solana"
    }

    fn map_error(&self, raw: RpcFailure, context: FailureContext) -> ProviderError {
        match raw.code.as_deref() {
            Some(CODE_NETWORK) => ProviderError::NetworkError {
                provider: self.provider_name().to_string(),
                detail: raw.message,
            },

            // -32002: Transaction simulation failed (preflight)
            // -32003: Transaction signature verification failure
            Some(CODE_TRANSACTION | CODE_SIGNING | "-32002" | "-32003") => {
                ProviderError::TransactionFailed {
                    provider: self.provider_name().to_string(),
                    raw_message: Some(raw.message),
                }
            }

            // -32602: Invalid params
            Some("-32602") => ProviderError::InvalidParameter {
                provider: self.provider_name().to_string(),
                param: context.account.unwrap_or_else(|| "request".to_string()),
                detail: raw.message,
            },

            // 写操作的其他失败一律视为交易失败
            _ if context.is_write => ProviderError::TransactionFailed {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },

            _ => self.unclassified(raw),
        }
    }
}
