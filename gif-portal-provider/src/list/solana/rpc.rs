//! RPC 调用工具
//!
//! Wraps calls to the nonblocking `RpcClient`: logs the request and outcome and
//! turns `ClientError` into a [`RpcFailure`] for the error mapper. Nothing is retried.

use std::future::Future;
use std::time::Instant;

use solana_client::client_error::{ClientError, ClientErrorKind};
use solana_client::rpc_request::RpcError;

use crate::traits::RpcFailure;
use crate::utils::log_sanitizer::truncate_for_log;

/// 错误种类代码（非 JSON-RPC 错误码）
pub(crate) const CODE_NETWORK: &str = "network";
pub(crate) const CODE_TRANSACTION: &str = "transaction";
pub(crate) const CODE_SIGNING: &str = "signing";

/// 执行一次 RPC 调用
pub(crate) async fn execute_rpc<T, Fut>(
    provider_name: &str,
    method_name: &str,
    target: &str,
    call: Fut,
) -> Result<T, RpcFailure>
where
    Fut: Future<Output = Result<T, ClientError>>,
{
    log::debug!("[{provider_name}] {method_name} {target}");
    let started = Instant::now();

    match call.await {
        Ok(value) => {
            log::debug!(
                "[{provider_name}] {method_name} ok in {}ms",
                started.elapsed().as_millis()
            );
            Ok(value)
        }
        Err(e) => {
            let raw = raw_from_client_error(&e);
            log::debug!(
                "[{provider_name}] {method_name} failed in {}ms: code={:?} {}",
                started.elapsed().as_millis(),
                raw.code,
                truncate_for_log(&raw.message)
            );
            Err(raw)
        }
    }
}

/// `ClientError` → `RpcFailure`
pub(crate) fn raw_from_client_error(err: &ClientError) -> RpcFailure {
    let message = err.to_string();
    match err.kind() {
        ClientErrorKind::Io(_) | ClientErrorKind::Reqwest(_) => {
            RpcFailure::coded(CODE_NETWORK, message)
        }
        ClientErrorKind::RpcError(RpcError::RpcResponseError { code, .. }) => {
            RpcFailure::coded(code.to_string(), message)
        }
        ClientErrorKind::TransactionError(_) => RpcFailure::coded(CODE_TRANSACTION, message),
        ClientErrorKind::SigningError(_) => RpcFailure::coded(CODE_SIGNING, message),
        _ => RpcFailure::bare(message),
    }
}
