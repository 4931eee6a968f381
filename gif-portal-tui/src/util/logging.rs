//! 日志初始化
//!
//! TUI 占用了备用屏幕，所以日志只写文件：
//! `<data dir>/gif-portal/logs/gif-portal.log`。
//! 库中的 `log` 记录经 tracing-log 桥接进入同一个订阅者。

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_FILE: &str = "gif-portal.log";

fn log_dir() -> Result<PathBuf> {
    let dir = dirs::data_dir().ok_or_else(|| anyhow!("no data directory on this platform"))?;
    Ok(dir.join("gif-portal").join("logs"))
}

/// 安装全局订阅者；返回的 guard 被丢弃时刷新缓冲
pub fn init_logging(filter: &str) -> Result<WorkerGuard> {
    let dir = log_dir()?;
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(&dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_new(filter)
        .with_context(|| format!("invalid log filter '{filter}'"))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer).with_ansi(false).with_target(true))
        .try_init()
        .context("failed to install the log subscriber")?;

    Ok(guard)
}
