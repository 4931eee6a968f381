//! GIF Portal TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 界面状态 (`model/`)，其中 portal 部分是核心库状态的快照
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 配置、后端组装与异步任务 (`backend/`)
//!
//! 主线程运行同步的轮询循环；钱包与链上调用在 tokio 运行时中作为任务执行，
//! 结果经 mpsc 通道以 `AppMessage` 的形式回到主循环。
//!
//! 启动顺序：
//!
//!     Cli::parse()              // 命令行参数
//!     JsonConfigService::load() // 配置文件（命令行覆盖）
//!     init_logging()            // 日志写入文件，不污染备用屏幕
//!     runtime.enter()           // 之后可以 tokio::spawn
//!     build_portal()            // 钱包 + 列表服务 + PortalView
//!     PortalService::mount()    // 启动静默重连
//!     init_terminal() → app::run() → restore_terminal()

mod app;
mod backend;
mod cli;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::sync::mpsc;

use backend::{ConfigService, JsonConfigService, PortalService};
use cli::Cli;
use util::{init_logging, init_terminal, restore_terminal};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1. 配置
    let config_service = match &cli.config {
        Some(path) => JsonConfigService::new(path.clone()),
        None => JsonConfigService::from_default_location()?,
    };
    let first_run = !config_service.exists();
    let mut config = config_service.load()?;
    if first_run {
        config_service.save(&config)?;
    }
    cli.apply(&mut config);

    // 2. 日志（guard 必须活到程序结束）
    let _log_guard = init_logging(&cli.log_level)?;
    tracing::info!(
        config = %config_service.path().display(),
        demo = cli.demo,
        "GIF Portal starting"
    );

    // 3. 异步运行时
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("gif-portal-worker")
        .build()
        .context("failed to start the async runtime")?;
    let _enter = runtime.enter();

    // 4. 组装 portal 并挂载
    let (tx, rx) = mpsc::unbounded_channel();
    let view = backend::build_portal(&config, cli.demo, tx.clone())?;
    let portal = PortalService::new(view, tx);
    let _mount = portal.mount()?;

    // 5. 终端与主循环
    let mut terminal = init_terminal()?;
    let mut app = model::App::new(&config, portal.snapshot());
    let result = app::run(&mut terminal, &mut app, &portal, rx);

    // 6. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    tracing::info!("GIF Portal stopped");
    result
}
