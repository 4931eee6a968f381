//! Backend 层：配置、后端组装与异步任务
//!
//! 有模块结构：
//!     config_service.rs   配置文件（JSON）
//!     setup.rs            配置 → 钱包 + 列表服务 → `PortalView`
//!     notifier.rs         核心库通知 → 主循环
//!     portal_service.rs   在运行时中执行 portal 操作，结果以消息回传
//!
//! Update 层只通过 `PortalCommands` 发出操作，从不等待它们完成。

mod config_service;
mod notifier;
mod portal_service;
mod setup;

pub use config_service::{AppConfig, ConfigService, JsonConfigService};
pub use portal_service::{PortalCommands, PortalService};
pub use setup::build_portal;
