//! Message 层：事件消息定义
//!
//! 作为 Event / 后台任务 → Update 之间的桥梁。
//!
//! 有模块结构：
//!     app.rs      主消息 `AppMessage`
//!     portal.rs   用户对 portal 的操作（连接、初始化、输入、提交）
//!     task.rs     后台任务的结果与核心库通知

mod app;
mod portal;
mod task;

pub use app::AppMessage;
pub use portal::{InputEdit, PortalMessage};
pub use task::{TaskKind, TaskMessage};
