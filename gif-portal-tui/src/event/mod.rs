//! Event 层：把终端输入翻译为 `AppMessage`
//!
//!     poll_event      等待输入，最长 timeout，受 app.rs 调用
//!     handle_event    按当前渲染分支分发按键：
//!                       - 全局快捷键（退出、刷新、主题、滚动）
//!                       - Unconnected：连接
//!                       - ConnectedUninitialized：初始化
//!                       - 表单分支：输入、删除、提交

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
pub use keymap::DefaultKeymap;
