//! Model 层：界面状态
//!
//! `App.portal` 是核心库状态的只读快照，每轮主循环从 watch 通道同步；
//! 其余字段（状态栏、滚动位置、进行中的任务）只属于界面。

mod app;

pub use app::{App, StatusLevel};
