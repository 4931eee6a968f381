//! View 层：UI 渲染
//!
//! 只读取 Model，不修改状态。
//!
//!     layout.rs       整体布局：标题栏 / 容器 / 页脚 / 状态栏
//!     theme.rs        深色、浅色主题与常用样式
//!     components/     表单、GIF 列表、状态栏

mod components;
mod layout;
pub mod theme;

pub use layout::render;
