//! Util 层：与业务无关的基础设施
//!
//!     terminal.rs   终端初始化和恢复（原始模式 + 备用屏幕）
//!     logging.rs    日志写入数据目录下的文件
//!     text.rs       按显示宽度截断文本

mod logging;
mod terminal;
pub mod text;

pub use logging::init_logging;
pub use terminal::{Term, init_terminal, restore_terminal};
