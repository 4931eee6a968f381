//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::env;

use gif_portal_provider::{ListAccountId, RemoteList};

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_env {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值
///
/// 只格式化错误一侧，成功值不要求实现 `Debug`（例如 `Backend`）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        match $expr {
            Ok(val) => val,
            Err(e) => panic!("expected Ok(..), got Err({e:?})"),
        }
    }};
}

pub fn env_or_empty(name: &str) -> String {
    env::var(name).unwrap_or_default()
}

pub fn test_account() -> ListAccountId {
    ListAccountId::new(env_or_empty("GIF_PORTAL_TEST_ACCOUNT"))
}

/// 生成唯一测试链接
pub fn unique_link() -> String {
    format!(
        "https://media.giphy.com/media/test-{}/giphy.gif",
        chrono::Utc::now().timestamp_millis()
    )
}

/// 列表中是否包含该链接
pub fn contains_link(list: &RemoteList, link: &str) -> bool {
    list.items.iter().any(|item| item.link == link)
}
