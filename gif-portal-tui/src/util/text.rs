//! 按终端显示宽度处理文本（CJK、emoji 占两列）

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// 截断到 `max` 列，超出时以 `…` 结尾
pub fn truncate_to_width(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    if max == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// 保留末尾最多 `max` 列（输入框光标始终可见）
pub fn tail_to_width(s: &str, max: usize) -> &str {
    let mut used = 0;
    let mut start = s.len();
    for (idx, c) in s.char_indices().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > max {
            break;
        }
        used += w;
        start = idx;
    }
    &s[start..]
}
