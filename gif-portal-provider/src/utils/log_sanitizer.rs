//! 日志脱敏 / 截断
//!
//! Submitted links are user input of arbitrary length (image CDNs append long
//! tracking query strings), and RPC error bodies can be large. Both pass
//! through here before they reach a log record.

/// 日志中保留的最大字节数
const LOG_BYTE_BUDGET: usize = 160;

/// Keeps at most [`LOG_BYTE_BUDGET`] bytes, cut on a char boundary, and notes
/// how many bytes were dropped.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= LOG_BYTE_BUDGET {
        return s.to_string();
    }
    let cut = s
        .char_indices()
        .map(|(idx, c)| idx + c.len_utf8())
        .take_while(|end| *end <= LOG_BYTE_BUDGET)
        .last()
        .unwrap_or(0);
    format!("{}…(+{} bytes)", &s[..cut], s.len() - cut)
}

/// 链接日志：去掉查询串后再截断
pub fn link_for_log(link: &str) -> String {
    let without_query = link.split_once('?').map_or(link, |(base, _)| base);
    truncate_for_log(without_query)
}
