use crate::types::Notice;

/// 用户通知 Trait
///
/// Delivers user-visible notices (e.g. "no wallet found"). Front ends decide how
/// to show them; implementations must not block.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}
