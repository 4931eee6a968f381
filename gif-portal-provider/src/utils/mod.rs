//! Utility modules.

/// Log sanitization utilities that keep long links and RPC bodies readable.
pub mod log_sanitizer;
