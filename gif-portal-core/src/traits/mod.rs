//! Host capability traits

mod notifier;

pub use notifier::Notifier;
