#![warn(missing_docs)]
//! Core collections and helpers shared across plugin crates.

pub mod error;
pub mod key;
pub mod lazy;
pub mod math;
pub mod random;
pub mod refreshable;

// Re-export commonly used types
pub use error::ArgumentError;
pub use key::{is_valid_key, is_valid_namespace, NamespacedKey, MINECRAFT_NAMESPACE};
pub use lazy::LazyValue;
pub use math::{
    clamp, format_time, generate_number_between, parse_seconds, parse_seconds_or, TimeUnit,
};
pub use random::{SharedRng, WeightProvider, WeightedRandomSelector};
pub use refreshable::RefreshableSet;
