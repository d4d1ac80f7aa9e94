#![warn(missing_docs)]
//! Externalized message strings with positional arguments, global
//! placeholders and a simple text file format.

mod bundle;
mod color;
mod config;
mod error;
mod file;
pub mod format;
mod memory;

pub use bundle::{LanguageBundle, Nullable, NULL_ARGUMENT};
pub use color::{translate_alternate_color_codes, TextProcessor, COLOR_CHAR, DEFAULT_ALT_COLOR_CHAR};
pub use config::{BundleConfig, LoadTarget};
pub use error::LangError;
pub use file::FileLanguageBundle;
pub use memory::MemoryLanguageBundle;
