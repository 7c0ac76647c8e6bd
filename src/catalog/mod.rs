//! Language catalog: the fixed set of languages offered by both selectors.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported language codes and
//!   their display names, in display order
//! - `language`: Type-safe `Language` handle that can only hold catalog codes
//!
//! # Example
//!
//! ```rust,ignore
//! use translator_widget::catalog::{Language, LanguageCatalog};
//!
//! let hindi = Language::from_code("hi-IN")?;
//! for entry in LanguageCatalog::get().iter() {
//!     println!("{} {}", entry.code, entry.name);
//! }
//! ```

mod language;
mod registry;

pub use language::Language;
pub use registry::{LanguageCatalog, LanguageEntry};
