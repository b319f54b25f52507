//! # textseg_rs
//!
//! Delimiter-aware string segmentation and replacement, plus a registry of
//! typed string ⟷ value converters.
//!
//! The segmenter functions are pure and work on borrowed input. The
//! [`ConverterRegistry`] maps value types to [`Converter`]s that turn values
//! into literals suitable for storage and back; [`OptionMap`] keeps typed
//! options in that literal form.
//!
//! ## Example
//!
//! ```rust
//! use textseg_rs::{concat, replace_all, split, ConverterRegistry, SplitOptions, Style};
//!
//! let parts = split("/abc//d", "/", &SplitOptions::default()).unwrap();
//! assert_eq!(parts, vec!["", "abc", "", "d"]);
//! assert_eq!(concat(&parts, "/", Style::Insert), "/abc//d");
//!
//! assert_eq!(replace_all("ab", "", "z"), "zazbz");
//!
//! let registry = ConverterRegistry::new();
//! let conv = registry.get::<f64>().unwrap();
//! assert_eq!(conv.as_object("2.5").unwrap(), Some(2.5));
//! ```

mod common;
mod concat;
mod converter;
mod error;
mod options;
mod registry;
mod replace;
mod split;

// Re-export public API
pub use common::Style;
pub use concat::concat;
pub use converter::{
    Converter, DateConverter, EnumConverter, EnumLiteral, LiteralConverter, Locale,
    LocaleConverter, SerdeConverter, StringConverter, STRING_NULL_LITERAL,
};
pub use error::{Error, Result};
pub use options::OptionMap;
pub use registry::ConverterRegistry;
pub use replace::{replace, replace_all, replace_first};
pub use split::{split, split_iter, Segments, SplitOptions};
