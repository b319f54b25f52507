//! String literal converters for typed values
//!
//! A converter turns a value into a literal suitable for storage and back.
//! `None` stands for "no value"; most converters write it as the empty
//! string, see each implementation for the exceptions.

use crate::error::{Error, Result};
use crate::split::{split, SplitOptions};
use base64::Engine;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

/// Literal the [`StringConverter`] writes for a missing value.
///
/// A stored string equal to this text reads back as `None`.
pub const STRING_NULL_LITERAL: &str = "\u{0}null\u{0}";

/// Bidirectional conversion between a value type and its string literal
pub trait Converter<T>: Send + Sync {
    /// Parse a literal. `Ok(None)` means the literal encodes "no value".
    fn as_object(&self, literal: &str) -> Result<Option<T>>;

    /// Render a value, or the absence of one, as a literal.
    fn as_string(&self, value: Option<&T>) -> Result<String>;
}

/// Converter for any type with symmetric `Display`/`FromStr` forms
/// (numbers, `bool`, `char`). The empty literal is `None`.
pub struct LiteralConverter<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> LiteralConverter<T> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for LiteralConverter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Converter<T> for LiteralConverter<T>
where
    T: FromStr + fmt::Display,
    T::Err: fmt::Display,
{
    fn as_object(&self, literal: &str) -> Result<Option<T>> {
        if literal.is_empty() {
            return Ok(None);
        }
        literal
            .parse()
            .map(Some)
            .map_err(|e| Error::conversion::<T>(literal, e))
    }

    fn as_string(&self, value: Option<&T>) -> Result<String> {
        Ok(value.map(ToString::to_string).unwrap_or_default())
    }
}

/// Converter for `String`. The empty string is a real value here, so
/// `None` is written as [`STRING_NULL_LITERAL`].
#[derive(Debug, Default)]
pub struct StringConverter;

impl Converter<String> for StringConverter {
    fn as_object(&self, literal: &str) -> Result<Option<String>> {
        if literal == STRING_NULL_LITERAL {
            Ok(None)
        } else {
            Ok(Some(literal.to_string()))
        }
    }

    fn as_string(&self, value: Option<&String>) -> Result<String> {
        Ok(value
            .cloned()
            .unwrap_or_else(|| STRING_NULL_LITERAL.to_string()))
    }
}

/// Converter for UTC timestamps, written as decimal milliseconds since the epoch.
///
/// Sub-millisecond precision is dropped.
#[derive(Debug, Default)]
pub struct DateConverter;

impl Converter<DateTime<Utc>> for DateConverter {
    fn as_object(&self, literal: &str) -> Result<Option<DateTime<Utc>>> {
        if literal.is_empty() {
            return Ok(None);
        }
        let millis: i64 = literal
            .parse()
            .map_err(|e| Error::conversion::<DateTime<Utc>>(literal, e))?;
        DateTime::from_timestamp_millis(millis)
            .map(Some)
            .ok_or_else(|| Error::conversion::<DateTime<Utc>>(literal, "timestamp out of range"))
    }

    fn as_string(&self, value: Option<&DateTime<Utc>>) -> Result<String> {
        Ok(value
            .map(|date| date.timestamp_millis().to_string())
            .unwrap_or_default())
    }
}

/// A language/country/variant triple, written as `lang_COUNTRY_variant`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Locale {
    pub language: String,
    pub country: String,
    pub variant: String,
}

impl Locale {
    pub fn new(language: &str, country: &str, variant: &str) -> Self {
        Self {
            language: language.to_string(),
            country: country.to_string(),
            variant: variant.to_string(),
        }
    }

    /// Reason this locale has no literal that reads back as itself, if any
    fn unwritable_reason(&self) -> Option<&'static str> {
        let fields = [&self.language, &self.country, &self.variant];
        if fields.iter().all(|field| field.is_empty()) {
            Some("empty locale")
        } else if fields.iter().any(|field| field.contains(char::is_whitespace)) {
            Some("whitespace in locale")
        } else if self.language.contains('_') || self.country.contains('_') {
            Some("'_' in language or country")
        } else {
            None
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.language)?;
        if !self.country.is_empty() || !self.variant.is_empty() {
            write!(f, "_{}", self.country)?;
        }
        if !self.variant.is_empty() {
            write!(f, "_{}", self.variant)?;
        }
        Ok(())
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let options = SplitOptions {
            limit: 2,
            ..SplitOptions::default()
        };
        let parts = split(s, "_", &options)?;
        if parts.iter().any(|part| part.contains(char::is_whitespace)) {
            return Err(Error::conversion::<Locale>(s, "whitespace in locale"));
        }

        let part = |i: usize| parts.get(i).copied().unwrap_or_default();
        Ok(Locale::new(part(0), part(1), part(2)))
    }
}

/// Converter for [`Locale`]. The empty literal is `None`.
///
/// Locales whose literal would read back differently (an `_` in the language
/// or country, whitespace anywhere, or all fields empty) are refused on write.
#[derive(Debug, Default)]
pub struct LocaleConverter;

impl Converter<Locale> for LocaleConverter {
    fn as_object(&self, literal: &str) -> Result<Option<Locale>> {
        if literal.is_empty() {
            return Ok(None);
        }
        literal.parse().map(Some)
    }

    fn as_string(&self, value: Option<&Locale>) -> Result<String> {
        let Some(locale) = value else {
            return Ok(String::new());
        };
        match locale.unwritable_reason() {
            Some(reason) => Err(Error::Serialization {
                type_name: std::any::type_name::<Locale>(),
                reason: format!("{}: {:?}", reason, locale),
            }),
            None => Ok(locale.to_string()),
        }
    }
}

/// Enums that can be written by variant name
pub trait EnumLiteral: Sized + Copy + Send + Sync + 'static {
    /// Every variant, in declaration order
    const VARIANTS: &'static [Self];

    /// The declared name of this variant
    fn name(&self) -> &'static str;
}

/// Converter for [`EnumLiteral`] types. Names match exactly and case-sensitively.
pub struct EnumConverter<E> {
    _marker: PhantomData<fn() -> E>,
}

impl<E> EnumConverter<E> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<E> Default for EnumConverter<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: EnumLiteral> Converter<E> for EnumConverter<E> {
    fn as_object(&self, literal: &str) -> Result<Option<E>> {
        if literal.is_empty() {
            return Ok(None);
        }
        E::VARIANTS
            .iter()
            .find(|variant| variant.name() == literal)
            .copied()
            .map(Some)
            .ok_or_else(|| Error::conversion::<E>(literal, "no variant with this name"))
    }

    fn as_string(&self, value: Option<&E>) -> Result<String> {
        Ok(value.map(|v| v.name().to_string()).unwrap_or_default())
    }
}

/// Fallback converter for any serde type: base64 of the JSON bytes.
///
/// `None` is encoded like any other value (as JSON `null`), so the empty
/// literal is not accepted.
pub struct SerdeConverter<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> SerdeConverter<T> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for SerdeConverter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Serialize + DeserializeOwned> Converter<T> for SerdeConverter<T> {
    fn as_object(&self, literal: &str) -> Result<Option<T>> {
        let bytes = base64::engine::general_purpose::STANDARD
            .decode(literal)
            .map_err(|e| Error::conversion::<T>(literal, e))?;
        serde_json::from_slice::<Option<T>>(&bytes).map_err(|e| Error::conversion::<T>(literal, e))
    }

    fn as_string(&self, value: Option<&T>) -> Result<String> {
        let bytes = serde_json::to_vec(&value).map_err(|e| Error::Serialization {
            type_name: std::any::type_name::<T>(),
            reason: e.to_string(),
        })?;
        Ok(base64::engine::general_purpose::STANDARD.encode(bytes))
    }
}
