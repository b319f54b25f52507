//! Typed options stored as string literals

use crate::error::{Error, Result};
use crate::registry::ConverterRegistry;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::warn;

/// String-keyed option values kept in literal form.
///
/// Values are converted on the way in and out with the converters of a
/// shared [`ConverterRegistry`]. The literal map can be handed to whatever
/// persists it. Enum options need their converter installed first, e.g. with
/// [`ConverterRegistry::get_enum`].
#[derive(Debug, Clone)]
pub struct OptionMap {
    registry: Arc<ConverterRegistry>,
    literals: BTreeMap<String, String>,
}

impl OptionMap {
    pub fn new(registry: Arc<ConverterRegistry>) -> Self {
        Self::from_literals(registry, BTreeMap::new())
    }

    /// Wrap literals restored from storage
    pub fn from_literals(
        registry: Arc<ConverterRegistry>,
        literals: BTreeMap<String, String>,
    ) -> Self {
        Self { registry, literals }
    }

    /// Store `value` under `key`. `None` stores the type's "no value" literal.
    pub fn set<T: 'static>(&mut self, key: &str, value: Option<&T>) -> Result<()> {
        let converter = self
            .registry
            .get::<T>()
            .ok_or_else(Error::missing_converter::<T>)?;
        let literal = converter.as_string(value)?;
        self.literals.insert(key.to_string(), literal);
        Ok(())
    }

    /// Read the value under `key`; `Ok(None)` if the key is absent or holds no value
    pub fn get<T: 'static>(&self, key: &str) -> Result<Option<T>> {
        let Some(literal) = self.literals.get(key) else {
            return Ok(None);
        };
        let converter = self
            .registry
            .get::<T>()
            .ok_or_else(Error::missing_converter::<T>)?;
        converter.as_object(literal)
    }

    /// Read the value under `key`, or `default` if it is missing or unreadable
    pub fn get_or<T: 'static>(&self, key: &str, default: T) -> T {
        match self.get::<T>(key) {
            Ok(Some(value)) => value,
            Ok(None) => default,
            Err(error) => {
                warn!(key, %error, "falling back to default option value");
                default
            }
        }
    }

    /// Remove `key`, returning its literal
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.literals.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.literals.contains_key(key)
    }

    /// The stored literals, ordered by key
    pub fn literals(&self) -> &BTreeMap<String, String> {
        &self.literals
    }

    pub fn into_literals(self) -> BTreeMap<String, String> {
        self.literals
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converter::STRING_NULL_LITERAL;

    fn options() -> OptionMap {
        OptionMap::new(Arc::new(ConverterRegistry::new()))
    }

    #[test]
    fn test_set_and_get() {
        let mut opts = options();
        opts.set("width", Some(&640u32)).unwrap();
        opts.set("title", Some(&"Main".to_string())).unwrap();

        assert_eq!(opts.get::<u32>("width").unwrap(), Some(640));
        assert_eq!(opts.get::<String>("title").unwrap(), Some("Main".to_string()));
        assert_eq!(opts.literals()["width"], "640");
    }

    #[test]
    fn test_missing_key() {
        let opts = options();
        assert_eq!(opts.get::<i32>("nope").unwrap(), None);
        assert_eq!(opts.get_or("nope", 3), 3);
    }

    #[test]
    fn test_null_values() {
        let mut opts = options();
        opts.set::<String>("name", None).unwrap();
        opts.set::<i32>("count", None).unwrap();

        assert_eq!(opts.literals()["name"], STRING_NULL_LITERAL);
        assert_eq!(opts.literals()["count"], "");
        assert_eq!(opts.get::<String>("name").unwrap(), None);
        assert_eq!(opts.get::<i32>("count").unwrap(), None);
    }

    #[test]
    fn test_missing_converter() {
        let mut opts = options();
        let err = opts.set("list", Some(&vec![1, 2])).unwrap_err();
        assert!(matches!(err, Error::MissingConverter { .. }));
    }

    #[test]
    fn test_get_or_falls_back_on_bad_literal() {
        let literals = BTreeMap::from([("size".to_string(), "huge".to_string())]);
        let opts = OptionMap::from_literals(Arc::new(ConverterRegistry::new()), literals);

        assert!(opts.get::<u16>("size").is_err());
        assert_eq!(opts.get_or("size", 12u16), 12);
    }

    #[test]
    fn test_remove() {
        let mut opts = options();
        opts.set("flag", Some(&true)).unwrap();
        assert!(opts.contains_key("flag"));
        assert_eq!(opts.remove("flag"), Some("true".to_string()));
        assert!(opts.into_literals().is_empty());
    }
}
