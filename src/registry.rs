//! Type-keyed registry of literal converters

use crate::converter::{
    Converter, DateConverter, EnumConverter, EnumLiteral, LiteralConverter, Locale,
    LocaleConverter, SerdeConverter, StringConverter,
};
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::any::{type_name, Any, TypeId};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{debug, trace};

/// A registered converter with its type erased.
///
/// `converter` always holds an `Arc<dyn Converter<T>>` for the `T` whose
/// `TypeId` is the entry key.
struct Slot {
    type_name: &'static str,
    converter: Arc<dyn Any + Send + Sync>,
}

impl Slot {
    fn new<T: 'static>(converter: Arc<dyn Converter<T>>) -> Self {
        Self {
            type_name: type_name::<T>(),
            converter: Arc::new(converter),
        }
    }

    fn get<T: 'static>(&self) -> Option<Arc<dyn Converter<T>>> {
        self.converter
            .downcast_ref::<Arc<dyn Converter<T>>>()
            .cloned()
    }
}

/// Maps value types to the converter used to turn them into literals.
///
/// Safe to share between threads; every method takes `&self`. Each
/// application context owns its own registry, there is no global instance.
///
/// ```rust
/// use textseg_rs::ConverterRegistry;
///
/// let registry = ConverterRegistry::new();
/// let conv = registry.get::<i32>().unwrap();
/// assert_eq!(conv.as_string(Some(&7)).unwrap(), "7");
/// assert_eq!(conv.as_object("7").unwrap(), Some(7));
/// ```
pub struct ConverterRegistry {
    converters: DashMap<TypeId, Slot>,
}

impl ConverterRegistry {
    /// Create a registry with the default converters installed
    pub fn new() -> Self {
        let registry = Self::empty();
        registry.register_defaults();
        registry
    }

    /// Create a registry with no converters
    pub fn empty() -> Self {
        Self {
            converters: DashMap::new(),
        }
    }

    fn register_defaults(&self) {
        self.register_literal::<bool>();
        self.register_literal::<char>();
        self.register_literal::<i8>();
        self.register_literal::<i16>();
        self.register_literal::<i32>();
        self.register_literal::<i64>();
        self.register_literal::<i128>();
        self.register_literal::<isize>();
        self.register_literal::<u8>();
        self.register_literal::<u16>();
        self.register_literal::<u32>();
        self.register_literal::<u64>();
        self.register_literal::<u128>();
        self.register_literal::<usize>();
        self.register_literal::<f32>();
        self.register_literal::<f64>();
        self.register::<Locale, _>(LocaleConverter);
        self.register::<String, _>(StringConverter);
        self.register::<DateTime<Utc>, _>(DateConverter);
    }

    fn register_literal<T>(&self)
    where
        T: FromStr + fmt::Display + 'static,
        T::Err: fmt::Display,
    {
        self.register::<T, _>(LiteralConverter::<T>::new());
    }

    /// Install `converter` for `T`, replacing any previous one
    pub fn register<T, C>(&self, converter: C)
    where
        T: 'static,
        C: Converter<T> + 'static,
    {
        self.register_arc::<T>(Arc::new(converter));
    }

    /// Install a shared converter for `T`, replacing any previous one
    pub fn register_arc<T: 'static>(&self, converter: Arc<dyn Converter<T>>) {
        let previous = self
            .converters
            .insert(TypeId::of::<T>(), Slot::new(converter));
        match previous {
            Some(_) => trace!(type_name = type_name::<T>(), "replaced converter"),
            None => debug!(type_name = type_name::<T>(), "registered converter"),
        }
    }

    /// Remove the converter for `T`. Returns whether one was registered.
    pub fn deregister<T: 'static>(&self) -> bool {
        let removed = self.converters.remove(&TypeId::of::<T>()).is_some();
        if removed {
            debug!(type_name = type_name::<T>(), "deregistered converter");
        }
        removed
    }

    /// Look up the converter for `T`
    pub fn get<T: 'static>(&self) -> Option<Arc<dyn Converter<T>>> {
        self.converters
            .get(&TypeId::of::<T>())
            .and_then(|slot| slot.value().get::<T>())
    }

    /// Look up the converter for an enum, creating a name-based one on first use.
    ///
    /// The insertion is atomic: when several threads ask for the same enum at
    /// once, exactly one synthesized converter is kept and every caller gets it.
    /// A converter registered explicitly for `E` takes precedence.
    pub fn get_enum<E: EnumLiteral>(&self) -> Option<Arc<dyn Converter<E>>> {
        if let Some(converter) = self.get::<E>() {
            return Some(converter);
        }

        let slot = self.converters.entry(TypeId::of::<E>()).or_insert_with(|| {
            debug!(type_name = type_name::<E>(), "synthesized enum converter");
            Slot::new::<E>(Arc::new(EnumConverter::<E>::new()))
        });
        slot.value().get::<E>()
    }

    /// Look up the converter for `T`, falling back to a [`SerdeConverter`].
    ///
    /// The fallback is not installed in the registry.
    pub fn get_or_serde<T>(&self) -> Arc<dyn Converter<T>>
    where
        T: Serialize + DeserializeOwned + 'static,
    {
        self.get::<T>()
            .unwrap_or_else(|| Arc::new(SerdeConverter::<T>::new()))
    }

    /// Returns true if a converter is registered for `T`
    pub fn contains<T: 'static>(&self) -> bool {
        self.converters.contains_key(&TypeId::of::<T>())
    }

    pub fn len(&self) -> usize {
        self.converters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.converters.is_empty()
    }

    /// Names of all registered types, sorted
    pub fn type_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self
            .converters
            .iter()
            .map(|entry| entry.value().type_name)
            .collect();
        names.sort_unstable();
        names
    }
}

impl Default for ConverterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ConverterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConverterRegistry")
            .field("types", &self.type_names())
            .finish()
    }
}
