use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::{Arc, Barrier};
use std::thread;
use textseg_rs::{
    Converter, ConverterRegistry, EnumLiteral, Error, Locale, OptionMap, STRING_NULL_LITERAL,
};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Level {
    Low,
    Medium,
    High,
}

impl EnumLiteral for Level {
    const VARIANTS: &'static [Self] = &[Level::Low, Level::Medium, Level::High];

    fn name(&self) -> &'static str {
        match self {
            Level::Low => "Low",
            Level::Medium => "Medium",
            Level::High => "High",
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct WindowState {
    x: i32,
    y: i32,
    maximized: bool,
    title: String,
}

fn round_trip<T>(registry: &ConverterRegistry, value: T)
where
    T: std::fmt::Debug + PartialEq + 'static,
{
    let conv = registry.get::<T>().unwrap();
    let literal = conv.as_string(Some(&value)).unwrap();
    assert_eq!(conv.as_object(&literal).unwrap(), Some(value), "literal {:?}", literal);
}

#[test]
fn default_converters_round_trip() {
    let registry = ConverterRegistry::new();
    round_trip(&registry, true);
    round_trip(&registry, false);
    round_trip(&registry, -128i8);
    round_trip(&registry, 'λ');
    round_trip(&registry, i16::MIN);
    round_trip(&registry, 1_000_000i32);
    round_trip(&registry, i64::MAX);
    round_trip(&registry, u64::MAX);
    round_trip(&registry, 255u8);
    round_trip(&registry, 65_535u16);
    round_trip(&registry, 4_000_000_000u32);
    round_trip(&registry, i128::MIN);
    round_trip(&registry, u128::MAX);
    round_trip(&registry, isize::MIN);
    round_trip(&registry, usize::MAX);
    round_trip(&registry, 1.5e-7f32);
    round_trip(&registry, -2.0f64 / 3.0);
    round_trip(&registry, "hello, world".to_string());
    round_trip(&registry, String::new());
    round_trip(&registry, Locale::new("pt", "BR", ""));
    round_trip(
        &registry,
        DateTime::<Utc>::from_timestamp_millis(-86_400_001).unwrap(),
    );
}

#[test]
fn empty_literal_is_null_except_for_strings() {
    let registry = ConverterRegistry::new();
    assert_eq!(registry.get::<i32>().unwrap().as_object("").unwrap(), None);
    assert_eq!(registry.get::<bool>().unwrap().as_string(None).unwrap(), "");
    assert_eq!(
        registry.get::<String>().unwrap().as_object("").unwrap(),
        Some(String::new())
    );
    assert_eq!(
        registry.get::<String>().unwrap().as_string(None).unwrap(),
        STRING_NULL_LITERAL
    );
}

#[test]
fn malformed_literals_are_conversion_errors() {
    let registry = ConverterRegistry::new();
    let err = registry.get::<f64>().unwrap().as_object("1.2.3").unwrap_err();
    match err {
        Error::Conversion { literal, type_name, .. } => {
            assert_eq!(literal, "1.2.3");
            assert_eq!(type_name, "f64");
        }
        _ => panic!("expected Conversion error"),
    }

    let levels = registry.get_enum::<Level>().unwrap();
    assert!(matches!(
        levels.as_object("HIGH"),
        Err(Error::Conversion { .. })
    ));
}

#[test]
fn enum_converter_round_trips_every_variant() {
    let registry = ConverterRegistry::new();
    let conv = registry.get_enum::<Level>().unwrap();
    for level in Level::VARIANTS {
        let literal = conv.as_string(Some(level)).unwrap();
        assert_eq!(literal, level.name());
        assert_eq!(conv.as_object(&literal).unwrap(), Some(*level));
    }
}

#[test]
fn concurrent_first_enum_lookup_shares_one_instance() {
    const THREADS: usize = 16;
    let registry = ConverterRegistry::new();
    let barrier = Barrier::new(THREADS);

    let converters: Vec<Arc<dyn Converter<Level>>> = thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                scope.spawn(|| {
                    barrier.wait();
                    registry.get_enum::<Level>().unwrap()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let stored = registry.get::<Level>().unwrap();
    for conv in &converters {
        assert!(Arc::ptr_eq(conv, &stored));
    }
}

#[test]
fn serde_fallback_for_unregistered_types() {
    let registry = ConverterRegistry::new();
    assert!(registry.get::<WindowState>().is_none());

    let conv = registry.get_or_serde::<WindowState>();
    let state = WindowState {
        x: 10,
        y: 20,
        maximized: false,
        title: "Editor".to_string(),
    };
    let literal = conv.as_string(Some(&state)).unwrap();
    assert_eq!(conv.as_object(&literal).unwrap(), Some(state));

    // No value is still a real encoded stream
    assert_eq!(conv.as_string(None).unwrap(), "bnVsbA==");
}

#[test]
fn option_map_restores_from_literals() {
    let registry = Arc::new(ConverterRegistry::new());
    assert!(registry.get_enum::<Level>().is_some());

    let mut opts = OptionMap::new(Arc::clone(&registry));
    opts.set("level", Some(&Level::High)).unwrap();
    opts.set("locale", Some(&Locale::new("en", "GB", ""))).unwrap();
    opts.set("ratio", Some(&0.75f64)).unwrap();

    let literals: BTreeMap<String, String> = opts.into_literals();
    assert_eq!(literals["level"], "High");
    assert_eq!(literals["locale"], "en_GB");

    let restored = OptionMap::from_literals(registry, literals);
    assert_eq!(restored.get::<Level>("level").unwrap(), Some(Level::High));
    assert_eq!(restored.get_or("ratio", 1.0f64), 0.75);
    assert_eq!(restored.get_or("missing", Level::Low), Level::Low);
}
