// tests/core/dispatch.rs
use crate::common::setup;
use classical_ciphers::config::Config;
use classical_ciphers::error::CipherError;
use classical_ciphers::{dispatch, Algorithm, CipherDispatcher};

#[test]
fn test_every_name_routes_to_its_cipher() {
    setup();
    let d = CipherDispatcher::default();
    assert_eq!(d.dispatch("caesar", "Hello", "3").unwrap(), "KHOOR");
    assert_eq!(d.dispatch("mono", "Hello", "").unwrap(), "SVOOL");
    assert_eq!(d.dispatch("playfair", "HE", "MONARCHY").unwrap(), "CF");
    assert_eq!(d.dispatch("hill", "HI", "ignored").unwrap(), "TC");
    assert_eq!(d.dispatch("vigenere", "ATTACKATDAWN", "LEMON").unwrap(), "LXFOPVEFRNHR");
    assert_eq!(d.dispatch("rail", "HELLO", "2").unwrap(), "HLOEL");
    assert_eq!(d.dispatch("row", "HELLOWORLD", "ZEBRA").unwrap(), "ODLREOLLHW");
}

#[test]
fn test_integer_keys_are_trimmed_and_signed() {
    assert_eq!(dispatch("caesar", "D", " -3 ").unwrap(), "A");
    assert_eq!(dispatch("rail", "HELLO", "+2").unwrap(), "HLOEL");
}

#[test]
fn test_non_numeric_integer_key_is_format_error() {
    let err = dispatch("caesar", "HELLO", "three").unwrap_err();
    assert!(matches!(
        err,
        CipherError::InvalidKeyFormat { ref algorithm, ref key } if algorithm == "caesar" && key == "three"
    ));
    assert!(matches!(
        dispatch("rail", "HELLO", "2.5"),
        Err(CipherError::InvalidKeyFormat { .. })
    ));
}

#[test]
fn test_bad_key_values_are_value_errors() {
    for (name, key) in [("rail", "1"), ("rail", "-4"), ("vigenere", ""), ("row", "")] {
        assert!(
            matches!(dispatch(name, "HELLO", key), Err(CipherError::InvalidKeyValue(_))),
            "{name} with key {key:?}"
        );
    }
}

#[test]
fn test_unknown_algorithm_is_explicit_error() {
    assert!(matches!(
        dispatch("enigma", "HELLO", "1"),
        Err(CipherError::UnknownAlgorithm(ref name)) if name == "enigma"
    ));
    // names are exact, like the form's option values
    assert!(dispatch("Caesar", "HELLO", "1").is_err());
}

#[test]
fn test_encrypt_or_empty_mirrors_form_behaviour() {
    setup();
    let d = CipherDispatcher::default();
    assert_eq!(d.encrypt_or_empty("enigma", "HELLO", "1"), "");
    assert_eq!(d.encrypt_or_empty("caesar", "HELLO", "x"), "");
    assert_eq!(d.encrypt_or_empty("caesar", "HELLO", "1"), "IFMMP");
}

#[test]
fn test_run_respects_strict_dispatch_flag() {
    let mut config = Config::default();
    assert!(CipherDispatcher::new(&config).unwrap().run("nope", "A", "").is_err());

    config.features.strict_dispatch = false;
    let lenient = CipherDispatcher::new(&config).unwrap();
    assert!(!lenient.is_strict());
    assert_eq!(lenient.run("nope", "A", "").unwrap(), "");
}

#[test]
fn test_lenient_run_swallows_key_errors() {
    let mut config = Config::default();
    assert!(matches!(
        CipherDispatcher::new(&config).unwrap().run("caesar", "HELLO", "x"),
        Err(CipherError::InvalidKeyFormat { .. })
    ));

    config.features.strict_dispatch = false;
    let lenient = CipherDispatcher::new(&config).unwrap();
    assert_eq!(lenient.run("caesar", "HELLO", "x").unwrap(), "");
    assert_eq!(lenient.run("rail", "HELLO", "1").unwrap(), "");
    assert_eq!(lenient.run("caesar", "HELLO", "1").unwrap(), "IFMMP");
}

#[test]
fn test_dispatcher_uses_configured_constants() {
    let mut config = Config::default();
    config.keys.hill_matrix = [[0, 1], [1, 0]];
    config.keys.mono_alphabet = "BCDEFGHIJKLMNOPQRSTUVWXYZA".into();
    let d = CipherDispatcher::new(&config).unwrap();
    assert_eq!(d.encrypt(Algorithm::Hill, "ABCD", "").unwrap(), "BADC");
    assert_eq!(d.encrypt(Algorithm::Mono, "HAL", "").unwrap(), "IBM");
}

#[test]
fn test_invalid_configured_constants_are_rejected() {
    let mut config = Config::default();
    config.keys.hill_matrix = [[2, 4], [6, 8]];
    assert!(matches!(
        CipherDispatcher::new(&config),
        Err(CipherError::NonInvertibleMatrix { .. })
    ));
}

#[test]
fn test_all_ciphers_leave_empty_input_empty() {
    let d = CipherDispatcher::default();
    for algo in Algorithm::ALL {
        let key = match algo {
            Algorithm::Caesar | Algorithm::Rail => "3",
            _ => "KEY",
        };
        assert_eq!(d.encrypt(algo, "", key).unwrap(), "", "{algo}");
    }
}

#[test]
fn test_dispatcher_is_shareable_across_threads() {
    let d = std::sync::Arc::new(CipherDispatcher::default());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let d = d.clone();
            std::thread::spawn(move || d.dispatch("caesar", "A", &i.to_string()).unwrap())
        })
        .collect();
    let out: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(out, ["A", "B", "C", "D"]);
}
