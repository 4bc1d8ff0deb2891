// tests/core/mono.rs
use classical_ciphers::error::CipherError;
use classical_ciphers::{mono_encrypt, Cipher, MonoalphabeticCipher, SubstitutionMap};

#[test]
fn test_reverse_alphabet_substitution() {
    let map = SubstitutionMap::reverse_alphabet();
    assert_eq!(mono_encrypt("Hello World", &map), "SVOOL DLIOW");
}

#[test]
fn test_reverse_alphabet_is_an_involution() {
    let cipher = MonoalphabeticCipher::default();
    let once = cipher.encrypt("THEQUICKBROWNFOX");
    assert_ne!(once, "THEQUICKBROWNFOX");
    assert_eq!(cipher.encrypt(&once), "THEQUICKBROWNFOX");
}

#[test]
fn test_non_letters_pass_through() {
    let cipher = MonoalphabeticCipher::default();
    assert_eq!(cipher.encrypt("a-b c!"), "Z-Y X!");
}

#[test]
fn test_custom_alphabet_is_accepted_case_insensitively() {
    let map = SubstitutionMap::from_alphabet("qwertyuiopasdfghjklzxcvbnm").unwrap();
    assert_eq!(map.get('A'), 'Q');
    assert_eq!(map.get('z'), 'M');
    assert_eq!(map.get('?'), '?');
}

#[test]
fn test_incomplete_alphabet_rejected_at_construction() {
    assert!(matches!(
        SubstitutionMap::from_alphabet("ZYX"),
        Err(CipherError::InvalidKeyValue(_))
    ));
    assert!(matches!(
        SubstitutionMap::from_alphabet("AACDEFGHIJKLMNOPQRSTUVWXYZ"),
        Err(CipherError::InvalidKeyValue(_))
    ));
    assert!(matches!(
        SubstitutionMap::from_alphabet("ABCDEFGHIJKLMNOPQRSTUVWXY1"),
        Err(CipherError::InvalidKeyValue(_))
    ));
    assert!(matches!(
        SubstitutionMap::from_alphabet("ABCDEFGHIJKLMNOPQRSTUVWXYZA"),
        Err(CipherError::InvalidKeyValue(_))
    ));
}

#[test]
fn test_mono_empty_input() {
    assert_eq!(MonoalphabeticCipher::default().encrypt(""), "");
}
