// src/core/alphabet.rs
//! Alphabet utilities shared by every cipher
//!
//! Letters are ASCII `A`–`Z` with indices 0–25. Anything else is a
//! pass-through character unless a cipher decides to drop it.

use crate::consts::ALPHABET_LEN;

/// True for ASCII letters of either case
#[inline]
pub fn is_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic()
}

/// Index 0–25 of an ASCII letter, case-insensitive
#[inline]
pub fn index_of(ch: char) -> Option<u8> {
    is_letter(ch).then(|| ch.to_ascii_uppercase() as u8 - b'A')
}

/// Uppercase letter for any index; reduced mod 26 so negatives wrap
#[inline]
pub fn letter_at(index: i64) -> char {
    (b'A' + index.rem_euclid(ALPHABET_LEN as i64) as u8) as char
}

/// Shift a letter by `shift` positions, wrapping; non-letters come back unchanged
#[inline]
pub fn shift_letter(ch: char, shift: i64) -> char {
    match index_of(ch) {
        Some(idx) => letter_at(idx as i64 + shift.rem_euclid(ALPHABET_LEN as i64)),
        None => ch,
    }
}

/// ASCII-uppercase the whole input; non-ASCII characters are left alone
pub fn normalize(text: &str) -> String {
    text.to_ascii_uppercase()
}

/// Uppercased letters only, every other character dropped
pub fn letters_only(text: &str) -> String {
    text.chars()
        .filter(|&c| is_letter(c))
        .map(|c| c.to_ascii_uppercase())
        .collect()
}
