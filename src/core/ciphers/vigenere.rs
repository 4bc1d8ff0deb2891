// src/core/ciphers/vigenere.rs
//! Vigenère polyalphabetic shift
//!
//! The key cursor is the absolute character position in the text, so a
//! space or punctuation mark still consumes a key letter.

use crate::core::alphabet::{index_of, normalize, shift_letter};
use crate::core::cipher::Cipher;
use crate::core::Result;
use crate::enums::Algorithm;
use crate::error::CipherError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VigenereCipher {
    shifts: Vec<i64>,
}

impl VigenereCipher {
    /// `key` must be non-empty and made of letters only
    pub fn new(key: &str) -> Result<Self> {
        if key.is_empty() {
            return Err(CipherError::InvalidKeyValue(
                "vigenere key must not be empty".into(),
            ));
        }
        let shifts = key
            .chars()
            .map(|ch| {
                index_of(ch).map(i64::from).ok_or_else(|| {
                    CipherError::InvalidKeyValue(format!("vigenere key contains non-letter {ch:?}"))
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { shifts })
    }
}

impl Cipher for VigenereCipher {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Vigenere
    }

    fn encrypt(&self, text: &str) -> String {
        normalize(text)
            .chars()
            .zip(self.shifts.iter().cycle())
            .map(|(ch, &shift)| shift_letter(ch, shift))
            .collect()
    }
}

pub fn vigenere_encrypt(text: &str, key: &str) -> Result<String> {
    Ok(VigenereCipher::new(key)?.encrypt(text))
}
