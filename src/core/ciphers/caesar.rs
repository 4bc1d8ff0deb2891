// src/core/ciphers/caesar.rs
//! Caesar shift

use crate::core::alphabet::{normalize, shift_letter};
use crate::core::cipher::Cipher;
use crate::enums::Algorithm;

/// Shift every letter by a fixed amount; any integer is accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaesarCipher {
    shift: i64,
}

impl CaesarCipher {
    pub fn new(shift: i64) -> Self {
        Self { shift }
    }

    pub fn shift(&self) -> i64 {
        self.shift
    }
}

impl Cipher for CaesarCipher {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Caesar
    }

    fn encrypt(&self, text: &str) -> String {
        caesar_encrypt(text, self.shift)
    }
}

/// Caesar-encrypt `text`; non-letters pass through at the same position
pub fn caesar_encrypt(text: &str, shift: i64) -> String {
    normalize(text)
        .chars()
        .map(|ch| shift_letter(ch, shift))
        .collect()
}
