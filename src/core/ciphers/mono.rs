// src/core/ciphers/mono.rs
//! Monoalphabetic substitution
//!
//! The map is a total bijection over A–Z. It is validated once when it is
//! built, so encryption itself cannot fail.

use crate::consts::{ALPHABET_LEN, REVERSE_ALPHABET};
use crate::core::alphabet::{index_of, normalize};
use crate::core::cipher::Cipher;
use crate::core::Result;
use crate::enums::Algorithm;
use crate::error::CipherError;

/// Total bijective map from each letter to its replacement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubstitutionMap {
    image: [char; ALPHABET_LEN as usize],
}

impl SubstitutionMap {
    /// The fixed A↔Z, B↔Y, … map; it is its own inverse
    pub fn reverse_alphabet() -> Self {
        let mut image = ['A'; ALPHABET_LEN as usize];
        for (slot, ch) in image.iter_mut().zip(REVERSE_ALPHABET.chars()) {
            *slot = ch;
        }
        Self { image }
    }

    /// Build a map from the images of A..Z, in order
    ///
    /// `alphabet` must contain each of the 26 letters exactly once
    /// (case-insensitive); anything else is rejected here rather than at use.
    pub fn from_alphabet(alphabet: &str) -> Result<Self> {
        let mut image = ['A'; ALPHABET_LEN as usize];
        let mut seen = [false; ALPHABET_LEN as usize];
        let mut count = 0usize;

        for ch in alphabet.chars() {
            let idx = index_of(ch).ok_or_else(|| {
                CipherError::InvalidKeyValue(format!(
                    "substitution alphabet contains non-letter {ch:?}"
                ))
            })? as usize;
            if count >= image.len() {
                return Err(CipherError::InvalidKeyValue(format!(
                    "substitution alphabet longer than {ALPHABET_LEN} letters"
                )));
            }
            if seen[idx] {
                return Err(CipherError::InvalidKeyValue(format!(
                    "substitution alphabet repeats {}",
                    ch.to_ascii_uppercase()
                )));
            }
            seen[idx] = true;
            image[count] = ch.to_ascii_uppercase();
            count += 1;
        }

        if count != image.len() {
            return Err(CipherError::InvalidKeyValue(format!(
                "substitution alphabet has {count} letters, expected {ALPHABET_LEN}"
            )));
        }
        Ok(Self { image })
    }

    /// Replacement for `ch`; non-letters map to themselves
    pub fn get(&self, ch: char) -> char {
        match index_of(ch) {
            Some(idx) => self.image[idx as usize],
            None => ch,
        }
    }
}

impl Default for SubstitutionMap {
    fn default() -> Self {
        Self::reverse_alphabet()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MonoalphabeticCipher {
    map: SubstitutionMap,
}

impl MonoalphabeticCipher {
    pub fn new(map: SubstitutionMap) -> Self {
        Self { map }
    }

    pub fn map(&self) -> &SubstitutionMap {
        &self.map
    }
}

impl Cipher for MonoalphabeticCipher {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Mono
    }

    fn encrypt(&self, text: &str) -> String {
        mono_encrypt(text, &self.map)
    }
}

pub fn mono_encrypt(text: &str, map: &SubstitutionMap) -> String {
    normalize(text).chars().map(|ch| map.get(ch)).collect()
}
