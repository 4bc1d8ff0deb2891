// src/core/ciphers/hill.rs
//! Hill cipher over letter pairs with a 2×2 key matrix
//!
//! Spaces are removed and the rest is padded with `X` to an even length.
//! Every other character is enciphered by its code point offset from `A`,
//! reduced mod 26, so punctuation and digits still occupy a slot.
//!
//! A configurable matrix must be invertible mod 26 or ciphertext could
//! never be decrypted, so [`HillCipher::new`] rejects it.

use crate::consts::{ALPHABET_LEN, DEFAULT_HILL_MATRIX, PAD_CHAR};
use crate::core::alphabet::{letter_at, normalize};
use crate::core::cipher::Cipher;
use crate::core::Result;
use crate::enums::Algorithm;
use crate::error::CipherError;

pub type KeyMatrix = [[i64; 2]; 2];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HillCipher {
    matrix: KeyMatrix,
}

impl HillCipher {
    pub fn new(matrix: KeyMatrix) -> Result<Self> {
        let determinant = determinant_mod26(&matrix);
        if gcd(determinant, ALPHABET_LEN as i64) != 1 {
            return Err(CipherError::NonInvertibleMatrix { determinant });
        }
        Ok(Self { matrix })
    }

    pub fn matrix(&self) -> &KeyMatrix {
        &self.matrix
    }
}

impl Default for HillCipher {
    fn default() -> Self {
        Self {
            matrix: DEFAULT_HILL_MATRIX,
        }
    }
}

impl Cipher for HillCipher {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Hill
    }

    fn encrypt(&self, text: &str) -> String {
        let mut indices: Vec<i64> = normalize(text)
            .chars()
            .filter(|&c| c != ' ')
            .map(code_index)
            .collect();
        if indices.len() % 2 != 0 {
            indices.push(code_index(PAD_CHAR));
        }

        let m = reduce(&self.matrix);
        let mut out = String::with_capacity(indices.len());
        for v in indices.chunks_exact(2) {
            out.push(letter_at(m[0][0] * v[0] + m[0][1] * v[1]));
            out.push(letter_at(m[1][0] * v[0] + m[1][1] * v[1]));
        }
        out
    }
}

/// Encrypt with the fixed `[[3, 3], [2, 5]]` matrix
pub fn hill_encrypt(text: &str) -> String {
    HillCipher::default().encrypt(text)
}

/// Determinant reduced into `0..26`
pub fn determinant_mod26(m: &KeyMatrix) -> i64 {
    let m = reduce(m);
    (m[0][0] * m[1][1] - m[0][1] * m[1][0]).rem_euclid(ALPHABET_LEN as i64)
}

/// Offset of `ch` from `A`, reduced into `0..26`; letters map to their index
fn code_index(ch: char) -> i64 {
    (ch as i64 - 'A' as i64).rem_euclid(ALPHABET_LEN as i64)
}

/// Entries reduced into `0..26` so products cannot overflow
fn reduce(m: &KeyMatrix) -> KeyMatrix {
    m.map(|row| row.map(|x| x.rem_euclid(ALPHABET_LEN as i64)))
}

fn gcd(mut a: i64, mut b: i64) -> i64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a.abs()
}
