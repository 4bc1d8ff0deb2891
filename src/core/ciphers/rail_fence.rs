// src/core/ciphers/rail_fence.rs
//! Rail fence zigzag transposition
//!
//! Every character (spaces and punctuation included) occupies a slot in
//! the zigzag. A single rail would be the identity, so fewer than two
//! rails is rejected.

use crate::core::alphabet::normalize;
use crate::core::cipher::Cipher;
use crate::core::Result;
use crate::enums::Algorithm;
use crate::error::CipherError;

pub const MIN_RAILS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RailFenceCipher {
    rails: usize,
}

impl RailFenceCipher {
    pub fn new(rails: usize) -> Result<Self> {
        if rails < MIN_RAILS {
            return Err(CipherError::InvalidKeyValue(format!(
                "rail fence needs at least {MIN_RAILS} rails, got {rails}"
            )));
        }
        Ok(Self { rails })
    }

    pub fn rails(&self) -> usize {
        self.rails
    }
}

impl Cipher for RailFenceCipher {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Rail
    }

    fn encrypt(&self, text: &str) -> String {
        let text = normalize(text);
        // rails past the text length stay empty, so never allocate them
        let rails = self.rails.min(text.chars().count().max(1));
        let mut fence = vec![String::new(); rails];
        let last = rails - 1;
        let mut row = 0usize;
        let mut going_down = false;

        for ch in text.chars() {
            fence[row].push(ch);
            if row == 0 || row == last {
                going_down = !going_down;
            }
            if going_down {
                row += 1;
            } else {
                row -= 1;
            }
        }
        fence.concat()
    }
}

pub fn rail_fence_encrypt(text: &str, rails: usize) -> Result<String> {
    Ok(RailFenceCipher::new(rails)?.encrypt(text))
}
