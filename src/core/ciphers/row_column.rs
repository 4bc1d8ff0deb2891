// src/core/ciphers/row_column.rs
//! Keyed columnar (row-column) transposition
//!
//! Text is written row-major into `len(key)` columns, padded with `X` to a
//! full grid, and read column by column in the order of the sorted key
//! characters. Equal key characters keep their left-to-right order.

use crate::consts::PAD_CHAR;
use crate::core::alphabet::normalize;
use crate::core::cipher::Cipher;
use crate::core::Result;
use crate::enums::Algorithm;
use crate::error::CipherError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowColumnCipher {
    order: Vec<usize>,
}

impl RowColumnCipher {
    /// `key` must be non-empty; its characters need not be distinct
    pub fn new(key: &str) -> Result<Self> {
        let chars: Vec<char> = key.chars().collect();
        if chars.is_empty() {
            return Err(CipherError::InvalidKeyValue(
                "row-column key must not be empty".into(),
            ));
        }
        let mut order: Vec<usize> = (0..chars.len()).collect();
        // stable: ties keep column order
        order.sort_by_key(|&col| chars[col]);
        Ok(Self { order })
    }

    /// Column indices in read-out order
    pub fn column_order(&self) -> &[usize] {
        &self.order
    }
}

impl Cipher for RowColumnCipher {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Row
    }

    fn encrypt(&self, text: &str) -> String {
        let mut cells: Vec<char> = normalize(text).chars().filter(|&c| c != ' ').collect();
        let cols = self.order.len();
        let rows = cells.len().div_ceil(cols);
        cells.resize(rows * cols, PAD_CHAR);

        let mut out = String::with_capacity(cells.len());
        for &col in &self.order {
            out.extend((0..rows).map(|row| cells[row * cols + col]));
        }
        out
    }
}

pub fn row_column_encrypt(text: &str, key: &str) -> Result<String> {
    Ok(RowColumnCipher::new(key)?.encrypt(text))
}
