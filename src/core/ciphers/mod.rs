// src/core/ciphers/mod.rs
//! The seven classical ciphers
//!
//! Each file holds one algorithm: a key-owning struct implementing
//! [`Cipher`](crate::core::cipher::Cipher) plus a free `*_encrypt` function
//! for one-shot use. None of them depends on another.
mod caesar;
mod hill;
mod mono;
mod playfair;
mod rail_fence;
mod row_column;
mod vigenere;

pub use caesar::{caesar_encrypt, CaesarCipher};
pub use hill::{determinant_mod26, hill_encrypt, HillCipher, KeyMatrix};
pub use mono::{mono_encrypt, MonoalphabeticCipher, SubstitutionMap};
pub use playfair::{playfair_encrypt, PlayfairCipher, PlayfairMatrix};
pub use rail_fence::{rail_fence_encrypt, RailFenceCipher, MIN_RAILS};
pub use row_column::{row_column_encrypt, RowColumnCipher};
pub use vigenere::{vigenere_encrypt, VigenereCipher};
