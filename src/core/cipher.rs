// src/core/cipher.rs
//! The capability every cipher variant implements
//!
//! A cipher value owns its already-validated key; `encrypt` is then a pure
//! function of the text. Values are immutable so they can be shared
//! across threads freely.

use crate::enums::Algorithm;

pub trait Cipher: Send + Sync {
    /// Which algorithm this value implements
    fn algorithm(&self) -> Algorithm;

    /// Encrypt `text`; output letters are always uppercase
    fn encrypt(&self, text: &str) -> String;
}
