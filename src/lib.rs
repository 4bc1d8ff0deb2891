// src/lib.rs
//! classical-ciphers: didactic pre-modern ciphers
//!
//! Features:
//! - Caesar, monoalphabetic, Vigenère (substitution)
//! - Playfair digraphs and 2×2 Hill matrices
//! - Rail fence and keyed row-column transposition
//! - Name-based dispatch for form/CLI front ends
//!
//! These ciphers are trivially breakable. They exist for teaching, not
//! for protecting data. Only the encrypt direction is provided.

pub mod config;
pub mod consts;
pub mod core;
pub mod enums;
pub mod error;
pub mod export;

// Re-export everything users need at the crate root
pub use config::load as load_config;
pub use crate::core::{
    caesar_encrypt, dispatch, hill_encrypt, mono_encrypt, playfair_encrypt, rail_fence_encrypt,
    row_column_encrypt, vigenere_encrypt, CaesarCipher, Cipher, CipherDispatcher, HillCipher,
    MonoalphabeticCipher, PlayfairCipher, PlayfairMatrix, RailFenceCipher, RowColumnCipher,
    SubstitutionMap, VigenereCipher,
};
pub use crate::core::Result as CipherResult;
pub use enums::{Algorithm, KeyKind};
pub use error::CipherError;
pub use export::{export_to_json, EncryptionRecord};
