// src/core/dispatch.rs
//! Name → cipher routing
//!
//! The raw key arrives as a string from the caller. It is converted into the
//! shape the selected cipher needs here, at the boundary; ciphers only ever
//! see well-typed keys.

use tracing::{debug, warn};

use crate::config::Config;
use crate::core::cipher::Cipher;
use crate::core::ciphers::{
    CaesarCipher, HillCipher, MonoalphabeticCipher, PlayfairCipher, RailFenceCipher,
    RowColumnCipher, SubstitutionMap, VigenereCipher,
};
use crate::core::Result;
use crate::enums::Algorithm;
use crate::error::CipherError;

/// Routes a request to one of the seven ciphers
///
/// Holds only immutable, validated constants (Hill matrix and substitution
/// map), so one dispatcher can serve any number of threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CipherDispatcher {
    hill: HillCipher,
    mono: MonoalphabeticCipher,
    strict: bool,
}

impl Default for CipherDispatcher {
    fn default() -> Self {
        Self {
            hill: HillCipher::default(),
            mono: MonoalphabeticCipher::new(SubstitutionMap::reverse_alphabet()),
            strict: true,
        }
    }
}

impl CipherDispatcher {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            hill: config.hill_cipher()?,
            mono: MonoalphabeticCipher::new(config.substitution_map()?),
            strict: config.features.strict_dispatch,
        })
    }

    /// Dispatcher built from the process-wide [`crate::config::load`]
    pub fn from_global_config() -> Result<Self> {
        Self::new(crate::config::load())
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Build the cipher for `algorithm` with `key` converted to its shape
    pub fn cipher(&self, algorithm: Algorithm, key: &str) -> Result<Box<dyn Cipher>> {
        let cipher: Box<dyn Cipher> = match algorithm {
            Algorithm::Caesar => Box::new(CaesarCipher::new(parse_integer_key(algorithm, key)?)),
            Algorithm::Mono => Box::new(self.mono),
            Algorithm::Playfair => Box::new(PlayfairCipher::new(key)),
            Algorithm::Hill => Box::new(self.hill),
            Algorithm::Vigenere => Box::new(VigenereCipher::new(key)?),
            Algorithm::Rail => {
                let rails = parse_integer_key(algorithm, key)?;
                let rails = usize::try_from(rails).map_err(|_| {
                    CipherError::InvalidKeyValue(format!("rail count must be positive, got {rails}"))
                })?;
                Box::new(RailFenceCipher::new(rails)?)
            }
            Algorithm::Row => Box::new(RowColumnCipher::new(key)?),
        };
        Ok(cipher)
    }

    pub fn encrypt(&self, algorithm: Algorithm, text: &str, key: &str) -> Result<String> {
        debug!(%algorithm, text_len = text.len(), "dispatching");
        Ok(self.cipher(algorithm, key)?.encrypt(text))
    }

    /// Look up `name` and encrypt; every failure is an explicit error
    pub fn dispatch(&self, name: &str, text: &str, key: &str) -> Result<String> {
        let algorithm: Algorithm = name.parse()?;
        self.encrypt(algorithm, text, key)
    }

    /// The form adapter's contract: any failure yields an empty string
    pub fn encrypt_or_empty(&self, name: &str, text: &str, key: &str) -> String {
        match self.dispatch(name, text, key) {
            Ok(ciphertext) => ciphertext,
            Err(err) => {
                warn!(algorithm = name, error = %err, "encryption failed, returning empty result");
                String::new()
            }
        }
    }

    /// Strict or lenient depending on `features.strict_dispatch`
    pub fn run(&self, name: &str, text: &str, key: &str) -> Result<String> {
        if self.strict {
            self.dispatch(name, text, key)
        } else {
            Ok(self.encrypt_or_empty(name, text, key))
        }
    }
}

fn parse_integer_key(algorithm: Algorithm, key: &str) -> Result<i64> {
    key.trim()
        .parse::<i64>()
        .map_err(|_| CipherError::InvalidKeyFormat {
            algorithm: algorithm.to_string(),
            key: key.to_owned(),
        })
}

/// One-shot dispatch with the default constants
pub fn dispatch(name: &str, text: &str, key: &str) -> Result<String> {
    CipherDispatcher::default().dispatch(name, text, key)
}
