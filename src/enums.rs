// src/enums.rs
//! Public enum types used throughout the crate
//!
//! Central location for the user-visible choices: which cipher to run
//! and what kind of key it expects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CipherError;

/// Supported classical ciphers, named the way the form adapter names them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Caesar,
    Mono,
    Playfair,
    Hill,
    Vigenere,
    Rail,
    Row,
}

/// Shape of the raw key string a cipher consumes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    /// Parsed as a signed decimal integer
    Integer,
    /// Used as a string
    Text,
    /// Ignored; the cipher uses a configured constant
    None,
}

impl Algorithm {
    pub const ALL: [Algorithm; 7] = [
        Algorithm::Caesar,
        Algorithm::Mono,
        Algorithm::Playfair,
        Algorithm::Hill,
        Algorithm::Vigenere,
        Algorithm::Rail,
        Algorithm::Row,
    ];

    /// Short name accepted by [`FromStr`] and used in serialized records
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Caesar => "caesar",
            Algorithm::Mono => "mono",
            Algorithm::Playfair => "playfair",
            Algorithm::Hill => "hill",
            Algorithm::Vigenere => "vigenere",
            Algorithm::Rail => "rail",
            Algorithm::Row => "row",
        }
    }

    #[must_use]
    pub fn key_kind(self) -> KeyKind {
        match self {
            Algorithm::Caesar | Algorithm::Rail => KeyKind::Integer,
            Algorithm::Playfair | Algorithm::Vigenere | Algorithm::Row => KeyKind::Text,
            Algorithm::Mono | Algorithm::Hill => KeyKind::None,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|algo| algo.name() == s)
            .ok_or_else(|| CipherError::UnknownAlgorithm(s.to_owned()))
    }
}
