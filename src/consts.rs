// src/consts.rs
//! Shared constants: alphabet parameters and defaults

/// Number of letters in the working alphabet (A–Z)
pub const ALPHABET_LEN: u8 = 26;

/// Filler appended when a cipher needs an even length or a full grid
pub const PAD_CHAR: char = 'X';

/// Playfair alphabet: 25 letters, J folded into I
pub const PLAYFAIR_ALPHABET: &str = "ABCDEFGHIKLMNOPQRSTUVWXYZ";

/// Side of the Playfair grid
pub const PLAYFAIR_SIZE: usize = 5;

/// Fixed Hill key matrix used when no configuration overrides it
pub const DEFAULT_HILL_MATRIX: [[i64; 2]; 2] = [[3, 3], [2, 5]];

/// Image of A..Z under the default monoalphabetic map (A↔Z, B↔Y, …)
pub const REVERSE_ALPHABET: &str = "ZYXWVUTSRQPONMLKJIHGFEDCBA";

/// Env var pointing at the TOML config file
pub const CONFIG_ENV_VAR: &str = "CLASSICAL_CIPHERS_CONFIG";

/// Config file looked up when the env var is unset
pub const DEFAULT_CONFIG_PATH: &str = "ciphers.toml";
