// src/config/defaults.rs
use crate::config::app::{Features, Keys};
use crate::consts::{DEFAULT_HILL_MATRIX, REVERSE_ALPHABET};

pub fn default_keys() -> Keys {
    Keys {
        hill_matrix: DEFAULT_HILL_MATRIX,
        mono_alphabet: REVERSE_ALPHABET.into(),
    }
}

pub fn default_features() -> Features {
    Features {
        strict_dispatch: true,
    }
}
