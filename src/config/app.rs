// src/config/app.rs
use super::defaults::*;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;
use tracing::warn;

use crate::consts::{CONFIG_ENV_VAR, DEFAULT_CONFIG_PATH};
use crate::core::ciphers::{HillCipher, KeyMatrix, SubstitutionMap};
use crate::core::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_keys")]
    pub keys: Keys,
    #[serde(default = "default_features")]
    pub features: Features,
}

/// Process-wide cipher constants that are not supplied per request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Keys {
    pub hill_matrix: KeyMatrix,
    /// Images of A..Z for the monoalphabetic cipher
    pub mono_alphabet: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Features {
    /// `false` restores the form behaviour: failures become an empty string
    pub strict_dispatch: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            keys: default_keys(),
            features: default_features(),
        }
    }
}

impl Default for Keys {
    fn default() -> Self {
        default_keys()
    }
}

impl Default for Features {
    fn default() -> Self {
        default_features()
    }
}

impl Config {
    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let conf: Config = toml::from_str(content)?;
        conf.validate()?;
        Ok(conf)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Check that the configured keys can actually build their ciphers
    pub fn validate(&self) -> Result<()> {
        self.hill_cipher()?;
        self.substitution_map()?;
        Ok(())
    }

    pub fn hill_cipher(&self) -> Result<HillCipher> {
        HillCipher::new(self.keys.hill_matrix)
    }

    pub fn substitution_map(&self) -> Result<SubstitutionMap> {
        SubstitutionMap::from_alphabet(&self.keys.mono_alphabet)
    }
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Load config once and fall back to built-in defaults if missing or invalid
pub fn load() -> &'static Config {
    CONFIG.get_or_init(|| {
        let config_path =
            std::env::var(CONFIG_ENV_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        if !Path::new(&config_path).exists() {
            return Config::default();
        }

        match Config::from_file(&config_path) {
            Ok(conf) => conf,
            Err(err) => {
                warn!(path = %config_path, error = %err, "invalid config, using built-in defaults");
                Config::default()
            }
        }
    })
}
