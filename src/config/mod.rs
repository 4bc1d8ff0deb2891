// src/config/mod.rs
//! Configuration system for classical-ciphers
//!
//! Central, lazy-loaded global config from TOML, with a path override via
//! `CLASSICAL_CIPHERS_CONFIG`.

pub use app::{load, Config, Features, Keys};

mod app;
mod defaults;
