// src/export/mod.rs
//! Export of encryption results
//!
//! Currently one format: pretty-printed JSON.

pub mod json;

pub use json::{export_to_json, record_to_json, EncryptionRecord};
