// src/export/json.rs
use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::path::Path;

use crate::core::Result;
use crate::enums::Algorithm;

/// One completed encryption, as shown to or saved for the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptionRecord {
    pub algorithm: Algorithm,
    pub plaintext: String,
    /// Absent for ciphers that ignore the key (mono, hill)
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub key: Option<String>,
    pub ciphertext: String,
    pub encrypted_at: DateTime<Utc>,
}

impl EncryptionRecord {
    pub fn new(algorithm: Algorithm, plaintext: &str, key: Option<&str>, ciphertext: String) -> Self {
        Self {
            algorithm,
            plaintext: plaintext.to_owned(),
            key: key.map(str::to_owned),
            ciphertext,
            encrypted_at: Utc::now().trunc_subsecs(0),
        }
    }
}

/// Pretty JSON for a single record
pub fn record_to_json(record: &EncryptionRecord) -> Result<String> {
    Ok(serde_json::to_string_pretty(record)?)
}

/// Write a batch of records to `path` wrapped in an export envelope
///
/// Plaintexts and keys are stored as-is; these ciphers offer no secrecy.
pub fn export_to_json<P: AsRef<Path>>(records: &[EncryptionRecord], path: P) -> Result<usize> {
    let export = json!({
        "export_format": "classical-ciphers-v1",
        "exported_at": Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        "exporter_version": env!("CARGO_PKG_VERSION"),
        "total_records": records.len(),
        "records": records,
    });

    std::fs::write(path.as_ref(), serde_json::to_string_pretty(&export)?)?;
    Ok(records.len())
}
