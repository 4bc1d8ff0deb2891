// src/bin/cipher.rs
//! Command-line front end: encrypt one message with any of the ciphers
//!
//! Usage:
//!   cipher --list
//!   cipher [--json] <algorithm> [key] [text...]
//!
//! `key` is omitted for `mono` and `hill`. With no text arguments the
//! message is read from stdin.

use anyhow::{bail, Context, Result};
use classical_ciphers::export::record_to_json;
use classical_ciphers::{Algorithm, CipherDispatcher, EncryptionRecord, KeyKind};
use std::io::Read;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args: Vec<String> = std::env::args().skip(1).collect();

    if args.iter().any(|a| a == "--list") {
        for algo in Algorithm::ALL {
            let key = match algo.key_kind() {
                KeyKind::Integer => "<integer>",
                KeyKind::Text => "<text>",
                KeyKind::None => "",
            };
            println!("{:<9} {key}", algo.name());
        }
        return Ok(());
    }

    let json = take_flag(&mut args, "--json");
    let mut args = args.into_iter();

    let Some(name) = args.next() else {
        bail!("usage: cipher [--json] <algorithm> [key] [text...]  (see --list)");
    };
    let algorithm: Algorithm = name
        .parse()
        .with_context(|| format!("'{name}' is not a known algorithm"))?;

    let key = match algorithm.key_kind() {
        KeyKind::None => None,
        _ => Some(
            args.next()
                .with_context(|| format!("{algorithm} needs a key"))?,
        ),
    };

    let rest: Vec<String> = args.collect();
    let text = if rest.is_empty() {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read message from stdin")?;
        buf.trim_end_matches(&['\r', '\n'][..]).to_owned()
    } else {
        rest.join(" ")
    };

    let dispatcher =
        CipherDispatcher::from_global_config().context("configured cipher keys are invalid")?;
    // lenient configs turn failures into an empty line, like the web form
    let ciphertext = dispatcher
        .run(algorithm.name(), &text, key.as_deref().unwrap_or_default())
        .with_context(|| format!("{algorithm} encryption failed"))?;

    info!(%algorithm, chars = text.chars().count(), "encrypted");

    if json {
        let record = EncryptionRecord::new(algorithm, &text, key.as_deref(), ciphertext);
        println!("{}", record_to_json(&record)?);
    } else {
        println!("{ciphertext}");
    }

    Ok(())
}

fn take_flag(args: &mut Vec<String>, flag: &str) -> bool {
    let before = args.len();
    args.retain(|a| a != flag);
    args.len() != before
}
