// tests/common.rs
//! Shared test utilities: logging setup and reference decoders

#![allow(dead_code)]

#[cfg(feature = "logging")]
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize test-friendly logging; respects RUST_LOG
/// Call once at the start of any test that needs logs
pub fn setup() {
    #[cfg(feature = "logging")]
    tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer())
        .with(EnvFilter::from_default_env())
        .try_init()
        .ok(); // idempotent

    #[cfg(not(feature = "logging"))]
    { /* no-op */ }
}

/// Inverse Vigenère, keyed by absolute position like the encrypter
pub fn vigenere_decrypt(ciphertext: &str, key: &str) -> String {
    let shifts: Vec<u8> = key.bytes().map(|b| b.to_ascii_uppercase() - b'A').collect();
    ciphertext
        .chars()
        .zip(shifts.iter().cycle())
        .map(|(ch, &shift)| {
            if ch.is_ascii_uppercase() {
                (b'A' + (ch as u8 - b'A' + 26 - shift) % 26) as char
            } else {
                ch
            }
        })
        .collect()
}

/// Inverse rail fence: replay the zigzag to size each rail, then read back
pub fn rail_fence_decrypt(ciphertext: &str, rails: usize) -> String {
    let chars: Vec<char> = ciphertext.chars().collect();
    let mut pattern = Vec::with_capacity(chars.len());
    let (mut row, mut down) = (0usize, false);
    for _ in 0..chars.len() {
        pattern.push(row);
        if row == 0 || row == rails - 1 {
            down = !down;
        }
        if down {
            row += 1;
        } else {
            row -= 1;
        }
    }

    let mut fence: Vec<std::collections::VecDeque<char>> = vec![Default::default(); rails];
    let mut it = chars.into_iter();
    for (r, rail) in fence.iter_mut().enumerate() {
        let len = pattern.iter().filter(|&&p| p == r).count();
        rail.extend(it.by_ref().take(len));
    }

    pattern
        .into_iter()
        .filter_map(|r| fence[r].pop_front())
        .collect()
}
