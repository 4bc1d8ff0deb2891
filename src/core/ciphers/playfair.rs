// src/core/ciphers/playfair.rs
//! Playfair digraph cipher
//!
//! The 5×5 grid is the deduplicated key (J folded into I) followed by the
//! rest of the 25-letter alphabet, row-major.
//!
//! Repeated letters inside a pair are NOT split with a filler: "LL" is
//! enciphered with the same-row rule like any other pair. Callers who want
//! textbook behaviour must insert fillers themselves.

use std::fmt;

use crate::consts::{ALPHABET_LEN, PAD_CHAR, PLAYFAIR_ALPHABET, PLAYFAIR_SIZE};
use crate::core::alphabet::{index_of, letters_only};
use crate::core::cipher::Cipher;
use crate::enums::Algorithm;

const N: usize = PLAYFAIR_SIZE;

/// Key square; every letter of the I/J-merged alphabet appears exactly once
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayfairMatrix {
    grid: [[char; N]; N],
    positions: [(usize, usize); ALPHABET_LEN as usize],
}

impl PlayfairMatrix {
    /// Build the grid from `key`; non-letters in the key are ignored
    pub fn new(key: &str) -> Self {
        let mut grid = [['A'; N]; N];
        let mut positions = [(0, 0); ALPHABET_LEN as usize];
        let mut placed = [false; ALPHABET_LEN as usize];
        let mut cell = 0usize;

        let key_letters = letters_only(key).replace('J', "I");
        for ch in key_letters.chars().chain(PLAYFAIR_ALPHABET.chars()) {
            let Some(idx) = index_of(ch) else { continue };
            let idx = idx as usize;
            if placed[idx] {
                continue;
            }
            placed[idx] = true;
            let (row, col) = (cell / N, cell % N);
            grid[row][col] = ch;
            positions[idx] = (row, col);
            cell += 1;
        }

        // J shares I's cell
        let i = (b'I' - b'A') as usize;
        let j = (b'J' - b'A') as usize;
        positions[j] = positions[i];

        Self { grid, positions }
    }

    pub fn rows(&self) -> &[[char; N]; N] {
        &self.grid
    }

    /// Grid coordinates of a letter (J resolves to I); `None` for non-letters
    pub fn position(&self, ch: char) -> Option<(usize, usize)> {
        index_of(ch).map(|idx| self.positions[idx as usize])
    }

    pub fn at(&self, row: usize, col: usize) -> char {
        self.grid[row % N][col % N]
    }

    /// Apply the row / column / rectangle rule to one pair of letters
    fn encrypt_pair(&self, a: char, b: char) -> Option<[char; 2]> {
        let (r1, c1) = self.position(a)?;
        let (r2, c2) = self.position(b)?;
        let pair = if r1 == r2 {
            [self.at(r1, c1 + 1), self.at(r2, c2 + 1)]
        } else if c1 == c2 {
            [self.at(r1 + 1, c1), self.at(r2 + 1, c2)]
        } else {
            [self.at(r1, c2), self.at(r2, c1)]
        };
        Some(pair)
    }
}

impl fmt::Display for PlayfairMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.grid.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = row.iter().map(char::to_string).collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayfairCipher {
    matrix: PlayfairMatrix,
}

impl PlayfairCipher {
    pub fn new(key: &str) -> Self {
        Self {
            matrix: PlayfairMatrix::new(key),
        }
    }

    pub fn matrix(&self) -> &PlayfairMatrix {
        &self.matrix
    }
}

impl Cipher for PlayfairCipher {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Playfair
    }

    fn encrypt(&self, text: &str) -> String {
        let mut prepared: Vec<char> = letters_only(text)
            .chars()
            .map(|c| if c == 'J' { 'I' } else { c })
            .collect();
        if prepared.len() % 2 != 0 {
            prepared.push(PAD_CHAR);
        }

        let mut out = String::with_capacity(prepared.len());
        for pair in prepared.chunks_exact(2) {
            // prepared holds only letters, so every lookup succeeds
            if let Some([x, y]) = self.matrix.encrypt_pair(pair[0], pair[1]) {
                out.push(x);
                out.push(y);
            }
        }
        out
    }
}

pub fn playfair_encrypt(text: &str, key: &str) -> String {
    PlayfairCipher::new(key).encrypt(text)
}
