// src/core/mod.rs
pub mod alphabet;
pub mod cipher;
pub mod ciphers;
pub mod dispatch;

pub use cipher::Cipher;
pub use ciphers::*;
pub use dispatch::{dispatch, CipherDispatcher};

pub type Result<T> = std::result::Result<T, crate::error::CipherError>;
