//! Return-value encoding for simulated oracle runs
//!
//! Mirrors the DON toolkit's encoders: a function run returns raw bytes,
//! either a 32-byte big-endian unsigned integer or UTF-8 text, and the
//! harness decodes them for display according to the configured return type.

use anyhow::{Context, Result};

/// Expected return type of a simulated run, fixed per request configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnType {
    Uint256,
    String,
}

/// Big-endian, zero-padded to the full 32-byte word
pub fn encode_uint256(value: u128) -> [u8; 32] {
    let mut out = [0u8; 32];
    out[16..].copy_from_slice(&value.to_be_bytes());
    out
}

pub fn encode_string(value: &str) -> Vec<u8> {
    value.as_bytes().to_vec()
}

/// Decode response bytes for display.
///
/// Uint256 values above `u128::MAX` are rejected rather than silently
/// truncated; no simulated function here produces them.
pub fn decode_result(bytes: &[u8], return_type: ReturnType) -> Result<String> {
    match return_type {
        ReturnType::Uint256 => {
            let word: [u8; 32] = bytes
                .try_into()
                .context("uint256 response must be exactly 32 bytes")?;
            if word[..16].iter().any(|&b| b != 0) {
                anyhow::bail!("uint256 response exceeds the supported range");
            }
            let value = u128::from_be_bytes(
                word[16..].try_into().expect("slice is 16 bytes"),
            );
            Ok(value.to_string())
        }
        ReturnType::String => {
            let text = std::str::from_utf8(bytes)
                .context("string response is not valid UTF-8")?;
            Ok(text.to_string())
        }
    }
}
