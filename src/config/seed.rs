//! Seed parsing utilities.

use anyhow::Context;

/// Parse a seed string like "12345" or "0x5686B7805E0" into a u64.
/// Supports:
/// - Decimal numbers: "12345"
/// - Hexadecimal with `0x` or `0X` prefix: "0x5686B7805E0"
pub fn parse_seed(s: &str) -> anyhow::Result<u64> {
    let s = s.trim();
    if s.is_empty() {
        anyhow::bail!("Empty seed string");
    }

    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        return u64::from_str_radix(hex, 16)
            .with_context(|| format!("Invalid hexadecimal seed: {hex}"));
    }

    s.parse::<u64>()
        .with_context(|| format!("Invalid seed value: {s}"))
}
