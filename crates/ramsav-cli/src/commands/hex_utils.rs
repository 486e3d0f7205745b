//! Hex offset parsing and formatting utilities.

use anyhow::Result;

/// Parse a hex offset string (with or without 0x prefix).
///
/// # Examples
///
/// ```ignore
/// assert_eq!(parse_hex_offset("0x1000").unwrap(), 0x1000);
/// assert_eq!(parse_hex_offset("1000").unwrap(), 0x1000);
/// ```
pub fn parse_hex_offset(s: &str) -> Result<usize> {
    let s = s.trim();
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    usize::from_str_radix(digits, 16).map_err(|e| anyhow::anyhow!("Invalid hex offset: {}", e))
}

/// Format an offset as a hex string with 0x prefix.
pub fn format_hex_offset(offset: usize) -> String {
    format!("0x{:X}", offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_offset_with_prefix() {
        assert_eq!(parse_hex_offset("0x1000").unwrap(), 0x1000);
        assert_eq!(parse_hex_offset("0X1000").unwrap(), 0x1000);
    }

    #[test]
    fn test_parse_hex_offset_without_prefix() {
        assert_eq!(parse_hex_offset("0").unwrap(), 0);
        assert_eq!(parse_hex_offset("7FFFC").unwrap(), 0x7FFFC);
    }

    #[test]
    fn test_parse_hex_offset_invalid() {
        assert!(parse_hex_offset("GHIJK").is_err());
        assert!(parse_hex_offset("0xZZZ").is_err());
        assert!(parse_hex_offset("").is_err());
        assert!(parse_hex_offset("0x").is_err());
    }

    #[test]
    fn test_parse_hex_offset_double_prefix_rejected() {
        assert!(parse_hex_offset("0x0x10").is_err());
        assert!(parse_hex_offset("0X0x10").is_err());
        assert_eq!(parse_hex_offset(" 0x10 ").unwrap(), 0x10);
    }

    #[test]
    fn test_format_hex_offset() {
        assert_eq!(format_hex_offset(0x5400), "0x5400");
        assert_eq!(format_hex_offset(0), "0x0");
    }
}
