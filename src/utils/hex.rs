// Mon Oct 19 2026 - Alex

/// Parses a map-file hex token such as `0x00001c4a`. The `0x` prefix is optional.
pub fn parse_hex(token: &str) -> Option<u64> {
    let digits = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .unwrap_or(token);

    if digits.is_empty() {
        return None;
    }
    u64::from_str_radix(digits, 16).ok()
}
