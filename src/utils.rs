pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Parse a numeric query/form field, falling back to `default` when the
/// field is absent or malformed. Invalid input degrades, it never errors.
pub fn parse_or(value: Option<&str>, default: i64) -> i64 {
    value
        .map(str::trim)
        .and_then(|v| v.parse::<i64>().ok())
        .unwrap_or(default)
}
