//! # Validation Utilities
//!
//! Input validation helpers.

/// Validate that a string is not empty.
pub fn validate_not_empty(value: &str, field_name: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{} cannot be empty", field_name))
    } else {
        Ok(())
    }
}

/// Parse a non-empty, trimmed decimal identifier into a `u64`.
pub fn parse_unsigned_id(value: &str, field_name: &str) -> Result<u64, String> {
    validate_not_empty(value, field_name)?;
    value
        .trim()
        .parse::<u64>()
        .map_err(|_| format!("{} must be a whole number", field_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_not_empty() {
        assert!(validate_not_empty("1", "Session ID").is_ok());
        assert_eq!(
            validate_not_empty("   ", "Session ID"),
            Err("Session ID cannot be empty".to_string())
        );
    }

    #[test]
    fn test_parse_unsigned_id() {
        assert_eq!(parse_unsigned_id(" 42 ", "Session ID"), Ok(42));
        assert_eq!(parse_unsigned_id("18446744073709551615", "Session ID"), Ok(u64::MAX));
        assert!(parse_unsigned_id("-1", "Session ID").is_err());
        assert!(parse_unsigned_id("abc", "Session ID").is_err());
        assert!(parse_unsigned_id("", "Session ID").is_err());
    }
}
