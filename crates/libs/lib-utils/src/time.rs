//! # Time Utilities
//!
//! Conversion and formatting of the unix timestamps stored by the contract.

use chrono::{DateTime, Utc};

/// Convert unix seconds to a UTC `DateTime`.
pub fn from_unix_seconds(secs: u64) -> Result<DateTime<Utc>, Error> {
    let secs = i64::try_from(secs).map_err(|_| Error::OutOfRange(secs))?;
    DateTime::from_timestamp(secs, 0).ok_or(Error::OutOfRange(secs as u64))
}

/// Format unix seconds as `YYYY-MM-DD HH:MM UTC`.
///
/// Out-of-range values are rendered as the raw number.
pub fn format_unix_timestamp(secs: u64) -> String {
    match from_unix_seconds(secs) {
        Ok(dt) => dt.format("%Y-%m-%d %H:%M UTC").to_string(),
        Err(_) => secs.to_string(),
    }
}

// region:    --- Error
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    OutOfRange(u64),
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}
// endregion: --- Error

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_unix_timestamp() {
        assert_eq!(format_unix_timestamp(1_700_000_000), "2023-11-14 22:13 UTC");
        assert_eq!(format_unix_timestamp(0), "1970-01-01 00:00 UTC");
    }

    #[test]
    fn test_out_of_range_timestamp() {
        assert_eq!(format_unix_timestamp(u64::MAX), u64::MAX.to_string());
        assert!(from_unix_seconds(u64::MAX).is_err());
    }
}
