//! # Shared Utility Functions
//!
//! Display helpers used by the core view model and the web front-end.
//!
//! ## Address Formatting
//!
//! Functions for formatting Stellar account addresses for display:
//! - [`format_address`] - Format address with ellipsis (first N and last M characters)
//! - [`truncate_address`] - Alias for `format_address` with default parameters
//!
//! ## Amount Formatting
//!
//! - [`format_stroops`] - Convert stroops to XLM with a fixed number of decimals
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::format_address;
//!
//! let address = "GAX63FSGPPYSD6ZTOZ7VMVEVHSIMFMW573UXHZGW5UFXQZDELCV37X5I";
//! let formatted = format_address(address, 4, 4);
//! assert_eq!(formatted, "GAX6...7X5I");
//! ```

/// Format a wallet address by showing the first `prefix_len` and last `suffix_len` characters.
///
/// If the address is shorter than `prefix_len + suffix_len`, it is returned as-is.
///
/// # Arguments
///
/// * `address` - The wallet address to format
/// * `prefix_len` - Number of characters to show at the start (default: 4)
/// * `suffix_len` - Number of characters to show at the end (default: 4)
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "GC4OTBH4ZDDWVXORRUAZI2GFWDZ2UVRBBFROA7KMC5EKBJR7QEZL6D63";
/// assert_eq!(format_address(addr, 4, 4), "GC4O...6D63");
/// assert_eq!(format_address(addr, 6, 6), "GC4OTB...ZL6D63");
/// assert_eq!(format_address("short", 4, 4), "short");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let address_len = address.len();
    
    // Return early if address is too short to truncate meaningfully
    // Also guard against individual lengths exceeding address length to prevent panics
    if address_len <= prefix_len + suffix_len
        || prefix_len >= address_len
        || suffix_len >= address_len
    {
        return address.to_string();
    }
    
    // Stellar strkeys are ASCII, but operator-supplied text may not be
    let (Some(prefix), Some(suffix)) = (
        address.get(..prefix_len),
        address.get(address_len - suffix_len..),
    ) else {
        return address.to_string();
    };

    format!("{}...{}", prefix, suffix)
}

/// Format a wallet address with default 4-character prefix and suffix.
///
/// This is a convenience function that calls [`format_address`] with `prefix_len=4` and `suffix_len=4`.
///
/// # Examples
///
/// ```rust
/// use shared::utils::truncate_address;
///
/// let addr = "GC4OTBH4ZDDWVXORRUAZI2GFWDZ2UVRBBFROA7KMC5EKBJR7QEZL6D63";
/// assert_eq!(truncate_address(addr), "GC4O...6D63");
/// ```
pub fn truncate_address(address: &str) -> String {
    format_address(address, 4, 4)
}

/// Stroops per XLM (7 decimal places).
pub const STROOPS_PER_XLM: i128 = 10_000_000;

/// Format an amount in stroops as XLM with `decimals` fractional digits.
///
/// The conversion is exact; digits beyond the seventh are zeros and shorter
/// precisions round half away from zero.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_stroops;
///
/// assert_eq!(format_stroops(10_000_000, 1), "1.0");
/// assert_eq!(format_stroops(25_000_000, 2), "2.50");
/// assert_eq!(format_stroops(-5_000_000, 1), "-0.5");
/// ```
pub fn format_stroops(amount: i128, decimals: usize) -> String {
    const STROOP_DIGITS: usize = 7;

    let magnitude = amount.unsigned_abs();
    let sign = if amount < 0 { "-" } else { "" };

    if decimals >= STROOP_DIGITS {
        let scale = STROOPS_PER_XLM.unsigned_abs();
        return format!(
            "{sign}{}.{:07}{}",
            magnitude / scale,
            magnitude % scale,
            "0".repeat(decimals - STROOP_DIGITS)
        );
    }

    let step = 10u128.pow((STROOP_DIGITS - decimals) as u32);
    // u128 holds |i128::MIN| + step / 2 without wrapping
    let rounded = (magnitude + step / 2) / step;
    let sign = if rounded == 0 { "" } else { sign };
    let unit = 10u128.pow(decimals as u32);

    if decimals == 0 {
        format!("{sign}{rounded}")
    } else {
        format!(
            "{sign}{}.{:0width$}",
            rounded / unit,
            rounded % unit,
            width = decimals
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_address() {
        let addr = "GC4OTBH4ZDDWVXORRUAZI2GFWDZ2UVRBBFROA7KMC5EKBJR7QEZL6D63";
        assert_eq!(format_address(addr, 4, 4), "GC4O...6D63");
        assert_eq!(format_address(addr, 6, 6), "GC4OTB...ZL6D63");
        assert_eq!(format_address(addr, 2, 2), "GC...63");
    }

    #[test]
    fn test_format_address_non_ascii() {
        assert_eq!(format_address("ééééééééééé", 3, 3), "ééééééééééé");
    }

    #[test]
    fn test_format_address_short() {
        assert_eq!(format_address("short", 4, 4), "short");
        assert_eq!(format_address("abc", 4, 4), "abc");
    }

    #[test]
    fn test_truncate_address() {
        let addr = "GAX63FSGPPYSD6ZTOZ7VMVEVHSIMFMW573UXHZGW5UFXQZDELCV37X5I";
        assert_eq!(truncate_address(addr), "GAX6...7X5I");
    }

    #[test]
    fn test_format_stroops() {
        assert_eq!(format_stroops(10_000_000, 1), "1.0");
        assert_eq!(format_stroops(0, 1), "0.0");
        assert_eq!(format_stroops(1_234_567_890, 7), "123.4567890");
    }

    #[test]
    fn test_format_stroops_exact_for_large_amounts() {
        assert_eq!(
            format_stroops(i128::MAX, 7),
            "17014118346046923173168730371588.4105727"
        );
        assert_eq!(
            format_stroops(i128::MIN, 1),
            "-17014118346046923173168730371588.4"
        );
        assert_eq!(format_stroops(123_456_789_012_345_678, 1), "12345678901.2");
    }

    #[test]
    fn test_format_stroops_rounding_and_padding() {
        assert_eq!(format_stroops(15_000_000, 0), "2");
        assert_eq!(format_stroops(10_500_000, 9), "1.050000000");
        assert_eq!(format_stroops(-1, 1), "0.0");
        assert_eq!(format_stroops(0, 1), "0.0");
    }
}
