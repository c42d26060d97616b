//! # Shared Data Transfer Objects Library
//!
//! This library defines the records exchanged between the coaching contract
//! client and the front-end. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects
//!   - **[`dto::coaching`]**: Session records and client attendance statistics
//!   - **[`dto::soroban`]**: Contract metadata and network identifiers
//! - **[`utils`]**: Shared display helpers
//!   - **[`utils::format_address`]**: Format wallet addresses for display
//!   - **[`utils::truncate_address`]**: Truncate addresses with ellipsis
//!   - **[`utils::format_stroops`]**: Convert stroops to XLM for display
//!
//! ## Wire Format
//!
//! All DTOs serialize to JSON using the default `serde` behavior:
//! - Field names use **snake_case** in Rust, which maps to **snake_case** in JSON
//! - Enums serialize to lowercase strings
//! - All structs implement both `Serialize` and `Deserialize`
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::coaching::SessionRecord;
//! use shared::utils::format_stroops;
//!
//! let record = SessionRecord {
//!     id: 1,
//!     client_address: "GAX63FSGPPYSD6ZTOZ7VMVEVHSIMFMW573UXHZGW5UFXQZDELCV37X5I".to_string(),
//!     coach_address: "GC4OTBH4ZDDWVXORRUAZI2GFWDZ2UVRBBFROA7KMC5EKBJR7QEZL6D63".to_string(),
//!     amount: 10_000_000,
//!     scheduled_time: 1_700_000_000,
//!     attended: true,
//!     completed: true,
//! };
//!
//! assert_eq!(format_stroops(record.amount, 1), "1.0");
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;
