//! # Data Transfer Objects (DTOs)
//!
//! Records returned by the coaching contract and the metadata describing the
//! deployed contract.
//!
//! ## Module Organization
//!
//! - [`coaching`] - Session records and client statistics
//! - [`soroban`] - Contract metadata and Stellar network identifiers
//!
//! ## Example JSON
//!
//! ```text
//! {
//!   "id": 1,
//!   "client_address": "GAX63FSGPPYSD6ZTOZ7VMVEVHSIMFMW573UXHZGW5UFXQZDELCV37X5I",
//!   "coach_address": "GC4OTBH4ZDDWVXORRUAZI2GFWDZ2UVRBBFROA7KMC5EKBJR7QEZL6D63",
//!   "amount": 10000000,
//!   "scheduled_time": 1700000000,
//!   "attended": true,
//!   "completed": true
//! }
//! ```

pub mod coaching;
pub mod soroban;

pub use coaching::*;
pub use soroban::*;
