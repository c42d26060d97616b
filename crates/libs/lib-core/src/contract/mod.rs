//! # Contract Clients
//!
//! Implementations of [`ContractClient`](crate::service::ContractClient)
//! that do not touch the network:
//!
//! - [`DemoContractClient`] - fixed demo records, for the public demo page
//! - [`InMemoryContract`] - a stateful simulator of the coaching contract

pub mod demo;
pub mod ledger;

pub use demo::DemoContractClient;
pub use ledger::InMemoryContract;
