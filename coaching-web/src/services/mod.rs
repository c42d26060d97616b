//! Browser implementations of the controller's capability traits

pub mod contract;
pub mod notify;
pub mod wallet;
