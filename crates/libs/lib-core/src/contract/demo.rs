//! Demo contract client returning fixed records.

use async_trait::async_trait;
use shared::dto::coaching::{ClientStats, SessionRecord};

use crate::error::ContractError;
use crate::service::ContractClient;

pub const DEMO_CLIENT_ADDRESS: &str = "GAX63FSGPPYSD6ZTOZ7VMVEVHSIMFMW573UXHZGW5UFXQZDELCV37X5I";
pub const DEMO_COACH_ADDRESS: &str = "GC4OTBH4ZDDWVXORRUAZI2GFWDZ2UVRBBFROA7KMC5EKBJR7QEZL6D63";
/// 1 XLM in stroops.
pub const DEMO_AMOUNT: i128 = 10_000_000;
pub const DEMO_SCHEDULED_TIME: u64 = 1_700_000_000;

/// Answers every lookup with the same demo data.
///
/// The session echoes the requested id; statistics describe a single
/// attended session regardless of the address asked for.
#[derive(Debug, Default, Clone, Copy)]
pub struct DemoContractClient;

impl DemoContractClient {
    pub fn new() -> Self {
        Self
    }

    pub fn demo_session(id: u64) -> SessionRecord {
        SessionRecord {
            id,
            client_address: DEMO_CLIENT_ADDRESS.to_string(),
            coach_address: DEMO_COACH_ADDRESS.to_string(),
            amount: DEMO_AMOUNT,
            scheduled_time: DEMO_SCHEDULED_TIME,
            attended: true,
            completed: true,
        }
    }

    pub fn demo_stats() -> ClientStats {
        ClientStats {
            total_sessions: 1,
            attended_sessions: 1,
            missed_sessions: 0,
            at_risk: false,
        }
    }
}

#[async_trait(?Send)]
impl ContractClient for DemoContractClient {
    async fn get_session(&self, id: u64) -> Result<SessionRecord, ContractError> {
        tracing::debug!(session_id = id, "Serving demo session");
        Ok(Self::demo_session(id))
    }

    async fn get_client_stats(&self, address: &str) -> Result<ClientStats, ContractError> {
        tracing::debug!(address = %address, "Serving demo stats");
        Ok(Self::demo_stats())
    }
}
