//! Contract client decorators for the browser.

use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;
use lib_core::{ContractClient, ContractError};
use shared::dto::coaching::{ClientStats, SessionRecord};

/// Delays every answer of the wrapped client by a fixed interval, standing in
/// for the round trip to the Soroban RPC endpoint.
pub struct SimulatedLatency<C> {
    inner: C,
    delay_ms: u32,
}

impl<C: ContractClient> SimulatedLatency<C> {
    pub fn new(inner: C, delay_ms: u32) -> Self {
        Self { inner, delay_ms }
    }

    async fn wait(&self) {
        if self.delay_ms > 0 {
            TimeoutFuture::new(self.delay_ms).await;
        }
    }
}

#[async_trait(?Send)]
impl<C: ContractClient> ContractClient for SimulatedLatency<C> {
    async fn get_session(&self, id: u64) -> Result<SessionRecord, ContractError> {
        self.wait().await;
        self.inner.get_session(id).await
    }

    async fn get_client_stats(&self, address: &str) -> Result<ClientStats, ContractError> {
        self.wait().await;
        self.inner.get_client_stats(address).await
    }
}
