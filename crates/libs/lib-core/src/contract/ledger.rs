//! # In-Memory Coaching Contract
//!
//! Simulates the coaching contract's storage and rules without a network:
//!
//! - clients book sessions and the payment is held in escrow by the contract
//! - the coach records attendance once per session
//! - completing an attended session releases the escrow to the coach
//! - client statistics and the at-risk flag are kept up to date
//!
//! ## At-Risk Rule
//!
//! A client is at risk after two or more missed sessions, or when fewer than
//! half of at least three booked sessions were attended.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use shared::dto::coaching::{ClientStats, SessionRecord};

use crate::config::DEFAULT_CONTRACT_ID;
use crate::error::ContractError;
use crate::service::ContractClient;

/// Missed sessions that put a client at risk on their own.
pub const MISSED_SESSIONS_AT_RISK: u64 = 2;
/// Minimum booked sessions before the attendance rate is considered.
pub const MIN_SESSIONS_FOR_RATE: u64 = 3;
/// Attendance percentage below which a client is at risk.
pub const MIN_ATTENDANCE_PERCENT: u64 = 50;

/// Evaluate the at-risk flag for the given counters.
pub fn assess_risk(stats: &ClientStats) -> bool {
    if stats.missed_sessions >= MISSED_SESSIONS_AT_RISK {
        return true;
    }
    if stats.total_sessions >= MIN_SESSIONS_FOR_RATE {
        let attendance_rate =
            u128::from(stats.attended_sessions) * 100 / u128::from(stats.total_sessions);
        return attendance_rate < u128::from(MIN_ATTENDANCE_PERCENT);
    }
    false
}

#[derive(Debug, Clone)]
struct StoredSession {
    record: SessionRecord,
    attendance_recorded: bool,
}

#[derive(Debug, Default)]
struct LedgerState {
    token: Option<String>,
    session_count: u64,
    sessions: HashMap<u64, StoredSession>,
    stats: HashMap<String, ClientStats>,
    balances: HashMap<String, i128>,
}

impl LedgerState {
    fn transfer(&mut self, from: &str, to: &str, amount: i128) -> Result<(), ContractError> {
        let available = self.balances.get(from).copied().unwrap_or(0);
        if available < amount {
            return Err(ContractError::InvalidState(format!(
                "insufficient balance: {} has {}, needs {}",
                from, available, amount
            )));
        }
        if from == to {
            return Ok(());
        }
        let credited = self.credit_amount(to, amount)?;
        self.balances.insert(from.to_string(), available - amount);
        self.balances.insert(to.to_string(), credited);
        Ok(())
    }

    /// Balance of `account` after receiving `amount`, rejecting overflow.
    fn credit_amount(&self, account: &str, amount: i128) -> Result<i128, ContractError> {
        let current = self.balances.get(account).copied().unwrap_or(0);
        current.checked_add(amount).ok_or_else(|| {
            ContractError::InvalidState(format!(
                "balance overflow: {} has {}, receiving {}",
                account, current, amount
            ))
        })
    }

    fn session_mut(&mut self, id: u64) -> Result<&mut StoredSession, ContractError> {
        self.sessions.get_mut(&id).ok_or(ContractError::NotFound(id))
    }

    fn record_outcome(&mut self, client: &str, new_session: bool, attended: bool) {
        let stats = self.stats.entry(client.to_string()).or_default();
        if new_session {
            stats.total_sessions += 1;
        } else if attended {
            stats.attended_sessions += 1;
        } else {
            stats.missed_sessions += 1;
        }
        stats.at_risk = assess_risk(stats);
    }
}

/// Stateful stand-in for the deployed coaching contract.
#[derive(Debug)]
pub struct InMemoryContract {
    address: String,
    state: RwLock<LedgerState>,
}

impl Default for InMemoryContract {
    fn default() -> Self {
        Self::new(DEFAULT_CONTRACT_ID)
    }
}

impl InMemoryContract {
    /// Create a contract whose escrow account is `address`.
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            state: RwLock::new(LedgerState::default()),
        }
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// Set the payment token. Can only be done once.
    pub fn initialize(&self, token: &str) -> Result<(), ContractError> {
        let mut state = self.state.write();
        if state.token.is_some() {
            return Err(ContractError::InvalidState(
                "contract already initialized".to_string(),
            ));
        }
        state.token = Some(token.to_string());
        state.session_count = 0;
        tracing::debug!(token = %token, "Contract initialized");
        Ok(())
    }

    pub fn token(&self) -> Option<String> {
        self.state.read().token.clone()
    }

    /// Credit `amount` stroops of the payment token to `account`.
    pub fn mint(&self, account: &str, amount: i128) -> Result<(), ContractError> {
        if amount <= 0 {
            return Err(ContractError::InvalidState(format!(
                "mint amount must be positive, got {}",
                amount
            )));
        }
        let mut state = self.state.write();
        let credited = state.credit_amount(account, amount)?;
        state.balances.insert(account.to_string(), credited);
        Ok(())
    }

    pub fn balance(&self, account: &str) -> i128 {
        self.state.read().balances.get(account).copied().unwrap_or(0)
    }

    /// Book a session; the client pays `amount` into escrow.
    ///
    /// Returns the new session id. Ids start at 1.
    pub fn create_session(
        &self,
        client: &str,
        coach: &str,
        amount: i128,
        scheduled_time: u64,
    ) -> Result<u64, ContractError> {
        if amount <= 0 {
            return Err(ContractError::InvalidState(format!(
                "session amount must be positive, got {}",
                amount
            )));
        }

        let mut state = self.state.write();
        if state.token.is_none() {
            return Err(ContractError::InvalidState("token not initialized".to_string()));
        }
        state.transfer(client, &self.address, amount)?;

        let session_id = state.session_count + 1;
        let record = SessionRecord {
            id: session_id,
            client_address: client.to_string(),
            coach_address: coach.to_string(),
            amount,
            scheduled_time,
            attended: false,
            completed: false,
        };
        state.sessions.insert(
            session_id,
            StoredSession {
                record,
                attendance_recorded: false,
            },
        );
        state.session_count = session_id;
        state.record_outcome(client, true, false);

        tracing::info!(session_id, client = %client, coach = %coach, "Session booked");
        Ok(session_id)
    }

    /// Record whether the client showed up.
    pub fn mark_attendance(&self, session_id: u64, attended: bool) -> Result<(), ContractError> {
        let mut state = self.state.write();
        let session = state.session_mut(session_id)?;
        if session.attendance_recorded {
            return Err(ContractError::InvalidState(format!(
                "attendance already recorded for session {}",
                session_id
            )));
        }
        session.record.attended = attended;
        session.attendance_recorded = true;
        let client = session.record.client_address.clone();

        state.record_outcome(&client, false, attended);
        Ok(())
    }

    /// Close an attended session and pay the coach from escrow.
    pub fn complete_session(&self, session_id: u64) -> Result<(), ContractError> {
        let mut state = self.state.write();
        let session = state.session_mut(session_id)?;
        if !session.record.attended {
            return Err(ContractError::InvalidState(
                "session must be marked as attended before completion".to_string(),
            ));
        }
        if session.record.completed {
            return Err(ContractError::InvalidState("session already completed".to_string()));
        }
        let coach = session.record.coach_address.clone();
        let amount = session.record.amount;

        let escrow = self.address.clone();
        state.transfer(&escrow, &coach, amount)?;
        if let Some(session) = state.sessions.get_mut(&session_id) {
            session.record.completed = true;
        }
        tracing::info!(session_id, coach = %coach, "Session completed");
        Ok(())
    }

    pub fn session(&self, session_id: u64) -> Result<SessionRecord, ContractError> {
        self.state
            .read()
            .sessions
            .get(&session_id)
            .map(|s| s.record.clone())
            .ok_or(ContractError::NotFound(session_id))
    }

    /// Statistics for `client`, zeroed if the client never booked.
    pub fn client_stats(&self, client: &str) -> ClientStats {
        self.state
            .read()
            .stats
            .get(client)
            .cloned()
            .unwrap_or_default()
    }
}

#[async_trait(?Send)]
impl ContractClient for InMemoryContract {
    async fn get_session(&self, id: u64) -> Result<SessionRecord, ContractError> {
        self.session(id)
    }

    async fn get_client_stats(&self, address: &str) -> Result<ClientStats, ContractError> {
        Ok(self.client_stats(address))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLIENT: &str = "GCLIENT";
    const COACH: &str = "GCOACH";

    fn funded_contract() -> InMemoryContract {
        let contract = InMemoryContract::default();
        contract.initialize("CTOKEN").unwrap();
        contract.mint(CLIENT, 1000).unwrap();
        contract
    }

    #[test]
    fn test_create_and_complete_session() {
        // Arrange
        let contract = funded_contract();

        // Act
        let session_id = contract.create_session(CLIENT, COACH, 100, 1_000_000).unwrap();
        contract.mark_attendance(session_id, true).unwrap();
        contract.complete_session(session_id).unwrap();

        // Assert
        assert_eq!(session_id, 1);
        assert_eq!(contract.balance(COACH), 100);
        assert_eq!(contract.balance(CLIENT), 900);
        assert_eq!(contract.balance(contract.address()), 0);
        let record = contract.session(session_id).unwrap();
        assert!(record.attended && record.completed);
    }

    #[test]
    fn test_payment_held_in_escrow_until_completion() {
        let contract = funded_contract();

        contract.create_session(CLIENT, COACH, 250, 0).unwrap();

        assert_eq!(contract.balance(contract.address()), 250);
        assert_eq!(contract.balance(COACH), 0);
    }

    #[test]
    fn test_initialize_twice_fails() {
        let contract = funded_contract();
        assert!(matches!(
            contract.initialize("CTOKEN"),
            Err(ContractError::InvalidState(_))
        ));
        assert_eq!(contract.token().as_deref(), Some("CTOKEN"));
    }

    #[test]
    fn test_create_session_requires_initialization_and_funds() {
        let contract = InMemoryContract::default();
        contract.mint(CLIENT, 10).unwrap();
        assert!(contract.create_session(CLIENT, COACH, 5, 0).is_err());

        contract.initialize("CTOKEN").unwrap();
        assert!(contract.create_session(CLIENT, COACH, 50, 0).is_err());
        assert!(contract.create_session(CLIENT, COACH, 0, 0).is_err());
        assert_eq!(contract.client_stats(CLIENT), ClientStats::default());
    }

    #[test]
    fn test_complete_requires_attendance() {
        let contract = funded_contract();
        let id = contract.create_session(CLIENT, COACH, 100, 0).unwrap();

        assert!(contract.complete_session(id).is_err());

        contract.mark_attendance(id, false).unwrap();
        assert!(contract.complete_session(id).is_err());
        assert_eq!(contract.balance(COACH), 0);
    }

    #[test]
    fn test_complete_twice_fails() {
        let contract = funded_contract();
        let id = contract.create_session(CLIENT, COACH, 100, 0).unwrap();
        contract.mark_attendance(id, true).unwrap();
        contract.complete_session(id).unwrap();

        let err = contract.complete_session(id).unwrap_err();

        assert_eq!(err, ContractError::InvalidState("session already completed".to_string()));
        assert_eq!(contract.balance(COACH), 100);
    }

    #[test]
    fn test_attendance_recorded_once() {
        let contract = funded_contract();
        let id = contract.create_session(CLIENT, COACH, 100, 0).unwrap();
        contract.mark_attendance(id, true).unwrap();

        assert!(contract.mark_attendance(id, false).is_err());

        let stats = contract.client_stats(CLIENT);
        assert_eq!(stats.attended_sessions, 1);
        assert!(stats.is_balanced());
    }

    #[test]
    fn test_unknown_session_not_found() {
        let contract = funded_contract();
        assert_eq!(contract.session(9), Err(ContractError::NotFound(9)));
        assert_eq!(contract.mark_attendance(9, true), Err(ContractError::NotFound(9)));
        assert_eq!(contract.complete_session(9), Err(ContractError::NotFound(9)));
    }

    #[test]
    fn test_two_missed_sessions_put_client_at_risk() {
        let contract = funded_contract();
        let first = contract.create_session(CLIENT, COACH, 10, 0).unwrap();
        let second = contract.create_session(CLIENT, COACH, 10, 0).unwrap();

        contract.mark_attendance(first, false).unwrap();
        assert!(!contract.client_stats(CLIENT).at_risk);

        contract.mark_attendance(second, false).unwrap();
        let stats = contract.client_stats(CLIENT);
        assert_eq!(stats.missed_sessions, 2);
        assert!(stats.at_risk);
    }

    #[test]
    fn test_assess_risk_attendance_rate() {
        let low = ClientStats {
            total_sessions: 4,
            attended_sessions: 1,
            missed_sessions: 1,
            at_risk: false,
        };
        let half = ClientStats {
            total_sessions: 4,
            attended_sessions: 2,
            missed_sessions: 1,
            at_risk: false,
        };
        let few = ClientStats {
            total_sessions: 2,
            attended_sessions: 0,
            missed_sessions: 1,
            at_risk: false,
        };

        assert!(assess_risk(&low));
        assert!(!assess_risk(&half));
        assert!(!assess_risk(&few));
    }

    #[test]
    fn test_assess_risk_large_counts() {
        let stats = ClientStats {
            total_sessions: u64::MAX,
            attended_sessions: u64::MAX - 1,
            missed_sessions: 1,
            at_risk: false,
        };

        assert!(!assess_risk(&stats));
    }

    #[test]
    fn test_mint_overflow_rejected() {
        // Arrange
        let contract = InMemoryContract::default();
        contract.mint(CLIENT, i128::MAX).unwrap();

        // Act
        let result = contract.mint(CLIENT, 1);

        // Assert
        assert!(matches!(result, Err(ContractError::InvalidState(_))));
        assert_eq!(contract.balance(CLIENT), i128::MAX);
    }

    #[test]
    fn test_payout_overflow_leaves_session_open() {
        // Arrange
        let contract = funded_contract();
        contract.mint(COACH, i128::MAX).unwrap();
        let id = contract.create_session(CLIENT, COACH, 100, 0).unwrap();
        contract.mark_attendance(id, true).unwrap();

        // Act
        let result = contract.complete_session(id);

        // Assert
        assert!(matches!(result, Err(ContractError::InvalidState(_))));
        assert_eq!(contract.balance(contract.address()), 100);
        assert_eq!(contract.balance(COACH), i128::MAX);
        assert!(!contract.session(id).unwrap().completed);
    }

    #[tokio::test]
    async fn test_contract_client_reads_ledger() {
        let contract = funded_contract();
        let id = contract.create_session(CLIENT, COACH, 100, 1_700_000_000).unwrap();

        let record = contract.get_session(id).await.unwrap();
        let stats = contract.get_client_stats(CLIENT).await.unwrap();
        let missing = contract.get_session(id + 1).await;

        assert_eq!(record.scheduled_time, 1_700_000_000);
        assert_eq!(stats.total_sessions, 1);
        assert_eq!(missing, Err(ContractError::NotFound(id + 1)));
    }
}
