use serde::{Deserialize, Serialize};

/// A single booked coaching engagement between a client and a coach.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionRecord {
    pub id: u64,
    pub client_address: String,
    pub coach_address: String,
    /// Amount paid, in stroops.
    pub amount: i128,
    /// Unix timestamp (seconds) the session is scheduled for.
    pub scheduled_time: u64,
    pub attended: bool,
    pub completed: bool,
}

/// Aggregate attendance summary for one client.
///
/// `attended_sessions + missed_sessions == total_sessions` once every booked
/// session has had its attendance recorded. Sessions awaiting attendance count
/// towards the total only, so a freshly booked client is temporarily unbalanced.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientStats {
    pub total_sessions: u64,
    pub attended_sessions: u64,
    pub missed_sessions: u64,
    pub at_risk: bool,
}

impl ClientStats {
    /// Number of sessions with a recorded outcome, `None` if the counters
    /// overflow `u64`.
    pub fn recorded_sessions(&self) -> Option<u64> {
        self.attended_sessions.checked_add(self.missed_sessions)
    }

    /// Booked sessions still waiting for an attendance outcome, `None` when
    /// the counters over-count.
    pub fn pending_sessions(&self) -> Option<u64> {
        self.recorded_sessions()
            .and_then(|recorded| self.total_sessions.checked_sub(recorded))
    }

    /// True when every booked session has an attendance outcome.
    pub fn is_balanced(&self) -> bool {
        self.recorded_sessions() == Some(self.total_sessions)
    }

    /// Reject counts that can never come from a well-behaved store.
    pub fn validate(&self) -> Result<(), String> {
        match self.recorded_sessions() {
            Some(recorded) if recorded <= self.total_sessions => Ok(()),
            _ => Err(format!(
                "attended ({}) + missed ({}) exceeds total sessions ({})",
                self.attended_sessions, self.missed_sessions, self.total_sessions
            )),
        }
    }
}
