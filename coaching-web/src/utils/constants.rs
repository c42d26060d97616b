//! Application constants

/// Simulated round trip of a contract query.
pub const CONTRACT_LATENCY_MS: u32 = 800;

/// How long a notice stays on screen.
pub const NOTICE_DISMISS_MS: u32 = 4000;

/// Query parameter that pre-fills the session lookup.
pub const SESSION_QUERY_PARAM: &str = "session";

/// Element shown by index.html until the app mounts.
pub const LOADING_ELEMENT_ID: &str = "leptos-loading";
