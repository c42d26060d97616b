//! Reactive application state

pub mod coaching;
