//! Practice domain module
//!
//! Quick actions are the chat-embedded, side-effecting cousins of tool
//! invocations: a single free-text field instead of a structured parameter
//! map, one persistence operation instead of a remote execution call, and a
//! mandatory audit message on the originating thread after every attempt.
//!
//! ```text
//! QuickActionRequest ──▶ persistence attempt ──▶ audit message
//!                          (store port)           (always written)
//! ```
//!
//! The audit write is unconditional: the thread keeps a durable trace of
//! the attempt whether or not the persistence call succeeded.

pub mod entities;

pub use entities::{PracticeRecord, QuickActionRequest, QuickActionType};
