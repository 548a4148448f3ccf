//! Practice backend adapters
//!
//! Quick actions persist through the hosted relational backend; this
//! module's [`RestPracticeStore`] is the REST adapter implementing both the
//! store and the thread-audit ports.

mod rest_store;

pub use rest_store::RestPracticeStore;
