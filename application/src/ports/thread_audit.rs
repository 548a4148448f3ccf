//! Thread audit port
//!
//! Separate from `tracing` diagnostics: tracing serves operators, while
//! this port writes the durable, user-visible trace of a quick action into
//! the conversation thread it came from.

use async_trait::async_trait;

use super::practice_store::StoreError;

/// Port for appending audit entries to conversation threads
#[async_trait]
pub trait ThreadAuditPort: Send + Sync {
    /// Append a system-authored message to a thread
    async fn append_system_message(
        &self,
        thread_id: &str,
        content: &str,
    ) -> Result<(), StoreError>;
}
