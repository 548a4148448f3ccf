//! Practice store port — narrow interface to the relational backend
//!
//! The hosted data-access layer is an external collaborator; quick actions
//! reach it only through these operations.

use async_trait::async_trait;
use juris_domain::practice::entities::PracticeRecord;
use thiserror::Error;

/// Error from the practice data-access collaborator
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// The backend rejected the call or was unreachable
    #[error("Practice store request failed: {0}")]
    Backend(String),

    /// The backend answered with a payload that could not be interpreted
    #[error("Practice store returned an invalid response: {0}")]
    InvalidResponse(String),
}

/// Port for the side-effecting quick action persistence operations.
///
/// Each quick action type maps to exactly one of these calls.
#[async_trait]
pub trait PracticeStorePort: Send + Sync {
    /// Create a task from free-text content
    async fn create_task(
        &self,
        content: &str,
        thread_id: &str,
    ) -> Result<PracticeRecord, StoreError>;

    /// Record a document request addressed to the counterparty
    async fn create_document_request(
        &self,
        content: &str,
        thread_id: &str,
    ) -> Result<PracticeRecord, StoreError>;

    /// Mark a workflow step as complete
    async fn complete_step(
        &self,
        content: &str,
        thread_id: &str,
    ) -> Result<PracticeRecord, StoreError>;
}
