//! Run quick action use case
//!
//! The reduced cousin of the tool dispatcher used for chat-embedded side
//! effects: no parameter schema (a quick action carries one free-text
//! field), one persistence operation per action type, and an audit message
//! appended to the originating thread after every attempt.
//!
//! The audit write is unconditional. "Did the action happen" and "is there
//! a durable trace of the attempt" are deliberately decoupled: a failed
//! persistence call still leaves its trace on the thread.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, warn};

use juris_domain::practice::entities::{PracticeRecord, QuickActionRequest, QuickActionType};

use crate::ports::practice_store::{PracticeStorePort, StoreError};
use crate::ports::thread_audit::ThreadAuditPort;

/// Why a quick action failed.
///
/// Audit-write failures surface through the same variant as primary
/// persistence failures; callers cannot tell them apart.
#[derive(Debug, Error)]
pub enum QuickActionError {
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Use case that runs one chat quick action and writes its audit trace
pub struct RunQuickActionUseCase {
    store: Arc<dyn PracticeStorePort>,
    audit: Arc<dyn ThreadAuditPort>,
}

impl RunQuickActionUseCase {
    pub fn new(store: Arc<dyn PracticeStorePort>, audit: Arc<dyn ThreadAuditPort>) -> Self {
        Self { store, audit }
    }

    /// Run one quick action: a single persistence call, then the audit
    /// message.
    ///
    /// The persistence attempt always happens before the audit attempt,
    /// and the audit attempt always happens, whatever the persistence
    /// outcome was. A primary failure is reported to the caller; nothing
    /// ties the two writes together transactionally.
    pub async fn execute(
        &self,
        request: QuickActionRequest,
    ) -> Result<PracticeRecord, QuickActionError> {
        debug!(action = %request.action, thread = %request.thread_id, "Running quick action");

        let primary = match request.action {
            QuickActionType::CreateTask => {
                self.store
                    .create_task(&request.content, &request.thread_id)
                    .await
            }
            QuickActionType::RequestDocument => {
                self.store
                    .create_document_request(&request.content, &request.thread_id)
                    .await
            }
            QuickActionType::CompleteStep => {
                self.store
                    .complete_step(&request.content, &request.thread_id)
                    .await
            }
        };

        if let Err(e) = &primary {
            warn!(action = %request.action, error = %e, "Quick action persistence failed");
        }

        let audit = self
            .audit
            .append_system_message(
                &request.thread_id,
                &request.action.audit_message(&request.content),
            )
            .await;

        let record = primary?;
        audit?;
        Ok(record)
    }
}
