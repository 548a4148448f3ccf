//! REST adapter for the hosted practice backend
//!
//! Inserts rows by POSTing JSON to `{base_url}/rest/v1/{collection}` with
//! the same bearer-credential convention the tool endpoint uses. The
//! backend answers with the persisted row.

use async_trait::async_trait;
use serde_json::{Value, json};
use tracing::debug;

use juris_application::ports::practice_store::{PracticeStorePort, StoreError};
use juris_application::ports::thread_audit::ThreadAuditPort;
use juris_domain::practice::entities::{PracticeRecord, QuickActionType};

/// reqwest-backed practice store and thread audit adapter
#[derive(Debug, Clone)]
pub struct RestPracticeStore {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl RestPracticeStore {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Insert one row and return the backend's rendering of it
    async fn insert(&self, collection: &str, row: Value) -> Result<Value, StoreError> {
        let url = format!("{}/rest/v1/{}", self.base_url, collection);
        debug!(%collection, "Practice store insert");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&row)
            .send()
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::Backend(format!(
                "HTTP {}: {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| StoreError::InvalidResponse(e.to_string()))
    }

    /// Build the domain record from the persisted row.
    ///
    /// The backend assigns id and created_at; missing fields fall back to
    /// an empty id and the local clock rather than failing the action.
    fn record_from_row(
        kind: QuickActionType,
        content: &str,
        thread_id: &str,
        row: &Value,
    ) -> PracticeRecord {
        let id = match row.get("id") {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => String::new(),
        };
        let created_at = row
            .get("created_at")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| chrono::Utc::now().to_rfc3339());

        PracticeRecord {
            id,
            kind,
            content: content.to_string(),
            thread_id: thread_id.to_string(),
            created_at,
        }
    }
}

#[async_trait]
impl PracticeStorePort for RestPracticeStore {
    async fn create_task(
        &self,
        content: &str,
        thread_id: &str,
    ) -> Result<PracticeRecord, StoreError> {
        let row = self
            .insert(
                "tasks",
                json!({"content": content, "thread_id": thread_id, "status": "open"}),
            )
            .await?;
        Ok(Self::record_from_row(
            QuickActionType::CreateTask,
            content,
            thread_id,
            &row,
        ))
    }

    async fn create_document_request(
        &self,
        content: &str,
        thread_id: &str,
    ) -> Result<PracticeRecord, StoreError> {
        let row = self
            .insert(
                "document_requests",
                json!({"description": content, "thread_id": thread_id, "status": "requested"}),
            )
            .await?;
        Ok(Self::record_from_row(
            QuickActionType::RequestDocument,
            content,
            thread_id,
            &row,
        ))
    }

    async fn complete_step(
        &self,
        content: &str,
        thread_id: &str,
    ) -> Result<PracticeRecord, StoreError> {
        let row = self
            .insert(
                "workflow_steps/complete",
                json!({"step": content, "thread_id": thread_id}),
            )
            .await?;
        Ok(Self::record_from_row(
            QuickActionType::CompleteStep,
            content,
            thread_id,
            &row,
        ))
    }
}

#[async_trait]
impl ThreadAuditPort for RestPracticeStore {
    async fn append_system_message(
        &self,
        thread_id: &str,
        content: &str,
    ) -> Result<(), StoreError> {
        self.insert(
            "thread_messages",
            json!({"thread_id": thread_id, "author": "system", "content": content}),
        )
        .await
        .map(|_| ())
    }
}
