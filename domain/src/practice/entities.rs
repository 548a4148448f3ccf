//! Practice domain entities — quick actions and their persisted records

use serde::{Deserialize, Serialize};

/// Kind of chat-embedded quick action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuickActionType {
    /// Create a task from the message content
    CreateTask,
    /// Record a document request addressed to the counterparty
    RequestDocument,
    /// Mark a workflow step as complete
    CompleteStep,
}

impl QuickActionType {
    pub fn as_str(&self) -> &str {
        match self {
            QuickActionType::CreateTask => "create_task",
            QuickActionType::RequestDocument => "request_document",
            QuickActionType::CompleteStep => "complete_step",
        }
    }

    /// Human label used in audit messages
    pub fn label(&self) -> &str {
        match self {
            QuickActionType::CreateTask => "Create task",
            QuickActionType::RequestDocument => "Request document",
            QuickActionType::CompleteStep => "Complete step",
        }
    }

    /// Audit line appended to the originating thread after every attempt.
    ///
    /// The wording reports the action as executed regardless of how the
    /// persistence call went: the thread records the attempt, not the
    /// outcome.
    pub fn audit_message(&self, content: &str) -> String {
        format!("Quick action executed: {} ({})", self.label(), content)
    }
}

impl std::fmt::Display for QuickActionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for QuickActionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "create_task" => Ok(QuickActionType::CreateTask),
            "request_document" => Ok(QuickActionType::RequestDocument),
            "complete_step" => Ok(QuickActionType::CompleteStep),
            _ => Err(format!("Unknown quick action: {}", s)),
        }
    }
}

/// A chat-embedded side-effecting action request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuickActionRequest {
    pub action: QuickActionType,
    /// Free-text content. Quick actions carry a single text field, never a
    /// structured parameter map, so no schema validation applies.
    pub content: String,
    /// Conversation thread the action originated from; the audit entry is
    /// appended there.
    pub thread_id: String,
}

impl QuickActionRequest {
    pub fn new(
        action: QuickActionType,
        content: impl Into<String>,
        thread_id: impl Into<String>,
    ) -> Self {
        Self {
            action,
            content: content.into(),
            thread_id: thread_id.into(),
        }
    }
}

/// A row persisted by a quick action
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PracticeRecord {
    /// Backend-assigned row id
    pub id: String,
    pub kind: QuickActionType,
    pub content: String,
    pub thread_id: String,
    /// RFC 3339 creation timestamp
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audit_message_references_action_and_content() {
        let message = QuickActionType::CreateTask.audit_message("Protocolar recurso ate sexta");

        assert!(message.contains("Create task"));
        assert!(message.contains("Protocolar recurso ate sexta"));
        assert!(message.starts_with("Quick action executed"));
    }

    #[test]
    fn test_quick_action_type_round_trips_from_str() {
        for action in [
            QuickActionType::CreateTask,
            QuickActionType::RequestDocument,
            QuickActionType::CompleteStep,
        ] {
            assert_eq!(action.as_str().parse::<QuickActionType>().unwrap(), action);
        }
        assert!("rename_case".parse::<QuickActionType>().is_err());
    }

    #[test]
    fn test_quick_action_type_serializes_snake_case() {
        let value = serde_json::to_value(QuickActionType::RequestDocument).unwrap();
        assert_eq!(value, serde_json::json!("request_document"));
    }
}
