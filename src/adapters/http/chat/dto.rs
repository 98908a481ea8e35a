//! Request/response DTOs for the chat endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::chat::ChatTurn;
use crate::domain::triage::{CaseSuggestion, LegalDomain};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request body for sending a chat message.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRequest {
    /// The raw message text.
    pub message: String,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Response for a processed chat message.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageResponse {
    /// Rendered advisory, greeting, or help text.
    pub response: String,
    /// Matched legal domains, canonical order.
    pub detected_domains: Vec<LegalDomain>,
    /// One landmark case per matched domain.
    pub suggested_cases: Vec<CaseSuggestionDto>,
}

/// A landmark case suggestion.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseSuggestionDto {
    pub case_name: String,
    pub case_url: String,
    pub key_takeaway: String,
    pub domain: String,
    pub practical_advice: String,
}

impl From<CaseSuggestion> for CaseSuggestionDto {
    fn from(s: CaseSuggestion) -> Self {
        Self {
            case_name: s.case_name.to_string(),
            case_url: s.case_url.to_string(),
            key_takeaway: s.key_takeaway.to_string(),
            domain: s.domain.to_string(),
            practical_advice: s.practical_advice.to_string(),
        }
    }
}

/// One persisted chat turn.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatTurnDto {
    pub id: String,
    pub message: String,
    pub response: String,
    pub detected_keywords: String,
    pub created_at: String,
}

impl From<ChatTurn> for ChatTurnDto {
    fn from(turn: ChatTurn) -> Self {
        Self {
            id: turn.id.as_uuid().to_string(),
            message: turn.message,
            response: turn.response,
            detected_keywords: turn.detected_keywords,
            created_at: turn.created_at.as_datetime().to_rfc3339(),
        }
    }
}

/// Response for the chat history endpoint, newest turn first.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatHistoryResponse {
    pub turns: Vec<ChatTurnDto>,
}

// ════════════════════════════════════════════════════════════════════════════
// Error DTO
// ════════════════════════════════════════════════════════════════════════════

/// Standard error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(message, "NOT_FOUND")
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(message, "INTERNAL_ERROR")
    }
}
