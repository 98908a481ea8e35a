//! Axum handlers for the chat endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::{
    GetChatHistoryError, GetChatHistoryHandler, GetChatHistoryQuery, ProcessMessageCommand,
    ProcessMessageError, ProcessMessageHandler,
};
use crate::ports::{ChatTurnRepository, ProfileReader};

use super::dto::{
    ChatHistoryResponse, ChatTurnDto, ErrorResponse, SendMessageRequest, SendMessageResponse,
};

/// Shared state for chat routes.
#[derive(Clone)]
pub struct ChatHandlers {
    pub process_message: Arc<ProcessMessageHandler<dyn ProfileReader, dyn ChatTurnRepository>>,
    pub get_history: Arc<GetChatHistoryHandler<dyn ProfileReader, dyn ChatTurnRepository>>,
}

/// POST /api/chat/message
///
/// Runs one triage turn for the authenticated caller and returns the
/// rendered advisory.
pub async fn send_message(
    State(handlers): State<ChatHandlers>,
    RequireAuth(caller): RequireAuth,
    Json(request): Json<SendMessageRequest>,
) -> Response {
    let cmd = ProcessMessageCommand::new(caller.user_id, request.message);

    match handlers.process_message.handle(cmd).await {
        Ok(result) => {
            let body = SendMessageResponse {
                response: result.response,
                detected_domains: result.detected_domains,
                suggested_cases: result
                    .suggested_cases
                    .into_iter()
                    .map(Into::into)
                    .collect(),
            };
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(ProcessMessageError::CallerNotFound(user_id)) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found(format!(
                "No profile found for user {user_id}"
            ))),
        )
            .into_response(),
        Err(ProcessMessageError::StorageError(e)) => {
            tracing::error!(error = %e, "failed to process chat message");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal("Failed to process message")),
            )
                .into_response()
        }
    }
}

/// GET /api/chat/history
///
/// Returns the authenticated caller's chat turns, newest first.
pub async fn get_history(
    State(handlers): State<ChatHandlers>,
    RequireAuth(caller): RequireAuth,
) -> Response {
    let query = GetChatHistoryQuery::new(caller.user_id);

    match handlers.get_history.handle(query).await {
        Ok(turns) => {
            let body = ChatHistoryResponse {
                turns: turns.into_iter().map(ChatTurnDto::from).collect(),
            };
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(GetChatHistoryError::CallerNotFound(user_id)) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found(format!(
                "No profile found for user {user_id}"
            ))),
        )
            .into_response(),
        Err(GetChatHistoryError::StorageError(e)) => {
            tracing::error!(error = %e, "failed to load chat history");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal("Failed to load history")),
            )
                .into_response()
        }
    }
}
