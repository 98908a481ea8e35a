//! Route definitions for the chat endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{self, ChatHandlers};

/// Builds the chat router.
///
/// Mounted under `/api/chat` by the top-level router; every route requires
/// an authenticated caller.
pub fn chat_routes(handlers: ChatHandlers) -> Router {
    Router::new()
        .route("/message", post(handlers::send_message))
        .route("/history", get(handlers::get_history))
        .with_state(handlers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryChatTurnRepository, InMemoryProfileReader};
    use crate::application::handlers::{GetChatHistoryHandler, ProcessMessageHandler};
    use crate::domain::chat::CallerProfile;
    use crate::domain::foundation::{AuthenticatedCaller, UserId};
    use crate::ports::{ChatTurnRepository, ProfileReader};

    use axum::body::Body;
    use http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app() -> Router {
        let user_id = UserId::new("user-1").unwrap();
        let profiles: Arc<dyn ProfileReader> = Arc::new(InMemoryProfileReader::new().with_profile(
            CallerProfile::new(user_id, "Asha", "asha@example.com").unwrap(),
        ));
        let turns: Arc<dyn ChatTurnRepository> = Arc::new(InMemoryChatTurnRepository::new());
        chat_routes(ChatHandlers {
            process_message: Arc::new(ProcessMessageHandler::new(
                Arc::clone(&profiles),
                Arc::clone(&turns),
            )),
            get_history: Arc::new(GetChatHistoryHandler::new(profiles, turns)),
        })
    }

    fn caller() -> AuthenticatedCaller {
        AuthenticatedCaller::new(UserId::new("user-1").unwrap(), "asha@example.com")
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn message_without_authentication_is_rejected() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/message")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"message": "hello"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let json = body_json(response).await;
        assert_eq!(json["code"], "UNAUTHENTICATED");
    }

    #[tokio::test]
    async fn message_round_trip_returns_advisory() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/message")
                    .header("content-type", "application/json")
                    .extension(caller())
                    .body(Body::from(
                        r#"{"message": "police refused to register my fir"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["detectedDomains"], serde_json::json!(["CRIMINAL_LAW"]));
        assert_eq!(json["suggestedCases"].as_array().unwrap().len(), 1);
        assert!(json["response"].as_str().unwrap().contains("CRIMINAL LAW"));
    }

    #[tokio::test]
    async fn history_round_trip_returns_turns() {
        let app = app();

        let posted = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/message")
                    .header("content-type", "application/json")
                    .extension(caller())
                    .body(Body::from(r#"{"message": "I got an eviction notice"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(posted.status(), StatusCode::OK);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/history")
                    .extension(caller())
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        let turns = json["turns"].as_array().unwrap();
        assert_eq!(turns.len(), 1);
        assert_eq!(turns[0]["message"], "I got an eviction notice");
        assert_eq!(turns[0]["detectedKeywords"], "eviction");
    }
}
