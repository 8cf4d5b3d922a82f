use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use tracing::{debug, info};

use crate::connector::api::{ApiError, Container};
use crate::domain::{ChatRequest, ChatResponse, SummarizeRequest, SummarizeResponse};

pub const CHAT_FAILURE: &str = "Failed to process the request, please try again later";
pub const SUMMARIZE_FAILURE: &str = "Failed to summarize the text, please try again later";

/// `POST /api/chat`
pub async fn chat(
    State(container): State<Container>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(request) = payload.map_err(ApiError::malformed)?;
    let message = request
        .into_message()
        .map_err(|e| ApiError::from_domain(e, "Chat", CHAT_FAILURE))?;

    info!("Processing chat message ({} chars)", message.chars().count());
    debug!("Chat message: {}", message);

    let response = container
        .assistant()
        .chat(&message)
        .await
        .map_err(|e| ApiError::from_domain(e, "Chat", CHAT_FAILURE))?;

    debug!("Chat response: {}", response);
    Ok(Json(ChatResponse::new(message, response)))
}

/// `POST /api/chat/summarize`
pub async fn summarize(
    State(container): State<Container>,
    payload: Result<Json<SummarizeRequest>, JsonRejection>,
) -> Result<Json<SummarizeResponse>, ApiError> {
    let Json(request) = payload.map_err(ApiError::malformed)?;
    let text = request
        .into_text()
        .map_err(|e| ApiError::from_domain(e, "Summarize", SUMMARIZE_FAILURE))?;

    info!("Summarizing text ({} chars)", text.chars().count());

    let summary = container
        .assistant()
        .summarize(&text)
        .await
        .map_err(|e| ApiError::from_domain(e, "Summarize", SUMMARIZE_FAILURE))?;

    info!("Summary complete ({} chars)", summary.chars().count());
    Ok(Json(SummarizeResponse::new(text, summary)))
}
