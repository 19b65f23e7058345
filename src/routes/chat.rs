// ABOUTME: Assistant chat route handlers
// ABOUTME: Produces rule-based replies, stores each turn atomically, and manages per-user history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Chat routes for the fitness assistant
//!
//! The assistant reads the stored history plus the user's latest saved
//! metrics and profile name. Replies are deterministic for the same inputs.
//! A turn is only stored once its reply exists.

use super::{parse_user_id, LimitQuery};
use crate::{
    constants::limits, database::clamp_limit, errors::AppError, resources::ServerResources,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use pulse_core::models::{ChatMessage, MessageRecord};
use pulse_intelligence::{AssistantContext, Intent};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Request to send a message to the assistant
#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    /// Message content
    pub message: String,
}

/// Assistant turn: the stored user message and the stored reply
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatTurnResponse {
    /// Stored user message
    pub message: MessageRecord,
    /// Stored assistant reply
    pub reply: MessageRecord,
    /// Intent detected in the user message
    pub intent: String,
}

/// Chat history response
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatHistoryResponse {
    /// Messages, oldest first
    pub messages: Vec<MessageRecord>,
    /// Number of messages returned
    pub total: usize,
}

/// Chat routes implementation
pub struct ChatRoutes;

impl ChatRoutes {
    /// Create all chat routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/users/:user_id/chat",
                get(Self::get_history)
                    .post(Self::send_message)
                    .delete(Self::clear_history),
            )
            .with_state(resources)
    }

    async fn send_message(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<String>,
        Json(request): Json<SendMessageRequest>,
    ) -> Result<Response, AppError> {
        let user_id = parse_user_id(&user_id)?;
        let content = validate_message(&request.message)?;

        let chat = resources.database.chat();
        let mut history: Vec<ChatMessage> = chat
            .history(user_id, limits::CHAT_HISTORY_LIMIT - 1)
            .await?
            .iter()
            .map(ChatMessage::from)
            .collect();
        history.push(ChatMessage::user(content));
        let context = Self::build_context(&resources, user_id).await?;

        let reply_text = resources.assistant.respond(&history, &context);
        let (message, reply) = chat.append_turn(user_id, content, &reply_text).await?;

        let intent = Intent::detect(content);
        info!(
            user.id = %user_id,
            assistant.intent = intent.as_str(),
            assistant.has_metrics = context.metrics.is_some(),
            "Assistant replied"
        );

        Ok((
            StatusCode::OK,
            Json(ChatTurnResponse {
                message,
                reply,
                intent: intent.as_str().to_owned(),
            }),
        )
            .into_response())
    }

    async fn get_history(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<String>,
        Query(query): Query<LimitQuery>,
    ) -> Result<Response, AppError> {
        let user_id = parse_user_id(&user_id)?;
        let limit = clamp_limit(
            query.limit,
            limits::CHAT_HISTORY_LIMIT,
            limits::MAX_CHAT_HISTORY_LIMIT,
        );
        let messages = resources.database.chat().history(user_id, limit).await?;

        let total = messages.len();
        Ok((StatusCode::OK, Json(ChatHistoryResponse { messages, total })).into_response())
    }

    async fn clear_history(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<String>,
    ) -> Result<Response, AppError> {
        let user_id = parse_user_id(&user_id)?;
        let removed = resources.database.chat().clear_history(user_id).await?;

        info!(user.id = %user_id, chat.removed = removed, "Chat history cleared");
        Ok(StatusCode::NO_CONTENT.into_response())
    }

    /// Latest saved metrics and profile name for the assistant
    async fn build_context(
        resources: &ServerResources,
        user_id: Uuid,
    ) -> Result<AssistantContext, AppError> {
        let metrics = resources
            .database
            .plans()
            .latest_plan(user_id)
            .await?
            .map(|plan| plan.metrics);
        let display_name = resources
            .database
            .profiles()
            .get_profile(user_id)
            .await?
            .and_then(|profile| profile.display_name);

        Ok(AssistantContext {
            metrics,
            display_name,
        })
    }
}

fn validate_message(raw: &str) -> Result<&str, AppError> {
    let content = raw.trim();
    if content.is_empty() {
        return Err(AppError::missing_field("message"));
    }
    if content.chars().count() > limits::MAX_CHAT_MESSAGE_CHARS {
        return Err(AppError::invalid_input(format!(
            "Message must be at most {} characters",
            limits::MAX_CHAT_MESSAGE_CHARS
        ))
        .with_details(serde_json::json!({ "field": "message" })));
    }
    Ok(content)
}
