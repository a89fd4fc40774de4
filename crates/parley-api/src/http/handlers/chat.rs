//! Chat HTTP handlers.
//!
//! One query-dispatched resource, mirroring what polling clients expect:
//! - GET    /api/chat?action=list_channels - all registered channel names
//! - GET    /api/chat?channel=<name>       - newest 20 entries, oldest-first
//!                                           (channel defaults to `general`)
//! - POST   /api/chat?channel=<name>       - post body {user, message, avatar?}
//! - POST   /api/chat                      - create channel from body {channel}
//! - DELETE /api/chat?channel=<name>       - delete channel and its log

use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use crate::http::error::ApiError;
use crate::state::AppState;

/// Query parameters accepted by every /api/chat method.
#[derive(Debug, Default, Deserialize)]
pub struct ChatQuery {
    pub action: Option<String>,
    pub channel: Option<String>,
}

/// POST body: message fields and/or a channel name to create.
///
/// All fields optional; which ones matter depends on the dispatch (see
/// `post_chat`). Absent user/message are treated as empty and rejected by the
/// service's validation.
#[derive(Debug, Default, Deserialize)]
pub struct ChatPostBody {
    pub user: Option<String>,
    pub message: Option<String>,
    pub avatar: Option<String>,
    pub channel: Option<String>,
}

/// GET /api/chat - list channels or fetch a channel's recent messages.
pub async fn get_chat(
    State(state): State<AppState>,
    Query(query): Query<ChatQuery>,
) -> Result<Response, ApiError> {
    if query.action.as_deref() == Some("list_channels") {
        let channels = state.chat_service.list_channels().await?;
        return Ok(Json(channels).into_response());
    }

    let entries = state
        .chat_service
        .fetch_messages(query.channel.as_deref())
        .await?;
    Ok(Json(entries).into_response())
}

/// POST /api/chat - post a message or create a channel.
///
/// A `?channel=` query param selects the post-message path; otherwise a
/// `channel` field in the body selects channel creation; otherwise 400.
pub async fn post_chat(
    State(state): State<AppState>,
    Query(query): Query<ChatQuery>,
    Json(body): Json<ChatPostBody>,
) -> Result<Json<serde_json::Value>, ApiError> {
    if let Some(channel) = query.channel.as_deref() {
        state
            .chat_service
            .post_message(
                channel,
                body.user.as_deref().unwrap_or(""),
                body.message.as_deref().unwrap_or(""),
                body.avatar,
            )
            .await?;
        return Ok(Json(json!({ "success": true })));
    }

    if let Some(name) = body.channel.as_deref() {
        let channel = state.chat_service.create_channel(name).await?;
        return Ok(Json(json!({ "success": true, "channel": channel })));
    }

    Err(ApiError::Validation(
        "no channel or message data found in request".to_string(),
    ))
}

/// DELETE /api/chat?channel=<name> - delete a channel and discard its log.
pub async fn delete_chat(
    State(state): State<AppState>,
    Query(query): Query<ChatQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let Some(channel) = query.channel else {
        return Err(ApiError::Validation("channel name is required".to_string()));
    };

    state.chat_service.delete_channel(&channel).await?;
    Ok(Json(json!({ "success": true, "channel": channel })))
}
