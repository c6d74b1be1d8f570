//! # REST API for Gift Suggestions
//!
//! Endpoints for requesting gift suggestions from the remote recommendation
//! API and for the curated interest suggestion list.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use log::{error, info};

use crate::backend::domain::commands::gifts::GiftSuggestionCommand;
use crate::backend::domain::friend_service::INTEREST_SUGGESTIONS;
use crate::backend::AppState;
use shared::{GiftSuggestionRequest, GiftSuggestionResponse, InterestSuggestionsResponse};

/// Request a gift suggestion for a friend's stored interest.
/// Failures of the remote collaborator surface as 502.
pub async fn recommend_gift(
    State(state): State<AppState>,
    Json(request): Json<GiftSuggestionRequest>,
) -> impl IntoResponse {
    info!("POST /api/gifts/recommend - request: {:?}", request);

    let command = GiftSuggestionCommand {
        friend_id: request.friend_id,
        budget: request.budget,
    };

    match state.gift_service.recommend_for_friend(command).await {
        Ok(result) => {
            let response = GiftSuggestionResponse {
                friend_id: result.friend_id,
                suggestion: result.suggestion,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed to get gift suggestion: {}", e);
            let status = if e.to_string().contains("not found") {
                StatusCode::NOT_FOUND
            } else {
                StatusCode::BAD_GATEWAY
            };
            (status, e.to_string()).into_response()
        }
    }
}

/// List curated interest suggestions for the add-friend form
pub async fn list_interest_suggestions() -> impl IntoResponse {
    let response = InterestSuggestionsResponse {
        suggestions: INTEREST_SUGGESTIONS
            .iter()
            .map(|s| s.to_string())
            .collect(),
    };
    (StatusCode::OK, Json(response))
}
