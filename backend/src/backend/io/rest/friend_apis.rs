//! # REST API for Friend Management
//!
//! Endpoints for creating, retrieving, updating, and deleting friends, and
//! for the upcoming-birthdays dashboard list.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use chrono::Local;
use log::{error, info};
use serde::Deserialize;

use crate::backend::domain::commands::friends::{
    CreateFriendCommand, DeleteFriendCommand, UpdateFriendCommand,
};
use crate::backend::domain::commands::upcoming::UpcomingBirthdaysQuery;
use crate::backend::io::rest::mappers::FriendMapper;
use crate::backend::AppState;
use shared::{
    CreateFriendRequest, DeleteFriendResponse, FriendResponse, UpdateFriendRequest, UrgencyFilter,
};

#[derive(Debug, Deserialize)]
pub struct ListFriendsParams {
    /// Category filter: all | urgent | soon | upcoming
    pub filter: Option<String>,
}

/// Create a new friend
pub async fn create_friend(
    State(state): State<AppState>,
    Json(request): Json<CreateFriendRequest>,
) -> impl IntoResponse {
    info!("POST /api/friends - request: {:?}", request);

    let command = CreateFriendCommand {
        name: request.name,
        birthday: request.birthday,
        gender: FriendMapper::gender_to_domain(request.gender),
        interest: request.interest,
    };

    match state.friend_service.create_friend(command) {
        Ok(result) => {
            let response = FriendResponse {
                friend: FriendMapper::to_dto(result.friend),
                success_message: "Friend added successfully".to_string(),
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed to create friend: {}", e);
            (StatusCode::BAD_REQUEST, e.to_string()).into_response()
        }
    }
}

/// List friends ordered by upcoming birthday, with countdown badges.
/// "Today" is taken from the server clock on every request, so the
/// countdowns are always current.
pub async fn list_friends(
    State(state): State<AppState>,
    Query(params): Query<ListFriendsParams>,
) -> impl IntoResponse {
    info!("GET /api/friends - filter: {:?}", params.filter);

    let filter = match params.filter.as_deref() {
        None => UrgencyFilter::All,
        Some(raw) => match raw.parse::<UrgencyFilter>() {
            Ok(filter) => filter,
            Err(e) => return (StatusCode::BAD_REQUEST, e).into_response(),
        },
    };

    let query = UpcomingBirthdaysQuery {
        today: Local::now().date_naive(),
        filter,
    };

    match state.upcoming_service.list_upcoming(query) {
        Ok(result) => {
            let response = FriendMapper::to_upcoming_list_dto(result.entries, result.filter);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed to list friends: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error listing friends").into_response()
        }
    }
}

/// Get a friend by ID
pub async fn get_friend(
    State(state): State<AppState>,
    Path(friend_id): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/friends/{}", friend_id);

    match state.friend_service.get_friend(&friend_id) {
        Ok(Some(friend)) => (StatusCode::OK, Json(FriendMapper::to_dto(friend))).into_response(),
        Ok(None) => (StatusCode::NOT_FOUND, "Friend not found").into_response(),
        Err(e) => {
            error!("Failed to get friend: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error retrieving friend").into_response()
        }
    }
}

/// Update a friend
pub async fn update_friend(
    State(state): State<AppState>,
    Path(friend_id): Path<String>,
    Json(request): Json<UpdateFriendRequest>,
) -> impl IntoResponse {
    info!("PUT /api/friends/{} - request: {:?}", friend_id, request);

    let command = UpdateFriendCommand {
        friend_id,
        name: request.name,
        birthday: request.birthday,
        gender: request.gender.map(FriendMapper::gender_to_domain),
        interest: request.interest,
    };

    match state.friend_service.update_friend(command) {
        Ok(result) => {
            let response = FriendResponse {
                friend: FriendMapper::to_dto(result.friend),
                success_message: "Friend updated successfully".to_string(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed to update friend: {}", e);
            let status = if e.to_string().contains("not found") {
                StatusCode::NOT_FOUND
            } else {
                StatusCode::BAD_REQUEST
            };
            (status, e.to_string()).into_response()
        }
    }
}

/// Delete a friend. Irreversible; there is no soft-delete or undo.
pub async fn delete_friend(
    State(state): State<AppState>,
    Path(friend_id): Path<String>,
) -> impl IntoResponse {
    info!("DELETE /api/friends/{}", friend_id);

    match state
        .friend_service
        .delete_friend(DeleteFriendCommand { friend_id })
    {
        Ok(result) => {
            let response = DeleteFriendResponse {
                success_message: result.success_message,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed to delete friend: {}", e);
            let status = if e.to_string().contains("not found") {
                StatusCode::NOT_FOUND
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            };
            (status, e.to_string()).into_response()
        }
    }
}
