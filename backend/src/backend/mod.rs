//! # Backend Module
//!
//! Contains all non-UI logic for the birthday reminder application.
//!
//! This module serves as the orchestration layer that brings together:
//! - **Domain**: Business logic for friends, countdowns, and gift lookups
//! - **Storage**: Data persistence (CSV files in the data directory)
//! - **IO**: REST interface consumed by the web frontend
//!
//! The backend is UI-agnostic: it could back a different frontend or a CLI
//! without modification.
//!
//! ## Architecture
//!
//! The backend follows a layered architecture:
//! ```text
//! UI Layer (web frontend)
//!     ↓
//! IO Layer (REST API, handlers)
//!     ↓
//! Domain Layer (Business logic, services)
//!     ↓
//! Storage Layer (CSV persistence)
//! ```

pub mod domain;
pub mod io;
pub mod storage;

use anyhow::Result;
use axum::{
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use log::info;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::backend::domain::{
    FriendService, GiftApiConfig, GiftService, PromptJoyClient, UpcomingService,
};
use crate::backend::storage::csv::CsvConnection;

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub friend_service: FriendService,
    pub upcoming_service: UpcomingService,
    pub gift_service: GiftService,
}

/// Initialize the backend with all required services
pub async fn initialize_backend() -> Result<AppState> {
    info!("Setting up storage");
    let csv_conn = Arc::new(CsvConnection::new_default()?);

    info!("Setting up domain services");
    let friend_service = FriendService::new(csv_conn.clone());
    let upcoming_service = UpcomingService::new(csv_conn.clone());
    let recommender = Arc::new(PromptJoyClient::new(GiftApiConfig::from_env()));
    let gift_service = GiftService::new(csv_conn, recommender);

    Ok(AppState {
        friend_service,
        upcoming_service,
        gift_service,
    })
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router {
    // CORS setup to allow the frontend dev server to make requests
    let cors = CorsLayer::new()
        .allow_origin("http://localhost:5173".parse::<HeaderValue>().unwrap())
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/friends", get(io::list_friends).post(io::create_friend))
        .route(
            "/friends/:friend_id",
            get(io::get_friend)
                .put(io::update_friend)
                .delete(io::delete_friend),
        )
        .route("/gifts/recommend", post(io::recommend_gift))
        .route(
            "/interests/suggestions",
            get(io::list_interest_suggestions),
        );

    Router::new()
        .nest("/api", api_routes)
        .layer(cors)
        .with_state(app_state)
}
