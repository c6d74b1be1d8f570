//! Gift recommendation lookups.
//!
//! The recommendation algorithm itself lives behind a remote API; this
//! service only resolves the friend's interest, fills in the budget
//! default, and delegates to a `GiftRecommender` implementation.

use anyhow::Result;
use async_trait::async_trait;
use log::{info, warn};
use reqwest::StatusCode;
use shared::GiftSuggestion;
use std::sync::Arc;
use thiserror::Error;

use crate::backend::domain::commands::gifts::{GiftSuggestionCommand, GiftSuggestionResult};
use crate::backend::storage::csv::{CsvConnection, FriendRepository};
use crate::backend::storage::traits::FriendStorage;

/// Budget sent to the recommendation API when the caller does not name one
pub const DEFAULT_BUDGET: &str = "$20";

/// Error from the remote recommendation collaborator
#[derive(Debug, Error)]
pub enum GiftApiError {
    #[error("gift API request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("gift API returned status {0}")]
    Status(StatusCode),
}

/// Interface consumed for gift lookups. The production implementation
/// talks to the remote recommendation API; tests substitute a stub.
#[async_trait]
pub trait GiftRecommender: Send + Sync {
    async fn recommend(&self, interest: &str, budget: &str)
        -> Result<GiftSuggestion, GiftApiError>;
}

/// Configuration for the remote recommendation API
#[derive(Debug, Clone)]
pub struct GiftApiConfig {
    pub api_url: String,
    /// Bearer token; requests go out unauthenticated when absent
    pub api_key: Option<String>,
}

impl GiftApiConfig {
    /// Load from `GIFT_API_URL` / `GIFT_API_KEY` environment variables
    pub fn from_env() -> Self {
        let api_url = std::env::var("GIFT_API_URL")
            .unwrap_or_else(|_| "https://api.promptjoy.com/api/jQGCwq".to_string());
        let api_key = std::env::var("GIFT_API_KEY").ok();

        if api_key.is_none() {
            warn!("GIFT_API_KEY not set; gift API requests will be unauthenticated");
        }

        Self { api_url, api_key }
    }
}

/// HTTP client for the remote recommendation API.
/// Posts `{interest, budget}` and decodes `{gift, "price range"}`.
pub struct PromptJoyClient {
    http: reqwest::Client,
    config: GiftApiConfig,
}

impl PromptJoyClient {
    pub fn new(config: GiftApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait]
impl GiftRecommender for PromptJoyClient {
    async fn recommend(
        &self,
        interest: &str,
        budget: &str,
    ) -> Result<GiftSuggestion, GiftApiError> {
        let mut request = self
            .http
            .post(&self.config.api_url)
            .json(&serde_json::json!({ "interest": interest, "budget": budget }));

        if let Some(ref key) = self.config.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(GiftApiError::Status(response.status()));
        }

        Ok(response.json::<GiftSuggestion>().await?)
    }
}

/// Service that resolves a friend and fetches a gift suggestion for them
#[derive(Clone)]
pub struct GiftService {
    friend_repository: FriendRepository,
    recommender: Arc<dyn GiftRecommender>,
}

impl GiftService {
    /// Create a new GiftService
    pub fn new(csv_conn: Arc<CsvConnection>, recommender: Arc<dyn GiftRecommender>) -> Self {
        let friend_repository = FriendRepository::new(csv_conn);
        Self {
            friend_repository,
            recommender,
        }
    }

    /// Look up a gift suggestion for a friend's stored interest
    pub async fn recommend_for_friend(
        &self,
        command: GiftSuggestionCommand,
    ) -> Result<GiftSuggestionResult> {
        info!("Gift suggestion requested for friend: {}", command.friend_id);

        let friend = self
            .friend_repository
            .get_friend(&command.friend_id)?
            .ok_or_else(|| anyhow::anyhow!("Friend not found: {}", command.friend_id))?;

        let budget = command
            .budget
            .unwrap_or_else(|| DEFAULT_BUDGET.to_string());

        let suggestion = self
            .recommender
            .recommend(&friend.interest, &budget)
            .await?;

        info!(
            "Gift suggestion for {}: {} ({})",
            friend.name, suggestion.gift, suggestion.price_range
        );

        Ok(GiftSuggestionResult {
            friend_id: friend.id,
            suggestion,
        })
    }
}
