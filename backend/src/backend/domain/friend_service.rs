use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use log::{info, warn};
use std::sync::Arc;

use crate::backend::domain::commands::friends::{
    CreateFriendCommand, CreateFriendResult, DeleteFriendCommand, DeleteFriendResult,
    UpdateFriendCommand, UpdateFriendResult,
};
use crate::backend::domain::models::friend::Friend as DomainFriend;
use crate::backend::storage::csv::{CsvConnection, FriendRepository};
use crate::backend::storage::traits::FriendStorage;

/// Curated interest suggestions offered by the add-friend form.
pub const INTEREST_SUGGESTIONS: &[&str] = &[
    "📚 Reading",
    "🎮 Gaming",
    "🎵 Music",
    "🎨 Art",
    "🏃 Fitness",
    "🍳 Cooking",
    "📸 Photography",
    "✈️ Travel",
    "🎬 Movies",
    "💻 Tech",
    "🌿 Plants",
    "🧘 Yoga",
    "⚽ Sports",
    "👗 Fashion",
    "🎭 Theater",
];

/// Service for managing friend records
#[derive(Clone)]
pub struct FriendService {
    friend_repository: FriendRepository,
}

impl FriendService {
    /// Create a new FriendService
    pub fn new(csv_conn: Arc<CsvConnection>) -> Self {
        let friend_repository = FriendRepository::new(csv_conn);
        Self { friend_repository }
    }

    /// Create a new friend record
    pub fn create_friend(&self, command: CreateFriendCommand) -> Result<CreateFriendResult> {
        info!(
            "Creating friend: name={}, birthday={}",
            command.name, command.birthday
        );

        self.validate_name(&command.name)?;
        self.validate_interest(&command.interest)?;
        let birthday = self
            .parse_birthday(&command.birthday)
            .context("Invalid birthday in create_friend command")?;

        let now = Utc::now();
        let friend = DomainFriend {
            id: DomainFriend::generate_id(),
            name: command.name.trim().to_string(),
            birthday: Some(birthday),
            gender: command.gender,
            interest: command.interest.trim().to_string(),
            created_at: now,
            updated_at: now,
        };

        self.friend_repository.store_friend(&friend)?;

        info!("Created friend: {} with ID: {}", friend.name, friend.id);

        Ok(CreateFriendResult { friend })
    }

    /// Get a friend by ID
    pub fn get_friend(&self, friend_id: &str) -> Result<Option<DomainFriend>> {
        let friend = self.friend_repository.get_friend(friend_id)?;

        if friend.is_none() {
            warn!("Friend not found: {}", friend_id);
        }

        Ok(friend)
    }

    /// List all friends in storage order
    pub fn list_friends(&self) -> Result<Vec<DomainFriend>> {
        self.friend_repository.list_friends()
    }

    /// Update an existing friend in place
    pub fn update_friend(&self, command: UpdateFriendCommand) -> Result<UpdateFriendResult> {
        info!("Updating friend: {}", command.friend_id);

        let mut friend = self
            .friend_repository
            .get_friend(&command.friend_id)?
            .ok_or_else(|| anyhow::anyhow!("Friend not found: {}", command.friend_id))?;

        if let Some(ref name) = command.name {
            self.validate_name(name)?;
            friend.name = name.trim().to_string();
        }
        if let Some(ref birthday_str) = command.birthday {
            let birthday = self
                .parse_birthday(birthday_str)
                .context("Invalid birthday in update_friend command")?;
            friend.birthday = Some(birthday);
        }
        if let Some(gender) = command.gender {
            friend.gender = gender;
        }
        if let Some(ref interest) = command.interest {
            self.validate_interest(interest)?;
            friend.interest = interest.trim().to_string();
        }

        friend.updated_at = Utc::now();

        self.friend_repository.update_friend(&friend)?;

        info!("Updated friend: {} with ID: {}", friend.name, friend.id);

        Ok(UpdateFriendResult { friend })
    }

    /// Delete a friend. This is a hard delete; the record cannot be
    /// recovered afterwards.
    pub fn delete_friend(&self, command: DeleteFriendCommand) -> Result<DeleteFriendResult> {
        info!("Deleting friend: {}", command.friend_id);

        let friend = self
            .friend_repository
            .get_friend(&command.friend_id)?
            .ok_or_else(|| anyhow::anyhow!("Friend not found: {}", command.friend_id))?;

        let deleted = self.friend_repository.delete_friend(&command.friend_id)?;
        if !deleted {
            return Err(anyhow::anyhow!("Friend not found: {}", command.friend_id));
        }

        info!("Deleted friend: {} with ID: {}", friend.name, friend.id);

        Ok(DeleteFriendResult {
            success_message: format!("Friend '{}' deleted successfully", friend.name),
        })
    }

    /// Validate a friend name
    fn validate_name(&self, name: &str) -> Result<()> {
        if name.trim().is_empty() {
            return Err(anyhow::anyhow!("Friend name cannot be empty"));
        }

        if name.len() > 100 {
            return Err(anyhow::anyhow!("Friend name cannot exceed 100 characters"));
        }

        Ok(())
    }

    /// Validate the free-text interest field
    fn validate_interest(&self, interest: &str) -> Result<()> {
        if interest.len() > 256 {
            return Err(anyhow::anyhow!("Interest cannot exceed 256 characters"));
        }

        Ok(())
    }

    /// Parse and validate a birthday string (ISO 8601: YYYY-MM-DD).
    /// Rejects dates that do not exist on the calendar, including
    /// Feb 29 of non-leap years.
    fn parse_birthday(&self, birthday: &str) -> Result<NaiveDate> {
        if birthday.trim().is_empty() {
            return Err(anyhow::anyhow!("Birthday is required"));
        }

        NaiveDate::parse_from_str(birthday, "%Y-%m-%d")
            .map_err(|_| anyhow::anyhow!("Invalid birthday format. Use YYYY-MM-DD."))
    }
}
