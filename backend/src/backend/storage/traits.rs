//! # Storage Traits
//!
//! This module defines the storage abstraction traits that allow different
//! storage backends to be used interchangeably in the domain layer.

use anyhow::Result;
use crate::backend::domain::models::friend::Friend as DomainFriend;

/// Trait defining the interface for friend record storage operations
///
/// This trait abstracts away the specific storage implementation details,
/// allowing the domain layer to work with different storage backends
/// (flat files, SQL databases, remote document stores, etc.) without
/// modification.
pub trait FriendStorage: Send + Sync {
    /// Store a new friend record
    fn store_friend(&self, friend: &DomainFriend) -> Result<()>;

    /// Retrieve a specific friend by ID
    fn get_friend(&self, friend_id: &str) -> Result<Option<DomainFriend>>;

    /// List all friends in storage order
    fn list_friends(&self) -> Result<Vec<DomainFriend>>;

    /// Update an existing friend
    fn update_friend(&self, friend: &DomainFriend) -> Result<()>;

    /// Delete a friend by ID
    /// Returns true if the friend was found and deleted, false otherwise
    fn delete_friend(&self, friend_id: &str) -> Result<bool>;
}
