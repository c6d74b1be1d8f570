//! # Storage Module
//!
//! Handles all data persistence operations for the birthday reminder
//! application.
//!
//! This module abstracts away the specific storage implementation details and
//! provides a consistent interface for persisting and retrieving friend
//! records. The implementation can be swapped out (flat files, SQLite, a
//! remote document store) without affecting the domain logic or IO layers.

pub mod csv;
pub mod traits;

pub use traits::FriendStorage;
