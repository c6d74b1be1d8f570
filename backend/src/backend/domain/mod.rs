//! # Domain Module
//!
//! Contains all business logic for the birthday reminder application.
//!
//! This module encapsulates the core business rules, entities, and services
//! that define how friends and their birthdays are modeled and managed. It
//! operates independently of any specific UI framework or storage mechanism.
//!
//! ## Module Organization
//!
//! - **urgency**: The countdown calculator: days-until-next-birthday,
//!   urgency classification, stable sorting, and category filtering
//! - **friend_service**: Friend record CRUD operations and validation
//! - **upcoming_service**: Dashboard list assembly (countdowns + badges)
//! - **gift_service**: Gift suggestion lookups against the remote API
//! - **commands**: Internal command/query/result types used by services
//! - **models**: Domain entities
//!
//! ## Business Rules
//!
//! - Friend names are non-empty and bounded in length
//! - Birthdays must be valid calendar dates (YYYY-MM-DD); recurrence only
//!   ever reads month and day
//! - A record with an unparseable stored birthday is never an error; its
//!   countdown is undefined and it sorts after everything else

pub mod commands;
pub mod friend_service;
pub mod gift_service;
pub mod models;
pub mod upcoming_service;
pub mod urgency;

pub use friend_service::FriendService;
pub use gift_service::{GiftApiConfig, GiftService, PromptJoyClient};
pub use upcoming_service::UpcomingService;
