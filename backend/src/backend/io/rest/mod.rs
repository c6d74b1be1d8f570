//! # REST API Interface Layer
//!
//! Provides HTTP REST endpoints for the birthday reminder application.
//! This layer handles:
//! - HTTP request/response serialization and deserialization
//! - Input validation before domain layer processing
//! - Error translation from domain to HTTP status codes
//! - CORS configuration for frontend integration
//! - Request logging

pub mod friend_apis;
pub mod gift_apis;
pub mod mappers;

pub use friend_apis::*;
pub use gift_apis::*;
