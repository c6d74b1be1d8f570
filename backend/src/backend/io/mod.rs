//! # IO Module
//!
//! Provides the interface layer between the presentation layer and the
//! domain logic.
//!
//! This module serves as the adapter layer that translates HTTP requests
//! into domain operations and formats domain responses for the frontend. It
//! owns the communication protocol (REST), serialization, and the boundary
//! between presentation and business logic. The domain layer never sees an
//! HTTP type.

pub mod rest;

pub use rest::*;
