//! Domain models for the birthday reminder backend.

pub mod friend;
