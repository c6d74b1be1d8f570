//! DTO mappers between domain models and the `shared` crate.

pub mod friend_mapper;

pub use friend_mapper::FriendMapper;
