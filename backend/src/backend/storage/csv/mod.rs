//! CSV-backed storage implementation.
//!
//! Friend records persist to a single `friends.csv` in the data directory.
//! The format is deliberately simple: the dataset is a handful of rows per
//! user, so every operation reads the whole file and rewrites it atomically.

pub mod connection;
pub mod friend_repository;

pub use connection::CsvConnection;
pub use friend_repository::FriendRepository;
