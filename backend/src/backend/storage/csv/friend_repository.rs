use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use csv::{Reader, Writer};
use log::{info, warn};
use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter};
use std::sync::Arc;

use crate::backend::domain::models::friend::{Friend as DomainFriend, Gender};
use crate::backend::storage::traits::FriendStorage;
use super::connection::CsvConnection;

/// CSV-based friend repository. All records live in a single `friends.csv`
/// under the connection's base directory; writes go through a temp file
/// and an atomic rename, and mutations serialize on the connection's
/// write lock so concurrent handlers cannot lose each other's rows.
#[derive(Clone)]
pub struct FriendRepository {
    connection: Arc<CsvConnection>,
}

impl FriendRepository {
    /// Create a new CSV friend repository
    pub fn new(connection: Arc<CsvConnection>) -> Self {
        Self { connection }
    }

    /// Read all friends from the CSV file.
    ///
    /// Row parsing is tolerant: a bad birthday cell becomes an undefined
    /// birthday (the record still loads and sorts last on the dashboard),
    /// and a bad gender cell falls back to "Prefer not to say". A load
    /// never fails because one row drifted.
    fn read_friends(&self) -> Result<Vec<DomainFriend>> {
        self.connection.ensure_friends_file_exists()?;

        let file_path = self.connection.friends_file_path();
        let file = File::open(&file_path)?;
        let reader = BufReader::new(file);
        let mut csv_reader = Reader::from_reader(reader);

        let mut friends = Vec::new();

        for result in csv_reader.records() {
            let record = result?;

            let id = record.get(0).unwrap_or("").to_string();
            if id.is_empty() {
                warn!("Skipping friends.csv row without an id");
                continue;
            }

            let birthday_cell = record.get(2).unwrap_or("");
            let birthday = match NaiveDate::parse_from_str(birthday_cell, "%Y-%m-%d") {
                Ok(date) => Some(date),
                Err(_) => {
                    if !birthday_cell.is_empty() {
                        warn!(
                            "Friend {} has unparseable birthday '{}'; treating as undefined",
                            id, birthday_cell
                        );
                    }
                    None
                }
            };

            let gender_cell = record.get(3).unwrap_or("");
            let gender = Gender::parse(gender_cell).unwrap_or_else(|| {
                warn!(
                    "Friend {} has unrecognized gender '{}'; defaulting",
                    id, gender_cell
                );
                Gender::PreferNotToSay
            });

            let friend = DomainFriend {
                id,
                name: record.get(1).unwrap_or("").to_string(),
                birthday,
                gender,
                interest: record.get(4).unwrap_or("").to_string(),
                created_at: parse_timestamp(record.get(5).unwrap_or("")),
                updated_at: parse_timestamp(record.get(6).unwrap_or("")),
            };

            friends.push(friend);
        }

        Ok(friends)
    }

    /// Write all friends to the CSV file atomically
    fn write_friends(&self, friends: &[DomainFriend]) -> Result<()> {
        let file_path = self.connection.friends_file_path();
        let temp_path = file_path.with_extension("tmp");

        {
            let file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&temp_path)?;

            let writer = BufWriter::new(file);
            let mut csv_writer = Writer::from_writer(writer);

            csv_writer.write_record([
                "id",
                "name",
                "birthday",
                "gender",
                "interest",
                "created_at",
                "updated_at",
            ])?;

            for friend in friends {
                let birthday = friend
                    .birthday
                    .map(|date| date.format("%Y-%m-%d").to_string())
                    .unwrap_or_default();

                csv_writer.write_record([
                    friend.id.as_str(),
                    friend.name.as_str(),
                    birthday.as_str(),
                    friend.gender.as_str(),
                    friend.interest.as_str(),
                    friend.created_at.to_rfc3339().as_str(),
                    friend.updated_at.to_rfc3339().as_str(),
                ])?;
            }

            csv_writer.flush()?;
        }

        std::fs::rename(&temp_path, &file_path)?;

        Ok(())
    }
}

/// Parse a stored RFC 3339 timestamp, falling back to the Unix epoch for
/// drifted cells so the row still loads
fn parse_timestamp(value: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| {
            if !value.is_empty() {
                warn!("Unparseable timestamp '{}' in friends.csv; using epoch", value);
            }
            DateTime::<Utc>::UNIX_EPOCH
        })
}

impl FriendStorage for FriendRepository {
    /// Store a new friend record
    fn store_friend(&self, friend: &DomainFriend) -> Result<()> {
        let _guard = self.connection.mutation_guard();
        let mut friends = self.read_friends()?;

        if friends.iter().any(|f| f.id == friend.id) {
            return Err(anyhow::anyhow!("Friend already exists: {}", friend.id));
        }

        friends.push(friend.clone());
        self.write_friends(&friends)?;

        info!("Stored friend {} ({})", friend.name, friend.id);
        Ok(())
    }

    /// Retrieve a specific friend by ID
    fn get_friend(&self, friend_id: &str) -> Result<Option<DomainFriend>> {
        let friends = self.read_friends()?;
        Ok(friends.into_iter().find(|f| f.id == friend_id))
    }

    /// List all friends in storage order
    fn list_friends(&self) -> Result<Vec<DomainFriend>> {
        self.read_friends()
    }

    /// Update an existing friend
    fn update_friend(&self, friend: &DomainFriend) -> Result<()> {
        let _guard = self.connection.mutation_guard();
        let mut friends = self.read_friends()?;

        let slot = friends
            .iter_mut()
            .find(|f| f.id == friend.id)
            .ok_or_else(|| anyhow::anyhow!("Friend not found: {}", friend.id))?;
        *slot = friend.clone();

        self.write_friends(&friends)?;

        info!("Updated friend {} ({})", friend.name, friend.id);
        Ok(())
    }

    /// Delete a friend by ID
    fn delete_friend(&self, friend_id: &str) -> Result<bool> {
        let _guard = self.connection.mutation_guard();
        let mut friends = self.read_friends()?;
        let original_len = friends.len();

        friends.retain(|f| f.id != friend_id);
        if friends.len() == original_len {
            return Ok(false);
        }

        self.write_friends(&friends)?;

        info!("Deleted friend {}", friend_id);
        Ok(true)
    }
}
