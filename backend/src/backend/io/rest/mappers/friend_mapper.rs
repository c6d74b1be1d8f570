//! backend/src/backend/io/rest/mappers/friend_mapper.rs

use crate::backend::domain::commands::upcoming::UpcomingEntry;
use crate::backend::domain::models::friend::{Friend as DomainFriend, Gender as DomainGender};
use shared::{
    Friend as SharedFriend, Gender as SharedGender, UpcomingFriend, UpcomingFriendsResponse,
    UrgencyFilter,
};

/// Mapper to convert between shared Friend DTOs and domain Friend models.
pub struct FriendMapper;

impl FriendMapper {
    /// Converts a domain Friend model to a shared Friend DTO.
    pub fn to_dto(domain: DomainFriend) -> SharedFriend {
        SharedFriend {
            id: domain.id,
            name: domain.name,
            birthday: domain
                .birthday
                .map(|date| date.format("%Y-%m-%d").to_string()),
            gender: Self::gender_to_dto(domain.gender),
            interest: domain.interest,
            created_at: domain.created_at.to_rfc3339(),
            updated_at: domain.updated_at.to_rfc3339(),
        }
    }

    pub fn gender_to_dto(gender: DomainGender) -> SharedGender {
        match gender {
            DomainGender::Female => SharedGender::Female,
            DomainGender::Male => SharedGender::Male,
            DomainGender::NonBinary => SharedGender::NonBinary,
            DomainGender::Other => SharedGender::Other,
            DomainGender::PreferNotToSay => SharedGender::PreferNotToSay,
        }
    }

    pub fn gender_to_domain(gender: SharedGender) -> DomainGender {
        match gender {
            SharedGender::Female => DomainGender::Female,
            SharedGender::Male => DomainGender::Male,
            SharedGender::NonBinary => DomainGender::NonBinary,
            SharedGender::Other => DomainGender::Other,
            SharedGender::PreferNotToSay => DomainGender::PreferNotToSay,
        }
    }

    pub fn to_upcoming_dto(entry: UpcomingEntry) -> UpcomingFriend {
        UpcomingFriend {
            friend: Self::to_dto(entry.friend),
            days_until: entry.days_until,
            badge: entry.badge,
        }
    }

    pub fn to_upcoming_list_dto(
        entries: Vec<UpcomingEntry>,
        filter: UrgencyFilter,
    ) -> UpcomingFriendsResponse {
        UpcomingFriendsResponse {
            friends: entries.into_iter().map(Self::to_upcoming_dto).collect(),
            filter,
        }
    }
}
