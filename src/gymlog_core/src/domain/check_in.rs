use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::user::UserId;

/// Unique check-in identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CheckInId(Uuid);

impl CheckInId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for CheckInId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for CheckInId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for CheckInId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Identifier of the gym location a check-in was made at. The gym record
/// itself lives outside this service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct GymId(Uuid);

impl GymId {
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for GymId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for GymId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A single gym visit by a user.
#[derive(Debug, Clone)]
pub struct CheckIn {
    id: CheckInId,
    user_id: UserId,
    gym_id: GymId,
    created_at: DateTime<Utc>,
}

impl CheckIn {
    pub fn new(id: CheckInId, user_id: UserId, gym_id: GymId, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            user_id,
            gym_id,
            created_at,
        }
    }

    pub fn id(&self) -> CheckInId {
        self.id
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn gym_id(&self) -> GymId {
        self.gym_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Insert shape for a new check-in. The store assigns the id and timestamp.
#[derive(Debug, Clone)]
pub struct NewCheckIn {
    pub user_id: UserId,
    pub gym_id: GymId,
}
