use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::{
    check_in::{CheckIn, NewCheckIn},
    email::Email,
    user::{NewUser, User, UserId},
};

// UserStore port traits and errors
#[derive(Debug, Error)]
pub enum UserStoreError {
    #[error("User already exists")]
    UserAlreadyExists,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for UserStoreError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::UserAlreadyExists, Self::UserAlreadyExists) => true,
            (Self::UnexpectedError(_), Self::UnexpectedError(_)) => true,
            _ => false,
        }
    }
}

/// Narrow lookup capability consumed by the authenticate use case.
///
/// If the backing store ever held duplicate emails the first match wins;
/// both provided implementations make duplicates unrepresentable.
#[async_trait]
pub trait UserLookup: Send + Sync {
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, UserStoreError>;
}

#[async_trait]
pub trait UserStore: UserLookup {
    /// Persist a new user. Fails with `UserAlreadyExists` when the email is
    /// already taken.
    async fn add_user(&self, new_user: NewUser) -> Result<User, UserStoreError>;
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserStoreError>;
}

// CheckInStore port trait and errors
#[derive(Debug, Error)]
pub enum CheckInStoreError {
    #[error("Already checked in today")]
    AlreadyCheckedInToday,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for CheckInStoreError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::AlreadyCheckedInToday, Self::AlreadyCheckedInToday) => true,
            (Self::UnexpectedError(_), Self::UnexpectedError(_)) => true,
            _ => false,
        }
    }
}

#[async_trait]
pub trait CheckInStore: Send + Sync {
    /// Persist a new check-in stamped with the current time.
    ///
    /// Fails with `AlreadyCheckedInToday` when the user already has a
    /// check-in on the current UTC calendar day. Implementations enforce
    /// this atomically; concurrent same-day inserts must not both succeed.
    async fn add_check_in(&self, new_check_in: NewCheckIn) -> Result<CheckIn, CheckInStoreError>;

    /// Find a check-in made by the user on the given UTC calendar day, if
    /// any.
    async fn find_by_user_on_date(
        &self,
        user_id: &UserId,
        date: NaiveDate,
    ) -> Result<Option<CheckIn>, CheckInStoreError>;

    /// Count all check-ins made by the user.
    async fn count_by_user(&self, user_id: &UserId) -> Result<u64, CheckInStoreError>;
}
