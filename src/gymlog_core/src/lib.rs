pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    check_in::{CheckIn, CheckInId, GymId, NewCheckIn},
    email::{Email, EmailError},
    password::{Password, PasswordError, PasswordHashString},
    user::{AuthenticatedUser, NewUser, User, UserId},
};

pub use ports::{
    hasher::{PasswordHashError, PasswordHasher},
    repositories::{CheckInStore, CheckInStoreError, UserLookup, UserStore, UserStoreError},
};
