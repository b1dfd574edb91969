//! # Gymlog - Gym Check-In Tracking Library
//!
//! This is a facade crate that re-exports all public APIs from the gymlog
//! service components. Use this crate to get access to the whole check-in
//! backend in one place.
//!
//! ## Usage
//!
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! gymlog = { path = "../gymlog" }
//! ```
//!
//! ## Structure
//!
//! - **Core domain types**: `Email`, `Password`, `User`, `CheckIn`, etc.
//! - **Port traits**: `UserLookup`, `UserStore`, `CheckInStore`, `PasswordHasher`
//! - **Use cases**: `AuthenticateUseCase`, `RegisterUserUseCase`, etc.
//! - **Adapters**: `PostgresUserStore`, `InMemoryUserStore`, `Argon2PasswordHasher`, etc.
//! - **Service**: `CheckInService` - The main entry point for the backend

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use gymlog_core::*;
}

// Re-export most commonly used core types at the root level
pub use gymlog_core::{
    AuthenticatedUser, CheckIn, CheckInId, Email, EmailError, GymId, NewCheckIn, NewUser, Password,
    PasswordError, PasswordHashString, User, UserId,
};

// ============================================================================
// Port Traits
// ============================================================================

/// Port trait definitions
pub mod ports {
    pub use gymlog_core::{
        CheckInStore, CheckInStoreError, PasswordHashError, PasswordHasher, UserLookup, UserStore,
        UserStoreError,
    };
}

// Re-export port traits at root level
pub use gymlog_core::{
    CheckInStore, CheckInStoreError, PasswordHashError, PasswordHasher, UserLookup, UserStore,
    UserStoreError,
};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use gymlog_application::*;
}

// Re-export use cases at root level
pub use gymlog_application::{
    AuthenticateError, AuthenticateUseCase, CheckInError, CheckInUseCase, CountCheckInsUseCase,
    RegisterUserError, RegisterUserUseCase,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// Persistence implementations
    pub mod persistence {
        pub use gymlog_adapters::persistence::*;
    }

    /// Password hashing implementations
    pub mod hashing {
        pub use gymlog_adapters::hashing::*;
    }

    /// Configuration
    pub mod config {
        pub use gymlog_adapters::config::*;
    }
}

// Re-export commonly used adapters at root level
pub use gymlog_adapters::{
    hashing::Argon2PasswordHasher,
    persistence::{
        InMemoryCheckInStore, InMemoryUserStore, PostgresCheckInStore, PostgresUserStore,
    },
};

// ============================================================================
// HTTP Layer
// ============================================================================

/// Axum route handlers
pub mod routes {
    pub use gymlog_axum::routes::*;
}

// ============================================================================
// Check-In Service (Main Entry Point)
// ============================================================================

/// Main check-in service
pub use gymlog_service::{CheckInService, configure_postgresql, get_postgres_pool};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing port traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

/// Re-export axum; `CheckInService` hands out its `Router`
pub use axum;

/// Re-export tokio for binding a listener and running the service
pub use tokio;
