pub mod in_memory_check_in_store;
pub mod in_memory_user_store;
pub mod postgres_check_in_store;
pub mod postgres_user_store;

pub use in_memory_check_in_store::InMemoryCheckInStore;
pub use in_memory_user_store::InMemoryUserStore;
pub use postgres_check_in_store::PostgresCheckInStore;
pub use postgres_user_store::PostgresUserStore;
