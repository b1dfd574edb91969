pub mod settings;

pub use settings::{AllowedOrigins, ApplicationSettings, PostgresSettings, Settings};
