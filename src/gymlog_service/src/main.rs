use color_eyre::eyre::Result;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use gymlog_adapters::{
    config::Settings,
    hashing::Argon2PasswordHasher,
    persistence::{PostgresCheckInStore, PostgresUserStore},
};
use gymlog_service::{CheckInService, configure_postgresql};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let settings = Settings::load()?;

    let pool = configure_postgresql(&settings).await?;

    let user_store = PostgresUserStore::new(pool.clone());
    let check_in_store = PostgresCheckInStore::new(pool);
    let hasher = Argon2PasswordHasher::default();

    let service = CheckInService::new(user_store, check_in_store, hasher);

    let address = format!(
        "{}:{}",
        settings.application.host, settings.application.port
    );
    let listener = tokio::net::TcpListener::bind(&address).await?;

    let allowed_origins = (!settings.application.allowed_origins.is_empty())
        .then(|| settings.application.allowed_origins.clone());

    service.run_standalone(listener, allowed_origins).await?;

    Ok(())
}

fn init_tracing() -> Result<()> {
    let fmt_layer = fmt::layer().compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
