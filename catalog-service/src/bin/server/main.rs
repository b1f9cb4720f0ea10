use std::sync::Arc;

use auth::SessionIssuer;
use auth::TokenCodec;
use catalog_service::config::Config;
use catalog_service::domain::account::service::AccountService;
use catalog_service::domain::product::service::ProductService;
use catalog_service::domain::provider::service::ProviderService;
use catalog_service::inbound::http::router::create_router;
use catalog_service::outbound::countries::RestCountriesClient;
use catalog_service::outbound::repositories::PostgresAccountRepository;
use catalog_service::outbound::repositories::PostgresProductRepository;
use catalog_service::outbound::repositories::PostgresProviderRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "catalog_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "catalog-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    // A missing or empty signing secret halts the process here; it is
    // never reported per-request.
    let codec = TokenCodec::new(&config.auth.secret)?;
    let issuer = Arc::new(SessionIssuer::new(codec));

    tracing::info!(http_port = config.server.http_port, "Configuration loaded");

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = 5,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let account_repository = Arc::new(PostgresAccountRepository::new(pg_pool.clone()));
    let provider_repository = Arc::new(PostgresProviderRepository::new(pg_pool.clone()));
    let product_repository = Arc::new(PostgresProductRepository::new(pg_pool));
    let country_codes = Arc::new(RestCountriesClient::new()?);

    let account_service = Arc::new(AccountService::new(account_repository, issuer));
    let provider_service = Arc::new(ProviderService::new(
        provider_repository.clone(),
        country_codes,
    ));
    let product_service = Arc::new(ProductService::new(product_repository, provider_repository));

    let address = format!("0.0.0.0:{}", config.server.http_port);
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!(address = %address, protocol = "http", "Http server listening");

    let application = create_router(account_service, provider_service, product_service);
    axum::serve(listener, application).await?;

    Ok(())
}
