use anyhow::Result;
use blog_core::application::{
    ports::{ClockPort, IdentityVerifierPort, ObjectStoragePort, SlugGeneratorPort},
    services::{ApplicationServices, ServiceSettings},
};
use blog_core::config::AppConfig;
use blog_core::domain::{
    category::CategoryRepository,
    post::{PostReadRepository, PostWriteRepository},
    slug::SlugExistence,
};
use blog_core::infrastructure::{
    database,
    repositories::{
        PostgresCategoryRepository, PostgresPostReadRepository, PostgresPostWriteRepository,
        PostgresSlugRegistry,
    },
    security::JwtIdentityVerifier,
    storage::HttpObjectStorage,
    time::SystemClock,
    util::UnicodeSlugGenerator,
};
use blog_core::presentation::http::{routes::build_router, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let post_write_repo: Arc<dyn PostWriteRepository> =
        Arc::new(PostgresPostWriteRepository::new(pool.clone()));
    let post_read_repo: Arc<dyn PostReadRepository> =
        Arc::new(PostgresPostReadRepository::new(pool.clone()));
    let category_repo: Arc<dyn CategoryRepository> =
        Arc::new(PostgresCategoryRepository::new(pool.clone()));
    let slug_registry: Arc<dyn SlugExistence> = Arc::new(PostgresSlugRegistry::new(pool));

    let identity_verifier: Arc<IdentityVerifierPort> = Arc::new(JwtIdentityVerifier::new(
        config.identity_jwt_secret(),
        config.identity_issuer(),
    ));

    let http_client = reqwest::Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()?;
    let storage = config.storage();
    let object_storage: Arc<ObjectStoragePort> = Arc::new(HttpObjectStorage::new(
        http_client,
        storage.url.as_str(),
        storage.service_key.as_str(),
        storage.bucket.as_str(),
    ));

    let clock: Arc<ClockPort> = Arc::new(SystemClock);
    let slugger: Arc<SlugGeneratorPort> = Arc::new(UnicodeSlugGenerator);

    let services = Arc::new(ApplicationServices::new(
        post_write_repo,
        post_read_repo,
        category_repo,
        slug_registry,
        slugger,
        identity_verifier,
        object_storage,
        clock,
        ServiceSettings {
            max_upload_bytes: config.max_upload_bytes(),
            preview_debounce: config.slug_preview_debounce(),
        },
    ));

    let state = HttpState {
        services,
        site_url: Arc::from(config.site_url()),
    };
    let app = build_router(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install CTRL+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
