use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use cafe_service::db::MongoStore;
use cafe_service::services::StripeGateway;
use cafe_service::{AppState, Config};
use crypto_core::TokenSigner;
use std::sync::Arc;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Cafe Service
///
/// REST backend for the Caffeine Haven web app.
///
/// # Routes
///
/// - `/jwt`, `/createNewUser`, `/currentUser/*`, `/allUsers`, `/updateUser/*` - accounts
/// - `/allMenu`, `/addNewItem`, `/deleteItemApi/*` - menu catalog
/// - `/getAllMemoriesApi`, `/postNewMemoryApi`, `/postInteractApi/*` - memories feed
/// - `/reservationPostApi`, `/newOrderApi`, `/newCouponCreateApi`, ... - orders and coupons
/// - `/create-payment-intent` - Stripe payment intents
///
/// # Deployment
///
/// Listens on port 5000 by default (configurable via PORT).
#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,actix_web=info,mongodb=warn".into());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|format| format.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Configuration loading failed: {}", e);
            eprintln!("ERROR: Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Starting cafe-service v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Environment: {}", config.app.env);

    let tokens = TokenSigner::new(
        &config.jwt.secret,
        chrono::Duration::seconds(config.jwt.ttl_secs),
    )
    .context("Failed to initialize JWT signer")?;

    let store = MongoStore::connect(&config.database)
        .await
        .context("MongoDB initialization failed")?;

    let payments =
        StripeGateway::new(&config.payments).context("Failed to build payment gateway")?;
    if config.payments.secret_key.is_empty() {
        tracing::warn!("STRIPE_SECRET_KEY not set; payment intents will fail");
    }

    let state = web::Data::new(AppState::with_mongo(store, tokens, Arc::new(payments)));

    let bind_address = format!("{}:{}", config.app.host, config.app.port);
    tracing::info!("Starting HTTP server at {}", bind_address);

    let cors_origins: Vec<String> = config
        .allowed_origins()
        .into_iter()
        .map(String::from)
        .collect();
    let workers = config.app.workers;

    let server = HttpServer::new(move || {
        let mut cors = Cors::default();
        for origin in &cors_origins {
            if origin == "*" {
                cors = cors.allow_any_origin();
            } else {
                cors = cors.allowed_origin(origin);
            }
        }
        cors = cors
            .allow_any_method()
            .allow_any_header()
            .supports_credentials()
            .max_age(3600);

        App::new()
            .app_data(state.clone())
            .wrap(cors)
            .wrap(Logger::default())
            .wrap(TracingLogger::default())
            .configure(cafe_service::configure)
    })
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {bind_address}"))?
    .workers(workers)
    .shutdown_timeout(30)
    .run();

    let server_handle = server.handle();

    tokio::select! {
        result = server => {
            if let Err(e) = &result {
                tracing::error!("HTTP server error: {}", e);
            }
            result?;
        }
        _ = shutdown_signal() => {
            tracing::info!("Shutdown signal received");
            server_handle.stop(true).await;
        }
    }

    tracing::info!("cafe-service shutting down");
    Ok(())
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut terminate) => {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {},
                    _ = terminate.recv() => {},
                }
            }
            Err(e) => {
                tracing::warn!("Failed to install SIGTERM handler: {}", e);
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}
