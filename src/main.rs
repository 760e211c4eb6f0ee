use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use smokefree::adapters::auth::{JwtConfig, JwtSessionValidator};
use smokefree::adapters::http::middleware::AuthState;
use smokefree::adapters::memory::{program_weeks, weekly_events};
use smokefree::app::{build_router, connect_postgres, Repositories, StartupError};
use smokefree::config::{AppConfig, ServerConfig};
use smokefree::domain::foundation::Timestamp;

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);
    config.validate()?;

    let weeks = program_weeks()?;
    let schedule_start = config
        .program
        .schedule_start
        .unwrap_or_else(|| Timestamp::now().date());

    let repos = if config.database.is_configured() {
        let pool = connect_postgres(&config.database, &weeks, schedule_start).await?;
        tracing::info!("using PostgreSQL storage");
        Repositories::postgres(pool)
    } else {
        tracing::warn!("no database URL configured, data is kept in memory");
        let events = weekly_events(&weeks, schedule_start);
        Repositories::in_memory(weeks, events)
    };

    let auth: AuthState = Arc::new(JwtSessionValidator::new(&jwt_config(&config)));
    let router = build_router(&repos, auth, &config.server, &config.program);

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = ?config.server.environment, "server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            tracing::info!("shutdown signal received");
        })
        .await?;

    Ok(())
}

fn jwt_config(config: &AppConfig) -> JwtConfig {
    let mut jwt = JwtConfig::new(config.auth.jwt_secret.clone());
    if let Some(issuer) = &config.auth.issuer {
        jwt = jwt.with_issuer(issuer);
    }
    if let Some(audience) = &config.auth.audience {
        jwt = jwt.with_audience(audience);
    }
    jwt
}

/// JSON logs in production, compact text elsewhere. `RUST_LOG` overrides
/// the configured filter.
fn init_tracing(server: &ServerConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&server.log_level));
    let registry = tracing_subscriber::registry().with(filter);

    if server.is_production() {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer().compact()).init();
    }
}
