//! Job board application composition root
//!
//! Composes the auth, jobs and applications routers into a single
//! application over a chosen document store.

use std::sync::Arc;

use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    routing::get,
    Router,
};
use jobboard_applications::{
    ApplicationStore, ApplicationsState, InMemoryApplicationStore, PgApplicationStore,
};
use jobboard_auth::AuthConfig;
use jobboard_common::{Config, StoreProvider};
use jobboard_jobs::{InMemoryJobStore, JobStore, JobsState, PgJobStore};
use sqlx::PgPool;
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    limit::RequestBodyLimitLayer,
};

/// Largest request body accepted, in bytes
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Document stores backing the two collections
#[derive(Clone)]
pub struct Stores {
    pub jobs: Arc<dyn JobStore>,
    pub applications: Arc<dyn ApplicationStore>,
}

impl Stores {
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            jobs: Arc::new(PgJobStore::new(pool.clone())),
            applications: Arc::new(PgApplicationStore::new(pool)),
        }
    }

    pub fn in_memory() -> Self {
        let jobs = Arc::new(InMemoryJobStore::new());
        Self {
            applications: Arc::new(InMemoryApplicationStore::new(jobs.clone())),
            jobs,
        }
    }
}

/// Open the configured stores. The pool, if any, is returned so the caller
/// can close it on shutdown.
pub async fn open_stores(config: &Config) -> anyhow::Result<(Stores, Option<PgPool>)> {
    match config.store {
        StoreProvider::Memory => {
            tracing::warn!("Using in-memory document store; data is lost on restart");
            Ok((Stores::in_memory(), None))
        }
        StoreProvider::Postgres => {
            let database_url = config
                .database_url
                .as_deref()
                .ok_or_else(|| anyhow::anyhow!("DATABASE_URL is required"))?;
            let pool =
                jobboard_common::db::connect(database_url, config.database_max_connections)
                    .await
                    .map_err(|e| anyhow::anyhow!("Database connection failed: {}", e))?;
            tracing::info!("Database connection established");
            Ok((Stores::postgres(pool.clone()), Some(pool)))
        }
    }
}

/// Create the main application router with all routes and middleware
pub fn create_app(config: &Config, stores: Stores) -> anyhow::Result<Router> {
    let auth_config = AuthConfig::new(config.jwt_secret.clone(), config.environment);

    let jobs_state = JobsState::new(stores.jobs);
    let applications_state = ApplicationsState {
        store: stores.applications,
        auth: auth_config.clone(),
        require_applicant_auth: config.require_applicant_auth,
        application_count_mode: config.application_count_mode,
    };

    if !config.require_applicant_auth {
        tracing::warn!("Applicant listing is not protected by the session guard");
    }

    let app = Router::new()
        .route("/health", get(health_check))
        .route("/", get(|| async { "Job server is running" }))
        .merge(jobboard_auth::routes().with_state(auth_config))
        .merge(jobboard_jobs::routes().with_state(jobs_state))
        .merge(jobboard_applications::routes(&applications_state).with_state(applications_state))
        .layer(
            ServiceBuilder::new()
                .layer(body_limit_layer())
                .layer(build_cors_layer(&config.cors_allowed_origins)?)
                .into_inner(),
        );

    Ok(app)
}

/// CORS for the browser frontends. Credentials are allowed so the session
/// cookie travels, which rules out a wildcard origin.
pub fn build_cors_layer(origins: &[String]) -> anyhow::Result<CorsLayer> {
    let origins = origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin)
                .map_err(|_| anyhow::anyhow!("Invalid CORS origin: {}", origin))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true))
}

pub fn body_limit_layer() -> RequestBodyLimitLayer {
    RequestBodyLimitLayer::new(MAX_BODY_BYTES)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
