//! HTTP front end for the riding center.
//!
//! Handlers stay thin: they extract the caller and the request, call into
//! [`paddock_core::booking::BookingService`], one of the smaller services, or
//! a roster repository, and let
//! [`middleware::error_handling::AppError`] turn failures into responses.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod routes;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    http::{header, HeaderName, HeaderValue, Method},
    Router,
};
use eyre::{Result, WrapErr};
use paddock_core::{
    booking::BookingService,
    messaging::TeamBoard,
    rentals::RentalService,
    slots::SlotGranularity,
    store::{
        AccountStore, AvailabilityStore, DirectoryStore, LessonStore, MessageStore, RentalStore,
    },
};
use paddock_db::store::PgStore;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::FmtSubscriber;

/// State shared by every handler. The stores are trait objects so tests can
/// run the router against mocks.
pub struct ApiState {
    /// Roster and account queries go straight to the pool.
    pub db_pool: PgPool,
    pub availability: Arc<dyn AvailabilityStore>,
    pub lessons: Arc<dyn LessonStore>,
    pub directory: Arc<dyn DirectoryStore>,
    pub accounts: Arc<dyn AccountStore>,
    pub rentals: Arc<dyn RentalStore>,
    pub messages: Arc<dyn MessageStore>,
    pub slot_granularity: SlotGranularity,
    /// Code that unlocks staff roles at registration; `None` disables it.
    pub staff_signup_code: Option<String>,
}

impl ApiState {
    /// State backed entirely by PostgreSQL.
    pub fn new(
        db_pool: PgPool,
        slot_granularity: SlotGranularity,
        staff_signup_code: Option<String>,
    ) -> Self {
        let store = PgStore::new(db_pool.clone());
        Self {
            db_pool,
            availability: Arc::new(store.clone()),
            lessons: Arc::new(store.clone()),
            directory: Arc::new(store.clone()),
            accounts: Arc::new(store.clone()),
            rentals: Arc::new(store.clone()),
            messages: Arc::new(store),
            slot_granularity,
            staff_signup_code,
        }
    }

    pub fn booking(&self) -> BookingService<'_> {
        BookingService::new(
            self.availability.as_ref(),
            self.lessons.as_ref(),
            self.directory.as_ref(),
            self.slot_granularity,
        )
    }

    pub fn rental_service(&self) -> RentalService<'_> {
        RentalService::new(self.rentals.as_ref())
    }

    pub fn team_board(&self) -> TeamBoard<'_> {
        TeamBoard::new(self.messages.as_ref())
    }
}

/// Builds the application router with all routes attached to `state`.
pub fn build_router(state: Arc<ApiState>) -> Router {
    Router::new()
        .merge(routes::health::routes())
        .merge(routes::users::routes())
        .merge(routes::availability::routes())
        .merge(routes::lessons::routes())
        .merge(routes::horses::routes())
        .merge(routes::instructors::routes())
        .merge(routes::rentals::routes())
        .merge(routes::messages::routes())
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> Result<CorsLayer> {
    let origins = origins
        .iter()
        .map(|origin| origin.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()
        .wrap_err("Invalid API_CORS_ORIGINS value")?;

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            header::ACCEPT,
            HeaderName::from_static(middleware::auth::USER_ID_HEADER),
        ])
        .allow_credentials(true))
}

/// Serves the API until the listener fails.
pub async fn start_server(config: config::ApiConfig, db_pool: PgPool) -> Result<()> {
    tracing::subscriber::set_global_default(
        FmtSubscriber::builder()
            .with_max_level(config.log_level)
            .finish(),
    )?;

    let state = Arc::new(ApiState::new(
        db_pool,
        config.slot_granularity,
        config.staff_signup_code.clone(),
    ));
    let mut app = build_router(state);
    if let Some(origins) = &config.cors_origins {
        app = app.layer(cors_layer(origins)?);
    }
    let app = app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout))),
    );

    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!(
        slot_minutes = config.slot_granularity.minutes(),
        "Server listening on http://{}", addr
    );
    axum::serve(listener, app).await?;

    Ok(())
}
