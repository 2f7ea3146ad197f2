//! Pantry HTTP Server
//!
//! Thin axum shell over the core:
//! - `GET /` greets
//! - `/items` routes run behind the session cookie middleware
//! - credentialed CORS for the configured origins only
//! - expired sessions are swept in the background

mod error;
mod routes;
mod session;
mod state;

pub use error::{ApiError, ErrorBody};
pub use routes::items::{ItemList, NameRequest};
pub use session::{session_cookie, CurrentSession, SESSION_COOKIE};
pub use state::AppState;

use anyhow::{Context, Result};
use axum::http::{header, HeaderValue, Method};
use axum::routing::{get, put};
use axum::{middleware, Router};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use pantry_core::{Config, Pantry};

/// Build the application router
pub fn router(state: AppState) -> Router {
    let cors = cors_layer(state.pantry().config());

    let items = Router::new()
        .route(
            "/items",
            get(routes::items::list_items).post(routes::items::create_item),
        )
        .route(
            "/items/{id}",
            put(routes::items::update_item).delete(routes::items::delete_item),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            session::resolve_session,
        ));

    Router::new()
        .route("/", get(routes::greeting::hello))
        .merge(items)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(config: &Config) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(origin = %origin, error = %e, "Skipping unusable CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
}

/// Run the server until Ctrl+C or SIGTERM, then tear down the session store.
pub async fn run(state: AppState) -> Result<()> {
    let config = state.pantry().config().clone();
    let bind_addr = config.bind_addr();

    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    let sweeper = spawn_sweeper(Arc::clone(state.pantry()), config.sweep_interval);

    tracing::info!(
        allowed_origins = ?config.allowed_origins,
        "Server running at http://localhost:{}",
        config.port
    );

    axum::serve(listener, router(state.clone()))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    sweeper.abort();
    state.pantry().shutdown();
    tracing::info!("Server stopped");

    Ok(())
}

/// Periodically evict expired sessions
fn spawn_sweeper(pantry: Arc<Pantry>, every: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        // interval() panics on a zero period
        let mut ticker = tokio::time::interval(every.max(Duration::from_millis(1)));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        // The first tick completes immediately
        ticker.tick().await;

        loop {
            ticker.tick().await;
            let evicted = pantry.evict_expired();
            tracing::debug!(
                evicted,
                live_sessions = pantry.sessions().len(),
                "Session sweep"
            );
        }
    })
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        let ctrl_c = tokio::signal::ctrl_c();
        let mut sigterm = signal(SignalKind::terminate()).expect("failed to listen for SIGTERM");
        tokio::select! {
            _ = ctrl_c => {}
            _ = sigterm.recv() => {}
        }
    }
    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for Ctrl+C");
    }
    tracing::info!("Shutdown signal received");
}
