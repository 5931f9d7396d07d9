//! HTTP service
//!
//! JSON API over a shared [`SnapshotCache`]: daily word, guess scoring, word
//! lookup and dictionary stats. A background task keeps the snapshot fresh.

mod api;

pub use api::{DailyWord, GuessRequest, GuessResponse, WordRequest, WordResponse};

use crate::dictionary::SnapshotCache;
use crate::selection::SolutionSelector;
use crate::validation::LookupValidator;
use axum::Router;
use axum::routing::{get, post};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tokio::net::TcpListener;
use tokio::signal;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{info, warn};

pub type SharedState = Arc<AppState>;

/// Everything the handlers need
pub struct AppState {
    pub cache: Arc<SnapshotCache>,
    pub selector: Arc<SolutionSelector>,
    pub lookup: Arc<LookupValidator>,
}

/// Bind `addr` and serve until Ctrl-C or SIGTERM
///
/// The dictionary is loaded by the refresh task; requests that need it get 503
/// until the first build finishes.
///
/// # Errors
/// Returns an I/O error if the listener cannot be bound or the server fails.
pub async fn serve(
    state: SharedState,
    addr: SocketAddr,
    refresh_interval: Duration,
) -> std::io::Result<()> {
    let refresher = spawn_refresh(Arc::clone(&state.cache), refresh_interval);
    let router = build_router(state);

    info!(%addr, refresh_secs = refresh_interval.as_secs(), "Binding HTTP listener");
    let listener = TcpListener::bind(addr).await?;
    let served = axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    refresher.abort();
    info!("HTTP server exited");
    served
}

pub fn build_router(state: SharedState) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/api/daily-word", get(api::daily_word))
        .route("/api/validate-guess", post(api::validate_guess))
        .route("/api/validate-word", post(api::validate_word))
        .route("/api/dictionary-stats", get(api::dictionary_stats))
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().include_headers(true))
                .on_response(DefaultOnResponse::new().include_headers(true)),
        )
}

/// Rebuild the snapshot now and then every `interval`
///
/// Builds run on the blocking pool; a failed build keeps the previous snapshot.
pub fn spawn_refresh(cache: Arc<SnapshotCache>, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = time::interval(interval.max(Duration::from_secs(1)));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            let cache = Arc::clone(&cache);
            match tokio::task::spawn_blocking(move || cache.refresh()).await {
                Ok(Ok(snapshot)) => info!(words = snapshot.len(), "Scheduled refresh complete"),
                Ok(Err(e)) => warn!(error = %e, "Scheduled refresh failed"),
                Err(e) => warn!(error = %e, "Refresh task panicked"),
            }
        }
    })
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = signal::ctrl_c().await;
    };
    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        if let Ok(mut stream) = signal(SignalKind::terminate()) {
            let _ = stream.recv().await;
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}

/// Milliseconds since the Unix epoch
fn unix_millis(time: SystemTime) -> u64 {
    time.duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}
