//! Dashboard JSON API. The frontend renders tiles and panels; everything it
//! needs comes from these read-only endpoints, each a thin wrapper over the
//! store plus one core entry point.

use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use aurora_core::{
    FileRecord, LifeArea, ResurfacingCandidate, TagSuggestion, TimeContext, classify,
    now_unix_millis, select_resurfacing, select_resurfacing_seeded, time_context,
};
use aurora_store::{Config, Store};

struct AppState {
    // rusqlite connections are Send but not Sync.
    store: Mutex<Store>,
    config: Config,
}

type ApiError = (StatusCode, String);

fn internal(err: impl std::fmt::Display) -> ApiError {
    (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
}

pub async fn serve(store: Store, config: Config, addr: &str) -> Result<()> {
    let state = Arc::new(AppState {
        store: Mutex::new(store),
        config,
    });

    let app = Router::new()
        .route("/files", get(get_files))
        .route("/areas", get(get_areas))
        .route("/suggestions", get(get_suggestions))
        .route("/resurface", get(get_resurface))
        .route("/context", get(get_context))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("serving dashboard API on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("shutting down");
        })
        .await
        .context("server error")?;
    Ok(())
}

async fn get_files(State(state): State<Arc<AppState>>) -> Result<Json<Vec<FileRecord>>, ApiError> {
    let store = state.store.lock().map_err(internal)?;
    Ok(Json(store.all_files().map_err(internal)?))
}

async fn get_areas(State(state): State<Arc<AppState>>) -> Result<Json<Vec<LifeArea>>, ApiError> {
    let store = state.store.lock().map_err(internal)?;
    Ok(Json(store.life_areas().map_err(internal)?))
}

/// One classified file. Shared with `aurora suggest --json` so the CLI and
/// the API emit the same shape.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SuggestionRow {
    pub(crate) file: FileRecord,
    pub(crate) suggestion: TagSuggestion,
}

#[derive(Deserialize)]
struct SuggestionParams {
    /// Override the configured confidence threshold.
    min: Option<f64>,
}

async fn get_suggestions(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SuggestionParams>,
) -> Result<Json<Vec<SuggestionRow>>, ApiError> {
    let store = state.store.lock().map_err(internal)?;
    let areas = store.life_areas().map_err(internal)?;
    let files = store.all_files().map_err(internal)?;
    drop(store);

    let threshold = params.min.unwrap_or(state.config.min_confidence);
    let rows = files
        .into_iter()
        .filter_map(|file| {
            let suggestion = classify(&file, &areas)?;
            (suggestion.confidence >= threshold).then_some(SuggestionRow { file, suggestion })
        })
        .collect();
    Ok(Json(rows))
}

#[derive(Deserialize)]
struct ResurfaceParams {
    seed: Option<u64>,
}

async fn get_resurface(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ResurfaceParams>,
) -> Result<Json<Vec<ResurfacingCandidate>>, ApiError> {
    if !state.config.show_remember_this {
        return Ok(Json(Vec::new()));
    }

    let store = state.store.lock().map_err(internal)?;
    let files = store.all_files().map_err(internal)?;
    drop(store);

    let now_ms = now_unix_millis();
    let candidates = match params.seed {
        Some(seed) => select_resurfacing_seeded(&files, now_ms, seed),
        None => {
            let mut rng = SmallRng::from_os_rng();
            select_resurfacing(&files, now_ms, &mut rng)
        }
    };
    Ok(Json(candidates))
}

#[derive(Deserialize)]
struct ContextParams {
    hour: Option<u8>,
}

async fn get_context(Query(params): Query<ContextParams>) -> Json<TimeContext> {
    let hour = params
        .hour
        .unwrap_or_else(|| (now_unix_millis().div_euclid(3_600_000).rem_euclid(24)) as u8);
    Json(time_context(hour))
}
