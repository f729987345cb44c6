use anyhow::{Context, Result};
use std::sync::{Arc, RwLock};

use tracing::info;

use crate::catalog::{GuardedSongStore, QueryError, Song, SongQueryService, SongStore};

use axum::{
    extract::{Path, Query, State},
    http::{HeaderValue, StatusCode},
    middleware,
    response::{IntoResponse, Response},
    routing::{get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use super::{log_requests, state::*, ServerConfig};

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct PaginatedResponse {
    items: Vec<Song>,
    total: usize,
    page: usize,
    size: usize,
    pages: usize,
}

#[derive(Serialize)]
struct ErrorDetail {
    detail: String,
}

#[derive(Deserialize, Debug)]
struct ListParams {
    page: Option<usize>,
    size: Option<usize>,
}

#[derive(Deserialize, Debug)]
struct RatingParams {
    rating: u8,
}

impl IntoResponse for QueryError {
    fn into_response(self) -> Response {
        let status = match &self {
            QueryError::Validation(_) => StatusCode::BAD_REQUEST,
            QueryError::NotFound { .. } => StatusCode::NOT_FOUND,
        };
        (
            status,
            Json(ErrorDetail {
                detail: self.to_string(),
            }),
        )
            .into_response()
    }
}

async fn health() -> impl IntoResponse {
    Json(HealthResponse { status: "healthy" })
}

async fn list_songs(
    State(config): State<ServerConfig>,
    State(service): State<GuardedQueryService>,
    Query(params): Query<ListParams>,
) -> Response {
    let page = params.page.unwrap_or(1);
    let size = params.size.unwrap_or(config.default_page_size);

    match service.list_songs(page, size) {
        Ok((items, total)) => {
            let pages = total.div_ceil(size);
            Json(PaginatedResponse {
                items,
                total,
                page,
                size,
                pages,
            })
            .into_response()
        }
        Err(err) => err.into_response(),
    }
}

async fn get_song(
    State(service): State<GuardedQueryService>,
    Path(title): Path<String>,
) -> Response {
    match service.get_song(&title) {
        Ok(song) => Json(song).into_response(),
        Err(err) => err.into_response(),
    }
}

async fn update_song_rating(
    State(service): State<GuardedQueryService>,
    Path(title): Path<String>,
    Query(params): Query<RatingParams>,
) -> Response {
    match service.update_rating(&title, params.rating) {
        Ok(song) => Json(song).into_response(),
        Err(err) => err.into_response(),
    }
}

fn make_cors_layer(origins: &[String]) -> Result<CorsLayer> {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.iter().any(|origin| origin == "*") {
        return Ok(layer.allow_origin(Any));
    }
    let origins = origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .with_context(|| format!("Invalid CORS origin: {}", origin))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(layer.allow_origin(AllowOrigin::list(origins)))
}

pub fn make_app(config: ServerConfig, store: SongStore) -> Result<Router> {
    let store: GuardedSongStore = Arc::new(RwLock::new(store));
    let query_service = Arc::new(SongQueryService::new(store, config.max_page_size));
    let state = ServerState {
        config: config.clone(),
        query_service,
    };

    let song_routes: Router = Router::new()
        .route("/songs/", get(list_songs))
        .route("/songs/{title}", get(get_song))
        .route("/songs/{title}/rating", put(update_song_rating))
        .with_state(state.clone());

    let mut app: Router = Router::new()
        .route("/health", get(health))
        .nest("/api/v1", song_routes);

    app = app.layer(make_cors_layer(&config.cors_origins)?);
    app = app.layer(middleware::from_fn_with_state(state, log_requests));

    Ok(app)
}

pub async fn run_server(config: ServerConfig, store: SongStore) -> Result<()> {
    let addr = format!("{}:{}", config.host, config.port);
    let app = make_app(config, store)?;

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Listening on {}", addr);

    Ok(axum::serve(listener, app).await?)
}
