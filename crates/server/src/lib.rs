use axum::{
    extract::Query,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;

use stickfight_shared::*;
use stickfight_sim::analyzer::{analyze, FightMetrics};
use stickfight_sim::simulate_episode;

// ---------------------------------------------------------------------------
// Serde types
// ---------------------------------------------------------------------------

/// Query params for GET /api/episode.
#[derive(Debug, Deserialize)]
struct EpisodeQuery {
    opponent: String,
    seed: Option<u64>,
}

/// Response for GET /api/episode: the full trajectory for playback plus
/// the derived fight metrics for the summary panel.
#[derive(Debug, Serialize)]
struct EpisodeResponse {
    trajectory: EpisodeTrajectory,
    metrics: FightMetrics,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/opponents -- archetype names selectable in the GUI.
async fn get_opponents() -> Json<Vec<&'static str>> {
    Json(OpponentKind::ALL.iter().map(|k| k.name()).collect())
}

/// GET /api/episode?opponent=aggressive&seed=42 -- simulate one fight and
/// return the complete trajectory. The simulation is a microsecond-scale
/// pure computation, so it runs inline in the handler.
async fn get_episode(Query(q): Query<EpisodeQuery>) -> impl IntoResponse {
    let opponent: OpponentKind = match q.opponent.parse() {
        Ok(kind) => kind,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(serde_json::to_value(ErrorResponse {
                    error: e.to_string(),
                })
                .unwrap_or_default()),
            );
        }
    };

    let trajectory = simulate_episode(opponent, q.seed.unwrap_or(42));
    let metrics = analyze(&trajectory);
    let response = EpisodeResponse {
        trajectory,
        metrics,
    };
    match serde_json::to_value(&response) {
        Ok(v) => (StatusCode::OK, Json(v)),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::to_value(ErrorResponse {
                error: e.to_string(),
            })
            .unwrap_or_default()),
        ),
    }
}

// ---------------------------------------------------------------------------
// Server entry point
// ---------------------------------------------------------------------------

/// Build the axum `Router`.
pub fn app() -> Router {
    Router::new()
        .route("/api/opponents", get(get_opponents))
        .route("/api/episode", get(get_episode))
        .layer(CorsLayer::permissive())
}

/// Start the server on the given port.
pub async fn run_server(port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let app = app();
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;
    println!("stickfight server listening on port {port}");
    axum::serve(listener, app).await?;
    Ok(())
}
