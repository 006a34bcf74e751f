use crate::{
    availability::search_availability,
    backend::SlotBackend,
    clock::Clock,
    configuration::Configuration,
    error::AvailabilityError,
    types::{AvailabilityReport, SearchAvailabilityRequest},
};
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::error;

#[derive(Clone)]
struct AppState<B: SlotBackend, C: Configuration, K: Clock> {
    backend: B,
    configuration: C,
    clock: K,
}

pub fn create_app<B: SlotBackend, C: Configuration, K: Clock>(
    backend: B,
    configuration: C,
    clock: K,
) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let state = AppState {
        backend,
        configuration,
        clock,
    };

    Router::new()
        .route("/api/search_availability", post(search_availability_handler))
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

impl IntoResponse for AvailabilityError {
    fn into_response(self) -> Response {
        let status = match self {
            AvailabilityError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::OK,
        };
        (status, Json(AvailabilityReport::from(&self))).into_response()
    }
}

async fn search_availability_handler<B: SlotBackend, C: Configuration, K: Clock>(
    State(state): State<AppState<B, C, K>>,
    body: Bytes,
) -> Result<Json<AvailabilityReport>, AvailabilityError> {
    // The body is decoded by hand so that a missing content type or broken
    // JSON is answered with the same server error document.
    let request: SearchAvailabilityRequest = serde_json::from_slice(&body).map_err(|err| {
        error!(%err, "Failed to read availability request");
        AvailabilityError::Server(err.to_string())
    })?;

    let report = search_availability(
        request.date.as_deref(),
        &state.backend,
        &state.clock,
        state.configuration.time_basis(),
    )
    .await?;
    Ok(Json(report))
}
