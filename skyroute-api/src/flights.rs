use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use skyroute_core::{summary::FlightSummary, FlightFilters, FlightQuery};
use tracing::debug;

use crate::{
    error::AppError,
    responses::{FlightSearchResponse, SummaryResponse},
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/flights", get(list_flights))
        .route("/api/flights/summary", get(flight_summaries))
        .route("/api/flights/route/{departure}/{arrival}", get(flights_by_route))
        .route("/api/flights/station/{station}", get(flights_by_station))
}

/// GET /api/flights
async fn list_flights(
    State(state): State<AppState>,
    query: Result<Query<FlightQuery>, QueryRejection>,
) -> Result<Json<FlightSearchResponse>, AppError> {
    let Query(query) = query?;
    let filters = FlightFilters::try_from(query)?;
    let flights = state.flight_repo.find_all(Some(&filters));
    debug!(?filters, count = flights.len(), "Listed flights");

    let mut response = FlightSearchResponse::new(flights);
    response.filters = Some(filters);
    Ok(Json(response))
}

/// GET /api/flights/summary
///
/// Same filters as `/api/flights`, with duration, price spread and
/// bundles worked out per flight.
async fn flight_summaries(
    State(state): State<AppState>,
    query: Result<Query<FlightQuery>, QueryRejection>,
) -> Result<Response, AppError> {
    let Query(query) = query?;
    let filters = FlightFilters::try_from(query)?;
    let summaries: Vec<FlightSummary> = state
        .flight_repo
        .find_all(Some(&filters))
        .into_iter()
        .map(FlightSummary::new)
        .collect();
    debug!(?filters, count = summaries.len(), "Summarised flights");

    Ok(Json(SummaryResponse::new(summaries, Some(&filters))).into_response())
}

/// GET /api/flights/route/{departure}/{arrival}
async fn flights_by_route(
    State(state): State<AppState>,
    Path((departure, arrival)): Path<(String, String)>,
) -> Json<FlightSearchResponse> {
    let flights = state.flight_repo.find_by_route(&departure, &arrival);
    debug!(%departure, %arrival, count = flights.len(), "Listed flights by route");

    let mut response = FlightSearchResponse::new(flights);
    response.route = Some(format!("{} → {}", departure, arrival));
    Json(response)
}

/// GET /api/flights/station/{station}
async fn flights_by_station(
    State(state): State<AppState>,
    Path(station): Path<String>,
) -> Json<FlightSearchResponse> {
    let flights = state.flight_repo.find_by_station(&station);
    debug!(%station, count = flights.len(), "Listed flights by station");

    let mut response = FlightSearchResponse::new(flights);
    response.station = Some(station);
    Json(response)
}
