use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use skyroute_core::{summary::StationTraffic, StationFilters, StationQuery};
use tracing::debug;

use crate::{
    error::AppError,
    responses::{
        ConnectionsResponse, SingleStationResponse, StationSearchResponse, SummaryResponse,
    },
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/stations", get(list_stations))
        .route("/api/stations/search/{name}", get(search_stations))
        .route("/api/stations/traffic", get(station_traffic))
        .route("/api/stations/{iata}", get(get_station))
        .route("/api/stations/{iata}/connections", get(station_connections))
}

/// GET /api/stations
async fn list_stations(
    State(state): State<AppState>,
    query: Result<Query<StationQuery>, QueryRejection>,
) -> Result<Json<StationSearchResponse>, AppError> {
    let Query(query) = query?;
    let filters = StationFilters::from(query);
    let stations = state.station_repo.find_all(Some(&filters));
    debug!(?filters, count = stations.len(), "Listed stations");

    let mut response = StationSearchResponse::new(stations);
    response.filters = Some(filters);
    Ok(Json(response))
}

/// GET /api/stations/traffic
///
/// Stations matching the usual filters, each with its departure and
/// arrival counts across the flight dataset.
async fn station_traffic(
    State(state): State<AppState>,
    query: Result<Query<StationQuery>, QueryRejection>,
) -> Result<Response, AppError> {
    let Query(query) = query?;
    let filters = StationFilters::from(query);
    let flights = state.flight_repo.find_all(None);
    let traffic: Vec<StationTraffic> = state
        .station_repo
        .find_all(Some(&filters))
        .into_iter()
        .map(|station| StationTraffic::new(station, &flights))
        .collect();
    debug!(?filters, count = traffic.len(), "Listed station traffic");

    Ok(Json(SummaryResponse::new(traffic, Some(&filters))).into_response())
}

/// GET /api/stations/{iata}
async fn get_station(
    State(state): State<AppState>,
    Path(iata): Path<String>,
) -> Result<Json<SingleStationResponse>, AppError> {
    let station = state
        .station_repo
        .find_by_iata(&iata)
        .ok_or_else(|| AppError::station_not_found(&iata))?;

    Ok(Json(SingleStationResponse { data: station.clone() }))
}

/// GET /api/stations/{iata}/connections
///
/// 404 only when the station is unknown; a station without connections
/// yields an empty list.
async fn station_connections(
    State(state): State<AppState>,
    Path(iata): Path<String>,
) -> Result<Json<ConnectionsResponse>, AppError> {
    if state.station_repo.find_by_iata(&iata).is_none() {
        return Err(AppError::station_not_found(&iata));
    }

    let connections = state.station_repo.find_connections(&iata).to_vec();
    debug!(%iata, count = connections.len(), "Listed connections");

    Ok(Json(ConnectionsResponse {
        count: connections.len(),
        data: connections,
        station: iata,
    }))
}

/// GET /api/stations/search/{name}
async fn search_stations(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Json<StationSearchResponse> {
    let stations = state.station_repo.search_by_name(&name);
    debug!(term = %name, count = stations.len(), "Searched stations");

    let mut response = StationSearchResponse::new(stations);
    response.search_term = Some(name);
    Json(response)
}
