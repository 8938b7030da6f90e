use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::{
    dashboard::TripStats,
    error::AppError,
    models::trip::{NewTrip, Trip, TripPatch, TripStatus},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/trips", get(list_trips).post(create_trip))
        .route(
            "/trips/:id",
            get(get_trip).patch(update_trip).delete(delete_trip),
        )
        .route("/stats", get(stats))
}

#[derive(Deserialize)]
struct ListQuery {
    status: Option<TripStatus>,
}

async fn list_trips(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Trip>>, AppError> {
    let trips = state.service.list(query.status).await?;
    Ok(Json(trips))
}

async fn get_trip(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Trip>, AppError> {
    let trip = state.service.get(id).await?;
    Ok(Json(trip))
}

async fn create_trip(
    State(state): State<AppState>,
    Json(new): Json<NewTrip>,
) -> Result<impl IntoResponse, AppError> {
    let trip = state.service.create(new).await?;
    Ok((StatusCode::CREATED, Json(trip)))
}

async fn update_trip(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(patch): Json<TripPatch>,
) -> Result<Json<Trip>, AppError> {
    let trip = state.service.update(id, patch).await?;
    Ok(Json(trip))
}

async fn delete_trip(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn stats(State(state): State<AppState>) -> Result<Json<TripStats>, AppError> {
    let all = state.service.list(None).await?;
    Ok(Json(TripStats::tally(&all)))
}
