//! Read-only catalog endpoints.
//!
//! Unknown ids answer 400 rather than 404, and empty collections answer 400 unless
//! the empty list policy is turned off. Clients of the existing API depend on both.

use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ItemDto, ListDto},
        catalog::{CharacterDto, PlanetDto, VehicleDto},
    },
    server::{
        controller::list_response, error::AppError, service::catalog::CatalogService,
        state::AppState,
    },
};

/// Tag for grouping catalog endpoints in OpenAPI documentation
pub static CATALOG_TAG: &str = "catalog";

/// List all characters.
#[utoipa::path(
    get,
    path = "/characters",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "Successfully retrieved characters", body = ListDto<CharacterDto>),
        (status = 400, description = "No characters found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_characters(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let characters = CatalogService::new(&state.db).get_characters().await?;

    let characters: Vec<CharacterDto> = characters.into_iter().map(|c| c.into_dto()).collect();

    list_response(&state, characters, "No characters found")
}

/// Get a character by id.
#[utoipa::path(
    get,
    path = "/characters/{id}",
    tag = CATALOG_TAG,
    params(
        ("id" = i32, Path, description = "Character ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved character", body = ItemDto<CharacterDto>),
        (status = 400, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_character(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = path?;

    let character = CatalogService::new(&state.db)
        .get_character(id)
        .await?
        .ok_or_else(|| AppError::BadRequest("Character not found".to_string()))?;

    Ok((StatusCode::OK, Json(ItemDto::ok(character.into_dto()))))
}

/// List all planets.
#[utoipa::path(
    get,
    path = "/planets",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "Successfully retrieved planets", body = ListDto<PlanetDto>),
        (status = 400, description = "No planets found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planets(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let planets = CatalogService::new(&state.db).get_planets().await?;

    let planets: Vec<PlanetDto> = planets.into_iter().map(|p| p.into_dto()).collect();

    list_response(&state, planets, "No planets found")
}

/// Get a planet by id.
#[utoipa::path(
    get,
    path = "/planets/{id}",
    tag = CATALOG_TAG,
    params(
        ("id" = i32, Path, description = "Planet ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved planet", body = ItemDto<PlanetDto>),
        (status = 400, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planet(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = path?;

    let planet = CatalogService::new(&state.db)
        .get_planet(id)
        .await?
        .ok_or_else(|| AppError::BadRequest("Planet not found".to_string()))?;

    Ok((StatusCode::OK, Json(ItemDto::ok(planet.into_dto()))))
}

/// List all vehicles.
#[utoipa::path(
    get,
    path = "/vehicles",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "Successfully retrieved vehicles", body = ListDto<VehicleDto>),
        (status = 400, description = "No vehicles found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vehicles(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let vehicles = CatalogService::new(&state.db).get_vehicles().await?;

    let vehicles: Vec<VehicleDto> = vehicles.into_iter().map(|v| v.into_dto()).collect();

    list_response(&state, vehicles, "No vehicles found")
}

/// Get a vehicle by id.
#[utoipa::path(
    get,
    path = "/vehicles/{id}",
    tag = CATALOG_TAG,
    params(
        ("id" = i32, Path, description = "Vehicle ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved vehicle", body = ItemDto<VehicleDto>),
        (status = 400, description = "Vehicle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vehicle(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = path?;

    let vehicle = CatalogService::new(&state.db)
        .get_vehicle(id)
        .await?
        .ok_or_else(|| AppError::BadRequest("Vehicle not found".to_string()))?;

    Ok((StatusCode::OK, Json(ItemDto::ok(vehicle.into_dto()))))
}
