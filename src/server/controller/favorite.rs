//! Favorite link endpoints.
//!
//! Each catalog type gets its own add and remove route under
//! `/users/{user_id}/favorite/<type>/{id}`. The handlers only fix the catalog kind and
//! delegate to `add_favorite` / `remove_favorite`.

use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        catalog::{CharacterDto, PlanetDto, VehicleDto},
    },
    server::{
        error::AppError,
        model::{catalog::CatalogKind, favorite::FavoriteParam},
        service::favorite::FavoriteService,
        state::AppState,
    },
};

/// Tag for grouping favorite endpoints in OpenAPI documentation
pub static FAVORITE_TAG: &str = "favorite";

async fn add_favorite(
    state: &AppState,
    param: FavoriteParam,
) -> Result<impl IntoResponse, AppError> {
    let item = FavoriteService::new(&state.db).add(param).await?;

    Ok((StatusCode::CREATED, Json(item.into_dto())))
}

async fn remove_favorite(
    state: &AppState,
    param: FavoriteParam,
) -> Result<impl IntoResponse, AppError> {
    FavoriteService::new(&state.db).remove(param).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            msg: format!("Favorite {} removed", param.kind),
        }),
    ))
}

/// Add a character to a user's favorites.
///
/// # Returns
/// - `201 Created` - The favorited character
/// - `400 Bad Request` - A path id is not a valid integer
/// - `404 Not Found` - User or character does not exist
/// - `409 Conflict` - Character is already a favorite of the user
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/users/{user_id}/favorite/character/{id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("id" = i32, Path, description = "Character ID")
    ),
    responses(
        (status = 201, description = "Successfully added favorite", body = CharacterDto),
        (status = 400, description = "Invalid path parameter", body = ErrorDto),
        (status = 404, description = "User or character not found", body = ErrorDto),
        (status = 409, description = "Favorite already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_character(
    State(state): State<AppState>,
    path: Result<Path<(i32, i32)>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path((user_id, id)) = path?;
    add_favorite(&state, FavoriteParam::new(user_id, CatalogKind::Character, id)).await
}

/// Remove a character from a user's favorites.
///
/// # Returns
/// - `200 OK` - Favorite removed
/// - `404 Not Found` - User, character or favorite does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/users/{user_id}/favorite/character/{id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("id" = i32, Path, description = "Character ID")
    ),
    responses(
        (status = 200, description = "Successfully removed favorite", body = MessageDto),
        (status = 400, description = "Invalid path parameter", body = ErrorDto),
        (status = 404, description = "User, character or favorite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite_character(
    State(state): State<AppState>,
    path: Result<Path<(i32, i32)>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path((user_id, id)) = path?;
    remove_favorite(&state, FavoriteParam::new(user_id, CatalogKind::Character, id)).await
}

/// Add a planet to a user's favorites.
#[utoipa::path(
    post,
    path = "/users/{user_id}/favorite/planet/{id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("id" = i32, Path, description = "Planet ID")
    ),
    responses(
        (status = 201, description = "Successfully added favorite", body = PlanetDto),
        (status = 400, description = "Invalid path parameter", body = ErrorDto),
        (status = 404, description = "User or planet not found", body = ErrorDto),
        (status = 409, description = "Favorite already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_planet(
    State(state): State<AppState>,
    path: Result<Path<(i32, i32)>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path((user_id, id)) = path?;
    add_favorite(&state, FavoriteParam::new(user_id, CatalogKind::Planet, id)).await
}

/// Remove a planet from a user's favorites.
#[utoipa::path(
    delete,
    path = "/users/{user_id}/favorite/planet/{id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("id" = i32, Path, description = "Planet ID")
    ),
    responses(
        (status = 200, description = "Successfully removed favorite", body = MessageDto),
        (status = 400, description = "Invalid path parameter", body = ErrorDto),
        (status = 404, description = "User, planet or favorite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite_planet(
    State(state): State<AppState>,
    path: Result<Path<(i32, i32)>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path((user_id, id)) = path?;
    remove_favorite(&state, FavoriteParam::new(user_id, CatalogKind::Planet, id)).await
}

/// Add a vehicle to a user's favorites.
#[utoipa::path(
    post,
    path = "/users/{user_id}/favorite/vehicle/{id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("id" = i32, Path, description = "Vehicle ID")
    ),
    responses(
        (status = 201, description = "Successfully added favorite", body = VehicleDto),
        (status = 400, description = "Invalid path parameter", body = ErrorDto),
        (status = 404, description = "User or vehicle not found", body = ErrorDto),
        (status = 409, description = "Favorite already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_vehicle(
    State(state): State<AppState>,
    path: Result<Path<(i32, i32)>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path((user_id, id)) = path?;
    add_favorite(&state, FavoriteParam::new(user_id, CatalogKind::Vehicle, id)).await
}

/// Remove a vehicle from a user's favorites.
#[utoipa::path(
    delete,
    path = "/users/{user_id}/favorite/vehicle/{id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("id" = i32, Path, description = "Vehicle ID")
    ),
    responses(
        (status = 200, description = "Successfully removed favorite", body = MessageDto),
        (status = 400, description = "Invalid path parameter", body = ErrorDto),
        (status = 404, description = "User, vehicle or favorite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite_vehicle(
    State(state): State<AppState>,
    path: Result<Path<(i32, i32)>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path((user_id, id)) = path?;
    remove_favorite(&state, FavoriteParam::new(user_id, CatalogKind::Vehicle, id)).await
}
