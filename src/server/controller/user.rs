use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ListDto},
        user::{CreateUserDto, UserDto, UserFavoritesDto},
    },
    server::{
        controller::list_response, error::AppError, model::user::CreateUserParam,
        service::user::UserService, state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// List all users.
///
/// # Returns
/// - `200 OK` - `{msg: "ok", results: [...]}` with every user, passwords excluded
/// - `400 Bad Request` - No users exist and the empty list policy is on
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Successfully retrieved users", body = ListDto<UserDto>),
        (status = 400, description = "No users found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let users = UserService::new(&state.db).get_all_users().await?;

    let users: Vec<UserDto> = users.into_iter().map(|u| u.into_dto()).collect();

    list_response(&state, users, "No users found")
}

/// Register a new user.
///
/// The body must contain `email` and `password`. `is_active` defaults to false, and
/// `full_name`, `address` and `country` are optional.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - User creation data, or the rejection if the body was missing or malformed
///
/// # Returns
/// - `201 Created` - The created user
/// - `400 Bad Request` - Missing or malformed body, or empty credentials
/// - `409 Conflict` - Email already registered
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/user",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "Successfully created user", body = UserDto),
        (status = 400, description = "Missing or invalid request body", body = ErrorDto),
        (status = 409, description = "Email is already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    // Convert DTO to server model
    let params = CreateUserParam::from_dto(payload)?;

    let user = UserService::new(&state.db).create_user(params).await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Get a user with all of their favorites.
///
/// # Returns
/// - `200 OK` - The user plus `favorite_character`, `favorite_planet` and
///   `favorite_vehicle` lists (empty lists when none exist)
/// - `404 Not Found` - No user with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/users/{user_id}/favorites",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved favorites", body = UserFavoritesDto),
        (status = 400, description = "Invalid path parameter", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_favorites(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(user_id) = path?;

    let favorites = UserService::new(&state.db)
        .get_user_favorites(user_id)
        .await?;

    Ok((StatusCode::OK, Json(favorites.into_dto())))
}
