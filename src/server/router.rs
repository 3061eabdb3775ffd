use axum::{
    routing::{get, post},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        catalog::{
            self, get_character, get_characters, get_planet, get_planets, get_vehicle,
            get_vehicles,
        },
        favorite::{
            self, add_favorite_character, add_favorite_planet, add_favorite_vehicle,
            remove_favorite_character, remove_favorite_planet, remove_favorite_vehicle,
        },
        user::{self, create_user, get_user_favorites, get_users},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Holonet API"),
    paths(
        user::get_users,
        user::create_user,
        user::get_user_favorites,
        catalog::get_characters,
        catalog::get_character,
        catalog::get_planets,
        catalog::get_planet,
        catalog::get_vehicles,
        catalog::get_vehicle,
        favorite::add_favorite_character,
        favorite::remove_favorite_character,
        favorite::add_favorite_planet,
        favorite::remove_favorite_planet,
        favorite::add_favorite_vehicle,
        favorite::remove_favorite_vehicle,
    ),
    tags(
        (name = "user", description = "User registration and favorites view"),
        (name = "catalog", description = "Characters, planets and vehicles"),
        (name = "favorite", description = "Favorite links between users and catalog entities"),
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(get_users))
        .route("/user", post(create_user))
        .route("/users/{user_id}/favorites", get(get_user_favorites))
        .route("/characters", get(get_characters))
        .route("/characters/{id}", get(get_character))
        .route("/planets", get(get_planets))
        .route("/planets/{id}", get(get_planet))
        .route("/vehicles", get(get_vehicles))
        .route("/vehicles/{id}", get(get_vehicle))
        .route(
            "/users/{user_id}/favorite/character/{id}",
            post(add_favorite_character).delete(remove_favorite_character),
        )
        .route(
            "/users/{user_id}/favorite/planet/{id}",
            post(add_favorite_planet).delete(remove_favorite_planet),
        )
        .route(
            "/users/{user_id}/favorite/vehicle/{id}",
            post(add_favorite_vehicle).delete(remove_favorite_vehicle),
        )
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
