use crate::server::{
    error::AppError,
    model::{
        catalog::{CatalogItem, CatalogKind},
        favorite::FavoriteParam,
        user::CreateUserParam,
    },
    service::{favorite::FavoriteService, user::UserService},
};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};
