use crate::server::{
    data::favorite::FavoriteRepository,
    error::AppError,
    model::{catalog::CatalogKind, favorite::FavoriteParam},
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait, SqlErr};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod exists;
mod get_for_user;
