use crate::server::{
    data::catalog::CatalogRepository,
    model::catalog::{CatalogItem, CatalogKind},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find;
mod get_all;
