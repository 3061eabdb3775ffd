use crate::server::{
    data::user::UserRepository, error::AppError, model::user::CreateUserParam,
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait, SqlErr};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_email;
mod find_by_id;
mod get_all;

fn create_param(email: &str) -> CreateUserParam {
    CreateUserParam {
        email: email.to_string(),
        password: "secret".to_string(),
        is_active: false,
        full_name: None,
        address: None,
        country: None,
    }
}
