use crate::server::{error::AppError, util::transaction};
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseTransaction, EntityTrait, PaginatorTrait,
    TransactionTrait,
};
use test_utils::builder::TestBuilder;
