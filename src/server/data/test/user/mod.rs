use crate::server::{data::user::UserRepository, model::user::CreateUserParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete_by_email;
mod find_by_email;
mod get_all;
