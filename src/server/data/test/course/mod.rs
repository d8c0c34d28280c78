use crate::server::{data::course::CourseRepository, model::college::CreateCourseParam};
use rust_decimal::Decimal;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
