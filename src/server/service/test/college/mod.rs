use super::*;

use sea_orm::TransactionTrait;

use crate::server::{
    data::course::CourseRepository,
    model::college::{
        CollegeCreation, CreateCollegeParam, CreateCollegeWithCoursesParam, CreateCourseParam,
        NewCourseParam,
    },
    service::college::{create_or_find_college, CollegeService},
};

mod create_with_courses;
mod create_without_courses;
mod get_all;

fn new_course(name: &str, fee: i64) -> NewCourseParam {
    NewCourseParam {
        name: name.to_string(),
        fee: Decimal::from(fee),
    }
}
