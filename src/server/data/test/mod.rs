mod course;
mod user;
