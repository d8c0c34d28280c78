pub mod db;
pub mod validate;
