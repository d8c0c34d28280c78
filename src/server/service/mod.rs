//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Uniqueness rules for colleges and users, not-found semantics
//! - **Orchestration**: Coordinating several repository calls for one operation
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Keeping a college and its courses consistent

pub mod college;
pub mod seed;
pub mod user;
