//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Parameter types are built from
//! request DTOs after validation, so the service layer only ever sees complete input.

pub mod college;
pub mod user;
