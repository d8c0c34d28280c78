//! Wire DTOs shared by every HTTP endpoint.
//!
//! JSON field names are camelCase. Request DTOs keep every field optional so handlers can
//! report all missing fields at once instead of failing on the first one during
//! deserialization.

pub mod api;
pub mod college;
pub mod user;
