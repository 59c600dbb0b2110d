//! Shared contracts between the backend and the frontend: request and
//! response DTOs for the product pages plus the pure pagination helpers.

pub mod domain;
pub mod shared;
