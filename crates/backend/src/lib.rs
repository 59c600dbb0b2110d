//! Storefront admin backend: a thin axum surface over the commerce
//! platform's Admin GraphQL API. Handlers forward page submissions to
//! remote mutations and echo the JSON payloads back to the pages.

pub mod api;
pub mod domain;
pub mod routes;
pub mod shared;
