pub mod client;
pub mod error;
pub mod graphql;

pub use client::AdminApiClient;
pub use error::PlatformError;
