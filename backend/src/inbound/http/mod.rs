//! HTTP inbound adapter exposing the REST endpoints.

pub mod employees;
pub mod error;
pub mod health;
pub mod state;

pub use error::ApiResult;
