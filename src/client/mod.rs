//! VendorHub API client
//!
//! - [`api`]: per-resource traits
//! - [`models`]: request and response DTOs
//! - [`endpoints`]: REST paths
//! - [`VendorHubClient`]: the cached, notifying implementation

pub mod api;
pub mod endpoints;
pub mod models;
mod vendorhub;

pub use api::{AssessmentApi, ProductApi, VendorApi};
pub use vendorhub::VendorHubClient;
