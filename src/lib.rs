//! VendorHub client library
//!
//! The core is a cached, interceptor-driven REST client:
//!
//! - [`pipeline`]: bearer auth, 401 eviction, security-block detection,
//!   envelope validation
//! - [`cache`]: hierarchical query keys, stale-while-revalidate cache with
//!   request coalescing, mutation invalidation cascades
//! - [`client`]: the per-resource API built on both
//!
//! [`cli`] and [`output`] hold the `vendorhub` command-line front end.

pub mod cache;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod notify;
pub mod output;
pub mod pipeline;
pub mod session;
pub mod transport;

pub use client::{AssessmentApi, ProductApi, VendorApi, VendorHubClient};
pub use error::{ApiError, ApiResult, Error, Result};
