//! API trait definitions split by resource
//!
//! - [`VendorApi`] - vendor reads and writes
//! - [`ProductApi`] - product reads and writes, including approval
//! - [`AssessmentApi`] - assessment analysis
//!
//! [`VendorHubClient`](super::VendorHubClient) implements all three.

mod assessments;
mod products;
mod vendors;

pub use assessments::AssessmentApi;
pub use products::ProductApi;
pub use vendors::VendorApi;
