//! Vendor API trait

use async_trait::async_trait;

use crate::client::models::{CreateVendorRequest, UpdateVendorRequest, Vendor};
use crate::error::ApiResult;

/// Vendor operations
///
/// Reads go through the resource cache; writes notify and invalidate.
#[async_trait]
pub trait VendorApi: Send + Sync {
    /// List all vendors
    async fn list_vendors(&self) -> ApiResult<Vec<Vendor>>;

    /// Get a single vendor
    async fn get_vendor(&self, id: &str) -> ApiResult<Vendor>;

    /// Create a vendor
    async fn create_vendor(&self, request: &CreateVendorRequest) -> ApiResult<Vendor>;

    /// Update a vendor
    async fn update_vendor(&self, id: &str, request: &UpdateVendorRequest) -> ApiResult<()>;

    /// Delete a vendor
    async fn delete_vendor(&self, id: &str) -> ApiResult<()>;
}
