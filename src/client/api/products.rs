//! Product API trait

use async_trait::async_trait;

use crate::client::models::{
    ApproveProductRequest, CreateProductRequest, Product, UpdateProductRequest,
};
use crate::error::ApiResult;

/// Product operations
#[async_trait]
pub trait ProductApi: Send + Sync {
    // ========================================================================
    // Reads
    // ========================================================================

    /// List all products
    async fn list_products(&self) -> ApiResult<Vec<Product>>;

    /// Get a single product
    async fn get_product(&self, id: &str) -> ApiResult<Product>;

    /// List the products registered under one vendor
    async fn list_products_by_vendor(&self, vendor_id: &str) -> ApiResult<Vec<Product>>;

    // ========================================================================
    // Writes
    // ========================================================================

    /// Create a product under `request.vendor_id`
    async fn create_product(&self, request: &CreateProductRequest) -> ApiResult<Product>;

    async fn update_product(&self, id: &str, request: &UpdateProductRequest) -> ApiResult<()>;

    async fn approve_product(&self, id: &str, request: &ApproveProductRequest) -> ApiResult<()>;

    async fn delete_product(&self, id: &str) -> ApiResult<()>;
}
