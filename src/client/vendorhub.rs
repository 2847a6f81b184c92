//! VendorHub API client implementation

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::broadcast;

use super::api::{AssessmentApi, ProductApi, VendorApi};
use super::endpoints;
use super::models::{
    AnalyzeAssessmentRequest, ApproveProductRequest, AssessmentAnalysisResult, AssessmentResults,
    CreateProductRequest, CreateVendorRequest, NotImplementedItems, Product, StatusUpdateResult,
    UpdateProductRequest, UpdateStatusRequest, UpdateVendorRequest, Vendor,
};
use crate::cache::key::{NOT_IMPLEMENTED_SCOPE, RESULTS_SCOPE, filter};
use crate::cache::{
    ASSESSMENT_ANALYSIS, CacheEvent, DEFAULT_STALE_TIME, Effect, PRODUCTS, QueryKey,
    ResourceCache, VENDORS, invalidate,
};
use crate::config::Config;
use crate::error::{ApiError, ApiResult};
use crate::notify::{Notification, Notifier};
use crate::pipeline::envelope::Expect;
use crate::pipeline::{Pipeline, PipelineEvent};
use crate::session::Session;
use crate::transport::{ApiRequest, HttpTransport, Transport};

/// VendorHub API client
///
/// Reads are answered by the [`ResourceCache`]; writes go straight through
/// the [`Pipeline`] and, on success, invalidate the affected keys before
/// the success notification fires.
#[derive(Clone)]
pub struct VendorHubClient {
    pipeline: Arc<Pipeline>,
    cache: ResourceCache,
    notifier: Arc<dyn Notifier>,
    stale_time: Duration,
}

impl VendorHubClient {
    /// Create a client over an arbitrary transport.
    pub fn new(transport: Arc<dyn Transport>, session: Session, notifier: Arc<dyn Notifier>) -> Self {
        let pipeline = Pipeline::new(transport, session, Arc::clone(&notifier));
        Self {
            pipeline: Arc::new(pipeline),
            cache: ResourceCache::new(),
            notifier,
            stale_time: DEFAULT_STALE_TIME,
        }
    }

    /// Create an HTTP client from configuration.
    ///
    /// `api_url` overrides the configured base URL.
    pub fn from_config(
        config: &Config,
        api_url: Option<&str>,
        session: Session,
        notifier: Arc<dyn Notifier>,
    ) -> ApiResult<Self> {
        let base_url = config.api_base_url(api_url);
        log::debug!("Using API base URL {}", base_url);
        let transport = HttpTransport::with_timeout(base_url, config.timeout())?;
        Ok(Self::new(Arc::new(transport), session, notifier).with_stale_time(config.stale_time()))
    }

    /// Override the staleness window for every read
    pub fn with_stale_time(mut self, stale_time: Duration) -> Self {
        self.stale_time = stale_time;
        self
    }

    /// Use `cache` instead of the default one (e.g. [`ResourceCache::disabled`])
    pub fn with_cache(mut self, cache: ResourceCache) -> Self {
        self.cache = cache;
        self
    }

    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    pub fn session(&self) -> &Session {
        self.pipeline.session()
    }

    pub fn cache(&self) -> &ResourceCache {
        &self.cache
    }

    /// Session and security events from the pipeline
    pub fn subscribe(&self) -> broadcast::Receiver<PipelineEvent> {
        self.pipeline.subscribe()
    }

    /// Cache entry changes, e.g. a background refetch landing
    pub fn subscribe_cache(&self) -> broadcast::Receiver<CacheEvent> {
        self.cache.subscribe()
    }

    // ========================================================================
    // Central read and write paths
    // ========================================================================

    /// Cached read. Failures go back to the caller without a notification.
    async fn query<T>(&self, key: QueryKey, request: ApiRequest, expect: Expect) -> ApiResult<T>
    where
        T: Serialize + DeserializeOwned + Send + 'static,
    {
        let pipeline = Arc::clone(&self.pipeline);
        self.cache
            .read(&key, self.stale_time, move || async move {
                let envelope = pipeline.send(request).await?;
                expect.validate(envelope)
            })
            .await
    }

    /// Uncached write. Exactly one notification per call: success after the
    /// effect's invalidation is applied, or the resolved failure message.
    async fn mutate<T, E>(
        &self,
        request: ApiRequest,
        expect: Expect,
        success: &str,
        effect: E,
    ) -> ApiResult<T>
    where
        T: DeserializeOwned,
        E: FnOnce(&T) -> Effect,
    {
        let outcome = match self.pipeline.send(request).await {
            Ok(envelope) => expect.validate::<T>(envelope),
            Err(err) => Err(err),
        };

        match outcome {
            Ok(value) => {
                invalidate(&self.cache, &effect(&value));
                self.notifier.notify(Notification::success(success));
                Ok(value)
            }
            Err(err) => {
                self.report(&err);
                Err(err)
            }
        }
    }

    fn report(&self, err: &ApiError) {
        // Eviction is announced through PipelineEvent::SessionExpired
        if matches!(err, ApiError::SessionExpired) {
            return;
        }
        self.notifier.notify(Notification::from_failure(err));
    }
}

// ============================================================================
// Vendors
// ============================================================================

#[async_trait]
impl VendorApi for VendorHubClient {
    async fn list_vendors(&self) -> ApiResult<Vec<Vendor>> {
        self.query(
            VENDORS.lists(),
            ApiRequest::get(endpoints::vendors::list()),
            Expect::list("vendors").or_fail_with("Failed to fetch vendors"),
        )
        .await
    }

    async fn get_vendor(&self, id: &str) -> ApiResult<Vendor> {
        self.query(
            VENDORS.detail(id),
            ApiRequest::get(endpoints::vendors::detail(id)),
            Expect::found("vendor").or_fail_with("Failed to fetch vendor"),
        )
        .await
    }

    async fn create_vendor(&self, request: &CreateVendorRequest) -> ApiResult<Vendor> {
        let request = self.body_or_report(ApiRequest::post(endpoints::vendors::create(), request))?;
        self.mutate(
            request,
            Expect::returned("vendor").or_fail_with("Failed to create vendor"),
            "Vendor created successfully!",
            |_| Effect::Created { space: VENDORS },
        )
        .await
    }

    async fn update_vendor(&self, id: &str, request: &UpdateVendorRequest) -> ApiResult<()> {
        let request = self.body_or_report(ApiRequest::put(endpoints::vendors::detail(id), request))?;
        self.mutate(
            request,
            Expect::nothing().or_fail_with("Failed to update vendor"),
            "Vendor updated successfully!",
            |_| Effect::Modified { space: VENDORS },
        )
        .await
    }

    async fn delete_vendor(&self, id: &str) -> ApiResult<()> {
        self.mutate(
            ApiRequest::delete(endpoints::vendors::detail(id)),
            Expect::nothing().or_fail_with("Failed to delete vendor"),
            "Vendor deleted successfully!",
            |_| Effect::Modified { space: VENDORS },
        )
        .await
    }
}

// ============================================================================
// Products
// ============================================================================

#[async_trait]
impl ProductApi for VendorHubClient {
    async fn list_products(&self) -> ApiResult<Vec<Product>> {
        self.query(
            PRODUCTS.lists(),
            ApiRequest::get(endpoints::products::list()),
            Expect::list("products").or_fail_with("Failed to fetch products"),
        )
        .await
    }

    async fn get_product(&self, id: &str) -> ApiResult<Product> {
        self.query(
            PRODUCTS.detail(id),
            ApiRequest::get(endpoints::products::detail(id)),
            Expect::found("product").or_fail_with("Failed to fetch product"),
        )
        .await
    }

    async fn list_products_by_vendor(&self, vendor_id: &str) -> ApiResult<Vec<Product>> {
        self.query(
            PRODUCTS.by_parent(VENDORS, vendor_id),
            ApiRequest::get(endpoints::products::by_vendor(vendor_id)),
            Expect::list("products").or_fail_with("Failed to fetch products"),
        )
        .await
    }

    async fn create_product(&self, request: &CreateProductRequest) -> ApiResult<Product> {
        let request = self.body_or_report(ApiRequest::post(endpoints::products::create(), request))?;
        self.mutate(
            request,
            Expect::returned("product").or_fail_with("Failed to create product"),
            "Product created successfully!",
            |product: &Product| Effect::CreatedChild {
                child: PRODUCTS,
                parent: VENDORS,
                parent_id: product.vendor_id.clone(),
            },
        )
        .await
    }

    async fn update_product(&self, id: &str, request: &UpdateProductRequest) -> ApiResult<()> {
        let request = self.body_or_report(ApiRequest::put(endpoints::products::detail(id), request))?;
        self.mutate(
            request,
            Expect::nothing().or_fail_with("Failed to update product"),
            "Product updated successfully!",
            |_| Effect::Modified { space: PRODUCTS },
        )
        .await
    }

    async fn approve_product(&self, id: &str, request: &ApproveProductRequest) -> ApiResult<()> {
        let request = self.body_or_report(ApiRequest::post(endpoints::products::approve(id), request))?;
        self.mutate(
            request,
            Expect::nothing().or_fail_with("Failed to approve product"),
            "Product approved successfully!",
            |_| Effect::Modified { space: PRODUCTS },
        )
        .await
    }

    async fn delete_product(&self, id: &str) -> ApiResult<()> {
        self.mutate(
            ApiRequest::delete(endpoints::products::detail(id)),
            Expect::nothing().or_fail_with("Failed to delete product"),
            "Product deleted successfully!",
            |_| Effect::Modified { space: PRODUCTS },
        )
        .await
    }
}

// ============================================================================
// Assessment analysis
// ============================================================================

#[async_trait]
impl AssessmentApi for VendorHubClient {
    async fn analyze_assessment(
        &self,
        assessment_id: &str,
        request: &AnalyzeAssessmentRequest,
    ) -> ApiResult<AssessmentAnalysisResult> {
        let request = self.body_or_report(ApiRequest::post(
            endpoints::assessment_analysis::analyze(assessment_id),
            request,
        ))?;
        self.mutate(
            request,
            Expect::returned("analysis").or_fail_with("Failed to analyze assessment"),
            "Assessment analyzed successfully!",
            |_| Effect::Analyzed {
                space: ASSESSMENT_ANALYSIS,
                id: assessment_id.to_string(),
            },
        )
        .await
    }

    async fn assessment_results(&self, assessment_id: &str) -> ApiResult<AssessmentResults> {
        self.query(
            ASSESSMENT_ANALYSIS.scoped(RESULTS_SCOPE, assessment_id),
            ApiRequest::get(endpoints::assessment_analysis::results(assessment_id)),
            Expect::returned("results").or_fail_with("Failed to get assessment results"),
        )
        .await
    }

    async fn not_implemented_items(
        &self,
        assessment_id: &str,
        score_threshold: Option<u32>,
    ) -> ApiResult<NotImplementedItems> {
        let key = ASSESSMENT_ANALYSIS
            .scoped(NOT_IMPLEMENTED_SCOPE, assessment_id)
            .with(filter([("threshold", score_threshold.map(|t| t.to_string()))]));
        let mut request =
            ApiRequest::get(endpoints::assessment_analysis::not_implemented(assessment_id));
        if let Some(threshold) = score_threshold {
            request = request.with_query("scoreThreshold", threshold);
        }
        self.query(
            key,
            request,
            Expect::returned("not implemented items")
                .or_fail_with("Failed to get not implemented items"),
        )
        .await
    }

    async fn update_item_statuses(
        &self,
        assessment_id: &str,
        request: &UpdateStatusRequest,
    ) -> ApiResult<StatusUpdateResult> {
        let request = self.body_or_report(ApiRequest::post(
            endpoints::assessment_analysis::update_status(assessment_id),
            request,
        ))?;
        self.mutate(
            request,
            Expect::returned("status update").or_fail_with("Failed to update item statuses"),
            "Item statuses updated successfully!",
            |_| Effect::Analyzed {
                space: ASSESSMENT_ANALYSIS,
                id: assessment_id.to_string(),
            },
        )
        .await
    }
}

impl VendorHubClient {
    /// A body that fails to serialize is still a failed mutation
    fn body_or_report(&self, request: ApiResult<ApiRequest>) -> ApiResult<ApiRequest> {
        request.inspect_err(|err| self.report(err))
    }
}
