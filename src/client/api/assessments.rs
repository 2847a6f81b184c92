//! Assessment analysis API trait

use async_trait::async_trait;

use crate::client::models::{
    AnalyzeAssessmentRequest, AssessmentAnalysisResult, AssessmentResults, NotImplementedItems,
    StatusUpdateResult, UpdateStatusRequest,
};
use crate::error::ApiResult;

/// Assessment analysis operations
#[async_trait]
pub trait AssessmentApi: Send + Sync {
    /// Run the analysis for an assessment
    async fn analyze_assessment(
        &self,
        assessment_id: &str,
        request: &AnalyzeAssessmentRequest,
    ) -> ApiResult<AssessmentAnalysisResult>;

    /// Stored results of the last analysis
    async fn assessment_results(&self, assessment_id: &str) -> ApiResult<AssessmentResults>;

    /// Items not implemented, optionally limited to those at or below `score_threshold`
    async fn not_implemented_items(
        &self,
        assessment_id: &str,
        score_threshold: Option<u32>,
    ) -> ApiResult<NotImplementedItems>;

    /// Change the implementation status of individual items
    async fn update_item_statuses(
        &self,
        assessment_id: &str,
        request: &UpdateStatusRequest,
    ) -> ApiResult<StatusUpdateResult>;
}
