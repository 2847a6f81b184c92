//! Assessment analysis models
//!
//! Analysis payloads are large and evolve quickly, so only the fields the
//! client acts on are typed; the rest is carried through as-is.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Options for running an analysis
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeAssessmentRequest {
    /// Items scoring at or below this are reported as not implemented
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score_threshold: Option<u32>,

    #[serde(default)]
    pub include_recommendations: bool,
}

/// Outcome of an analysis run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentAnalysisResult {
    pub assessment_id: String,

    #[serde(default)]
    pub overall_score: Option<f64>,

    #[serde(default)]
    pub analyzed_items: u32,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Stored analysis results for an assessment
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResults {
    pub assessment_id: String,

    #[serde(default)]
    pub overall_score: Option<f64>,

    #[serde(default)]
    pub sections: Vec<Value>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A control or requirement the vendor has not implemented
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotImplementedItem {
    pub item_id: String,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub score: Option<f64>,

    #[serde(default)]
    pub status: Option<String>,
}

/// Not-implemented items for an assessment
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotImplementedItems {
    pub assessment_id: String,

    #[serde(default)]
    pub items: Vec<NotImplementedItem>,
}

/// One status change
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemStatusUpdate {
    pub item_id: String,
    pub status: String,
}

/// Batch of status changes
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatusRequest {
    pub updates: Vec<ItemStatusUpdate>,
}

/// Result of a status update batch
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdateResult {
    #[serde(default)]
    pub updated_count: u32,

    #[serde(default)]
    pub failed_item_ids: Vec<String>,
}
