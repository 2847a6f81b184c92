//! VendorHub API data models

mod assessment;
mod product;
mod vendor;

pub use assessment::{
    AnalyzeAssessmentRequest, AssessmentAnalysisResult, AssessmentResults, ItemStatusUpdate,
    NotImplementedItem, NotImplementedItems, StatusUpdateResult, UpdateStatusRequest,
};
pub use product::{ApproveProductRequest, CreateProductRequest, Product, UpdateProductRequest};
pub use vendor::{CreateVendorRequest, UpdateVendorRequest, Vendor};
