//! Vendor models

use serde::{Deserialize, Serialize};

/// Vendor resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    /// Vendor ID
    pub id: String,

    /// Display name
    pub name: String,

    /// Primary contact email
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,

    /// Public website
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    /// Lifecycle status (ACTIVE, INACTIVE, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Number of products registered under this vendor
    #[serde(default)]
    pub product_count: u32,

    /// Creation timestamp (ISO 8601)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Request body for creating a vendor
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVendorRequest {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

/// Request body for updating a vendor; absent fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVendorRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_vendor_minimal_payload() {
        let vendor: Vendor = serde_json::from_value(json!({"id": "v1", "name": "Acme"})).unwrap();
        assert_eq!(vendor.product_count, 0);
        assert!(vendor.status.is_none());
    }

    #[test]
    fn test_update_request_skips_unset_fields() {
        let update = UpdateVendorRequest {
            status: Some("INACTIVE".to_string()),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(update).unwrap(), json!({"status": "INACTIVE"}));
    }
}
