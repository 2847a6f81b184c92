//! REST endpoint paths, relative to the configured base URL

const API_PREFIX: &str = "/api/v1";

pub mod vendors {
    use super::API_PREFIX;

    pub fn list() -> String {
        format!("{}/vendors", API_PREFIX)
    }

    pub fn create() -> String {
        list()
    }

    pub fn detail(id: &str) -> String {
        format!("{}/vendors/{}", API_PREFIX, id)
    }
}

pub mod products {
    use super::API_PREFIX;

    pub fn list() -> String {
        format!("{}/products", API_PREFIX)
    }

    pub fn create() -> String {
        list()
    }

    pub fn detail(id: &str) -> String {
        format!("{}/products/{}", API_PREFIX, id)
    }

    pub fn by_vendor(vendor_id: &str) -> String {
        format!("{}/products/vendor/{}", API_PREFIX, vendor_id)
    }

    pub fn approve(id: &str) -> String {
        format!("{}/products/{}/approve", API_PREFIX, id)
    }
}

pub mod assessment_analysis {
    use super::API_PREFIX;

    fn base(assessment_id: &str) -> String {
        format!("{}/assessmentanalysis/{}", API_PREFIX, assessment_id)
    }

    pub fn analyze(assessment_id: &str) -> String {
        format!("{}/analyze", base(assessment_id))
    }

    pub fn results(assessment_id: &str) -> String {
        format!("{}/results", base(assessment_id))
    }

    pub fn not_implemented(assessment_id: &str) -> String {
        format!("{}/not-implemented", base(assessment_id))
    }

    pub fn update_status(assessment_id: &str) -> String {
        format!("{}/update-status", base(assessment_id))
    }
}
