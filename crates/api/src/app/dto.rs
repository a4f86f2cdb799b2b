use serde::Deserialize;

use samplereg_core::{NewAccount, NewSample};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct CreateAccountRequest {
    pub name: String,
}

impl From<CreateAccountRequest> for NewAccount {
    fn from(req: CreateAccountRequest) -> Self {
        NewAccount { name: req.name }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateSampleRequest {
    pub sample_label: String,
    pub proposal_number: String,
    pub inner_diameter: f64,
    pub outer_diameter: f64,
}

impl From<CreateSampleRequest> for NewSample {
    fn from(req: CreateSampleRequest) -> Self {
        NewSample {
            sample_label: req.sample_label,
            proposal_number: req.proposal_number,
            inner_diameter: req.inner_diameter,
            outer_diameter: req.outer_diameter,
        }
    }
}

/// Offset/limit pagination query, shared by the list endpoints.
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    100
}
