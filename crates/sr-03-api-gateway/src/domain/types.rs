//! Request and response bodies.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sr_01_ledger::ValidationFinding;
use sr_02_ownership::RecordSubmission;

/// `POST /requestValidation`
#[derive(Debug, Clone, Deserialize)]
pub struct ValidationRequest {
    #[serde(default)]
    pub address: String,
}

/// `POST /submitstar`
///
/// `message` is the challenge string the wallet signed.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitStarRequest {
    pub address: String,
    pub message: String,
    pub signature: String,
    pub star: Value,
}

impl From<SubmitStarRequest> for RecordSubmission {
    fn from(req: SubmitStarRequest) -> Self {
        RecordSubmission {
            address: req.address,
            challenge: req.message,
            signature: req.signature,
            star: req.star,
        }
    }
}

/// `GET /height`
#[derive(Debug, Clone, Serialize)]
pub struct HeightResponse {
    pub height: i64,
}

/// `GET /validateChain`
#[derive(Debug, Clone, Serialize)]
pub struct ChainReport {
    pub valid: bool,
    pub findings: Vec<ValidationFinding>,
}

impl From<Vec<ValidationFinding>> for ChainReport {
    fn from(findings: Vec<ValidationFinding>) -> Self {
        Self {
            valid: findings.is_empty(),
            findings,
        }
    }
}
