//! Analyzer domain models.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Qualitative leaf moisture bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoistureLevel {
    Low,
    Moderate,
    High,
}

/// Severity of whatever the analysis found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// Outcome of grading a single crop image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Qualitative leaf moisture reading
    pub leaf_moisture: MoistureLevel,
    /// Estimated leaf moisture in percent
    pub estimated_moisture_percent: f64,
    /// One-line health summary
    pub health_status: String,
    /// Overall severity of the findings
    pub severity: Severity,
    /// Issues detected in the image
    pub detected_issues: Vec<String>,
    /// Pests and diseases the sample is at risk for
    pub pests_and_diseases: Vec<String>,
    /// Suggested treatment steps, in order
    pub treatment_plan: Vec<String>,
    /// Precautions while treating
    pub precautions: Vec<String>,
    /// General husbandry recommendations
    pub recommendations: Vec<String>,
}

/// An analysis kept in the session's history, with provenance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedAnalysis {
    /// Record identifier (UUID format)
    pub id: String,
    /// When the analysis ran (RFC 3339)
    pub timestamp: String,
    /// Name of the analyzed image
    pub image: String,
    /// The grading outcome
    pub result: AnalysisResult,
}

impl SavedAnalysis {
    /// Wraps a grading outcome with a fresh id and the current time.
    pub fn from_result(image: impl Into<String>, result: AnalysisResult) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now().to_rfc3339(),
            image: image.into(),
            result,
        }
    }
}
