//! Mock grading of crop images.
//!
//! There is no vision model behind this: like the telemetry feed, the
//! analyzer grades from the field's current soil-humidity reading. The
//! image name is carried through for display only.

use super::model::{AnalysisResult, MoistureLevel, Severity};

/// Grades a sample from the current soil-humidity percentage.
///
/// Buckets:
/// - below 30%: dry, medium severity
/// - 30% to 70%: healthy range, low severity
/// - above 70%: waterlogged, high fungal risk
pub fn grade_sample(moisture_percent: f64) -> AnalysisResult {
    let moisture_percent = moisture_percent.clamp(0.0, 100.0);

    if moisture_percent < 30.0 {
        AnalysisResult {
            leaf_moisture: MoistureLevel::Low,
            estimated_moisture_percent: moisture_percent,
            health_status: "Moisture-stressed foliage".to_string(),
            severity: Severity::Medium,
            detected_issues: vec![
                "Leaf curling at the margins".to_string(),
                "Early wilting in the canopy".to_string(),
            ],
            pests_and_diseases: vec!["Spider mites".to_string(), "Thrips".to_string()],
            treatment_plan: vec![
                "Irrigate in the early morning".to_string(),
                "Apply mulch around the root zone".to_string(),
            ],
            precautions: vec!["Avoid midday watering".to_string()],
            recommendations: vec!["Check drip lines for blockages".to_string()],
        }
    } else if moisture_percent <= 70.0 {
        AnalysisResult {
            leaf_moisture: MoistureLevel::Moderate,
            estimated_moisture_percent: moisture_percent,
            health_status: "Healthy foliage".to_string(),
            severity: Severity::Low,
            detected_issues: Vec::new(),
            pests_and_diseases: Vec::new(),
            treatment_plan: Vec::new(),
            precautions: vec!["Maintain the current irrigation schedule".to_string()],
            recommendations: vec!["Re-scan after the next rainfall".to_string()],
        }
    } else {
        AnalysisResult {
            leaf_moisture: MoistureLevel::High,
            estimated_moisture_percent: moisture_percent,
            health_status: "Waterlogged, fungal risk".to_string(),
            severity: Severity::High,
            detected_issues: vec![
                "Standing moisture on lower leaves".to_string(),
                "Yellowing near the stem".to_string(),
            ],
            pests_and_diseases: vec![
                "Powdery mildew".to_string(),
                "Late blight".to_string(),
            ],
            treatment_plan: vec![
                "Pause irrigation for 48 hours".to_string(),
                "Improve drainage between rows".to_string(),
                "Apply a copper-based fungicide if spots appear".to_string(),
            ],
            precautions: vec!["Do not compost affected leaves".to_string()],
            recommendations: vec!["Prune for airflow through the canopy".to_string()],
        }
    }
}
