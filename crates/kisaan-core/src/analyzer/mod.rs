//! Visual analyzer: mock leaf-health grading of crop images.

pub mod grading;
pub mod model;

pub use grading::grade_sample;
pub use model::{AnalysisResult, MoistureLevel, SavedAnalysis, Severity};
