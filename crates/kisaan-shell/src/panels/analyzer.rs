//! Visual analyzer panel: history of graded samples.

use colored::Colorize;
use kisaan_core::analyzer::{SavedAnalysis, Severity};

fn severity_tag(severity: Severity) -> String {
    match severity {
        Severity::Low => "low".green().to_string(),
        Severity::Medium => "medium".yellow().to_string(),
        Severity::High => "high".red().to_string(),
    }
}

/// Renders the saved analyses, newest last.
pub fn render(analyses: &[SavedAnalysis]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", "Visual Analyzer".bright_green().bold()));

    if analyses.is_empty() {
        out.push_str("  No samples analyzed yet. Use `analyze <image>` to grade one.\n");
        return out;
    }

    for saved in analyses {
        out.push_str(&format!(
            "  {}  {}  severity: {}\n",
            saved.image.bold(),
            saved.result.health_status,
            severity_tag(saved.result.severity)
        ));
        for issue in &saved.result.detected_issues {
            out.push_str(&format!("    - {}\n", issue));
        }
        for step in &saved.result.treatment_plan {
            out.push_str(&format!("    > {}\n", step));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use kisaan_core::analyzer::{grade_sample, SavedAnalysis};

    use super::*;

    #[test]
    fn test_empty_history_hints_at_command() {
        assert!(render(&[]).contains("analyze <image>"));
    }

    #[test]
    fn test_render_lists_saved_samples() {
        let saved = SavedAnalysis::from_result("plot-7.jpg", grade_sample(88.0));
        let rendered = render(&[saved]);
        assert!(rendered.contains("plot-7.jpg"));
        assert!(rendered.contains("Waterlogged"));
    }
}
