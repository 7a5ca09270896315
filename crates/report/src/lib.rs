//! Executive PDF report for the savings calculator.
//!
//! Rendering happens in two steps: [`content::build_report`] lays the report
//! out as primitive draw operations (pure, testable), then [`pdf::write_pdf`]
//! serializes that layout with `printpdf`.

pub mod content;
pub mod error;
pub mod fonts;
pub mod layout;
pub mod pdf;

use chrono::NaiveDate;
use neurolattice_core::workload::WorkloadInput;

pub use error::ReportError;

/// File name offered to the browser for the download.
pub const REPORT_FILE_NAME: &str = "NeuroLattice_Executive_Report.pdf";

/// Render the executive report for `input` as PDF bytes.
pub fn render_report(input: &WorkloadInput, generated_on: NaiveDate) -> Result<Vec<u8>, ReportError> {
    let layout = content::build_report(input, generated_on);
    let bytes = pdf::write_pdf(&layout, content::REPORT_TITLE)?;

    tracing::debug!(
        gpu = input.gpu_profile.name(),
        deployment = input.deployment_mode.label(),
        pages = layout.page_count(),
        bytes = bytes.len(),
        "Rendered savings report",
    );
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rendered_report_is_a_pdf() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        let bytes = render_report(&WorkloadInput::default(), date).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn degenerate_input_still_renders() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        let input = WorkloadInput {
            peak_activation_memory_mb: 0.0,
            traffic_value: 0.0,
            ..WorkloadInput::default()
        };
        assert!(render_report(&input, date).is_ok());
    }
}
