//! Handlers for the savings calculator and its executive report.

use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use neurolattice_core::display::{result_cards, ResultCard};
use neurolattice_core::savings::{self, DerivedMetrics, SavingsBreakdown};
use neurolattice_core::workload::WorkloadInput;
use neurolattice_report::{render_report, REPORT_FILE_NAME};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Result of one calculator run.
#[derive(Debug, Serialize)]
pub struct SavingsResponse {
    pub metrics: DerivedMetrics,
    /// Formatted headline cards for the requested display mode.
    pub cards: Vec<ResultCard>,
    pub breakdown: SavingsBreakdown,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/savings
pub async fn calculate_savings(
    Json(input): Json<WorkloadInput>,
) -> AppResult<Json<DataResponse<SavingsResponse>>> {
    input.validate()?;

    let breakdown = savings::breakdown(&input);
    let cards = result_cards(&breakdown.metrics, input.display_mode);

    tracing::debug!(
        gpu = input.gpu_profile.name(),
        deployment = input.deployment_mode.label(),
        rps = breakdown.requests_per_second,
        monthly_savings = breakdown.metrics.monthly_savings_usd,
        gpus_saved = breakdown.metrics.gpus_saved,
        "Computed savings",
    );

    Ok(Json(DataResponse {
        data: SavingsResponse {
            metrics: breakdown.metrics,
            cards,
            breakdown,
        },
    }))
}

/// POST /api/v1/savings/report
///
/// Renders the executive PDF for the submitted inputs as a download.
pub async fn download_report(Json(input): Json<WorkloadInput>) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let generated_on = Utc::now().date_naive();
    let bytes = tokio::task::spawn_blocking(move || render_report(&input, generated_on))
        .await
        .map_err(|e| AppError::InternalError(format!("Report task failed: {e}")))??;

    tracing::info!(bytes = bytes.len(), "Executive report generated");

    let headers = [
        (CONTENT_TYPE, "application/pdf".to_string()),
        (
            CONTENT_DISPOSITION,
            format!("attachment; filename=\"{REPORT_FILE_NAME}\""),
        ),
    ];
    Ok((headers, bytes))
}
