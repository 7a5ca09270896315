//! Result cards shown next to the calculator inputs.

use serde::Serialize;

use crate::format::{format_currency, format_number, format_ratio};
use crate::savings::DerivedMetrics;
use crate::workload::DisplayMode;

/// One headline figure with its caption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultCard {
    pub value: String,
    pub label: &'static str,
}

/// The four cards for the selected display mode.
///
/// The first two cards depend on the mode; the leverage ratios are always
/// shown.
pub fn result_cards(metrics: &DerivedMetrics, mode: DisplayMode) -> Vec<ResultCard> {
    let (primary, secondary) = match mode {
        DisplayMode::Dollars => (
            ResultCard {
                value: format_currency(metrics.monthly_savings_usd),
                label: "Avoided Monthly Spend",
            },
            ResultCard {
                value: format!("{} hrs", format_number(metrics.compute_hours_reclaimed)),
                label: "Compute Hours Reclaimed",
            },
        ),
        DisplayMode::Capacity => (
            ResultCard {
                value: format!("+{}", format_number(metrics.extra_monthly_requests)),
                label: "Extra Requests / Month",
            },
            ResultCard {
                value: metrics.gpus_saved.to_string(),
                label: "Fewer GPUs Required",
            },
        ),
    };

    vec![
        primary,
        secondary,
        ResultCard {
            value: format_ratio(metrics.throughput_ratio),
            label: "Throughput Leverage",
        },
        ResultCard {
            value: format_ratio(metrics.cost_leverage_ratio),
            label: "Budget Efficiency",
        },
    ]
}
