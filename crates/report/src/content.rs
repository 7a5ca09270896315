//! Executive report content laid out on A4 pages.
//!
//! Every figure comes from a single [`savings::breakdown`] call, so the
//! report always agrees with what the calculator shows for the same input.

use chrono::NaiveDate;
use neurolattice_core::format::{format_currency, format_number, format_percent_reduction};
use neurolattice_core::projection::{scale_out, ScalePoint};
use neurolattice_core::savings::{self, SavingsBreakdown};
use neurolattice_core::workload::WorkloadInput;

use crate::fonts::{block_height_mm, text_width_mm, wrap_text};
use crate::layout::{Align, FontWeight, ReportLayout, Rgb, TextStyle, PAGE_WIDTH_MM};

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

pub const BRAND_DARK: Rgb = Rgb(15, 23, 42);
pub const BRAND_GREEN: Rgb = Rgb(16, 185, 129);
pub const TEXT_GRAY: Rgb = Rgb(71, 85, 105);
pub const TEXT_LIGHT: Rgb = Rgb(148, 163, 184);
pub const BASELINE_BAR: Rgb = Rgb(220, 38, 38);
pub const BASELINE_LINE: Rgb = Rgb(239, 68, 68);
const WHITE: Rgb = Rgb(255, 255, 255);
const BLACK: Rgb = Rgb(0, 0, 0);
const SUBTITLE: Rgb = Rgb(200, 200, 200);
const AXIS: Rgb = Rgb(200, 200, 200);
const GRID_LABEL: Rgb = Rgb(150, 150, 150);
const AXIS_TITLE: Rgb = Rgb(100, 100, 100);

// ---------------------------------------------------------------------------
// Geometry
// ---------------------------------------------------------------------------

pub const MARGIN_MM: f64 = 14.0;
pub const CONTENT_WIDTH_MM: f64 = PAGE_WIDTH_MM - 2.0 * MARGIN_MM;
pub const HEADER_HEIGHT_MM: f64 = 35.0;
pub const FOOTER_Y_MM: f64 = 285.0;
/// Cursor position at the top of a continuation page.
const CONTINUATION_TOP_MM: f64 = 20.0;
/// Default stroke width for axes and separators.
const HAIRLINE_MM: f64 = 0.200025;

pub const SPEND_CHART_HEIGHT_MM: f64 = 28.0;
pub const SPEND_BAR_WIDTH_MM: f64 = 18.0;
const SPEND_BAR_GAP_MM: f64 = 20.0;
/// Headroom above the tallest bar.
const SPEND_HEADROOM: f64 = 1.2;

pub const SCALE_CHART_HEIGHT_MM: f64 = 32.0;
pub const SCALE_CHART_WIDTH_MM: f64 = 90.0;
const SCALE_HEADROOM: f64 = 1.1;
const SCALE_GRID_STEPS: u32 = 5;
const SCALE_LINE_WIDTH_MM: f64 = 1.5;
const SCALE_DOT_RADIUS_MM: f64 = 1.5;
const LEGEND_DOT_RADIUS_MM: f64 = 2.0;

// ---------------------------------------------------------------------------
// Copy
// ---------------------------------------------------------------------------

pub const REPORT_TITLE: &str = "NeuroLattice Inference Efficiency Impact Report";
pub const CONTACT_URL: &str = "https://www.neuro-lattice.com/contact";

const EXECUTIVE_SUMMARY: &str = "AI inference is now a recurring operating cost that scales directly with usage. Without structural efficiency, infrastructure spend grows faster than revenue and limits deployment flexibility.\n\nThis report evaluates how NeuroLattice reduces inference cost at the execution level, allowing organizations to lower monthly cloud spend while unlocking additional throughput on existing hardware. The analysis below details both immediate cost impact and longer-term scale implications.";

const SCALE_INTERPRETATION: &str = "This chart demonstrates how inference costs scale with request volume under baseline execution versus NeuroLattice-optimized execution.\n\nWhile baseline costs increase linearly with traffic, NeuroLattice maintains a significantly lower cost curve by improving effective throughput per GPU. As inference volume grows, the absolute dollar savings increase proportionally.";

const SCALE_TAKEAWAY: &str = "At higher traffic levels, NeuroLattice shifts inference economics from cost-scaling to capacity-scaling, enabling growth without proportional infrastructure expansion.";

const NEXT_STEP_INTRO: &str = "For organizations operating production AI systems, the largest inefficiencies typically occur inside the execution graph itself, where redundant structure drives unnecessary memory traffic, energy use, and hardware over-provisioning.";

const ANALYSIS_LEAD: &str = "NeuroLattice offers an architecture-level analysis to identify:";

const ANALYSIS_POINTS: [&str; 3] = [
    "Where memory bandwidth is the binding constraint",
    "Which components of the model drive disproportionate inference cost",
    "How much cost and capacity can be recovered through structural execution optimization",
];

const CLOSING: &str = "Teams can request a confidential deep-dive assessment to receive a model-specific breakdown of inference bottlenecks, cost drivers, and optimization pathways tailored to their environment.";

const CALL_TO_ACTION: &str = "To initiate a detailed architecture review, visit:";

const DISCLAIMER: &str = "Estimates based on provided configuration. Actual results may vary.";

// ---------------------------------------------------------------------------
// Text styles
// ---------------------------------------------------------------------------

const SECTION_HEADING: TextStyle = TextStyle::new(12.0, FontWeight::Bold, BRAND_DARK);
const BODY: TextStyle = TextStyle::new(9.0, FontWeight::Regular, TEXT_GRAY);
const BODY_LABEL: TextStyle = TextStyle::new(9.0, FontWeight::Bold, BRAND_DARK);

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Lay out the full report for `input`.
pub fn build_report(input: &WorkloadInput, generated_on: NaiveDate) -> ReportLayout {
    let breakdown = savings::breakdown(input);
    let mut writer = ReportWriter::new(&breakdown);

    writer.header(input, generated_on);
    writer.executive_summary();
    writer.spend_chart();
    writer.spend_interpretation();
    writer.scale_chart(&scale_out(&breakdown));
    writer.scale_interpretation();
    writer.next_steps();
    writer.footers();

    writer.layout
}

struct ReportWriter<'a> {
    layout: ReportLayout,
    /// Vertical cursor on the current page.
    y: f64,
    breakdown: &'a SavingsBreakdown,
}

impl<'a> ReportWriter<'a> {
    fn new(breakdown: &'a SavingsBreakdown) -> Self {
        Self {
            layout: ReportLayout::new(),
            y: 0.0,
            breakdown,
        }
    }

    fn savings_percent(&self) -> String {
        format_percent_reduction(self.breakdown.cost_base, self.breakdown.cost_optimized)
    }

    /// Start a new page when fewer than `needed` mm remain above `limit`.
    fn ensure_space(&mut self, needed: f64, limit: f64) {
        if self.y + needed > limit {
            self.layout.add_page();
            self.y = CONTINUATION_TOP_MM;
        }
    }

    /// Wrapped paragraph at the left margin starting at the cursor.
    /// Returns the block height without moving the cursor.
    fn paragraph(&mut self, text: &str, style: TextStyle) -> f64 {
        let lines = wrap_text(text, style.weight, style.size_pt, CONTENT_WIDTH_MM);
        let line_height = block_height_mm(1, style.size_pt);
        for (i, line) in lines.iter().enumerate() {
            if line.is_empty() {
                continue;
            }
            self.layout.text(
                line.as_str(),
                MARGIN_MM,
                self.y + i as f64 * line_height,
                style,
                Align::Left,
            );
        }
        block_height_mm(lines.len(), style.size_pt)
    }

    fn header(&mut self, input: &WorkloadInput, generated_on: NaiveDate) {
        self.layout
            .rect(0.0, 0.0, PAGE_WIDTH_MM, HEADER_HEIGHT_MM, BRAND_DARK);
        self.layout.text(
            REPORT_TITLE,
            MARGIN_MM,
            15.0,
            TextStyle::new(18.0, FontWeight::Bold, WHITE),
            Align::Left,
        );
        let subtitle = format!(
            "Generated: {} | Config: {} / {}",
            generated_on.format("%-m/%-d/%Y"),
            input.gpu_profile.name(),
            input.deployment_mode.label(),
        );
        self.layout.text(
            subtitle,
            MARGIN_MM,
            25.0,
            TextStyle::new(10.0, FontWeight::Regular, SUBTITLE),
            Align::Left,
        );
        self.y = 45.0;
    }

    fn executive_summary(&mut self) {
        self.layout
            .text("Executive Summary", MARGIN_MM, self.y, SECTION_HEADING, Align::Left);
        self.y += 6.0;
        let height = self.paragraph(EXECUTIVE_SUMMARY, BODY);
        self.y += height + 10.0;
    }

    fn spend_chart(&mut self) {
        self.layout.text(
            "1. Projected Monthly Spend Reduction",
            MARGIN_MM,
            self.y,
            SECTION_HEADING,
            Align::Left,
        );
        self.y += 6.0;

        let cost_base = self.breakdown.cost_base;
        let cost_optimized = self.breakdown.cost_optimized;
        let chart_base_y = self.y + SPEND_CHART_HEIGHT_MM;
        let scale = axis_scale(SPEND_CHART_HEIGHT_MM, cost_base * SPEND_HEADROOM);

        let total_width = SPEND_BAR_WIDTH_MM * 2.0 + SPEND_BAR_GAP_MM;
        let start_x = (PAGE_WIDTH_MM - total_width) / 2.0;

        self.layout.line(
            (start_x - 15.0, chart_base_y),
            (start_x + total_width + 15.0, chart_base_y),
            AXIS,
            HAIRLINE_MM,
        );

        let base_x = start_x;
        let base_h = cost_base * scale;
        self.layout.rect(
            base_x,
            chart_base_y - base_h,
            SPEND_BAR_WIDTH_MM,
            base_h,
            BASELINE_BAR,
        );

        let opt_x = start_x + SPEND_BAR_WIDTH_MM + SPEND_BAR_GAP_MM;
        let opt_h = cost_optimized * scale;
        self.layout.rect(
            opt_x,
            chart_base_y - opt_h,
            SPEND_BAR_WIDTH_MM,
            opt_h,
            BRAND_GREEN,
        );

        let half_bar = SPEND_BAR_WIDTH_MM / 2.0;
        let label = TextStyle::new(9.0, FontWeight::Bold, BLACK);
        self.layout
            .text("Baseline", base_x + half_bar, chart_base_y + 4.0, label, Align::Center);
        self.layout.text(
            "With NeuroLattice",
            opt_x + half_bar,
            chart_base_y + 4.0,
            label,
            Align::Center,
        );

        self.layout.text(
            format_currency(cost_base),
            base_x + half_bar,
            chart_base_y - base_h - 2.0,
            TextStyle::new(10.0, FontWeight::Bold, BLACK),
            Align::Center,
        );
        self.layout.text(
            format_currency(cost_optimized),
            opt_x + half_bar,
            chart_base_y - opt_h - 2.0,
            TextStyle::new(10.0, FontWeight::Bold, BRAND_GREEN),
            Align::Center,
        );

        self.layout.text(
            format!("Savings: {}%", self.savings_percent()),
            opt_x + SPEND_BAR_WIDTH_MM + 10.0,
            chart_base_y - base_h / 2.0,
            BODY,
            Align::Left,
        );

        self.y += SPEND_CHART_HEIGHT_MM + 12.0;
    }

    fn spend_interpretation(&mut self) {
        self.layout
            .text("Interpretation", MARGIN_MM, self.y, BODY_LABEL, Align::Left);
        self.y += 4.0;

        let text = format!(
            "This comparison illustrates the direct monthly infrastructure cost reduction achieved by deploying NeuroLattice under the current inference workload.\n\nBy reducing memory bandwidth requirements at execution time, NeuroLattice lowers monthly inference spend from {} to {}, representing an {}% cost reduction without changes to traffic volume or model behavior.",
            format_currency(self.breakdown.cost_base),
            format_currency(self.breakdown.cost_optimized),
            self.savings_percent(),
        );
        let height = self.paragraph(&text, BODY);
        self.y += height + 10.0;
    }

    fn scale_chart(&mut self, points: &[ScalePoint]) {
        self.ensure_space(70.0, FOOTER_Y_MM);

        self.layout.text(
            "2. Cost Scenarios at Scale",
            MARGIN_MM,
            self.y,
            SECTION_HEADING,
            Align::Left,
        );
        self.y += 6.0;

        let start_x = (PAGE_WIDTH_MM - SCALE_CHART_WIDTH_MM) / 2.0;
        let start_y = self.y + SCALE_CHART_HEIGHT_MM + 5.0;

        let max_base = points
            .iter()
            .map(|p| p.annual_cost_base)
            .fold(0.0_f64, f64::max);
        let max_val = max_base * SCALE_HEADROOM;
        let x_step = SCALE_CHART_WIDTH_MM / (points.len().max(2) - 1) as f64;
        let y_scale = axis_scale(SCALE_CHART_HEIGHT_MM, max_val);

        // Grid and y-axis labels.
        let grid_label = TextStyle::new(8.0, FontWeight::Bold, GRID_LABEL);
        for i in 0..=SCALE_GRID_STEPS {
            let fraction = f64::from(i) / f64::from(SCALE_GRID_STEPS);
            let y = start_y - fraction * SCALE_CHART_HEIGHT_MM;
            self.layout
                .line((start_x, y), (start_x + SCALE_CHART_WIDTH_MM, y), AXIS, 0.5);
            self.layout.text(
                format_number(max_val * fraction),
                start_x - 2.0,
                y + 1.0,
                grid_label,
                Align::Right,
            );
        }

        let base_series: Vec<f64> = points.iter().map(|p| p.annual_cost_base).collect();
        let opt_series: Vec<f64> = points.iter().map(|p| p.annual_cost_optimized).collect();
        for (series, color) in [(&base_series, BASELINE_LINE), (&opt_series, BRAND_GREEN)] {
            let coords: Vec<(f64, f64)> = series
                .iter()
                .enumerate()
                .map(|(i, v)| (start_x + i as f64 * x_step, start_y - v * y_scale))
                .collect();
            for pair in coords.windows(2) {
                self.layout
                    .line(pair[0], pair[1], color, SCALE_LINE_WIDTH_MM);
            }
            for &(x, y) in &coords {
                self.layout.circle(x, y, SCALE_DOT_RADIUS_MM, color);
            }
            if let (Some(&(x, y)), Some(&last)) = (coords.last(), series.last()) {
                self.layout
                    .text(format_currency(last), x, y - 4.0, grid_label, Align::Center);
            }
        }

        let x_label = TextStyle::new(8.0, FontWeight::Bold, BLACK);
        for (i, point) in points.iter().enumerate() {
            self.layout.text(
                format_number(point.monthly_requests),
                start_x + i as f64 * x_step,
                start_y + 5.0,
                x_label,
                Align::Center,
            );
        }

        let axis_title = TextStyle::new(8.0, FontWeight::Bold, AXIS_TITLE);
        self.layout.text(
            "Monthly Request Volume",
            start_x + SCALE_CHART_WIDTH_MM / 2.0,
            start_y + 9.0,
            axis_title,
            Align::Center,
        );
        self.layout.vertical_text(
            "Annual Cost ($)",
            start_x - 13.0,
            start_y - SCALE_CHART_HEIGHT_MM / 2.0,
            axis_title,
        );

        let legend_y = start_y + 15.0;
        self.layout
            .circle(start_x + 10.0, legend_y - 1.0, LEGEND_DOT_RADIUS_MM, BASELINE_LINE);
        self.layout
            .text("Baseline Cost", start_x + 15.0, legend_y, axis_title, Align::Left);
        self.layout
            .circle(start_x + 50.0, legend_y - 1.0, LEGEND_DOT_RADIUS_MM, BRAND_GREEN);
        self.layout
            .text("With NeuroLattice", start_x + 55.0, legend_y, axis_title, Align::Left);

        self.y = legend_y + 10.0;
    }

    fn scale_interpretation(&mut self) {
        self.layout
            .text("Interpretation", MARGIN_MM, self.y, BODY_LABEL, Align::Left);
        self.y += 4.0;

        let height = self.paragraph(SCALE_INTERPRETATION, BODY);
        self.y += height + 4.0;

        let takeaway = TextStyle::new(9.0, FontWeight::Bold, BRAND_GREEN);
        let height = self.paragraph(SCALE_TAKEAWAY, takeaway);
        self.y += height + 20.0;
    }

    fn next_steps(&mut self) {
        self.ensure_space(60.0, 280.0);

        self.layout.text(
            "Next Step: Architecture-Specific Cost Analysis",
            MARGIN_MM,
            self.y,
            SECTION_HEADING,
            Align::Left,
        );
        self.y += 6.0;

        let height = self.paragraph(NEXT_STEP_INTRO, BODY);
        self.y += height + 4.0;

        self.layout
            .text(ANALYSIS_LEAD, MARGIN_MM, self.y, BODY, Align::Left);
        self.y += 5.0;
        for point in ANALYSIS_POINTS {
            self.layout
                .text(format!("- {point}"), MARGIN_MM + 4.0, self.y, BODY, Align::Left);
            self.y += 5.0;
        }
        self.y += 2.0;

        let height = self.paragraph(CLOSING, BODY);
        self.y += height + 5.0;

        let call_to_action = TextStyle::new(9.0, FontWeight::Bold, TEXT_GRAY);
        self.layout.text(
            CALL_TO_ACTION,
            MARGIN_MM,
            self.y,
            call_to_action,
            Align::Left,
        );
        // The URL follows the lead-in on the same baseline.
        let lead_width = text_width_mm(CALL_TO_ACTION, call_to_action.weight, call_to_action.size_pt);
        self.layout.text(
            CONTACT_URL,
            MARGIN_MM + lead_width + 2.0,
            self.y,
            TextStyle::new(9.0, FontWeight::Bold, BRAND_GREEN),
            Align::Left,
        );
    }

    fn footers(&mut self) {
        let style = TextStyle::new(8.0, FontWeight::Bold, TEXT_LIGHT);
        let page_count = self.layout.page_count();
        for index in 0..page_count {
            self.layout.text_on(
                index,
                format!(
                    "Confidential - Prepared by NeuroLattice | Page {} of {page_count}",
                    index + 1
                ),
                MARGIN_MM,
                FOOTER_Y_MM,
                style,
                Align::Left,
            );
            self.layout.text_on(
                index,
                DISCLAIMER,
                PAGE_WIDTH_MM - MARGIN_MM,
                FOOTER_Y_MM,
                style,
                Align::Right,
            );
        }
    }
}

/// Millimetres per unit so that `max_value` spans `extent`. Zero when the
/// axis has nothing to show.
fn axis_scale(extent: f64, max_value: f64) -> f64 {
    if max_value > 0.0 && max_value.is_finite() {
        extent / max_value
    } else {
        0.0
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
