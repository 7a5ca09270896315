//! Scale-out projection used by the report's cost-at-scale chart.

use serde::Serialize;

use crate::savings::SavingsBreakdown;

/// Traffic multiples plotted on the scale-out chart.
pub const SCALE_MULTIPLES: [u32; 4] = [1, 2, 3, 4];

/// Months in the annualized figures.
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Annualized cost of both deployments at one traffic multiple.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScalePoint {
    pub multiple: u32,
    pub monthly_requests: f64,
    pub annual_cost_base: f64,
    pub annual_cost_optimized: f64,
}

/// Project annual cost at 1x..4x the current monthly volume.
///
/// Cost scales linearly with volume, so each point is the current monthly
/// cost times the multiple, annualized. Zero traffic gives a flat zero line.
/// Products that overflow pin at `f64::MAX`.
pub fn scale_out(breakdown: &SavingsBreakdown) -> Vec<ScalePoint> {
    SCALE_MULTIPLES
        .iter()
        .map(|&multiple| {
            let k = f64::from(multiple);
            ScalePoint {
                multiple,
                monthly_requests: (breakdown.requests_per_month * k).min(f64::MAX),
                annual_cost_base: (breakdown.cost_base * k * MONTHS_PER_YEAR).min(f64::MAX),
                annual_cost_optimized: (breakdown.cost_optimized * k * MONTHS_PER_YEAR)
                    .min(f64::MAX),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::savings::breakdown;
    use crate::workload::WorkloadInput;

    #[test]
    fn four_points_scale_linearly() {
        let b = breakdown(&WorkloadInput::default());
        let points = scale_out(&b);
        assert_eq!(points.len(), 4);
        for (i, p) in points.iter().enumerate() {
            let k = (i + 1) as f64;
            assert_eq!(p.multiple, i as u32 + 1);
            assert!((p.monthly_requests - b.requests_per_month * k).abs() < 1e-3);
            assert!((p.annual_cost_base - b.cost_base * 12.0 * k).abs() < 1e-6);
        }
    }

    #[test]
    fn optimized_line_stays_below_baseline() {
        let points = scale_out(&breakdown(&WorkloadInput::default()));
        for p in points {
            assert!(p.annual_cost_optimized < p.annual_cost_base);
        }
    }

    #[test]
    fn zero_traffic_is_flat_zero() {
        let b = breakdown(&WorkloadInput {
            traffic_value: 0.0,
            ..WorkloadInput::default()
        });
        for p in scale_out(&b) {
            assert_eq!(p.annual_cost_base, 0.0);
            assert_eq!(p.annual_cost_optimized, 0.0);
        }
    }

    #[test]
    fn overflowing_volume_pins_at_f64_max() {
        let b = breakdown(&WorkloadInput {
            traffic_value: f64::MAX,
            traffic_unit: crate::traffic::TrafficUnit::RequestsPerMonth,
            peak_activation_memory_mb: 1e-300,
            ..WorkloadInput::default()
        });
        let points = scale_out(&b);
        assert_eq!(points[3].monthly_requests, f64::MAX);
        for p in points {
            assert!(p.monthly_requests.is_finite());
            assert!(p.annual_cost_base.is_finite());
            assert!(p.annual_cost_optimized.is_finite());
        }
    }
}
