//! Savings engine: workload parameters in, cost and capacity metrics out.
//!
//! The engine is a total function. Inputs are validated at the API boundary;
//! anything that still slips through (zero activation memory, negative
//! traffic, magnitudes that overflow `f64`) degrades to zero-valued rates
//! instead of `NaN` or infinity.

use serde::Serialize;

use crate::traffic::{self, NormalizedTraffic};
use crate::workload::WorkloadInput;

// ---------------------------------------------------------------------------
// Model constants
// ---------------------------------------------------------------------------

/// Fraction of peak activation memory removed by the optimization.
pub const TRUTH_REDUCTION: f64 = 0.80;
/// Derate applied to theoretical memory bandwidth (η).
pub const BANDWIDTH_EFFICIENCY: f64 = 0.65;
/// Per-GPU throughput multiplier of the optimized execution path.
///
/// Fixed product constant; not derived from [`TRUTH_REDUCTION`].
pub const OPTIMIZED_THROUGHPUT_MULTIPLIER: f64 = 5.0;
/// Reported throughput leverage.
pub const THROUGHPUT_RATIO: f64 = 5.0;
/// Reported budget efficiency.
pub const COST_LEVERAGE_RATIO: f64 = 5.0;

// ---------------------------------------------------------------------------
// Conversion helpers
// ---------------------------------------------------------------------------

/// Seconds per hour (3600.0).
pub const SECS_PER_HOUR: f64 = 3600.0;
/// Megabytes per gigabyte (1024.0).
pub const MB_PER_GB: f64 = 1024.0;

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// Headline metrics shown by the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DerivedMetrics {
    pub reduced_activation_mb: f64,
    pub monthly_savings_usd: f64,
    pub compute_hours_reclaimed: f64,
    pub extra_monthly_requests: f64,
    pub gpus_saved: u32,
    pub throughput_ratio: f64,
    pub cost_leverage_ratio: f64,
}

/// Every intermediate quantity of one engine run, plus the headline metrics.
///
/// "base" is the unoptimized deployment, "optimized" the same hardware
/// running at [`OPTIMIZED_THROUGHPUT_MULTIPLIER`] times the rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SavingsBreakdown {
    pub requests_per_second: f64,
    pub requests_per_month: f64,
    pub cost_per_hour: f64,
    pub rate_base: f64,
    pub rate_optimized: f64,
    pub fleet_base: u32,
    pub fleet_optimized: u32,
    pub hours_base: f64,
    pub hours_optimized: f64,
    pub cost_base: f64,
    pub cost_optimized: f64,
    pub metrics: DerivedMetrics,
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// Compute the headline metrics for a workload.
pub fn compute(input: &WorkloadInput) -> DerivedMetrics {
    breakdown(input).metrics
}

/// Run the full savings model and keep the intermediate values.
pub fn breakdown(input: &WorkloadInput) -> SavingsBreakdown {
    let gpu = input.gpu_profile.profile();
    let cost_per_hour = gpu.hourly_cost_usd * input.deployment_mode.multiplier();
    let NormalizedTraffic {
        requests_per_second: rps,
        requests_per_month: rpm,
    } = traffic::normalize(input.traffic_value, input.traffic_unit);

    let reduced_activation_mb = reduced_activation(input.peak_activation_memory_mb);

    let Some(rate_base) =
        baseline_rate(gpu.memory_bandwidth_gb_s, input.peak_activation_memory_mb)
    else {
        return unserviceable(rps, rpm, cost_per_hour, reduced_activation_mb);
    };
    let rate_optimized = rate_base * OPTIMIZED_THROUGHPUT_MULTIPLIER;

    let fleet_base = fleet_size(rps, rate_base);
    let fleet_optimized = fleet_size(rps, rate_optimized);

    let hours_base = rpm / rate_base / SECS_PER_HOUR;
    let hours_optimized = rpm / rate_optimized / SECS_PER_HOUR;
    let hours_reclaimed = hours_base - hours_optimized;

    let cost_base = hours_base * cost_per_hour;
    let cost_optimized = hours_optimized * cost_per_hour;

    let result = SavingsBreakdown {
        requests_per_second: rps,
        requests_per_month: rpm,
        cost_per_hour,
        rate_base,
        rate_optimized,
        fleet_base,
        fleet_optimized,
        hours_base,
        hours_optimized,
        cost_base,
        cost_optimized,
        metrics: DerivedMetrics {
            reduced_activation_mb,
            monthly_savings_usd: cost_base - cost_optimized,
            compute_hours_reclaimed: hours_reclaimed,
            extra_monthly_requests: hours_reclaimed * SECS_PER_HOUR * rate_optimized,
            gpus_saved: fleet_base.saturating_sub(fleet_optimized),
            throughput_ratio: THROUGHPUT_RATIO,
            cost_leverage_ratio: COST_LEVERAGE_RATIO,
        },
    };

    if result.is_finite() && (rps / rate_base).ceil() <= f64::from(u32::MAX) {
        result
    } else {
        unserviceable(rps, rpm, cost_per_hour, reduced_activation_mb)
    }
}

impl SavingsBreakdown {
    /// True when every floating-point field holds a finite number.
    pub fn is_finite(&self) -> bool {
        let m = &self.metrics;
        [
            self.requests_per_second,
            self.requests_per_month,
            self.cost_per_hour,
            self.rate_base,
            self.rate_optimized,
            self.hours_base,
            self.hours_optimized,
            self.cost_base,
            self.cost_optimized,
            m.reduced_activation_mb,
            m.monthly_savings_usd,
            m.compute_hours_reclaimed,
            m.extra_monthly_requests,
            m.throughput_ratio,
            m.cost_leverage_ratio,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}

/// Sustainable requests/sec of one unoptimized GPU.
///
/// Returns `None` when no throughput is achievable (zero, negative or
/// non-finite activation memory).
pub fn baseline_rate(memory_bandwidth_gb_s: f64, peak_activation_memory_mb: f64) -> Option<f64> {
    let rate = memory_bandwidth_gb_s * MB_PER_GB / peak_activation_memory_mb * BANDWIDTH_EFFICIENCY;
    (rate.is_finite() && rate > 0.0).then_some(rate)
}

/// Activation footprint after the optimization removes [`TRUTH_REDUCTION`].
pub fn reduced_activation(peak_activation_memory_mb: f64) -> f64 {
    if peak_activation_memory_mb.is_finite() {
        peak_activation_memory_mb * (1.0 - TRUTH_REDUCTION)
    } else {
        0.0
    }
}

/// GPUs needed to sustain `rps` at `rate` per GPU. Never below one.
pub fn fleet_size(rps: f64, rate: f64) -> u32 {
    // `as` saturates; `breakdown` refuses fleets that would need it.
    (rps / rate).ceil().max(1.0) as u32
}

/// Zeroed rates, fleets and costs. Traffic that does not fit in an `f64`
/// is reported as zero.
fn unserviceable(
    rps: f64,
    rpm: f64,
    cost_per_hour: f64,
    reduced_activation_mb: f64,
) -> SavingsBreakdown {
    let (rps, rpm) = if rps.is_finite() && rpm.is_finite() {
        (rps, rpm)
    } else {
        (0.0, 0.0)
    };
    SavingsBreakdown {
        requests_per_second: rps,
        requests_per_month: rpm,
        cost_per_hour,
        rate_base: 0.0,
        rate_optimized: 0.0,
        fleet_base: 0,
        fleet_optimized: 0,
        hours_base: 0.0,
        hours_optimized: 0.0,
        cost_base: 0.0,
        cost_optimized: 0.0,
        metrics: DerivedMetrics {
            reduced_activation_mb,
            monthly_savings_usd: 0.0,
            compute_hours_reclaimed: 0.0,
            extra_monthly_requests: 0.0,
            gpus_saved: 0,
            throughput_ratio: THROUGHPUT_RATIO,
            cost_leverage_ratio: COST_LEVERAGE_RATIO,
        },
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{DeploymentMode, GpuProfile};
    use crate::traffic::TrafficUnit;

    fn a100(traffic_rps: f64) -> WorkloadInput {
        WorkloadInput {
            gpu_profile: GpuProfile::A100,
            deployment_mode: DeploymentMode::CloudOnDemand,
            peak_activation_memory_mb: 2048.0,
            traffic_value: traffic_rps,
            traffic_unit: TrafficUnit::RequestsPerSecond,
            ..WorkloadInput::default()
        }
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * b.abs().max(1.0)
    }

    // -- reference scenario --

    #[test]
    fn a100_rates() {
        let b = breakdown(&a100(100.0));
        assert!(close(b.rate_base, 650.0));
        assert!(close(b.rate_optimized, 3250.0));
        assert!(close(b.cost_per_hour, 3.5));
    }

    #[test]
    fn a100_at_100_rps_saves_no_gpus() {
        let b = breakdown(&a100(100.0));
        assert_eq!(b.fleet_base, 1);
        assert_eq!(b.fleet_optimized, 1);
        assert_eq!(b.metrics.gpus_saved, 0);
    }

    #[test]
    fn a100_at_1000_rps_saves_one_gpu() {
        let b = breakdown(&a100(1000.0));
        assert_eq!(b.fleet_base, 2);
        assert_eq!(b.fleet_optimized, 1);
        assert_eq!(b.metrics.gpus_saved, 1);
    }

    #[test]
    fn a100_monthly_costs() {
        let b = breakdown(&a100(100.0));
        let rpm = 259_200_000.0;
        assert!(close(b.hours_base, rpm / 650.0 / 3600.0));
        assert!(close(b.hours_optimized, rpm / 3250.0 / 3600.0));
        assert!(close(b.cost_base, b.hours_base * 3.5));
        assert!(close(b.metrics.monthly_savings_usd, b.cost_base - b.cost_optimized));
        // 80% of the baseline spend is avoided.
        assert!(close(b.metrics.monthly_savings_usd, b.cost_base * 0.8));
    }

    #[test]
    fn extra_capacity_is_four_times_current_volume() {
        let b = breakdown(&a100(100.0));
        assert!(close(b.metrics.extra_monthly_requests, 4.0 * 259_200_000.0));
    }

    // -- invariants --

    #[test]
    fn optimized_rate_is_exactly_five_times_baseline() {
        for gpu in GpuProfile::ALL {
            for mem in [1.0, 512.0, 2048.0, 16_000.0] {
                let input = WorkloadInput {
                    gpu_profile: gpu,
                    peak_activation_memory_mb: mem,
                    ..WorkloadInput::default()
                };
                let b = breakdown(&input);
                assert_eq!(b.rate_optimized, b.rate_base * 5.0);
            }
        }
    }

    #[test]
    fn savings_and_gpus_saved_never_negative() {
        for gpu in GpuProfile::ALL {
            for mode in DeploymentMode::ALL {
                for rps in [0.0, 1.0, 650.0, 10_000.0, 1e7] {
                    let input = WorkloadInput {
                        gpu_profile: gpu,
                        deployment_mode: mode,
                        traffic_value: rps,
                        ..WorkloadInput::default()
                    };
                    let b = breakdown(&input);
                    assert!(b.fleet_base >= b.fleet_optimized);
                    assert!(b.metrics.monthly_savings_usd >= 0.0);
                    assert_eq!(
                        b.metrics.monthly_savings_usd,
                        b.cost_base - b.cost_optimized
                    );
                }
            }
        }
    }

    #[test]
    fn compute_is_idempotent() {
        let input = WorkloadInput {
            gpu_profile: GpuProfile::L4,
            deployment_mode: DeploymentMode::CloudReserved,
            peak_activation_memory_mb: 3000.0,
            traffic_value: 7_777_777.0,
            traffic_unit: TrafficUnit::RequestsPerMonth,
            ..WorkloadInput::default()
        };
        let first = compute(&input);
        let second = compute(&input);
        assert_eq!(
            first.monthly_savings_usd.to_bits(),
            second.monthly_savings_usd.to_bits()
        );
        assert_eq!(
            first.extra_monthly_requests.to_bits(),
            second.extra_monthly_requests.to_bits()
        );
        assert_eq!(first, second);
    }

    #[test]
    fn leverage_ratios_are_constant() {
        for gpu in GpuProfile::ALL {
            let m = compute(&WorkloadInput {
                gpu_profile: gpu,
                ..WorkloadInput::default()
            });
            assert_eq!(m.throughput_ratio, 5.0);
            assert_eq!(m.cost_leverage_ratio, 5.0);
        }
    }

    #[test]
    fn reserved_deployment_discounts_cost() {
        let on_demand = breakdown(&a100(100.0));
        let reserved = breakdown(&WorkloadInput {
            deployment_mode: DeploymentMode::CloudReserved,
            ..a100(100.0)
        });
        assert!(close(reserved.cost_base, on_demand.cost_base * 0.6));
    }

    #[test]
    fn monthly_unit_gives_same_result_as_equivalent_rps() {
        let per_sec = compute(&a100(10.0));
        let per_month = compute(&WorkloadInput {
            traffic_value: 25_920_000.0,
            traffic_unit: TrafficUnit::RequestsPerMonth,
            ..a100(0.0)
        });
        assert!(close(per_sec.monthly_savings_usd, per_month.monthly_savings_usd));
        assert_eq!(per_sec.gpus_saved, per_month.gpus_saved);
    }

    #[test]
    fn reduced_activation_is_twenty_percent() {
        let m = compute(&a100(100.0));
        assert!(close(m.reduced_activation_mb, 409.6));
    }

    #[test]
    fn zero_traffic_costs_nothing() {
        let b = breakdown(&a100(0.0));
        assert_eq!(b.cost_base, 0.0);
        assert_eq!(b.metrics.extra_monthly_requests, 0.0);
        assert_eq!(b.fleet_base, 1);
    }

    // -- degenerate input --

    #[test]
    fn zero_activation_memory_yields_zero_rates() {
        let b = breakdown(&WorkloadInput {
            peak_activation_memory_mb: 0.0,
            ..a100(1000.0)
        });
        assert_eq!(b.rate_base, 0.0);
        assert_eq!(b.rate_optimized, 0.0);
        assert_eq!(b.hours_base, 0.0);
        assert_eq!(b.cost_base, 0.0);
        assert_eq!(b.metrics.monthly_savings_usd, 0.0);
        assert_eq!(b.metrics.compute_hours_reclaimed, 0.0);
        assert_eq!(b.metrics.extra_monthly_requests, 0.0);
        assert_eq!(b.metrics.gpus_saved, 0);
        assert_eq!(b.metrics.reduced_activation_mb, 0.0);
    }

    #[test]
    fn negative_activation_memory_is_unserviceable() {
        let m = compute(&WorkloadInput {
            peak_activation_memory_mb: -10.0,
            ..a100(100.0)
        });
        assert!(m.monthly_savings_usd.is_finite());
        assert_eq!(m.monthly_savings_usd, 0.0);
    }

    #[test]
    fn tiny_activation_memory_stays_finite() {
        let m = compute(&WorkloadInput {
            peak_activation_memory_mb: f64::MIN_POSITIVE,
            ..a100(100.0)
        });
        assert!(m.monthly_savings_usd.is_finite());
        assert!(m.extra_monthly_requests.is_finite());
    }

    #[test]
    fn traffic_beyond_f64_range_is_unserviceable() {
        // 1e303 req/s overflows once scaled to a month.
        let b = breakdown(&a100(1e303));
        assert!(b.is_finite());
        assert_eq!(b.requests_per_month, 0.0);
        assert_eq!(b.fleet_base, 0);
        assert_eq!(b.fleet_optimized, 0);
        assert_eq!(b.cost_base, 0.0);
        assert_eq!(b.metrics.monthly_savings_usd, 0.0);
        assert_eq!(b.metrics.gpus_saved, 0);
    }

    #[test]
    fn huge_activation_memory_with_heavy_traffic_stays_finite() {
        let b = breakdown(&WorkloadInput {
            peak_activation_memory_mb: 1e300,
            ..a100(1e10)
        });
        assert!(b.is_finite());
        assert_eq!(b.requests_per_second, 1e10);
        assert_eq!(b.hours_base, 0.0);
        assert_eq!(b.metrics.monthly_savings_usd, 0.0);
        assert_eq!(b.metrics.compute_hours_reclaimed, 0.0);
        assert!(close(b.metrics.reduced_activation_mb, 2e299));
    }

    #[test]
    fn fleet_beyond_u32_is_unserviceable() {
        // 1e13 req/s at 650 req/s per GPU needs ~1.5e10 GPUs.
        let b = breakdown(&a100(1e13));
        assert!(b.is_finite());
        assert_eq!(b.fleet_base, 0);
        assert_eq!(b.metrics.gpus_saved, 0);
        assert_eq!(b.requests_per_second, 1e13);
    }

    #[test]
    fn extreme_inputs_never_leak_non_finite_values() {
        for mem in [f64::MIN_POSITIVE, 1e-300, 1.0, 2048.0, 1e300, f64::MAX] {
            for traffic in [0.0, 1.0, 1e10, 1e300, 1e303, f64::MAX] {
                for unit in [
                    TrafficUnit::RequestsPerSecond,
                    TrafficUnit::RequestsPerMonth,
                ] {
                    let b = breakdown(&WorkloadInput {
                        peak_activation_memory_mb: mem,
                        traffic_value: traffic,
                        traffic_unit: unit,
                        ..WorkloadInput::default()
                    });
                    assert!(b.is_finite(), "mem={mem} traffic={traffic} {unit:?}");
                    assert!(b.fleet_base >= b.fleet_optimized);
                }
            }
        }
    }

    #[test]
    fn fleet_size_floor_is_one() {
        assert_eq!(fleet_size(0.0, 650.0), 1);
        assert_eq!(fleet_size(650.0, 650.0), 1);
        assert_eq!(fleet_size(650.1, 650.0), 2);
    }
}
