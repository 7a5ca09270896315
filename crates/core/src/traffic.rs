//! Traffic units and the fixed 30-day month conversion.

use serde::{Deserialize, Serialize};

/// Seconds in the 30-day month used for every request-rate conversion.
pub const SECONDS_PER_MONTH: f64 = 2_592_000.0;

/// Unit of the traffic figure entered by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrafficUnit {
    #[default]
    RequestsPerSecond,
    RequestsPerMonth,
}

/// A traffic figure expressed in both units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NormalizedTraffic {
    pub requests_per_second: f64,
    pub requests_per_month: f64,
}

/// Express `value` (given in `unit`) as both requests/sec and requests/month.
///
/// Negative or non-finite values carry no traffic and normalize to zero.
pub fn normalize(value: f64, unit: TrafficUnit) -> NormalizedTraffic {
    let value = if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    };
    match unit {
        TrafficUnit::RequestsPerSecond => NormalizedTraffic {
            requests_per_second: value,
            requests_per_month: value * SECONDS_PER_MONTH,
        },
        TrafficUnit::RequestsPerMonth => NormalizedTraffic {
            requests_per_second: value / SECONDS_PER_MONTH,
            requests_per_month: value,
        },
    }
}

/// Convert a traffic figure when the user flips the unit toggle.
///
/// The result is rounded to a whole number of requests, so converting a
/// small monthly volume to requests/sec may round down to zero.
pub fn convert_traffic(value: f64, from: TrafficUnit, to: TrafficUnit) -> f64 {
    if from == to {
        return value;
    }
    let converted = match to {
        TrafficUnit::RequestsPerMonth => value * SECONDS_PER_MONTH,
        TrafficUnit::RequestsPerSecond => value / SECONDS_PER_MONTH,
    };
    converted.round()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_from_requests_per_second() {
        let t = normalize(100.0, TrafficUnit::RequestsPerSecond);
        assert!((t.requests_per_second - 100.0).abs() < f64::EPSILON);
        assert!((t.requests_per_month - 259_200_000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn normalize_from_requests_per_month() {
        let t = normalize(2_592_000.0, TrafficUnit::RequestsPerMonth);
        assert!((t.requests_per_second - 1.0).abs() < f64::EPSILON);
        assert!((t.requests_per_month - 2_592_000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn normalize_clamps_negative_and_nan_to_zero() {
        for bad in [-5.0, f64::NAN, f64::INFINITY] {
            let t = normalize(bad, TrafficUnit::RequestsPerSecond);
            assert_eq!(t.requests_per_second, 0.0);
            assert_eq!(t.requests_per_month, 0.0);
        }
    }

    #[test]
    fn toggle_same_unit_is_identity() {
        assert_eq!(
            convert_traffic(12.5, TrafficUnit::RequestsPerSecond, TrafficUnit::RequestsPerSecond),
            12.5
        );
    }

    #[test]
    fn toggle_round_trip_returns_original_rate() {
        for rps in [0.0, 1.0, 42.0, 100.0, 12_345.0] {
            let monthly =
                convert_traffic(rps, TrafficUnit::RequestsPerSecond, TrafficUnit::RequestsPerMonth);
            let back =
                convert_traffic(monthly, TrafficUnit::RequestsPerMonth, TrafficUnit::RequestsPerSecond);
            assert_eq!(back, rps);
        }
    }

    #[test]
    fn toggle_to_seconds_rounds_small_volumes_down() {
        assert_eq!(
            convert_traffic(1_000_000.0, TrafficUnit::RequestsPerMonth, TrafficUnit::RequestsPerSecond),
            0.0
        );
    }

    #[test]
    fn unit_wire_names() {
        assert_eq!(
            serde_json::to_value(TrafficUnit::RequestsPerMonth).unwrap(),
            "requests_per_month"
        );
    }
}
