//! The calculator's input value.

use serde::{Deserialize, Serialize};

use crate::catalog::{DeploymentMode, GpuProfile};
use crate::error::CoreError;
use crate::traffic::TrafficUnit;

/// Default peak activation memory shown in the calculator (MB).
pub const DEFAULT_ACTIVATION_MEMORY_MB: f64 = 2048.0;
/// Default baseline traffic shown in the calculator.
pub const DEFAULT_TRAFFIC_VALUE: f64 = 100.0;

/// Which pair of headline metrics the results panel leads with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    Capacity,
    #[default]
    Dollars,
}

/// Everything the savings engine needs, as selected by the user.
///
/// Missing JSON fields fall back to the calculator defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkloadInput {
    pub gpu_profile: GpuProfile,
    pub deployment_mode: DeploymentMode,
    pub peak_activation_memory_mb: f64,
    pub traffic_value: f64,
    pub traffic_unit: TrafficUnit,
    pub display_mode: DisplayMode,
}

impl Default for WorkloadInput {
    fn default() -> Self {
        Self {
            gpu_profile: GpuProfile::default(),
            deployment_mode: DeploymentMode::default(),
            peak_activation_memory_mb: DEFAULT_ACTIVATION_MEMORY_MB,
            traffic_value: DEFAULT_TRAFFIC_VALUE,
            traffic_unit: TrafficUnit::default(),
            display_mode: DisplayMode::default(),
        }
    }
}

impl WorkloadInput {
    /// Boundary check run before handing user input to the engine.
    ///
    /// Zero activation memory is accepted; the engine reports it as "no
    /// throughput achievable".
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_non_negative(self.peak_activation_memory_mb, "peak_activation_memory_mb")?;
        validate_non_negative(self.traffic_value, "traffic_value")?;
        Ok(())
    }
}

/// Reject `NaN`, infinities and negative numbers for the field `name`.
pub fn validate_non_negative(value: f64, name: &str) -> Result<(), CoreError> {
    if !value.is_finite() || value < 0.0 {
        return Err(CoreError::Validation(format!(
            "{name} must be a finite non-negative number, got {value}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn empty_json_uses_calculator_defaults() {
        let input: WorkloadInput = serde_json::from_str("{}").unwrap();
        assert_eq!(input, WorkloadInput::default());
        assert_eq!(input.gpu_profile, GpuProfile::A100);
        assert_eq!(input.display_mode, DisplayMode::Dollars);
    }

    #[test]
    fn full_json_parses() {
        let input: WorkloadInput = serde_json::from_str(
            r#"{
                "gpu_profile": "H100",
                "deployment_mode": "Private / Colocation",
                "peak_activation_memory_mb": 4096,
                "traffic_value": 5000000,
                "traffic_unit": "requests_per_month",
                "display_mode": "capacity"
            }"#,
        )
        .unwrap();
        assert_eq!(input.gpu_profile, GpuProfile::H100);
        assert_eq!(input.deployment_mode, DeploymentMode::PrivateColocation);
        assert_eq!(input.traffic_unit, TrafficUnit::RequestsPerMonth);
        assert_eq!(input.display_mode, DisplayMode::Capacity);
    }

    #[test]
    fn validate_accepts_zero_memory() {
        let input = WorkloadInput {
            peak_activation_memory_mb: 0.0,
            ..WorkloadInput::default()
        };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn validate_rejects_negative_traffic() {
        let input = WorkloadInput {
            traffic_value: -1.0,
            ..WorkloadInput::default()
        };
        assert_matches!(input.validate(), Err(CoreError::Validation(msg)) if msg.contains("traffic_value"));
    }

    #[test]
    fn validate_rejects_non_finite_memory() {
        let input = WorkloadInput {
            peak_activation_memory_mb: f64::INFINITY,
            ..WorkloadInput::default()
        };
        assert_matches!(input.validate(), Err(CoreError::Validation(_)));
    }
}
