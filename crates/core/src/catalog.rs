//! Fixed hardware and deployment catalogs.
//!
//! The calculator only offers these entries; anything else is rejected at
//! deserialization time because both selectors are closed enums.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Hardware
// ---------------------------------------------------------------------------

/// Pricing and memory characteristics of a single GPU model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HardwareProfile {
    pub name: &'static str,
    pub hourly_cost_usd: f64,
    pub vram_gb: u32,
    pub memory_bandwidth_gb_s: f64,
}

/// Every GPU the calculator knows about, in display order.
pub const HARDWARE_CATALOG: [HardwareProfile; 5] = [
    HardwareProfile {
        name: "T4",
        hourly_cost_usd: 0.35,
        vram_gb: 16,
        memory_bandwidth_gb_s: 300.0,
    },
    HardwareProfile {
        name: "L4",
        hourly_cost_usd: 0.80,
        vram_gb: 24,
        memory_bandwidth_gb_s: 600.0,
    },
    HardwareProfile {
        name: "A10",
        hourly_cost_usd: 1.00,
        vram_gb: 24,
        memory_bandwidth_gb_s: 600.0,
    },
    HardwareProfile {
        name: "A100",
        hourly_cost_usd: 3.50,
        vram_gb: 80,
        memory_bandwidth_gb_s: 2000.0,
    },
    HardwareProfile {
        name: "H100",
        hourly_cost_usd: 8.50,
        vram_gb: 80,
        memory_bandwidth_gb_s: 3350.0,
    },
];

/// Selector for an entry of [`HARDWARE_CATALOG`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GpuProfile {
    T4,
    L4,
    A10,
    #[default]
    A100,
    H100,
}

impl GpuProfile {
    /// All selectable GPUs, in catalog order.
    pub const ALL: [GpuProfile; 5] = [Self::T4, Self::L4, Self::A10, Self::A100, Self::H100];

    /// Catalog entry backing this selector.
    pub fn profile(self) -> &'static HardwareProfile {
        let index = match self {
            Self::T4 => 0,
            Self::L4 => 1,
            Self::A10 => 2,
            Self::A100 => 3,
            Self::H100 => 4,
        };
        &HARDWARE_CATALOG[index]
    }

    pub fn name(self) -> &'static str {
        self.profile().name
    }
}

// ---------------------------------------------------------------------------
// Deployment
// ---------------------------------------------------------------------------

/// Where the fleet runs. Each mode discounts the list hourly price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DeploymentMode {
    #[default]
    #[serde(rename = "Cloud (On-demand)")]
    CloudOnDemand,
    #[serde(rename = "Cloud (Reserved)")]
    CloudReserved,
    #[serde(rename = "Private / Colocation")]
    PrivateColocation,
}

impl DeploymentMode {
    pub const ALL: [DeploymentMode; 3] = [
        Self::CloudOnDemand,
        Self::CloudReserved,
        Self::PrivateColocation,
    ];

    /// Multiplier applied to the GPU hourly cost, in `(0, 1]`.
    pub fn multiplier(self) -> f64 {
        match self {
            Self::CloudOnDemand => 1.0,
            Self::CloudReserved => 0.6,
            Self::PrivateColocation => 1.0,
        }
    }

    /// Human-readable label, identical to the wire name.
    pub fn label(self) -> &'static str {
        match self {
            Self::CloudOnDemand => "Cloud (On-demand)",
            Self::CloudReserved => "Cloud (Reserved)",
            Self::PrivateColocation => "Private / Colocation",
        }
    }
}

/// A deployment mode as listed to clients.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DeploymentOption {
    pub name: &'static str,
    pub multiplier: f64,
}

/// All deployment modes with their multipliers, in display order.
pub fn deployment_options() -> Vec<DeploymentOption> {
    DeploymentMode::ALL
        .iter()
        .map(|mode| DeploymentOption {
            name: mode.label(),
            multiplier: mode.multiplier(),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
