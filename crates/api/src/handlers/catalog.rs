//! Handler for the calculator's selector catalogs.

use axum::Json;
use neurolattice_core::catalog::{deployment_options, DeploymentOption, HardwareProfile, HARDWARE_CATALOG};
use neurolattice_core::workload::WorkloadInput;
use serde::Serialize;

use crate::response::DataResponse;

/// Everything the calculator form needs to populate its selectors.
#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub hardware: &'static [HardwareProfile],
    pub deployment_modes: Vec<DeploymentOption>,
    /// Initial form values.
    pub defaults: WorkloadInput,
}

/// GET /api/v1/catalog
pub async fn get_catalog() -> Json<DataResponse<CatalogResponse>> {
    Json(DataResponse {
        data: CatalogResponse {
            hardware: &HARDWARE_CATALOG,
            deployment_modes: deployment_options(),
            defaults: WorkloadInput::default(),
        },
    })
}
