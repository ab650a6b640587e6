use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Kind of grid infrastructure being built.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ProjectType {
    Transmission,
    Substation,
    Distribution,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Terrain {
    Hilly,
    Plains,
    Coastal,
    Desert,
}

/// Track record of the contracted vendor. Editable in what-if scenarios.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum VendorPerformance {
    Excellent,
    Good,
    Average,
    Poor,
}

/// Availability of key materials. Editable in what-if scenarios.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum MaterialAvailability {
    High,
    Medium,
    Low,
}

macro_rules! impl_display_via_serde {
    ($($ty:ty),*) => {
        $(
            impl std::fmt::Display for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    let s = serde_json::to_string(self).unwrap_or_default();
                    write!(f, "{}", s.trim_matches('"'))
                }
            }
        )*
    };
}

impl_display_via_serde!(ProjectType, Terrain, VendorPerformance, MaterialAvailability);

/// Request payload for `POST /predict`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInput {
    pub project_name: String,
    pub project_type: ProjectType,
    pub terrain: Terrain,
    pub vendor_performance: VendorPerformance,
    pub material_availability: MaterialAvailability,
}

impl ProjectInput {
    /// Reject inputs that must never reach the network.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.project_name.trim().is_empty() {
            return Err(ValidationError::EmptyProjectName);
        }
        Ok(())
    }
}

impl Default for ProjectInput {
    /// The form's initial values.
    fn default() -> Self {
        Self {
            project_name: String::new(),
            project_type: ProjectType::Transmission,
            terrain: Terrain::Plains,
            vendor_performance: VendorPerformance::Good,
            material_availability: MaterialAvailability::Medium,
        }
    }
}
