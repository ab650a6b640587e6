//! What-if scenarios over a submitted baseline.
//!
//! Only `vendor_performance` and `material_availability` may be perturbed;
//! every other field is carried over from the baseline.

use serde::{Deserialize, Serialize};

use crate::domain::{MaterialAvailability, ProjectInput, VendorPerformance};

/// The two editable fields of a re-analysis.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub vendor_performance: VendorPerformance,
    pub material_availability: MaterialAvailability,
}

impl Scenario {
    /// Editor seed: the baseline's current values.
    pub fn from_baseline(baseline: &ProjectInput) -> Self {
        Self {
            vendor_performance: baseline.vendor_performance,
            material_availability: baseline.material_availability,
        }
    }

    pub fn with_vendor_performance(mut self, vendor_performance: VendorPerformance) -> Self {
        self.vendor_performance = vendor_performance;
        self
    }

    pub fn with_material_availability(mut self, material_availability: MaterialAvailability) -> Self {
        self.material_availability = material_availability;
        self
    }

    /// Candidate input: the baseline with this scenario's two fields swapped in.
    pub fn apply(&self, baseline: &ProjectInput) -> ProjectInput {
        ProjectInput {
            vendor_performance: self.vendor_performance,
            material_availability: self.material_availability,
            ..baseline.clone()
        }
    }
}

/// True iff one of the two editable fields differs. Other fields are ignored.
pub fn has_changes(baseline: &ProjectInput, candidate: &ProjectInput) -> bool {
    baseline.vendor_performance != candidate.vendor_performance
        || baseline.material_availability != candidate.material_availability
}

/// Whether a re-analysis may be issued right now.
pub fn allows(baseline: &ProjectInput, candidate: &ProjectInput, in_flight: bool) -> bool {
    !in_flight && has_changes(baseline, candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ProjectType, Terrain};

    fn baseline() -> ProjectInput {
        ProjectInput {
            project_name: "Line A".to_string(),
            project_type: ProjectType::Transmission,
            terrain: Terrain::Plains,
            vendor_performance: VendorPerformance::Good,
            material_availability: MaterialAvailability::Medium,
        }
    }

    #[test]
    fn vendor_change_is_allowed() {
        let candidate = ProjectInput {
            vendor_performance: VendorPerformance::Excellent,
            ..baseline()
        };
        assert!(allows(&baseline(), &candidate, false));
    }

    #[test]
    fn material_change_is_allowed() {
        let candidate = ProjectInput {
            material_availability: MaterialAvailability::Low,
            ..baseline()
        };
        assert!(allows(&baseline(), &candidate, false));
    }

    #[test]
    fn identical_candidate_is_rejected() {
        assert!(!allows(&baseline(), &baseline(), false));
    }

    #[test]
    fn in_flight_request_blocks_reanalysis() {
        let candidate = ProjectInput {
            vendor_performance: VendorPerformance::Poor,
            ..baseline()
        };
        assert!(!allows(&baseline(), &candidate, true));
    }

    #[test]
    fn non_editable_fields_are_ignored() {
        let candidate = ProjectInput {
            project_name: "Line B".to_string(),
            terrain: Terrain::Desert,
            project_type: ProjectType::Substation,
            ..baseline()
        };
        assert!(!has_changes(&baseline(), &candidate));

        let candidate = ProjectInput {
            terrain: Terrain::Hilly,
            vendor_performance: VendorPerformance::Average,
            ..baseline()
        };
        assert!(has_changes(&baseline(), &candidate));
    }

    #[test]
    fn apply_copies_everything_else_from_baseline() {
        let scenario = Scenario::from_baseline(&baseline())
            .with_vendor_performance(VendorPerformance::Poor)
            .with_material_availability(MaterialAvailability::High);
        let candidate = scenario.apply(&baseline());

        assert_eq!(candidate.project_name, "Line A");
        assert_eq!(candidate.project_type, ProjectType::Transmission);
        assert_eq!(candidate.terrain, Terrain::Plains);
        assert_eq!(candidate.vendor_performance, VendorPerformance::Poor);
        assert_eq!(candidate.material_availability, MaterialAvailability::High);
    }

    #[test]
    fn unedited_scenario_reproduces_baseline() {
        let candidate = Scenario::from_baseline(&baseline()).apply(&baseline());
        assert_eq!(candidate, baseline());
    }
}
