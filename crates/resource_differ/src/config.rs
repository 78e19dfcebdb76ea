use serde::{Deserialize, Serialize};

/// Label the controller places on the pod template of every Job it owns.
pub const OWNING_LABEL: &str = "contour.operator.projectcontour.io/owning-contour";

/// Settings that change how snapshots are compared.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct DiffConfig {
    /// Ownership marker that must be present on a Job's template labels.
    pub owner_label: String,
}

impl Default for DiffConfig {
    fn default() -> Self {
        DiffConfig {
            owner_label: OWNING_LABEL.to_string(),
        }
    }
}

impl DiffConfig {
    pub fn with_owner_label(owner_label: impl Into<String>) -> Self {
        DiffConfig {
            owner_label: owner_label.into(),
        }
    }
}
