use crate::util::semantic::semantic_eq;

use k8s_openapi::api::apps::v1::Deployment;
use kube::ResourceExt;
use tracing::debug;

/// Checks if current and expected Deployment match, and if not, returns the
/// current Deployment with labels and/or spec taken from expected.
pub fn deployment_config_changed(current: &Deployment, expected: &Deployment) -> Option<Deployment> {
    let mut updated = current.clone();
    let mut changed = false;

    if !semantic_eq(&current.metadata.labels, &expected.metadata.labels) {
        debug!(deployment = %current.name_any(), "Deployment labels changed");
        updated.metadata.labels = expected.metadata.labels.clone();
        changed = true;
    }

    if !semantic_eq(&current.spec, &expected.spec) {
        debug!(deployment = %current.name_any(), "Deployment spec changed");
        updated.spec = expected.spec.clone();
        changed = true;
    }

    changed.then_some(updated)
}
