use crate::util::semantic::semantic_eq;

use k8s_openapi::api::apps::v1::DaemonSet;
use kube::ResourceExt;
use tracing::debug;

/// Checks if current and expected DaemonSet match, and if not, returns the
/// current DaemonSet with labels and/or spec taken from expected.
pub fn daemonset_config_changed(current: &DaemonSet, expected: &DaemonSet) -> Option<DaemonSet> {
    let mut updated = current.clone();
    let mut changed = false;

    if !semantic_eq(&current.metadata.labels, &expected.metadata.labels) {
        debug!(daemonset = %current.name_any(), "DaemonSet labels changed");
        updated.metadata.labels = expected.metadata.labels.clone();
        changed = true;
    }

    if !semantic_eq(&current.spec, &expected.spec) {
        debug!(daemonset = %current.name_any(), "DaemonSet spec changed");
        updated.spec = expected.spec.clone();
        changed = true;
    }

    changed.then_some(updated)
}
