use crate::config::OWNING_LABEL;
use crate::util::semantic::semantic_eq;

use k8s_openapi::api::batch::v1::{Job, JobSpec};
use kube::ResourceExt;
use tracing::debug;

/// Checks if current and expected Job match, and if not, returns expected.
///
/// See [`job_config_changed_with_owner`] for the comparison rules.
pub fn job_config_changed(current: &Job, expected: &Job) -> Option<Job> {
    job_config_changed_with_owner(current, expected, OWNING_LABEL)
}

/// Same as [`job_config_changed`] with a custom ownership marker.
///
/// Completions is immutable once the Job exists and is never compared. Template
/// labels are mostly generated by the Job controller, so only the presence of
/// `owner_label` is checked, and only when current has template labels at all.
///
/// Unlike the other comparisons, any difference returns the whole of expected
/// rather than a copy of current with the differing fields replaced.
pub fn job_config_changed_with_owner(current: &Job, expected: &Job, owner_label: &str) -> Option<Job> {
    let name = current.name_any();
    let mut changed = false;

    if !semantic_eq(&current.metadata.labels, &expected.metadata.labels) {
        debug!(job = %name, "Job labels changed");
        changed = true;
    }

    let current_spec = current.spec.as_ref();
    let expected_spec = expected.spec.as_ref();

    if !semantic_eq(
        &current_spec.and_then(|s| s.parallelism),
        &expected_spec.and_then(|s| s.parallelism),
    ) {
        debug!(job = %name, "Job parallelism changed");
        changed = true;
    }

    if !semantic_eq(
        &current_spec.and_then(|s| s.backoff_limit),
        &expected_spec.and_then(|s| s.backoff_limit),
    ) {
        debug!(job = %name, "Job backoff limit changed");
        changed = true;
    }

    if let Some(template_labels) = current_spec.and_then(template_labels) {
        if !template_labels.contains_key(owner_label) {
            debug!(job = %name, label = owner_label, "Job template is missing the owner label");
            changed = true;
        }
    }

    if !semantic_eq(
        &current_spec.and_then(|s| s.template.spec.as_ref()),
        &expected_spec.and_then(|s| s.template.spec.as_ref()),
    ) {
        debug!(job = %name, "Job template spec changed");
        changed = true;
    }

    changed.then(|| expected.clone())
}

fn template_labels(spec: &JobSpec) -> Option<&std::collections::BTreeMap<String, String>> {
    spec.template.metadata.as_ref()?.labels.as_ref()
}
