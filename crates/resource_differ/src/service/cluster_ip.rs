use crate::util::semantic::semantic_eq;

use k8s_openapi::api::core::v1::Service;
use kube::ResourceExt;
use tracing::debug;

use super::{ports, spec_mut};

/// Checks if the spec of current and expected ClusterIP Service match, and if not,
/// returns current with the differing fields taken from expected.
///
/// The cluster IP is never compared since it's assigned by the API server. An
/// empty string matches an unset field, as the API server drops empty values.
pub fn cluster_ip_service_changed(current: &Service, expected: &Service) -> Option<Service> {
    let mut updated = current.clone();
    let mut changed = false;

    let current_spec = current.spec.as_ref();
    let expected_spec = expected.spec.as_ref();

    let current_ports = ports(current);
    let expected_ports = ports(expected);
    if current_ports.len() != expected_ports.len() || !semantic_eq(current_ports, expected_ports) {
        debug!(service = %current.name_any(), "Service ports changed");
        spec_mut(&mut updated).ports = expected_spec.and_then(|s| s.ports.clone());
        changed = true;
    }

    if !semantic_eq(
        &current_spec.and_then(|s| s.selector.as_ref()),
        &expected_spec.and_then(|s| s.selector.as_ref()),
    ) {
        debug!(service = %current.name_any(), "Service selector changed");
        spec_mut(&mut updated).selector = expected_spec.and_then(|s| s.selector.clone());
        changed = true;
    }

    if !semantic_eq(
        &current_spec.and_then(|s| s.session_affinity.as_ref()),
        &expected_spec.and_then(|s| s.session_affinity.as_ref()),
    ) {
        debug!(service = %current.name_any(), "Service session affinity changed");
        spec_mut(&mut updated).session_affinity = expected_spec.and_then(|s| s.session_affinity.clone());
        changed = true;
    }

    if !semantic_eq(
        &current_spec.and_then(|s| s.type_.as_ref()),
        &expected_spec.and_then(|s| s.type_.as_ref()),
    ) {
        debug!(service = %current.name_any(), "Service type changed");
        spec_mut(&mut updated).type_ = expected_spec.and_then(|s| s.type_.clone());
        changed = true;
    }

    changed.then_some(updated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{cluster_ip_service, labels, service_port, without_assigned_fields};
    use k8s_openapi::apimachinery::pkg::util::intstr::IntOrString;

    #[test]
    fn test_unchanged_service() {
        let current = cluster_ip_service();
        assert!(cluster_ip_service_changed(&current, &current.clone()).is_none());
    }

    #[test]
    fn test_cluster_ip_is_ignored() {
        let current = cluster_ip_service();
        let expected = without_assigned_fields(&current);
        assert!(cluster_ip_service_changed(&current, &expected).is_none());
    }

    #[test]
    fn test_port_count_change_replaces_ports() {
        let mut current = cluster_ip_service();
        current.spec.as_mut().unwrap().ports = Some(vec![
            service_port("xds", 8001, 8001, None),
            service_port("metrics", 8000, 8000, None),
        ]);
        let mut expected = without_assigned_fields(&current);
        expected
            .spec
            .as_mut()
            .unwrap()
            .ports
            .as_mut()
            .unwrap()
            .push(service_port("debug", 6060, 6060, None));

        let updated = cluster_ip_service_changed(&current, &expected).unwrap();
        let updated_spec = updated.spec.unwrap();
        assert_eq!(updated_spec.ports, expected.spec.unwrap().ports);
        assert_eq!(updated_spec.cluster_ip, Some("10.96.4.12".to_string()));
    }

    #[test]
    fn test_port_content_change_replaces_ports() {
        let current = cluster_ip_service();
        let mut expected = without_assigned_fields(&current);
        expected.spec.as_mut().unwrap().ports.as_mut().unwrap()[0].target_port =
            Some(IntOrString::String("xds".to_string()));

        let updated = cluster_ip_service_changed(&current, &expected).unwrap();
        assert_eq!(updated.spec.unwrap().ports, expected.spec.unwrap().ports);
    }

    #[test]
    fn test_selector_change_only_touches_selector() {
        let current = cluster_ip_service();
        let mut expected = without_assigned_fields(&current);
        expected.spec.as_mut().unwrap().selector = Some(labels(&[("app", "contour-next")]));

        let updated = cluster_ip_service_changed(&current, &expected).unwrap();
        let mut want = current.clone();
        want.spec.as_mut().unwrap().selector = Some(labels(&[("app", "contour-next")]));
        assert_eq!(updated, want);
    }

    #[test]
    fn test_session_affinity_and_type_change() {
        let current = cluster_ip_service();
        let mut expected = without_assigned_fields(&current);
        expected.spec.as_mut().unwrap().session_affinity = Some("ClientIP".to_string());
        expected.spec.as_mut().unwrap().type_ = Some("NodePort".to_string());

        let updated = cluster_ip_service_changed(&current, &expected).unwrap();
        let spec = updated.spec.unwrap();
        assert_eq!(spec.session_affinity, Some("ClientIP".to_string()));
        assert_eq!(spec.type_, Some("NodePort".to_string()));
        assert_eq!(spec.cluster_ip, Some("10.96.4.12".to_string()));
    }

    #[test]
    fn test_service_labels_are_not_compared() {
        let current = cluster_ip_service();
        let mut expected = current.clone();
        expected.metadata.labels = Some(labels(&[("app", "something-else")]));
        assert!(cluster_ip_service_changed(&current, &expected).is_none());
    }
}
