use crate::util::semantic::semantic_eq;

use k8s_openapi::api::core::v1::Service;
use kube::ResourceExt;
use tracing::debug;

use super::{ports, spec_mut};

/// Checks if the spec of current and expected LoadBalancer Service match, and if
/// not, returns current with the differing fields taken from expected.
///
/// A port's nodePort and the healthCheckNodePort are never compared since they're
/// allocated by the API server. When both sides have the same number of ports,
/// name, protocol, port and targetPort are patched one port at a time so the
/// allocated node ports survive. An empty string matches an unset field, as the
/// API server drops empty values.
pub fn load_balancer_service_changed(current: &Service, expected: &Service) -> Option<Service> {
    let name = current.name_any();
    let mut updated = current.clone();
    let mut changed = false;

    let current_spec = current.spec.as_ref();
    let expected_spec = expected.spec.as_ref();

    let current_ports = ports(current);
    let expected_ports = ports(expected);
    if current_ports.len() != expected_ports.len() {
        debug!(service = %name, "Service port count changed");
        spec_mut(&mut updated).ports = expected_spec.and_then(|s| s.ports.clone());
        changed = true;
    } else if let Some(updated_ports) = spec_mut(&mut updated).ports.as_mut() {
        for (i, (port, want)) in updated_ports.iter_mut().zip(expected_ports).enumerate() {
            if !semantic_eq(&port.name, &want.name) {
                debug!(service = %name, port = i, "Service port name changed");
                port.name = want.name.clone();
                changed = true;
            }
            if !semantic_eq(&port.protocol, &want.protocol) {
                debug!(service = %name, port = i, "Service port protocol changed");
                port.protocol = want.protocol.clone();
                changed = true;
            }
            if port.port != want.port {
                debug!(service = %name, port = i, "Service port number changed");
                port.port = want.port;
                changed = true;
            }
            if !semantic_eq(&port.target_port, &want.target_port) {
                debug!(service = %name, port = i, "Service target port changed");
                port.target_port = want.target_port.clone();
                changed = true;
            }
        }
    }

    if !semantic_eq(
        &current_spec.and_then(|s| s.selector.as_ref()),
        &expected_spec.and_then(|s| s.selector.as_ref()),
    ) {
        debug!(service = %name, "Service selector changed");
        spec_mut(&mut updated).selector = expected_spec.and_then(|s| s.selector.clone());
        changed = true;
    }

    if !semantic_eq(
        &current_spec.and_then(|s| s.external_traffic_policy.as_ref()),
        &expected_spec.and_then(|s| s.external_traffic_policy.as_ref()),
    ) {
        debug!(service = %name, "Service external traffic policy changed");
        spec_mut(&mut updated).external_traffic_policy =
            expected_spec.and_then(|s| s.external_traffic_policy.clone());
        changed = true;
    }

    if !semantic_eq(
        &current_spec.and_then(|s| s.session_affinity.as_ref()),
        &expected_spec.and_then(|s| s.session_affinity.as_ref()),
    ) {
        debug!(service = %name, "Service session affinity changed");
        spec_mut(&mut updated).session_affinity = expected_spec.and_then(|s| s.session_affinity.clone());
        changed = true;
    }

    if !semantic_eq(
        &current_spec.and_then(|s| s.type_.as_ref()),
        &expected_spec.and_then(|s| s.type_.as_ref()),
    ) {
        debug!(service = %name, "Service type changed");
        spec_mut(&mut updated).type_ = expected_spec.and_then(|s| s.type_.clone());
        changed = true;
    }

    changed.then_some(updated)
}
