use k8s_openapi::api::core::v1::{Service, ServicePort, ServiceSpec};

pub mod cluster_ip;
pub mod load_balancer;

pub use cluster_ip::cluster_ip_service_changed;
pub use load_balancer::load_balancer_service_changed;

/// The service's ports, with an absent list read as empty.
fn ports(service: &Service) -> &[ServicePort] {
    service
        .spec
        .as_ref()
        .and_then(|spec| spec.ports.as_deref())
        .unwrap_or(&[])
}

fn spec_mut(service: &mut Service) -> &mut ServiceSpec {
    service.spec.get_or_insert_with(ServiceSpec::default)
}
