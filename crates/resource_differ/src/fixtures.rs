//! Snapshots shaped like the ones the controller manages, shared by the unit tests.

use crate::config::OWNING_LABEL;
use k8s_openapi::api::apps::v1::{DaemonSet, DaemonSetSpec, Deployment, DeploymentSpec};
use k8s_openapi::api::batch::v1::{Job, JobSpec};
use k8s_openapi::api::core::v1::{
    Container, ContainerPort, PodSpec, PodTemplateSpec, Service, ServicePort, ServiceSpec,
};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::{LabelSelector, ObjectMeta};
use k8s_openapi::apimachinery::pkg::util::intstr::IntOrString;
use std::collections::BTreeMap;

pub fn labels(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn metadata(name: &str, labels: BTreeMap<String, String>) -> ObjectMeta {
    ObjectMeta {
        name: Some(name.to_string()),
        namespace: Some("projectcontour".to_string()),
        labels: Some(labels),
        ..Default::default()
    }
}

fn pod_template(app: &str, image: &str) -> PodTemplateSpec {
    PodTemplateSpec {
        metadata: Some(ObjectMeta {
            labels: Some(labels(&[("app", app)])),
            ..Default::default()
        }),
        spec: Some(PodSpec {
            containers: vec![Container {
                name: app.to_string(),
                image: Some(image.to_string()),
                ports: Some(vec![ContainerPort {
                    container_port: 8080,
                    ..Default::default()
                }]),
                ..Default::default()
            }],
            ..Default::default()
        }),
    }
}

pub fn daemonset() -> DaemonSet {
    DaemonSet {
        metadata: metadata("envoy", labels(&[("app", "envoy")])),
        spec: Some(DaemonSetSpec {
            selector: LabelSelector {
                match_labels: Some(labels(&[("app", "envoy")])),
                ..Default::default()
            },
            template: pod_template("envoy", "docker.io/envoyproxy/envoy:v1.18.3"),
            ..Default::default()
        }),
        status: None,
    }
}

pub fn deployment() -> Deployment {
    Deployment {
        metadata: metadata("contour", labels(&[("app", "contour")])),
        spec: Some(DeploymentSpec {
            replicas: Some(2),
            selector: LabelSelector {
                match_labels: Some(labels(&[("app", "contour")])),
                ..Default::default()
            },
            template: pod_template("contour", "ghcr.io/projectcontour/contour:v1.17.0"),
            ..Default::default()
        }),
        status: None,
    }
}

pub fn job() -> Job {
    let mut template = pod_template("contour-certgen", "ghcr.io/projectcontour/contour:v1.17.0");
    if let Some(meta) = template.metadata.as_mut() {
        meta.labels = Some(labels(&[
            ("app", "contour-certgen"),
            (OWNING_LABEL, "contour-sample"),
        ]));
    }

    Job {
        metadata: metadata("contour-certgen", labels(&[("app", "contour-certgen")])),
        spec: Some(JobSpec {
            parallelism: Some(1),
            completions: Some(1),
            backoff_limit: Some(1),
            template,
            ..Default::default()
        }),
        status: None,
    }
}

pub fn service_port(name: &str, port: i32, target_port: i32, node_port: Option<i32>) -> ServicePort {
    ServicePort {
        name: Some(name.to_string()),
        protocol: Some("TCP".to_string()),
        port,
        target_port: Some(IntOrString::Int(target_port)),
        node_port,
        ..Default::default()
    }
}

pub fn cluster_ip_service() -> Service {
    Service {
        metadata: metadata("contour", labels(&[("app", "contour")])),
        spec: Some(ServiceSpec {
            type_: Some("ClusterIP".to_string()),
            cluster_ip: Some("10.96.4.12".to_string()),
            selector: Some(labels(&[("app", "contour")])),
            session_affinity: Some("None".to_string()),
            ports: Some(vec![service_port("xds", 8001, 8001, None)]),
            ..Default::default()
        }),
        status: None,
    }
}

pub fn load_balancer_service() -> Service {
    Service {
        metadata: metadata("envoy", labels(&[("app", "envoy")])),
        spec: Some(ServiceSpec {
            type_: Some("LoadBalancer".to_string()),
            cluster_ip: Some("10.96.200.7".to_string()),
            external_traffic_policy: Some("Local".to_string()),
            health_check_node_port: Some(31644),
            selector: Some(labels(&[("app", "envoy")])),
            session_affinity: Some("None".to_string()),
            ports: Some(vec![
                service_port("http", 80, 8080, Some(30080)),
                service_port("https", 443, 8443, Some(30443)),
            ]),
            ..Default::default()
        }),
        status: None,
    }
}

/// Strips what the API server fills in, leaving a snapshot shaped like the
/// desired state the controller builds.
pub fn without_assigned_fields(service: &Service) -> Service {
    let mut desired = service.clone();
    if let Some(spec) = desired.spec.as_mut() {
        spec.cluster_ip = None;
        spec.health_check_node_port = None;
        for port in spec.ports.iter_mut().flatten() {
            port.node_port = None;
        }
    }
    desired
}
