use crate::config::DiffConfig;
use crate::service::{cluster_ip_service_changed, load_balancer_service_changed};
use crate::workload::{daemonset_config_changed, deployment_config_changed, job_config_changed_with_owner};

use k8s_openapi::api::apps::v1::{DaemonSet, Deployment};
use k8s_openapi::api::batch::v1::Job;
use k8s_openapi::api::core::v1::Service;

/// The comparison functions bound to a [`DiffConfig`].
///
/// Holds no state between calls; one value can be shared by every worker of a controller.
#[derive(Clone, Debug, Default)]
pub struct Differ {
    config: DiffConfig,
}

impl Differ {
    pub fn new(config: DiffConfig) -> Self {
        Differ { config }
    }

    pub fn config(&self) -> &DiffConfig {
        &self.config
    }

    pub fn daemonset_config_changed(&self, current: &DaemonSet, expected: &DaemonSet) -> Option<DaemonSet> {
        daemonset_config_changed(current, expected)
    }

    pub fn job_config_changed(&self, current: &Job, expected: &Job) -> Option<Job> {
        job_config_changed_with_owner(current, expected, &self.config.owner_label)
    }

    pub fn deployment_config_changed(&self, current: &Deployment, expected: &Deployment) -> Option<Deployment> {
        deployment_config_changed(current, expected)
    }

    pub fn cluster_ip_service_changed(&self, current: &Service, expected: &Service) -> Option<Service> {
        cluster_ip_service_changed(current, expected)
    }

    pub fn load_balancer_service_changed(&self, current: &Service, expected: &Service) -> Option<Service> {
        load_balancer_service_changed(current, expected)
    }
}
