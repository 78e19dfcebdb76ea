//! Change detection for the workloads and Services a reconciliation controller manages.
//!
//! Every comparison takes the `current` snapshot read from the cluster and the
//! `expected` snapshot built from the desired state, and returns `Some(updated)`
//! when the controller should apply `updated`.

pub mod config;
pub mod differ;
pub mod manifest;
pub mod service;
pub mod util;
pub mod workload;

pub use config::{DiffConfig, OWNING_LABEL};
pub use differ::Differ;
pub use manifest::ResourceKind;
pub use service::{cluster_ip_service_changed, load_balancer_service_changed};
pub use util::errors::{Error, Result};
pub use util::semantic::semantic_eq;
pub use workload::{
    daemonset_config_changed, deployment_config_changed, job_config_changed, job_config_changed_with_owner,
};

#[cfg(test)]
pub(crate) mod fixtures;
