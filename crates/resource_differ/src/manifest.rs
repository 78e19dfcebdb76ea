use crate::differ::Differ;
use crate::util::errors::{Error, Result};

use kube::core::TypeMeta;
use serde::{de::DeserializeOwned, Serialize};
use serde_yaml::Value;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Which comparison to run on a pair of manifests.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    DaemonSet,
    Job,
    Deployment,
    ClusterIpService,
    LoadBalancerService,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 5] = [
        ResourceKind::DaemonSet,
        ResourceKind::Job,
        ResourceKind::Deployment,
        ResourceKind::ClusterIpService,
        ResourceKind::LoadBalancerService,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::DaemonSet => "daemonset",
            ResourceKind::Job => "job",
            ResourceKind::Deployment => "deployment",
            ResourceKind::ClusterIpService => "cluster-ip-service",
            ResourceKind::LoadBalancerService => "load-balancer-service",
        }
    }

    /// Picks the comparison for a manifest from its type information.
    ///
    /// Services of type `LoadBalancer` use the load balancer comparison, every other
    /// Service uses the ClusterIP one.
    pub fn detect(types: &TypeMeta, service_type: Option<&str>) -> Result<Self> {
        match (types.api_version.as_str(), types.kind.as_str()) {
            ("apps/v1", "DaemonSet") => Ok(ResourceKind::DaemonSet),
            ("apps/v1", "Deployment") => Ok(ResourceKind::Deployment),
            ("batch/v1", "Job") => Ok(ResourceKind::Job),
            ("v1", "Service") if service_type == Some("LoadBalancer") => Ok(ResourceKind::LoadBalancerService),
            ("v1", "Service") => Ok(ResourceKind::ClusterIpService),
            (api_version, kind) => Err(Error::UnsupportedKind(format!("{api_version}/{kind}"))),
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ResourceKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ResourceKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| Error::UnsupportedKind(s.to_string()))
    }
}

struct Document {
    types: TypeMeta,
    value: Value,
}

impl Document {
    fn parse(manifest: &str, which: &str) -> Result<Self> {
        let value: Value = serde_yaml::from_str(manifest)?;
        if value.is_null() {
            return Err(Error::InvalidArgument(format!("{which} manifest is empty")));
        }
        let types: TypeMeta = serde_yaml::from_value(value.clone())?;
        Ok(Document { types, value })
    }

    fn service_type(&self) -> Option<&str> {
        self.value.get("spec")?.get("type")?.as_str()
    }

    fn decode<K: DeserializeOwned>(self) -> Result<K> {
        Ok(serde_yaml::from_value(self.value)?)
    }
}

fn diff_typed<K, F>(current: Document, expected: Document, changed: F) -> Result<Option<String>>
where
    K: DeserializeOwned + Serialize,
    F: FnOnce(&K, &K) -> Option<K>,
{
    let current: K = current.decode()?;
    let expected: K = expected.decode()?;
    match changed(&current, &expected) {
        Some(updated) => Ok(Some(serde_yaml::to_string(&updated)?)),
        None => Ok(None),
    }
}

impl Differ {
    /// Compares two YAML (or JSON) manifests and returns the updated manifest as YAML
    /// when they differ.
    ///
    /// Without an explicit `kind`, both documents must have the same apiVersion and
    /// kind; for Services the expected document's `spec.type` picks the comparison.
    pub fn diff_manifests(
        &self,
        kind: Option<ResourceKind>,
        current: &str,
        expected: &str,
    ) -> Result<Option<String>> {
        let current = Document::parse(current, "current")?;
        let expected = Document::parse(expected, "expected")?;

        let kind = match kind {
            Some(kind) => kind,
            None => {
                if current.types.api_version != expected.types.api_version || current.types.kind != expected.types.kind {
                    return Err(Error::KindMismatch {
                        current: format!("{}/{}", current.types.api_version, current.types.kind),
                        expected: format!("{}/{}", expected.types.api_version, expected.types.kind),
                    });
                }
                ResourceKind::detect(&expected.types, expected.service_type())?
            }
        };
        debug!(%kind, "Comparing manifests");

        match kind {
            ResourceKind::DaemonSet => diff_typed(current, expected, |c, e| self.daemonset_config_changed(c, e)),
            ResourceKind::Job => diff_typed(current, expected, |c, e| self.job_config_changed(c, e)),
            ResourceKind::Deployment => diff_typed(current, expected, |c, e| self.deployment_config_changed(c, e)),
            ResourceKind::ClusterIpService => {
                diff_typed(current, expected, |c, e| self.cluster_ip_service_changed(c, e))
            }
            ResourceKind::LoadBalancerService => {
                diff_typed(current, expected, |c, e| self.load_balancer_service_changed(c, e))
            }
        }
    }
}
