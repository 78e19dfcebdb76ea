pub mod daemonset;
pub mod deployment;
pub mod job;

pub use daemonset::daemonset_config_changed;
pub use deployment::deployment_config_changed;
pub use job::{job_config_changed, job_config_changed_with_owner};
