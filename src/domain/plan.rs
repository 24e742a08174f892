//! Plan, instance group and job types, plus the opaque artifacts the
//! dispatcher passes through untouched.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::required;
use crate::error::ValidationError;

/// Caller-arbitrary key/value data, passed through without interpretation
pub type Properties = serde_json::Map<String, serde_json::Value>;

/// Deployment manifest as an opaque YAML document
///
/// The manifest is a hand-editable artifact owned by the orchestration
/// system; the SDK round-trips it without imposing a schema.
pub type Manifest = serde_yaml::Value;

/// Instance-group name to the VM identifiers currently realizing that group
pub type VmTopology = BTreeMap<String, Vec<String>>;

/// Service plan selected by the orchestrator for a deployment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    /// Plan-level properties, forwarded to the adapter uninterpreted
    #[serde(default)]
    pub properties: Properties,

    #[serde(default)]
    pub instance_groups: Vec<InstanceGroup>,
}

impl Plan {
    /// Validate the plan.
    ///
    /// Two passes, both fail-fast: a structural pass over every instance
    /// group, then a pass over each group's jobs. Groups without a jobs
    /// entry are skipped in the second pass - jobs are optional per group,
    /// and a zero-length group list is not itself a violation.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for group in &self.instance_groups {
            group.validate()?;
        }

        for group in &self.instance_groups {
            if let Some(jobs) = &group.jobs {
                for job in jobs {
                    job.validate()?;
                }
            }
        }

        Ok(())
    }
}

/// A named set of homogeneous deployment units within a plan
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstanceGroup {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub vm_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub persistent_disk_type: Option<String>,

    /// Sizing; must be at least 1
    #[serde(default)]
    pub instances: u32,

    /// Placement networks; at least one is required
    #[serde(default)]
    pub networks: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub azs: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lifecycle: Option<String>,

    /// Jobs to co-locate on this group; optional, absent means the manifest
    /// generator decides
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jobs: Option<Vec<Job>>,
}

impl InstanceGroup {
    /// Structural validation for a single group; jobs are checked separately
    pub fn validate(&self) -> Result<(), ValidationError> {
        required(&self.name, "instance group", "name")?;
        required(&self.vm_type, "instance group", "vm_type")?;
        if self.instances < 1 {
            return Err(ValidationError::InstanceCountTooLow {
                group: self.name.clone(),
            });
        }
        if self.networks.is_empty() {
            return Err(ValidationError::NoNetworks {
                group: self.name.clone(),
            });
        }
        Ok(())
    }
}

/// A job sourced from a release, co-located on an instance group
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Job {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub release: String,

    /// Job properties; the key must be present even when the mapping is empty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Properties>,
}

impl Job {
    /// Validate a single job entry
    pub fn validate(&self) -> Result<(), ValidationError> {
        required(&self.name, "job", "name")?;
        required(&self.release, "job", "release")?;
        if self.properties.is_none() {
            return Err(ValidationError::MissingField {
                entity: "job",
                field: "properties",
            });
        }
        Ok(())
    }
}
