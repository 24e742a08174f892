//! Domain layer - deployment contract types
//!
//! Everything the orchestrator hands an adapter on the command line
//! deserializes into one of these types. Field names are part of the wire
//! contract. Validation lives next to the types so the dispatcher can reject
//! malformed input before any adapter logic runs.

pub mod deployment;
pub mod plan;

// Re-export commonly used types
pub use deployment::{DeploymentInfo, ServiceRelease, ServiceReleases};
pub use plan::{InstanceGroup, Job, Manifest, Plan, Properties, VmTopology};

use crate::error::ValidationError;

/// Reject empty or whitespace-only values for required string fields
pub(crate) fn required(
    value: &str,
    entity: &'static str,
    field: &'static str,
) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField { entity, field });
    }
    Ok(())
}
