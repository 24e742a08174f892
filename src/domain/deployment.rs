//! Deployment identity and release inventory types.

use serde::{Deserialize, Serialize};

use super::required;
use crate::error::ValidationError;

/// Deployment parameters the orchestrator hands down for manifest generation
///
/// Required fields carry `#[serde(default)]` so a missing key deserializes to
/// the empty value and fails *validation* rather than deserialization; the
/// diagnostic then names the field instead of a JSON offset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentInfo {
    /// Deployment name
    #[serde(default)]
    pub name: String,

    /// Stemcell operating system (e.g., "ubuntu-xenial")
    #[serde(default)]
    pub stemcell_os: String,

    /// Stemcell version
    #[serde(default)]
    pub stemcell_version: String,
}

impl DeploymentInfo {
    /// Validate deployment info: all three fields are required
    pub fn validate(&self) -> Result<(), ValidationError> {
        required(&self.name, "deployment", "name")?;
        required(&self.stemcell_os, "deployment", "stemcell_os")?;
        required(&self.stemcell_version, "deployment", "stemcell_version")?;
        Ok(())
    }
}

/// A single release an adapter's deployment draws jobs from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRelease {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub version: String,

    /// Jobs provided by this release; at least one is required
    #[serde(default)]
    pub jobs: Vec<String>,
}

impl ServiceRelease {
    /// Validate a single release entry
    pub fn validate(&self) -> Result<(), ValidationError> {
        required(&self.name, "release", "name")?;
        required(&self.version, "release", "version")?;
        if self.jobs.is_empty() {
            return Err(ValidationError::MissingField {
                entity: "release",
                field: "jobs",
            });
        }
        Ok(())
    }
}

/// The ordered set of releases backing a deployment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceReleases(pub Vec<ServiceRelease>);

impl ServiceReleases {
    /// Validate the release set: non-empty, every element valid.
    ///
    /// Stops at the first invalid element; errors are not aggregated.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.0.is_empty() {
            return Err(ValidationError::NoReleases);
        }
        for release in &self.0 {
            release.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_deployment() -> DeploymentInfo {
        DeploymentInfo {
            name: "redis-on-demand".to_string(),
            stemcell_os: "ubuntu-xenial".to_string(),
            stemcell_version: "621.74".to_string(),
        }
    }

    fn valid_release() -> ServiceRelease {
        ServiceRelease {
            name: "redis".to_string(),
            version: "14.2".to_string(),
            jobs: vec!["redis-server".to_string()],
        }
    }

    #[test]
    fn test_deployment_info_valid() {
        assert!(valid_deployment().validate().is_ok());
    }

    #[test]
    fn test_deployment_info_rejects_empty_fields() {
        for field in ["name", "stemcell_os", "stemcell_version"] {
            let mut deployment = valid_deployment();
            match field {
                "name" => deployment.name.clear(),
                "stemcell_os" => deployment.stemcell_os.clear(),
                _ => deployment.stemcell_version.clear(),
            }
            let err = deployment.validate().unwrap_err();
            assert_eq!(
                err,
                ValidationError::MissingField {
                    entity: "deployment",
                    field
                }
            );
        }
    }

    #[test]
    fn test_deployment_info_missing_key_fails_validation_not_parsing() {
        // Missing keys default to empty and are caught by validate()
        let deployment: DeploymentInfo =
            serde_json::from_str(r#"{"name":"redis-on-demand"}"#).unwrap();
        assert!(deployment.validate().is_err());
    }

    #[test]
    fn test_deployment_info_round_trip() {
        let deployment = valid_deployment();
        let json = serde_json::to_string(&deployment).unwrap();
        let parsed: DeploymentInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, deployment);
    }

    #[test]
    fn test_release_set_rejects_empty() {
        let releases = ServiceReleases(vec![]);
        assert_eq!(releases.validate().unwrap_err(), ValidationError::NoReleases);
    }

    #[test]
    fn test_release_set_valid() {
        let releases = ServiceReleases(vec![valid_release(), valid_release()]);
        assert!(releases.validate().is_ok());
    }

    #[test]
    fn test_release_set_surfaces_first_invalid_element() {
        let mut broken = valid_release();
        broken.version.clear();
        let mut also_broken = valid_release();
        also_broken.name.clear();

        let releases = ServiceReleases(vec![valid_release(), broken, also_broken]);
        let err = releases.validate().unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingField {
                entity: "release",
                field: "version"
            }
        );
    }

    #[test]
    fn test_release_requires_at_least_one_job() {
        let mut release = valid_release();
        release.jobs.clear();
        assert!(release.validate().is_err());
    }

    #[test]
    fn test_release_set_wire_shape_is_a_bare_sequence() {
        let releases: ServiceReleases =
            serde_json::from_str(r#"[{"name":"redis","version":"14.2","jobs":["redis-server"]}]"#)
                .unwrap();
        assert_eq!(releases.0.len(), 1);
        assert!(releases.validate().is_ok());
    }
}
