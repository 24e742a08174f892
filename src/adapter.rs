//! The adapter capability seam.
//!
//! [`ServiceAdapter`] is the contract between this SDK and the domain logic a
//! service team supplies. The dispatcher depends only on this trait, never on
//! a concrete implementation, so tests (and other hosts) can substitute a
//! fake.

use anyhow::Result;

use crate::domain::{DeploymentInfo, Manifest, Plan, Properties, VmTopology};
use crate::error::BindingError;

/// Credentials or connection info returned from a successful bind,
/// serialized back to the orchestrator as a JSON mapping
pub type BindingCredentials = Properties;

/// Domain logic plugged into the command dispatcher.
///
/// Every operation is total: it returns a value or an error, never a silent
/// no-op. Implementations are expected to be deterministic for identical
/// inputs - the orchestrator retries invocations and relies on idempotence.
pub trait ServiceAdapter {
    /// Produce the deployment manifest for `plan`.
    ///
    /// `previous_manifest` and `previous_plan` are `None` on first
    /// deployment; both are present on updates and upgrades.
    fn generate_manifest(
        &self,
        deployment: DeploymentInfo,
        plan: Plan,
        params: Properties,
        previous_manifest: Option<Manifest>,
        previous_plan: Option<Plan>,
    ) -> Result<Manifest>;

    /// Create a binding for `binding_id` against the deployed service.
    ///
    /// Must fail with [`BindingError::AlreadyExists`] when `binding_id` is
    /// already bound.
    fn create_binding(
        &self,
        binding_id: &str,
        vms: VmTopology,
        manifest: Manifest,
        params: Properties,
    ) -> Result<BindingCredentials, BindingError>;

    /// Remove the binding for `binding_id`.
    ///
    /// Must fail with [`BindingError::NotFound`] when `binding_id` is
    /// unknown.
    fn delete_binding(
        &self,
        binding_id: &str,
        vms: VmTopology,
        manifest: Manifest,
    ) -> Result<(), BindingError>;
}

impl<A: ServiceAdapter + ?Sized> ServiceAdapter for &A {
    fn generate_manifest(
        &self,
        deployment: DeploymentInfo,
        plan: Plan,
        params: Properties,
        previous_manifest: Option<Manifest>,
        previous_plan: Option<Plan>,
    ) -> Result<Manifest> {
        (**self).generate_manifest(deployment, plan, params, previous_manifest, previous_plan)
    }

    fn create_binding(
        &self,
        binding_id: &str,
        vms: VmTopology,
        manifest: Manifest,
        params: Properties,
    ) -> Result<BindingCredentials, BindingError> {
        (**self).create_binding(binding_id, vms, manifest, params)
    }

    fn delete_binding(
        &self,
        binding_id: &str,
        vms: VmTopology,
        manifest: Manifest,
    ) -> Result<(), BindingError> {
        (**self).delete_binding(binding_id, vms, manifest)
    }
}
