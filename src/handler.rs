//! Command-line dispatch for adapter binaries.
//!
//! The orchestrator runs an adapter as `<adapter> <command> <arg>...` with
//! structured text in a fixed positional order per command:
//!
//! | command             | positional arguments                                                         |
//! |---------------------|------------------------------------------------------------------------------|
//! | `generate-manifest` | deployment JSON, plan JSON, params JSON, previous manifest YAML, previous plan JSON |
//! | `create-binding`    | binding id, VM topology JSON, manifest YAML, params JSON                     |
//! | `delete-binding`    | binding id, VM topology JSON, manifest YAML                                  |
//!
//! Every deserialization and validation step is checked before the next one
//! runs; the first failure aborts the invocation and the adapter is never
//! called with partially validated data. Nothing is written to the output
//! sink unless the whole operation succeeds.

use std::io::Write;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use tracing::info;

use crate::adapter::ServiceAdapter;
use crate::domain::{DeploymentInfo, Manifest, Plan, Properties, VmTopology};
use crate::error::CommandError;

/// Dispatches one orchestrator invocation to the wrapped adapter.
///
/// The output sink is a `dispatch` parameter rather than process state, so
/// tests capture output in a buffer and the real entry point hands in stdout.
pub struct CommandLineHandler<A> {
    adapter: A,
}

impl<A: ServiceAdapter> CommandLineHandler<A> {
    pub fn new(adapter: A) -> Self {
        Self { adapter }
    }

    /// Dispatch one invocation.
    ///
    /// `args` excludes the program name: the first element selects the
    /// command, the rest are its positional arguments.
    pub fn dispatch(&self, args: &[String], out: &mut dyn Write) -> Result<()> {
        let (command, rest) = args.split_first().ok_or(CommandError::MissingCommand)?;
        info!("handling {}", command);

        match command.as_str() {
            "generate-manifest" => {
                let [deployment, plan, params, previous_manifest, previous_plan] =
                    positional("generate-manifest", rest)?;
                self.generate_manifest(deployment, plan, params, previous_manifest, previous_plan, out)
            }
            "create-binding" => {
                let [binding_id, vms, manifest, params] = positional("create-binding", rest)?;
                self.create_binding(binding_id, vms, manifest, params, out)
            }
            "delete-binding" => {
                let [binding_id, vms, manifest] = positional("delete-binding", rest)?;
                self.delete_binding(binding_id, vms, manifest)
            }
            other => Err(CommandError::Unknown {
                command: other.to_string(),
            }
            .into()),
        }
    }

    fn generate_manifest(
        &self,
        deployment_json: &str,
        plan_json: &str,
        params_json: &str,
        previous_manifest_yaml: &str,
        previous_plan_json: &str,
        out: &mut dyn Write,
    ) -> Result<()> {
        let deployment: DeploymentInfo =
            serde_json::from_str(deployment_json).context("unmarshalling service deployment")?;
        deployment
            .validate()
            .context("validating service deployment")?;

        let plan: Plan = serde_json::from_str(plan_json).context("unmarshalling service plan")?;
        plan.validate().context("validating service plan")?;

        let params: Properties =
            serde_json::from_str(params_json).context("unmarshalling arbitrary parameters")?;

        let previous_manifest: Option<Manifest> =
            optional_yaml(previous_manifest_yaml).context("unmarshalling previous manifest")?;

        let previous_plan: Option<Plan> =
            optional_json(previous_plan_json).context("unmarshalling previous service plan")?;
        if let Some(previous) = &previous_plan {
            previous
                .validate()
                .context("validating previous service plan")?;
        }

        let manifest = self
            .adapter
            .generate_manifest(deployment, plan, params, previous_manifest, previous_plan)
            .context("generating manifest")?;

        let manifest_yaml = serde_yaml::to_string(&manifest).context("marshalling manifest")?;
        out.write_all(manifest_yaml.as_bytes())
            .context("writing manifest")?;
        Ok(())
    }

    fn create_binding(
        &self,
        binding_id: &str,
        vms_json: &str,
        manifest_yaml: &str,
        params_json: &str,
        out: &mut dyn Write,
    ) -> Result<()> {
        let vms: VmTopology =
            serde_json::from_str(vms_json).context("unmarshalling deployment topology")?;
        let manifest: Manifest =
            serde_yaml::from_str(manifest_yaml).context("unmarshalling manifest")?;
        let params: Properties =
            serde_json::from_str(params_json).context("unmarshalling binding parameters")?;

        let credentials = self
            .adapter
            .create_binding(binding_id, vms, manifest, params)
            .context("creating binding")?;

        let mut encoded =
            serde_json::to_vec(&credentials).context("marshalling binding credentials")?;
        encoded.push(b'\n');
        out.write_all(&encoded)
            .context("writing binding credentials")?;
        Ok(())
    }

    fn delete_binding(&self, binding_id: &str, vms_json: &str, manifest_yaml: &str) -> Result<()> {
        let vms: VmTopology =
            serde_json::from_str(vms_json).context("unmarshalling deployment topology")?;
        let manifest: Manifest =
            serde_yaml::from_str(manifest_yaml).context("unmarshalling manifest")?;

        self.adapter
            .delete_binding(binding_id, vms, manifest)
            .context("deleting binding")?;
        Ok(())
    }
}

/// Entry point for adapter binaries.
///
/// Dispatches to stdout and exits 0 on success. On any failure the
/// diagnostic - including which step failed and the underlying cause - goes
/// to stderr and the process exits 1. Nothing reaches stdout on failure, so
/// the orchestrator can always treat stdout as the operation's result.
pub fn handle_command_line_invocation<A: ServiceAdapter>(args: &[String], adapter: A) -> ! {
    let handler = CommandLineHandler::new(adapter);
    let mut stdout = std::io::stdout().lock();
    match handler.dispatch(args, &mut stdout) {
        Ok(()) => std::process::exit(0),
        Err(err) => {
            eprintln!("error {:#}", err);
            std::process::exit(1);
        }
    }
}

/// Exact-arity positional argument extraction
fn positional<'a, const N: usize>(
    command: &'static str,
    args: &'a [String],
) -> Result<[&'a str; N], CommandError> {
    if args.len() != N {
        return Err(CommandError::WrongArgumentCount {
            command,
            expected: N,
            actual: args.len(),
        });
    }
    Ok(std::array::from_fn(|i| args[i].as_str()))
}

/// Previous-state arguments: empty or whitespace-only text (and explicit
/// `null`) means "first deployment", not a parse error.
fn optional_json<T: DeserializeOwned>(raw: &str) -> Result<Option<T>, serde_json::Error> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str(raw)
}

fn optional_yaml<T: DeserializeOwned>(raw: &str) -> Result<Option<T>, serde_yaml::Error> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    serde_yaml::from_str(raw)
}
