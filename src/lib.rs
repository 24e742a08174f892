//! # Forge Adapter SDK
//!
//! Command dispatch and data contracts for service adapters: executables the
//! forge orchestrator runs as subprocesses to generate deployment manifests
//! and to create or delete service bindings.
//!
//! The SDK owns the boring half of the job. It parses the orchestrator's
//! positional arguments, deserializes and validates the domain payloads, and
//! writes results back on stdout with a nonzero exit on any failure. The
//! interesting half - how a manifest is generated, what a binding looks like -
//! is supplied by the adapter author through the [`ServiceAdapter`] trait.
//!
//! An adapter binary wires it up in `main`:
//!
//! ```rust,ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_writer(std::io::stderr)
//!         .with_ansi(false)
//!         .init();
//!
//!     let args: Vec<String> = std::env::args().skip(1).collect();
//!     forge_adapter::handle_command_line_invocation(&args, RedisAdapter);
//! }
//! ```
//!
//! The orchestrator invokes the binary as `<adapter> <command> <arg>...`; see
//! [`handler`] for the command set and the fixed argument order of each.

pub mod adapter;
pub mod domain;
pub mod error;
pub mod handler;

// Re-export the public surface at the crate root
pub use adapter::{BindingCredentials, ServiceAdapter};
pub use domain::{
    DeploymentInfo, InstanceGroup, Job, Manifest, Plan, Properties, ServiceRelease,
    ServiceReleases, VmTopology,
};
pub use error::{BindingError, CommandError, ValidationError};
pub use handler::{handle_command_line_invocation, CommandLineHandler};
