//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on I/O boundary traits (FileSystem, CommandRunner, etc.)
//! but are themselves concrete structs, not traits.

mod dependency;
mod org_auth;
mod output;
mod scratch_org;

pub use dependency::{install_hint, DependencyChecker};
pub use org_auth::OrgAuthService;
pub use output::{OutputTarget, OutputWriter};
pub use scratch_org::{ScratchOrgOutcome, ScratchOrgService};
