//! sfwrap: scratch org automation around the Salesforce CLI
//!
//! Two commands share this library:
//! - `create-scratch-org`: create a scratch org asynchronously, wait for the
//!   job, and write the final JSON result to a file or stdout
//! - `save-org-auth`: write `org display --verbose --json` for an org to a file
//!
//! Layers follow the usual direction of dependencies:
//! `cli` → `application` → `domain`, with `infrastructure` providing the
//! I/O implementations behind traits.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
