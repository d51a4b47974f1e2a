//! Default values for gitclone configuration.
//!
//! This module provides centralized default values used by the driver and the
//! configuration loader, ensuring consistency and avoiding duplication.

/// Version-control client used when no configuration overrides it.
///
/// This can be overridden by `clone_program` in the config file or the
/// `GITCLONE_CLONE_PROGRAM` environment variable.
pub const DEFAULT_CLONE_PROGRAM: &str = "git";

/// Subcommand passed to the clone program ahead of the user's arguments.
pub const CLONE_SUBCOMMAND: &str = "clone";
