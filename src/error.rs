//! # Error Handling
//!
//! Centralized error type for `gitclone`, built with `thiserror`.
//!
//! The variants follow the failure modes of the pipeline:
//!
//! - A required external program is not on the search path.
//! - A program could not be launched.
//! - A program exited unsuccessfully, or its output could not be forwarded.
//! - The configuration file could not be read (never shown to the user; the
//!   loader falls back to defaults).
//! - The home directory could not be determined.
//!
//! Subprocess errors are fatal. They are propagated up to `main`, which logs
//! them and exits with status 1.

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Main error type for gitclone operations
#[derive(Error, Debug)]
pub enum Error {
    /// The program could not be located on `PATH`.
    #[error("{program} command not found")]
    CommandNotFound { program: String },

    /// The program was found but could not be started.
    #[error("Failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The program ran and exited with a non-zero status.
    #[error("{program} exited unsuccessfully: {status}")]
    CommandFailed { program: String, status: ExitStatus },

    /// Copying one of the child's output streams failed.
    #[error("Failed to capture {stream} of {program}")]
    StreamCapture { program: String, stream: String },

    #[error("Could not read config file {}: {message}", path.display())]
    ConfigRead { path: PathBuf, message: String },

    /// Nothing was given to clone.
    #[error("At least one clone argument is required")]
    NoCloneArguments,

    #[error("Could not determine the home directory")]
    HomeDirectory,

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
