//! # gitclone Library
//!
//! This library clones a git repository and sets up its dependencies. It backs
//! the `gitclone` command-line tool.
//!
//! ## Quick Example
//!
//! ```
//! use gitclone::project::{self, ProjectType};
//! use gitclone::target::derive_directory;
//!
//! let dir = derive_directory("https://github.com/example/widget.git");
//! assert_eq!(dir, "widget");
//!
//! // Nothing has been cloned, so there is nothing to detect
//! assert_eq!(project::detect(std::path::Path::new(&dir)), None);
//! assert_eq!(ProjectType::Npm.install_command(), "npm i");
//! ```
//!
//! ## Core Concepts
//!
//! - **Configuration (`config`)**: The explicit [`config::Settings`] object,
//!   built from an optional config file and `GITCLONE_*` environment
//!   variables.
//! - **Target (`target`)**: Derives the directory a clone creates from the
//!   last clone argument.
//! - **Project detection (`project`)**: Recognizes Go, Yarn and npm projects by
//!   their marker files.
//! - **Process runner (`process`)**: Launches external programs, forwarding and
//!   capturing both output streams.
//! - **Driver (`driver`)**: Ties the steps together: clone, detect, install.

pub mod config;
pub mod defaults;
pub mod driver;
pub mod error;
pub mod output;
pub mod process;
pub mod project;
pub mod target;

#[cfg(test)]
mod target_proptest;
