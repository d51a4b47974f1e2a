//! # Clone-and-Install Driver
//!
//! This module runs the whole gitclone pipeline:
//!
//! 1.  **Clone**: run `<clone_program> clone <args...>` in the base directory.
//! 2.  **Derive**: work out the directory the clone produced from the last
//!     argument (see [`crate::target::derive_directory`]).
//! 3.  **Detect**: look for a marker file in that directory
//!     (see [`crate::project::detect`]).
//! 4.  **Install**: run the matching install command inside the directory.
//!
//! Commands are executed through the [`CommandRunner`] trait. The binary uses
//! [`SystemRunner`], which launches real processes; tests substitute a runner
//! that records invocations instead.
//!
//! Every runner error is fatal and is returned as-is. Finding no marker is not
//! an error: the driver reports it and returns [`Outcome::Unrecognized`].

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::debug;

use crate::config::Settings;
use crate::defaults::CLONE_SUBCOMMAND;
use crate::error::{Error, Result};
use crate::output::{highlight, OutputConfig};
use crate::process;
use crate::project::{self, ProjectType};
use crate::target::derive_directory;

/// Trait for launching external commands - allows mocking in tests
pub trait CommandRunner {
    /// Runs `program` with `args` in `dir`, returning once it has exited
    /// successfully.
    fn run(&self, program: &str, dir: &Path, args: &[String]) -> Result<()>;
}

/// The default implementation of `CommandRunner`, which launches real
/// processes and forwards their output to the terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, dir: &Path, args: &[String]) -> Result<()> {
        let captured = process::run_command(program, dir, args)?;
        debug!(
            "{} wrote {} bytes to stdout and {} bytes to stderr",
            program,
            captured.stdout.len(),
            captured.stderr.len()
        );
        Ok(())
    }
}

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// No marker file was found in the cloned directory.
    Unrecognized { dir: String },
    /// A project was found, but installing was disabled by configuration.
    Detected { dir: String, project: ProjectType },
    /// A project was found and its install command succeeded.
    Installed { dir: String, project: ProjectType },
}

/// Runs the clone, detect and install steps.
pub struct Driver<R = SystemRunner> {
    settings: Settings,
    output: OutputConfig,
    runner: R,
    base_dir: PathBuf,
}

impl Driver<SystemRunner> {
    /// Creates a driver that launches real processes from the current
    /// directory.
    pub fn new(settings: Settings, output: OutputConfig) -> Self {
        Self::with_runner(settings, output, SystemRunner)
    }
}

impl<R: CommandRunner> Driver<R> {
    pub fn with_runner(settings: Settings, output: OutputConfig, runner: R) -> Self {
        Self {
            settings,
            output,
            runner,
            base_dir: PathBuf::from("."),
        }
    }

    /// Sets the directory the clone runs in. Defaults to `.`.
    pub fn base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = dir.into();
        self
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Run the pipeline, printing status lines to stdout.
    pub fn run(&self, args: &[String]) -> Result<Outcome> {
        self.run_with_output(args, &mut io::stdout())
    }

    /// Run the pipeline, printing status lines to `out`.
    pub fn run_with_output<W: Write>(&self, args: &[String], out: &mut W) -> Result<Outcome> {
        let last = args.last().ok_or(Error::NoCloneArguments)?;

        let clone_args: Vec<String> = std::iter::once(CLONE_SUBCOMMAND.to_string())
            .chain(args.iter().cloned())
            .collect();
        self.runner
            .run(&self.settings.clone_program, &self.base_dir, &clone_args)?;

        let dir = derive_directory(last);
        if dir.is_empty() {
            writeln!(out, "No recognizable project in {}", last)?;
            return Ok(Outcome::Unrecognized { dir });
        }

        let project_dir = self.base_dir.join(&dir);
        debug!("Looking for project markers in {}", project_dir.display());

        let shown_dir = highlight(&self.output, &dir);
        let Some(project) = project::detect(&project_dir) else {
            writeln!(out, "No recognizable project in {}", shown_dir)?;
            return Ok(Outcome::Unrecognized { dir });
        };

        writeln!(
            out,
            "Found {} project in {}",
            highlight(&self.output, project.label()),
            shown_dir
        )?;

        let command = project.install_command();
        if self.settings.skip_install {
            writeln!(out, "Skipping `{}` in {}", command, shown_dir)?;
            return Ok(Outcome::Detected { dir, project });
        }

        writeln!(out, "Executing `{}` in {}", command, shown_dir)?;
        out.flush()?;

        let install_args: Vec<String> = project
            .install_args()
            .iter()
            .map(|arg| arg.to_string())
            .collect();
        self.runner
            .run(project.install_program(), &project_dir, &install_args)?;

        Ok(Outcome::Installed { dir, project })
    }
}
