//! CLI argument parsing and command dispatch

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;

use gitclone::config;
use gitclone::driver::{Driver, Outcome};
use gitclone::output::OutputConfig;

/// Clones a git repo and attempts to set it up
#[derive(Parser, Debug)]
#[command(name = "gitclone")]
#[command(version, about)]
#[command(long_about = "Clone a git repo and attempt to set it up.

  Go (mod): `go get`
  NPM:      `npm i`
  Yarn:     `yarn`

No matter the project type, the binary presence will be validated first.")]
pub struct Cli {
    /// Arguments passed to `git clone`; the last one names the repository or
    /// target directory. Use `--` before options meant for git.
    #[arg(value_name = "GIT REPO", required = true, num_args = 1..)]
    args: Vec<String>,

    /// Config file (default is $HOME/.gitclone.yaml)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Colorize output (always, never, auto)
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level);
        let output = OutputConfig::from_env_and_flag(&self.color);

        let loaded = config::load(self.config.as_deref())?;
        if let Some(path) = &loaded.source {
            println!("Using config file: {}", path.display());
        }
        debug!("Effective settings: {:?}", loaded.settings);

        let driver = Driver::new(loaded.settings, output);
        let outcome = driver
            .run(&self.args)
            .with_context(|| format!("gitclone {} failed", self.args.join(" ")))?;

        match outcome {
            Outcome::Unrecognized { dir } => debug!("Nothing to install in {}", dir),
            Outcome::Detected { dir, project } => debug!("Detected {} in {}", project, dir),
            Outcome::Installed { dir, project } => {
                debug!("Installed {} dependencies in {}", project, dir)
            }
        }
        Ok(())
    }
}

/// `RUST_LOG` takes precedence over `--log-level`.
fn init_logging(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level.to_lowercase());
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}
