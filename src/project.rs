//! # Project Type Detection
//!
//! Recognizes the dependency manager a freshly cloned project uses by looking
//! for a marker file at the top of its directory.
//!
//! Markers are checked in a fixed priority order, first match wins:
//!
//! | Marker              | Project | Install command |
//! |---------------------|---------|-----------------|
//! | `go.mod`            | go      | `go get`        |
//! | `yarn.lock`         | yarn    | `yarn`          |
//! | `package-lock.json` | npm     | `npm i`         |
//!
//! A marker only counts when it is a file; a directory with the same name is
//! ignored.

use std::fmt;
use std::path::Path;

/// A dependency-manager convention recognized in a cloned directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectType {
    Go,
    Yarn,
    Npm,
}

impl ProjectType {
    /// All project types, in detection priority order.
    pub const PRIORITY: [ProjectType; 3] = [ProjectType::Go, ProjectType::Yarn, ProjectType::Npm];

    /// The file whose presence identifies this project type.
    pub fn marker(self) -> &'static str {
        match self {
            ProjectType::Go => "go.mod",
            ProjectType::Yarn => "yarn.lock",
            ProjectType::Npm => "package-lock.json",
        }
    }

    /// Short name used in status messages.
    pub fn label(self) -> &'static str {
        match self {
            ProjectType::Go => "go",
            ProjectType::Yarn => "yarn",
            ProjectType::Npm => "npm",
        }
    }

    pub fn install_program(self) -> &'static str {
        match self {
            ProjectType::Go => "go",
            ProjectType::Yarn => "yarn",
            ProjectType::Npm => "npm",
        }
    }

    pub fn install_args(self) -> &'static [&'static str] {
        match self {
            ProjectType::Go => &["get"],
            ProjectType::Yarn => &[],
            ProjectType::Npm => &["i"],
        }
    }

    /// The full install command line, e.g. `npm i`.
    pub fn install_command(self) -> String {
        std::iter::once(self.install_program())
            .chain(self.install_args().iter().copied())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Checks that a path exists and is not a directory.
pub fn file_exists(path: &Path) -> bool {
    match std::fs::metadata(path) {
        Ok(metadata) => !metadata.is_dir(),
        Err(_) => false,
    }
}

/// Detects the project type of `dir`, or `None` if no marker is present.
pub fn detect(dir: &Path) -> Option<ProjectType> {
    ProjectType::PRIORITY
        .into_iter()
        .find(|project| file_exists(&dir.join(project.marker())))
}
