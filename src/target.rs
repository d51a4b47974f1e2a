//! Derivation of the local directory `git clone` creates.

/// Suffix removed from the last path segment of a clone URL.
pub const GIT_SUFFIX: &str = ".git";

/// Returns the directory name that cloning `arg` produces.
///
/// Takes the last `/`-separated segment (ignoring trailing slashes) and
/// strips one trailing `.git`. A path to a repository's `.git` directory
/// derives the repository directory, as `git clone` does.
///
/// ```
/// use gitclone::target::derive_directory;
///
/// assert_eq!(derive_directory("https://github.com/org/name.git"), "name");
/// assert_eq!(derive_directory("git@github.com:org/name"), "name");
/// ```
pub fn derive_directory(arg: &str) -> String {
    let trimmed = arg.trim_end_matches('/');
    let trimmed = trimmed
        .strip_suffix("/.git")
        .map_or(trimmed, |repo| repo.trim_end_matches('/'));
    let segment = trimmed.rsplit('/').next().unwrap_or(trimmed);

    segment
        .strip_suffix(GIT_SUFFIX)
        .unwrap_or(segment)
        .to_string()
}
