//! Configuration file resolution.
//!
//! Resolves the configuration file path using a deterministic priority order:
//!
//! 1. `--config` flag (explicit path)
//! 2. `{project}/javalint.toml` or `.javalint.toml`
//! 3. No config found → defaults

use std::path::{Path, PathBuf};

/// Where the configuration was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Explicitly specified via `--config` flag.
    Explicit(PathBuf),
    /// Found in the project directory.
    Project(PathBuf),
    /// No config found; defaults will be used.
    Default,
}

impl ConfigSource {
    /// Returns the resolved path, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::Project(p) => Some(p),
            Self::Default => None,
        }
    }
}

/// Project-level config file names, checked in order.
const PROJECT_CONFIG_NAMES: &[&str] = &["javalint.toml", ".javalint.toml"];

/// Directory searched for a project config: the first input path, or its
/// parent when it names a file.
#[must_use]
pub fn project_dir(paths: &[PathBuf]) -> PathBuf {
    match paths.first() {
        Some(p) if p.is_file() => p
            .parent()
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf),
        Some(p) => p.clone(),
        None => PathBuf::from("."),
    }
}

/// Resolves the configuration file path.
///
/// See module-level docs for resolution order.
#[must_use]
pub fn resolve(project_dir: &Path, explicit: Option<&Path>) -> ConfigSource {
    if let Some(p) = explicit {
        return ConfigSource::Explicit(p.to_path_buf());
    }

    for name in PROJECT_CONFIG_NAMES {
        let candidate = project_dir.join(name);
        if candidate.exists() {
            tracing::debug!("Found project config: {}", candidate.display());
            return ConfigSource::Project(candidate);
        }
    }

    ConfigSource::Default
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn explicit_takes_priority_over_project() {
        let tmp = TempDir::new().unwrap();
        let explicit = tmp.path().join("custom.toml");
        fs::write(&explicit, "").unwrap();
        fs::write(tmp.path().join("javalint.toml"), "").unwrap();

        let result = resolve(tmp.path(), Some(&explicit));
        assert_eq!(result, ConfigSource::Explicit(explicit));
    }

    #[test]
    fn explicit_does_not_check_existence() {
        let result = resolve(Path::new("/tmp"), Some(Path::new("/nonexistent.toml")));
        assert_eq!(
            result,
            ConfigSource::Explicit(PathBuf::from("/nonexistent.toml"))
        );
    }

    #[test]
    fn javalint_toml_preferred_over_dot_prefix() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".javalint.toml"), "").unwrap();
        assert_eq!(
            resolve(tmp.path(), None),
            ConfigSource::Project(tmp.path().join(".javalint.toml"))
        );

        fs::write(tmp.path().join("javalint.toml"), "").unwrap();
        assert_eq!(
            resolve(tmp.path(), None),
            ConfigSource::Project(tmp.path().join("javalint.toml"))
        );
    }

    #[test]
    fn no_config_returns_default() {
        let tmp = TempDir::new().unwrap();
        let result = resolve(tmp.path(), None);
        assert_eq!(result, ConfigSource::Default);
        assert!(result.path().is_none());
    }

    #[test]
    fn project_dir_of_file_is_its_parent() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("Foo.json");
        fs::write(&file, "{}").unwrap();

        assert_eq!(project_dir(&[file]), tmp.path());
        assert_eq!(project_dir(&[tmp.path().to_path_buf()]), tmp.path());
        assert_eq!(project_dir(&[]), PathBuf::from("."));
    }

    #[test]
    fn config_next_to_tree_file_is_found() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("src");
        fs::create_dir(&src).unwrap();
        let file = src.join("Foo.json");
        fs::write(&file, "{}").unwrap();
        fs::write(src.join("javalint.toml"), "").unwrap();
        fs::write(tmp.path().join("javalint.toml"), "").unwrap();

        let dir = project_dir(&[file, tmp.path().to_path_buf()]);
        assert_eq!(
            resolve(&dir, None),
            ConfigSource::Project(src.join("javalint.toml"))
        );
    }

    #[test]
    fn missing_path_is_used_as_directory() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("gone.json");

        let dir = project_dir(&[missing.clone()]);
        assert_eq!(dir, missing);
        assert_eq!(resolve(&dir, None), ConfigSource::Default);
    }
}
