//! Runtime configuration for the CLI.

use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

/// Directory searched for overlay images when neither the flag nor the
/// environment names one.
const DEFAULT_RESOURCE_DIR: &str = "resources";
/// Environment variable overriding the overlay directory.
const RESOURCE_DIR_ENV: &str = "TINTYPE_RESOURCES";

/// Settings resolved from flags and environment.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Directory holding `halo.png` and `decorative_grain.png`.
    pub resource_dir: PathBuf,
    /// Log at debug level unless `RUST_LOG` says otherwise.
    pub verbose: bool,
}

impl CliConfig {
    /// Resolve from an optional `--resources` flag, then `TINTYPE_RESOURCES`,
    /// then the default.
    pub fn resolve(resources_flag: Option<PathBuf>, verbose: bool) -> Self {
        Self {
            resource_dir: resolve_resource_dir(resources_flag, std::env::var(RESOURCE_DIR_ENV).ok()),
            verbose,
        }
    }

    /// Log filter from `RUST_LOG`, falling back to `info` (or `debug` when
    /// verbose).
    pub fn log_filter(&self) -> EnvFilter {
        let default = if self.verbose { "debug" } else { "info" };
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
    }
}

fn resolve_resource_dir(flag: Option<PathBuf>, env: Option<String>) -> PathBuf {
    flag.or_else(|| env.filter(|s| !s.is_empty()).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_RESOURCE_DIR))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_wins_over_env() {
        let dir = resolve_resource_dir(Some("flag".into()), Some("env".into()));
        assert_eq!(dir, PathBuf::from("flag"));
    }

    #[test]
    fn test_env_used_without_flag() {
        assert_eq!(resolve_resource_dir(None, Some("env".into())), PathBuf::from("env"));
    }

    #[test]
    fn test_default_when_unset_or_empty() {
        assert_eq!(resolve_resource_dir(None, None), PathBuf::from(DEFAULT_RESOURCE_DIR));
        assert_eq!(
            resolve_resource_dir(None, Some(String::new())),
            PathBuf::from(DEFAULT_RESOURCE_DIR)
        );
    }
}
