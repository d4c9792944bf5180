//! Configuration loading and management.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Emit debug diagnostics on stderr (`PL_DEBUG=true` also enables this).
    pub debug: bool,
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    ///
    /// Precedence, lowest to highest: built-in defaults, the default config
    /// location, the explicit file, `PL_*` environment variables.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (PL_*)
        figment = figment.merge(Env::prefixed("PL_"));

        figment.extract()
    }
}

/// Returns the platform-specific config directory for pl.
fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("pl"))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_default_config_disables_debug() {
        assert!(!Config::default().debug);
    }

    #[test]
    fn test_explicit_config_file_overrides_default() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "debug = true").unwrap();
        file.flush().unwrap();

        let config = Config::load_from(Some(file.path())).unwrap();
        assert!(config.debug);
    }
}
