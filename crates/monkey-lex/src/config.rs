//! Scanner configuration.
//!
//! Settings live under a `[lexer]` table so the file can be shared with other
//! toolchain phases:
//!
//! ```toml
//! [lexer]
//! report_illegal = true
//! max_diagnostics = 100
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Default number of illegal-character diagnostics reported per scanner.
const DEFAULT_MAX_DIAGNOSTICS: usize = 100;

/// Options controlling how a [`Scanner`](crate::Scanner) reports problems.
///
/// Token output never depends on these settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LexConfig {
    /// Emit an `E0001` diagnostic for every illegal character.
    #[serde(default = "default_true")]
    pub report_illegal: bool,

    /// Stop reporting after this many diagnostics; `0` means unlimited.
    #[serde(default = "default_max_diagnostics")]
    pub max_diagnostics: usize,
}

fn default_true() -> bool {
    true
}

fn default_max_diagnostics() -> usize {
    DEFAULT_MAX_DIAGNOSTICS
}

impl Default for LexConfig {
    fn default() -> Self {
        Self {
            report_illegal: true,
            max_diagnostics: DEFAULT_MAX_DIAGNOSTICS,
        }
    }
}

/// On-disk layout: the lexer settings sit in their own table.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    lexer: LexConfig,
}

impl LexConfig {
    /// Parse configuration from TOML text.
    ///
    /// Missing keys (or a missing `[lexer]` table) take their defaults.
    ///
    /// ```
    /// use monkey_lex::LexConfig;
    ///
    /// let config = LexConfig::from_toml_str("[lexer]\nmax_diagnostics = 3\n").unwrap();
    /// assert_eq!(config.max_diagnostics, 3);
    /// assert!(config.report_illegal);
    /// ```
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let file: ConfigFile = toml::from_str(content)?;
        Ok(file.lexer)
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), ?config, "loaded lexer configuration");
        Ok(config)
    }

    /// Returns true if another diagnostic may be reported after `emitted`.
    pub(crate) fn allows_report(&self, emitted: usize) -> bool {
        self.report_illegal && (self.max_diagnostics == 0 || emitted < self.max_diagnostics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = LexConfig::default();
        assert!(config.report_illegal);
        assert_eq!(config.max_diagnostics, 100);
    }

    #[test]
    fn test_empty_text_uses_defaults() {
        assert_eq!(LexConfig::from_toml_str("").unwrap(), LexConfig::default());
    }

    #[test]
    fn test_partial_table() {
        let config = LexConfig::from_toml_str("[lexer]\nreport_illegal = false\n").unwrap();
        assert!(!config.report_illegal);
        assert_eq!(config.max_diagnostics, 100);
    }

    #[test]
    fn test_unrelated_tables_are_ignored() {
        let text = "[parser]\nstrict = true\n\n[lexer]\nmax_diagnostics = 0\n";
        let config = LexConfig::from_toml_str(text).unwrap();
        assert_eq!(config.max_diagnostics, 0);
    }

    #[test]
    fn test_invalid_toml() {
        let err = LexConfig::from_toml_str("[lexer\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_wrong_type() {
        let err = LexConfig::from_toml_str("[lexer]\nmax_diagnostics = \"many\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[lexer]\nreport_illegal = false\nmax_diagnostics = 7").unwrap();

        let config = LexConfig::load_from_path(file.path()).unwrap();
        assert!(!config.report_illegal);
        assert_eq!(config.max_diagnostics, 7);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = LexConfig::load_from_path(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_allows_report() {
        let config = LexConfig {
            report_illegal: true,
            max_diagnostics: 2,
        };
        assert!(config.allows_report(0));
        assert!(config.allows_report(1));
        assert!(!config.allows_report(2));

        let unlimited = LexConfig {
            report_illegal: true,
            max_diagnostics: 0,
        };
        assert!(unlimited.allows_report(10_000));

        let silent = LexConfig {
            report_illegal: false,
            max_diagnostics: 0,
        };
        assert!(!silent.allows_report(0));
    }
}
