//! # CLI Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     DROIDWORKS_LOAD_DEFAULT_DROIDS=false                               │
//! │     DROIDWORKS_CATEGORY_ORDER=protocol,utility,janitor,astromech       │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ./droidworks.toml (optional)                                       │
//! │     or the file named by DROIDWORKS_CONFIG (required if set)           │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! load_default_droids = true
//! log_filter = "warn,droidworks=info"
//! category_order = ["astromech", "janitor", "utility", "protocol"]
//! ```

use std::env;
use std::fmt;

use config::builder::{ConfigBuilder, DefaultState};
use config::{Config, Environment, File, FileFormat};
use droidworks_core::{Category, CategoryRanking};
use serde::Deserialize;

use crate::error::CliResult;

/// Names an explicit config file; the file must then exist.
pub const CONFIG_PATH_ENV: &str = "DROIDWORKS_CONFIG";

/// Looked up in the working directory when `DROIDWORKS_CONFIG` is unset.
pub const DEFAULT_CONFIG_FILE: &str = "droidworks.toml";

/// Used when neither `RUST_LOG` nor the config sets a filter.
pub const DEFAULT_LOG_FILTER: &str = "warn,droidworks=info";

const ENV_PREFIX: &str = "DROIDWORKS";

/// Where the TOML layer comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSource {
    pub path: String,

    /// Set when the path came from `DROIDWORKS_CONFIG`.
    pub required: bool,
}

impl ConfigSource {
    /// `DROIDWORKS_CONFIG` if set, else the optional `./droidworks.toml`.
    pub fn resolve() -> Self {
        match env::var(CONFIG_PATH_ENV) {
            Ok(path) => ConfigSource {
                path,
                required: true,
            },
            Err(_) => ConfigSource {
                path: DEFAULT_CONFIG_FILE.to_string(),
                required: false,
            },
        }
    }
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.required {
            write!(f, "{}", self.path)
        } else {
            write!(f, "{} (optional)", self.path)
        }
    }
}

/// Validated CLI configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct CliConfig {
    /// Seed the catalog with one droid of each model at startup.
    pub load_default_droids: bool,

    /// `tracing_subscriber::EnvFilter` directive, overridden by `RUST_LOG`.
    pub log_filter: String,

    /// Order `Sort Droids Into Categories` emits categories in.
    pub category_order: CategoryRanking,
}

/// Shape of the merged sources before validation.
#[derive(Debug, Deserialize)]
struct RawConfig {
    load_default_droids: bool,
    log_filter: String,
    category_order: Vec<Category>,
}

impl CliConfig {
    /// Loads defaults, then `source`, then `DROIDWORKS_*` variables.
    ///
    /// Does not log: the caller reports `source` once tracing is up.
    pub fn load_from(source: &ConfigSource) -> CliResult<Self> {
        let builder = Self::defaults()?
            .add_source(File::new(&source.path, FileFormat::Toml).required(source.required))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("category_order"),
            );
        Self::from_builder(builder)
    }

    /// Parses a TOML document layered over the defaults.
    pub fn from_toml(contents: &str) -> CliResult<Self> {
        Self::from_builder(Self::defaults()?.add_source(File::from_str(contents, FileFormat::Toml)))
    }

    fn defaults() -> CliResult<ConfigBuilder<DefaultState>> {
        let order: Vec<String> = CategoryRanking::default()
            .as_slice()
            .iter()
            .map(|c| c.name().to_lowercase())
            .collect();

        Ok(Config::builder()
            .set_default("load_default_droids", true)?
            .set_default("log_filter", DEFAULT_LOG_FILTER)?
            .set_default("category_order", order)?)
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> CliResult<Self> {
        let raw: RawConfig = builder.build()?.try_deserialize()?;
        Ok(CliConfig {
            load_default_droids: raw.load_default_droids,
            log_filter: raw.log_filter,
            category_order: CategoryRanking::new(raw.category_order)?,
        })
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            load_default_droids: true,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            category_order: CategoryRanking::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;

    #[test]
    fn test_empty_document_gives_defaults() {
        let config = CliConfig::from_toml("").unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let config = CliConfig::from_toml(
            r#"
            load_default_droids = false
            log_filter = "debug"
            category_order = ["protocol", "utility"]
            "#,
        )
        .unwrap();

        assert!(!config.load_default_droids);
        assert_eq!(config.log_filter, "debug");
        assert_eq!(
            config.category_order.as_slice(),
            &[Category::Protocol, Category::Utility]
        );
    }

    #[test]
    fn test_duplicate_category_is_rejected() {
        let err = CliConfig::from_toml(r#"category_order = ["janitor", "janitor"]"#).unwrap_err();
        assert!(matches!(err, CliError::InvalidConfig(_)));
    }

    #[test]
    fn test_missing_optional_file_falls_back_to_defaults() {
        let source = ConfigSource {
            path: "does-not-exist/droidworks.toml".to_string(),
            required: false,
        };
        let config = CliConfig::load_from(&source).unwrap();
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
        assert_eq!(source.to_string(), "does-not-exist/droidworks.toml (optional)");
    }

    #[test]
    fn test_missing_required_file_is_an_error() {
        let source = ConfigSource {
            path: "does-not-exist/droidworks.toml".to_string(),
            required: true,
        };
        let err = CliConfig::load_from(&source).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
        assert_eq!(source.to_string(), "does-not-exist/droidworks.toml");
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let err = CliConfig::from_toml(r#"category_order = ["gonk"]"#).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }
}
