//! Configuration file support for sysdeps.
//!
//! Provides YAML-based configuration through `sysdeps.config.yml` files,
//! and the merge of command-line flags, file values and defaults into
//! [`ResolverSettings`].

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::adapters::outbound::filesystem::DEFAULT_SCAN_DEPTH;
use crate::application::dto::OutputFormat;
use crate::resolution::domain::DeclaredDependency;
use crate::resolution::policies::PropertyPrecedence;
use crate::shared::error::ResolverError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "sysdeps.config.yml";
pub const DEFAULT_POMS_DIR: &str = "/usr/share/maven-poms";
pub const DEFAULT_JARS_DIR: &str = "/usr/share/java";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub poms_dirs: Option<Vec<PathBuf>>,
    pub jars_dir: Option<PathBuf>,
    pub scan_depth: Option<usize>,
    pub format: Option<String>,
    pub property_precedence: Option<String>,
    pub use_index: Option<bool>,
    pub dependencies: Option<Vec<String>>,
    pub plugins: Option<Vec<String>>,
    pub test_dependencies: Option<Vec<String>>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if config.scan_depth == Some(0) {
        bail!(
            "Invalid config: scan_depth must be at least 1.\n\n\
             💡 Hint: The default depth is {}.",
            DEFAULT_SCAN_DEPTH
        );
    }
    if let Some(ref format) = config.format {
        format
            .parse::<OutputFormat>()
            .map_err(|e| anyhow::anyhow!("Invalid config: {}", e))?;
    }
    if let Some(ref precedence) = config.property_precedence {
        precedence
            .parse::<PropertyPrecedence>()
            .map_err(|e| anyhow::anyhow!("Invalid config: {}", e))?;
    }
    for (field, values) in [
        ("dependencies", &config.dependencies),
        ("test_dependencies", &config.test_dependencies),
    ] {
        for (i, value) in values.iter().flatten().enumerate() {
            DeclaredDependency::parse(value, false)
                .with_context(|| format!("Invalid config: {}[{}]", field, i))?;
        }
    }
    if let Some(ref plugins) = config.plugins {
        for (i, id) in plugins.iter().enumerate() {
            if id.trim().is_empty() {
                bail!(
                    "Invalid config: plugins[{}] must not be empty.\n\n\
                     💡 Hint: Use a plugin id such as \"com.github.johnrengelman.shadow\".",
                    i
                );
            }
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

/// Values given on the command line. Empty lists and `None` mean "not given".
#[derive(Debug, Default, Clone)]
pub struct SettingsOverrides {
    pub dependencies: Vec<String>,
    pub test_dependencies: Vec<String>,
    pub plugins: Vec<String>,
    pub poms_dirs: Vec<PathBuf>,
    pub jars_dir: Option<PathBuf>,
    pub scan_depth: Option<usize>,
    pub format: Option<OutputFormat>,
    pub use_index: bool,
}

/// Effective settings of one run.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolverSettings {
    pub poms_dirs: Vec<PathBuf>,
    pub jars_dir: PathBuf,
    pub scan_depth: usize,
    pub format: OutputFormat,
    pub property_precedence: PropertyPrecedence,
    pub use_index: bool,
    pub dependencies: Vec<DeclaredDependency>,
    pub plugins: Vec<String>,
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            poms_dirs: vec![PathBuf::from(DEFAULT_POMS_DIR)],
            jars_dir: PathBuf::from(DEFAULT_JARS_DIR),
            scan_depth: DEFAULT_SCAN_DEPTH,
            format: OutputFormat::default(),
            property_precedence: PropertyPrecedence::default(),
            use_index: false,
            dependencies: Vec::new(),
            plugins: Vec::new(),
        }
    }
}

impl ResolverSettings {
    /// CLI flag > config file > default. Declaration lists from both sources
    /// are combined, command-line entries first.
    pub fn merge(cli: SettingsOverrides, config: Option<ConfigFile>) -> Result<Self> {
        let config = config.unwrap_or_default();
        let defaults = Self::default();

        if cli.scan_depth == Some(0) {
            return Err(ResolverError::Validation {
                message: "--scan-depth must be at least 1".to_string(),
            }
            .into());
        }

        let format = match (cli.format, config.format.as_deref()) {
            (Some(format), _) => format,
            (None, Some(value)) => value.parse().map_err(anyhow::Error::msg)?,
            (None, None) => defaults.format,
        };
        let property_precedence = match config.property_precedence.as_deref() {
            Some(value) => value.parse().map_err(anyhow::Error::msg)?,
            None => defaults.property_precedence,
        };

        let poms_dirs = if !cli.poms_dirs.is_empty() {
            cli.poms_dirs
        } else {
            config.poms_dirs.unwrap_or(defaults.poms_dirs)
        };

        let mut dependencies = Vec::new();
        let main_entries = cli
            .dependencies
            .iter()
            .chain(config.dependencies.iter().flatten());
        for value in main_entries {
            push_unique(&mut dependencies, DeclaredDependency::parse(value, false)?);
        }
        let test_entries = cli
            .test_dependencies
            .iter()
            .chain(config.test_dependencies.iter().flatten());
        for value in test_entries {
            push_unique(&mut dependencies, DeclaredDependency::parse(value, true)?);
        }

        let mut plugins: Vec<String> = Vec::new();
        for id in cli.plugins.iter().chain(config.plugins.iter().flatten()) {
            let id = id.trim();
            if !id.is_empty() && !plugins.iter().any(|p| p == id) {
                plugins.push(id.to_string());
            }
        }

        Ok(Self {
            poms_dirs,
            jars_dir: cli
                .jars_dir
                .or(config.jars_dir)
                .unwrap_or(defaults.jars_dir),
            scan_depth: cli
                .scan_depth
                .or(config.scan_depth)
                .unwrap_or(defaults.scan_depth),
            format,
            property_precedence,
            use_index: cli.use_index || config.use_index.unwrap_or(false),
            dependencies,
            plugins,
        })
    }

    /// At least one POM root must be a readable directory.
    pub fn validate_directories(&self) -> Result<()> {
        if !self.poms_dirs.iter().any(|dir| dir.is_dir()) {
            let path = self.poms_dirs.first().cloned().unwrap_or_default();
            return Err(ResolverError::InvalidDirectory {
                path,
                reason: "No POM directory exists".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

fn push_unique(list: &mut Vec<DeclaredDependency>, dependency: DeclaredDependency) {
    if !list.contains(&dependency) {
        list.push(dependency);
    }
}
