//! Project configuration for dddgen.
//! Resolves the project identity from the command line and the directory
//! catalog either from the built-in defaults or from a YAML config file.

use crate::constants::defaults;
use crate::error::{Error, Result};
use crate::language::Language;
use log::debug;
use serde::Deserialize;
use std::path::{Component, Path};

/// Subdirectories of a single layer, as written under `structure.<layer>.dirs`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LayerDirs {
    pub dirs: Vec<String>,
}

/// Configurable directory catalog of a project.
///
/// Keys missing from a config file stay empty; the built-in catalog is only
/// used when no config file is supplied at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StructureSpec {
    pub root_dirs: Vec<String>,
    pub domain_dirs: Vec<String>,
    pub application: LayerDirs,
    pub infrastructure: LayerDirs,
    pub interfaces: LayerDirs,
}

fn to_owned_dirs(dirs: &[&str]) -> Vec<String> {
    dirs.iter().map(|d| d.to_string()).collect()
}

impl StructureSpec {
    /// The built-in catalog used when no config file is given.
    pub fn default_catalog() -> Self {
        Self {
            root_dirs: to_owned_dirs(defaults::ROOT_DIRS),
            domain_dirs: to_owned_dirs(defaults::DOMAIN_DIRS),
            application: LayerDirs { dirs: to_owned_dirs(defaults::APPLICATION_DIRS) },
            infrastructure: LayerDirs { dirs: to_owned_dirs(defaults::INFRASTRUCTURE_DIRS) },
            interfaces: LayerDirs { dirs: to_owned_dirs(defaults::INTERFACES_DIRS) },
        }
    }

    /// Checks that every entry is a relative path staying inside the project root.
    pub fn validate(&self) -> Result<()> {
        self.root_dirs
            .iter()
            .chain(&self.domain_dirs)
            .chain(&self.application.dirs)
            .chain(&self.infrastructure.dirs)
            .chain(&self.interfaces.dirs)
            .try_for_each(|entry| validate_dir_entry(entry))
    }
}

/// Top-level shape of a config file. Anything besides `structure` is ignored,
/// including `name` and `language`.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    structure: Option<StructureSpec>,
}

/// Rejects empty entries, absolute paths and `..` components.
pub fn validate_dir_entry(entry: &str) -> Result<()> {
    if entry.trim().is_empty() {
        return Err(Error::ConfigError("directory entries must not be empty".to_string()));
    }

    let escapes_root = Path::new(entry).components().any(|component| {
        matches!(component, Component::RootDir | Component::Prefix(_) | Component::ParentDir)
    });
    if escapes_root {
        return Err(Error::ConfigError(format!(
            "directory entry '{entry}' must be a relative path inside the project"
        )));
    }

    Ok(())
}

/// Rejects project names that do not name a fresh directory below the output
/// directory: empty names, `.`, `..`, absolute paths and any `.`/`..` component.
pub fn validate_project_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::ConfigError("project name must not be empty".to_string()));
    }

    let plain = Path::new(name)
        .components()
        .all(|component| matches!(component, Component::Normal(_)));
    if !plain {
        return Err(Error::ConfigError(format!(
            "project name '{name}' must be a relative path without '.' or '..' components"
        )));
    }

    Ok(())
}

/// Parses config file content into a [`StructureSpec`].
///
/// # Errors
/// * `Error::ConfigError` if the content is not valid YAML, does not match the
///   expected schema, or names a directory outside the project root
pub fn parse_structure(content: &str) -> Result<StructureSpec> {
    if content.trim().is_empty() {
        return Ok(StructureSpec::default());
    }

    let config: ConfigFile = serde_yaml::from_str(content)
        .map_err(|e| Error::ConfigError(format!("failed to parse config file: {e}")))?;

    let structure = config.structure.unwrap_or_default();
    structure.validate()?;
    Ok(structure)
}

/// Reads and parses a config file.
///
/// # Errors
/// * `Error::ConfigError` if the file cannot be read or parsed
pub fn load_structure<P: AsRef<Path>>(config_path: P) -> Result<StructureSpec> {
    let config_path = config_path.as_ref();
    debug!("Loading configuration from {}", config_path.display());

    let content = std::fs::read_to_string(config_path).map_err(|e| {
        Error::ConfigError(format!(
            "failed to read config file '{}': {e}",
            config_path.display()
        ))
    })?;

    parse_structure(&content)
}

/// Fully resolved configuration of a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    pub name: String,
    pub language: Language,
    pub structure: StructureSpec,
}

impl ProjectConfig {
    /// Resolves the configuration from the invocation tokens.
    ///
    /// Name and language always come from the command line; the optional
    /// config file only controls the directory catalog.
    ///
    /// # Arguments
    /// * `language` - Raw language token, matched case-insensitively
    /// * `name` - Project name, used verbatim as the root directory
    /// * `config_file` - Optional YAML config with a `structure` section
    pub fn resolve(language: &str, name: &str, config_file: Option<&Path>) -> Result<Self> {
        let language: Language = language.parse()?;

        validate_project_name(name)?;

        let structure = match config_file {
            Some(path) => load_structure(path)?,
            None => {
                debug!("No config file given, using the default structure");
                StructureSpec::default_catalog()
            }
        };

        Ok(Self { name: name.to_string(), language, structure })
    }
}
