//! Directory materialization for the layered project tree.
//! Creates the root-level directories and every layer under `internal/`.

use crate::config::StructureSpec;
use crate::constants::INTERNAL_DIR;
use crate::error::{Error, Result};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Architectural layer of the generated project. The set is fixed; only the
/// subdirectories of each layer are configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Domain,
    Application,
    Infrastructure,
    Interfaces,
}

impl Layer {
    pub const ALL: [Layer; 4] =
        [Layer::Domain, Layer::Application, Layer::Infrastructure, Layer::Interfaces];

    /// Directory name of the layer under `internal/`.
    pub fn name(&self) -> &'static str {
        match self {
            Layer::Domain => "domain",
            Layer::Application => "application",
            Layer::Infrastructure => "infrastructure",
            Layer::Interfaces => "interfaces",
        }
    }

    /// Configured subdirectories of this layer.
    pub fn dirs<'a>(&self, structure: &'a StructureSpec) -> &'a [String] {
        match self {
            Layer::Domain => &structure.domain_dirs,
            Layer::Application => &structure.application.dirs,
            Layer::Infrastructure => &structure.infrastructure.dirs,
            Layer::Interfaces => &structure.interfaces.dirs,
        }
    }

    /// Path of the layer directory inside a project root.
    pub fn path<P: AsRef<Path>>(&self, project_root: P) -> PathBuf {
        project_root.as_ref().join(INTERNAL_DIR).join(self.name())
    }
}

impl std::fmt::Display for Layer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Creates a directory and any missing parents. An existing directory is not an error.
pub fn create_dir_all<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    debug!("Creating directory: {}", path.display());
    fs::create_dir_all(path)
        .map_err(|source| Error::DirectoryError { path: path.to_path_buf(), source })
}

/// Creates the whole directory tree of a project.
///
/// # Arguments
/// * `project_root` - Root of the project, i.e. `<output_dir>/<name>`
/// * `structure` - Directory catalog to materialize
///
/// # Errors
/// * `Error::DirectoryError` naming the first path that could not be created.
///   Directories created before the failure are left in place.
pub fn create_structure<P: AsRef<Path>>(project_root: P, structure: &StructureSpec) -> Result<()> {
    let project_root = project_root.as_ref();

    for dir in &structure.root_dirs {
        create_dir_all(project_root.join(dir))?;
    }

    for layer in Layer::ALL {
        let layer_path = layer.path(project_root);
        create_dir_all(&layer_path)?;

        for subdir in layer.dirs(structure) {
            create_dir_all(layer_path.join(subdir))?;
        }
    }

    Ok(())
}
