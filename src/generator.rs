//! Single-pass project generation: directories first, then language files.

use crate::config::ProjectConfig;
use crate::emitter::emit;
use crate::error::Result;
use crate::layout::create_structure;
use crate::renderer::TemplateRenderer;
use log::debug;
use std::path::{Path, PathBuf};

/// Generates a project below `output_dir`.
///
/// # Arguments
/// * `engine` - Renderer used for the entry-point templates
/// * `config` - Resolved configuration of this run
/// * `output_dir` - Directory that receives the `<name>/` project root
///
/// # Returns
/// * `Result<PathBuf>` - Path of the project root
///
/// # Flow
/// 1. Creates the root-level directories and the four layers under `internal/`
/// 2. Writes the entry point and any language specific files
pub fn generate<P: AsRef<Path>>(
    engine: &dyn TemplateRenderer,
    config: &ProjectConfig,
    output_dir: P,
) -> Result<PathBuf> {
    let project_root = output_dir.as_ref().join(&config.name);
    debug!("Generating {} project in {}", config.language, project_root.display());

    create_structure(&project_root, &config.structure)?;
    emit(engine, &project_root, &config.name, config.language)?;

    Ok(project_root)
}
