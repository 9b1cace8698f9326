//! Language specific file generation.
//! Writes the entry point and, for Python, the package markers and the
//! dependency manifest into an already materialized project tree.

use crate::constants::{
    ENTRYPOINT_DIR, MANIFEST_CONTENT, MANIFEST_FILE, PACKAGE_MARKER, PACKAGE_MARKER_CONTENT,
};
use crate::error::{Error, Result};
use crate::language::Language;
use crate::layout::create_dir_all;
use crate::renderer::TemplateRenderer;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const GO_MAIN_TEMPLATE: &str = r#"package main

import "fmt"

func main() {
	fmt.Println("{{ project_name }} service started")
}
"#;

const PYTHON_MAIN_TEMPLATE: &str = r#"def main():
    print("{{ project_name }} service started")


if __name__ == "__main__":
    main()
"#;

/// Writes `content` to `path`, mapping failures to [`Error::WriteError`].
pub fn write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    debug!("Writing file: {}", path.display());
    fs::write(path, content).map_err(|source| Error::WriteError { path: path.to_path_buf(), source })
}

/// Entry-point template of a language.
pub fn entrypoint_template(language: Language) -> &'static str {
    match language {
        Language::Go => GO_MAIN_TEMPLATE,
        Language::Python => PYTHON_MAIN_TEMPLATE,
    }
}

/// Renders the entry point and writes it to `<root>/cmd/<entrypoint>`.
///
/// # Returns
/// * `Result<PathBuf>` - Path of the written entry point
pub fn write_entrypoint<P: AsRef<Path>>(
    engine: &dyn TemplateRenderer,
    project_root: P,
    project_name: &str,
    language: Language,
) -> Result<PathBuf> {
    let context = serde_json::json!({ "project_name": project_name });
    let content = engine.render(entrypoint_template(language), &context)?;

    let target = project_root.as_ref().join(ENTRYPOINT_DIR).join(language.entrypoint_file());
    write_file(&target, &content)?;
    Ok(target)
}

/// Walks every directory under `project_root` (the root included) and writes a
/// package marker where none exists yet. Existing markers are left untouched.
///
/// # Returns
/// * `Result<Vec<PathBuf>>` - Markers created by this call
pub fn create_package_markers<P: AsRef<Path>>(project_root: P) -> Result<Vec<PathBuf>> {
    let mut created = Vec::new();

    for entry in WalkDir::new(project_root.as_ref()) {
        let entry = entry?;
        if !entry.file_type().is_dir() {
            continue;
        }

        let marker = entry.path().join(PACKAGE_MARKER);
        if marker.exists() {
            debug!("Keeping existing marker: {}", marker.display());
            continue;
        }

        write_file(&marker, PACKAGE_MARKER_CONTENT)?;
        created.push(marker);
    }

    Ok(created)
}

/// Writes the dependency manifest at the project root.
pub fn write_manifest<P: AsRef<Path>>(project_root: P) -> Result<PathBuf> {
    let target = project_root.as_ref().join(MANIFEST_FILE);
    write_file(&target, MANIFEST_CONTENT)?;
    Ok(target)
}

/// Generates every language specific file of a project.
///
/// Go gets only its entry point. Python additionally gets a package marker in
/// every directory and a dependency manifest.
///
/// # Errors
/// * `Error::WriteError` naming the first file that could not be written.
///   Files written before the failure are left in place.
pub fn emit<P: AsRef<Path>>(
    engine: &dyn TemplateRenderer,
    project_root: P,
    project_name: &str,
    language: Language,
) -> Result<()> {
    let project_root = project_root.as_ref();
    create_dir_all(project_root.join(ENTRYPOINT_DIR))?;

    match language {
        Language::Go => {
            write_entrypoint(engine, project_root, project_name, language)?;
        }
        Language::Python => {
            let markers = create_package_markers(project_root)?;
            debug!("Created {} package markers", markers.len());
            write_entrypoint(engine, project_root, project_name, language)?;
            write_manifest(project_root)?;
        }
    }

    Ok(())
}
