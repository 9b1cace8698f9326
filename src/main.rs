//! dddgen's main application entry point.
//! Parses the command line, resolves the configuration and generates the
//! project tree.

use dddgen::{
    cli::{get_args, Args},
    config::ProjectConfig,
    error::{default_error_handler, Result},
    generator::generate,
    renderer::MiniJinjaRenderer,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Off
        })
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Resolves the configuration (language, name, structure)
/// 2. Creates the directory tree
/// 3. Writes the language specific files
fn run(args: Args) -> Result<()> {
    let engine = MiniJinjaRenderer::new();

    let config =
        ProjectConfig::resolve(&args.language, &args.project_name, args.config_file.as_deref())?;

    generate(&engine, &config, &args.output_dir)?;

    println!(
        "Successfully created DDD project structure for {} ({})",
        config.name, config.language
    );
    Ok(())
}
