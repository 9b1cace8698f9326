//! Command-line interface implementation for dddgen.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

const AFTER_HELP: &str = "Available languages: go, python
If CONFIG_FILE is not provided, default structure will be used";

/// Command-line arguments structure for dddgen.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "dddgen: generate a layered (DDD) project skeleton",
    long_about = None,
    after_help = AFTER_HELP
)]
pub struct Args {
    /// Target language of the generated project (go, python)
    #[arg(value_name = "LANGUAGE")]
    pub language: String,

    /// Name of the project, used as its root directory
    #[arg(value_name = "PROJECT_NAME")]
    pub project_name: String,

    /// YAML file describing the directory structure
    #[arg(value_name = "CONFIG_FILE")]
    pub config_file: Option<PathBuf>,

    /// Positional arguments after CONFIG_FILE, accepted and ignored
    #[arg(hide = true, value_name = "IGNORED")]
    pub ignored: Vec<String>,

    /// Directory in which the project root is created
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Returns
/// * `Args` - Parsed command line arguments
///
/// # Exits
/// * With status code 1 and usage on stdout if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                let _ = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Language;

    #[test]
    fn test_after_help_lists_supported_languages() {
        assert!(AFTER_HELP.contains(&format!("Available languages: {}", Language::available())));
    }
}
