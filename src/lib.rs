//! dddgen generates layered (DDD) project skeletons.
//! It creates the domain/application/infrastructure/interfaces directory
//! tree and the boilerplate files of the chosen target language.

/// Command-line interface module for the dddgen application
pub mod cli;

/// Project configuration: identity from the command line, structure from
/// the built-in catalog or a YAML config file
pub mod config;

/// Common constants: default catalog and generated file names
pub mod constants;

/// Language specific files: entry points, package markers, manifest
pub mod emitter;

/// Error types and handling for the dddgen application
pub mod error;

/// Orchestrates directory creation and file emission
pub mod generator;

/// Supported target languages
pub mod language;

/// Layers and directory materialization
pub mod layout;

/// Template rendering for generated source files
pub mod renderer;
