//! Common constants used throughout dddgen.

/// Parent directory that holds the four architectural layers
pub const INTERNAL_DIR: &str = "internal";

/// Directory that receives the generated entry point
pub const ENTRYPOINT_DIR: &str = "cmd";

/// Python package marker file name and its placeholder body
pub const PACKAGE_MARKER: &str = "__init__.py";
pub const PACKAGE_MARKER_CONTENT: &str = "# Package initialization\n";

/// Python dependency manifest file name and its placeholder body
pub const MANIFEST_FILE: &str = "requirements.txt";
pub const MANIFEST_CONTENT: &str = "# Project dependencies\n";

/// Built-in directory catalog used when no config file is given.
pub mod defaults {
    pub const ROOT_DIRS: &[&str] =
        &["cmd", "pkg", "configs", "migrations", "scripts", "tests", "docs"];

    pub const DOMAIN_DIRS: &[&str] =
        &["entities", "valueobjects", "events", "repositories", "services"];

    pub const APPLICATION_DIRS: &[&str] = &["commands", "queries", "services", "dto"];

    pub const INFRASTRUCTURE_DIRS: &[&str] = &["persistence", "messaging", "logging", "cache"];

    pub const INTERFACES_DIRS: &[&str] = &["rest", "graphql", "grpc", "cli"];
}
