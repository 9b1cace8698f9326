//! Supported target languages and their file conventions.

use crate::error::{Error, Result};
use std::str::FromStr;

/// Target language of the generated project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Go,
    Python,
}

impl Language {
    /// All supported languages, in the order they are listed to the user.
    pub const ALL: [Language; 2] = [Language::Go, Language::Python];

    /// Lowercase token accepted on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Go => "go",
            Language::Python => "python",
        }
    }

    /// File name of the entry point written under `cmd/`.
    pub fn entrypoint_file(&self) -> &'static str {
        match self {
            Language::Go => "main.go",
            Language::Python => "main.py",
        }
    }

    /// Comma separated list of the accepted tokens, e.g. `go, python`.
    pub fn available() -> String {
        Self::ALL.iter().map(Language::as_str).collect::<Vec<_>>().join(", ")
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = Error;

    /// Parses a language token, ignoring case.
    fn from_str(s: &str) -> Result<Self> {
        let token = s.to_lowercase();
        Self::ALL.into_iter().find(|lang| lang.as_str() == token).ok_or_else(|| {
            Error::UnsupportedLanguage { language: s.to_string(), available: Self::available() }
        })
    }
}
