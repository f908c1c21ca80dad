use miette::Diagnostic;
use thiserror::Error;

/// Main error type for bossc operations
#[derive(Error, Diagnostic, Debug)]
pub enum BossError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(bossc::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error on line {line}: {message}")]
    #[diagnostic(code(bossc::parse))]
    Parse {
        line: u32,
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Invalid atlas {path}: {message}")]
    #[diagnostic(code(bossc::atlas))]
    Atlas {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Validation error: {message}")]
    #[diagnostic(code(bossc::validate))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Configuration error: {message}")]
    #[diagnostic(code(bossc::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Build error: {message}")]
    #[diagnostic(code(bossc::build))]
    Build {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, BossError>;
