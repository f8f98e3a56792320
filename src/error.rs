use miette::Diagnostic;
use thiserror::Error;

/// Main error type for armory operations
#[derive(Error, Diagnostic, Debug)]
pub enum ArmoryError {
    #[error("IO error: {0}")]
    #[diagnostic(code(armory::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(armory::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(armory::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Cannot acquire a {width}x{height} surface at scale {scale}: {message}")]
    #[diagnostic(code(armory::surface))]
    Surface {
        width: u32,
        height: u32,
        scale: u32,
        message: String,
    },

    #[error("Encode error: {message}")]
    #[diagnostic(code(armory::encode))]
    Encode { message: String },

    #[error("Build error: {message}")]
    #[diagnostic(code(armory::build))]
    Build {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, ArmoryError>;
