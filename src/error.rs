use miette::Diagnostic;
use thiserror::Error;

/// Main error type for identigrid operations
#[derive(Error, Diagnostic, Debug)]
pub enum IconError {
    #[error("Unknown theme: {name}")]
    #[diagnostic(code(identigrid::theme))]
    InvalidTheme {
        name: String,
        #[help]
        help: Option<String>,
    },

    #[error("No colours left in theme {theme} after excluding {excluded:?}")]
    #[diagnostic(
        code(identigrid::palette),
        help("Remove some --not-color values or pick a larger theme")
    )]
    EmptyPalette { theme: String, excluded: Vec<String> },

    #[error("Cannot select an index from an empty space")]
    #[diagnostic(code(identigrid::digest))]
    DivisionDomain,

    #[error("Pattern index out of range: {message}")]
    #[diagnostic(code(identigrid::grid))]
    Range { message: String },

    #[error("Invalid grid: {message}")]
    #[diagnostic(code(identigrid::grid), help("Use a grid edge of 1 or more"))]
    InvalidGrid { message: String },

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(identigrid::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(identigrid::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Render error: {message}")]
    #[diagnostic(code(identigrid::render))]
    Render {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, IconError>;
