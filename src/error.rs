use std::path::PathBuf;

use thiserror::Error;

use crate::parser::lines::Keyword;

/// A malformed section inside one apidoc block. Aborts that block only.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("{keyword} section: invalid status code {found:?}")]
    InvalidStatusCode { keyword: Keyword, found: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing HTTP verb")]
    MissingMethod,
    #[error("missing URL")]
    MissingUrl,
    #[error("missing documentation for URL param: {0}")]
    MissingUrlParameter(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid format '{0}', expected one of [markdown|html|json]")]
    UnsupportedFormat(String),
    #[error("input file {} doesn't have .go extension", .0.display())]
    InvalidInput(PathBuf),
    #[error(transparent)]
    Settings(#[from] config::ConfigError),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("validation error in apidoc({name}): {source}")]
    Validation {
        name: String,
        #[source]
        source: ValidationError,
    },
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not load the Go grammar: {0}")]
    Grammar(#[from] tree_sitter::LanguageError),
    #[error("no syntax tree produced for {}", .0.display())]
    NoTree(PathBuf),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
