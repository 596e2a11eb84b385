use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("missing required field '{0}'")]
    MissingField(&'static str),
}

#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("theme lookup failed: {0}")]
    Lookup(String),

    #[error("theme load error: {0}")]
    Load(String),
}

#[derive(Debug, thiserror::Error)]
pub enum MsgBarError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Theme(#[from] ThemeError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}
