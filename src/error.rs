use thiserror::Error;

#[derive(Error, Debug)]
pub enum VidlError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Download engine error: {0}")]
    Engine(String),

    #[error("Could not resolve output path: {0}")]
    Resolve(String),

    #[error("Missing dependency: {0}")]
    MissingDependency(String),
}

pub type Result<T> = std::result::Result<T, VidlError>;
