/// Application-level errors
///
/// These cover startup concerns (settings file, log directory).
/// Per-image failures have their own type in `images::LoadError`
/// because they travel inside messages and must be `Clone`.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid settings file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("could not serialize settings: {0}")]
    ConfigWrite(#[from] toml::ser::Error),

    #[error("could not determine the {0} directory")]
    NoDirectory(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
