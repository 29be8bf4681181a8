use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("theme file error: {0}")]
    ThemeFile(#[from] toml::de::Error),

    #[error("theme encoding error: {0}")]
    ThemeEncoding(#[from] toml::ser::Error),

    #[error("invalid colour {name}: {value}")]
    InvalidColor { name: String, value: String },

    #[error("invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, Error>;
