use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{value:?} is not a valid {type_name}")]
    UnknownMember {
        type_name: &'static str,
        value: String,
    },
}

pub type Result<T> = std::result::Result<T, CoreError>;
