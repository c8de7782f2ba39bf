use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Journey error: {0}")]
    Journey(String),

    #[error("Incorrect password. Please try again.")]
    IncorrectPassword,
}

impl From<CoreError> for String {
    fn from(err: CoreError) -> Self {
        err.to_string()
    }
}
