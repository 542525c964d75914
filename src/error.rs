use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unsupported callback shorthand: expected function, string, or object, got {0}")]
    UnsupportedCallback(String),

    #[error("Nesting depth exceeds limit of {limit}")]
    DepthExceeded { limit: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
