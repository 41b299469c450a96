#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid CORS origin: {0}")]
    InvalidOrigin(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to bind to {0}")]
    Bind(String),
}
