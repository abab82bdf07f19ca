use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    /// Failed to create or clean up the scratch directory.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
