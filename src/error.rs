use std::result;

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("level {level} out of range for node of height {height}")]
    LevelOutOfRange { level: usize, height: usize },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = result::Result<T, Error>;
