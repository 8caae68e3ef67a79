use std::ffi::NulError;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("string passed to the toolkit contains a nul byte: {0}")]
    Nul(#[from] NulError),
    #[error("toolkit failed to create window \"{title}\"")]
    CreateWindow { title: String },
}
