use thiserror::Error;

#[derive(Debug, Error)]
pub enum SheetPackerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),
    #[error("Invalid encoder parameter: {0}")]
    InvalidParam(String),
}

pub type Result<T> = std::result::Result<T, SheetPackerError>;
