use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Unrecognized dump size: {size:#x} bytes")]
    UnrecognizedDump { size: usize },

    #[error("File name rejected by reader: {name}")]
    NameRejected { name: String },

    #[error("Invalid magic word: {0}")]
    InvalidMagic(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error is a "file not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }

    /// True when the input was simply not a RAM dump this crate understands
    pub fn is_unrecognized(&self) -> bool {
        matches!(
            self,
            Error::UnrecognizedDump { .. } | Error::NameRejected { .. }
        )
    }
}
