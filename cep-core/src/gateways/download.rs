use std::io;

use thiserror::Error;

/// A file that is handed over to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub file_name: String,
    pub mime_type: String,
    pub content: Vec<u8>,
}

/// The "save/download" facility of the host environment.
pub trait DownloadGateway {
    /// Returns a human readable description of where the file went.
    fn offer_download(&self, file: &ExportFile) -> Result<String, DownloadError>;
}

#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("Invalid file name: {0}")]
    FileName(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}
