use cep_core::{gateways::download::DownloadError, util::validate::PostalCodeInvalidation};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    PostalCode(#[from] PostalCodeInvalidation),
    #[error(transparent)]
    Serialize(#[from] serde_json::Error),
    #[error(transparent)]
    Download(#[from] DownloadError),
}
