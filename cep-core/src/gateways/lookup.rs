use std::future::Future;

use thiserror::Error;

use crate::entities::AddressLookup;

/// Resolves a postal code into address details.
pub trait PostalCodeLookupGateway {
    /// `Ok(None)` means that the service answered without any data.
    fn lookup_postal_code(
        &self,
        postal_code: &str,
    ) -> impl Future<Output = Result<Option<AddressLookup>, LookupError>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("Request failed: {0}")]
    Transport(String),
    #[error("Unexpected response status: {0}")]
    Status(u16),
    #[error("Malformed response: {0}")]
    Malformed(String),
}
