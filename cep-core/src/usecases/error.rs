use crate::util::validate::PostalCodeInvalidation;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    PostalCode(#[from] PostalCodeInvalidation),
}
