use thiserror::Error;

use crate::entities::AddressRecord;

/// Number of digits of a CEP without the hyphen.
pub const POSTAL_CODE_LEN: usize = 8;

pub trait Validate {
    type Error;
    fn validate(&self) -> Result<(), Self::Error>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PostalCodeInvalidation {
    #[error("CEP deve conter 8 caracteres.")]
    Length,
    #[error("CEP deve conter apenas números.")]
    Format,
}

impl PostalCodeInvalidation {
    pub const fn reason(self) -> &'static str {
        match self {
            Self::Length => "length",
            Self::Format => "format",
        }
    }
}

/// The length is measured in UTF-16 code units,
/// i.e. characters outside the BMP count twice.
pub fn validate_postal_code(s: &str) -> Result<(), PostalCodeInvalidation> {
    if s.encode_utf16().count() != POSTAL_CODE_LEN {
        return Err(PostalCodeInvalidation::Length);
    }
    if !s.chars().all(|c| c.is_ascii_digit()) {
        return Err(PostalCodeInvalidation::Format);
    }
    Ok(())
}

// NOTE:
// The other fields are free text and always acceptable.
impl Validate for AddressRecord {
    type Error = PostalCodeInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        validate_postal_code(&self.postal_code)
    }
}
