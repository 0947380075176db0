use crate::{
    entities::*,
    util::validate::{self, PostalCodeInvalidation},
};

mod error;
mod merge_lookup;
mod reset_address;

pub use self::{error::Error, merge_lookup::*, reset_address::*};

type Result<T> = std::result::Result<T, Error>;

/// Returns the postal code that should be looked up
/// after the CEP input lost its focus.
pub fn postal_code_for_lookup(record: &AddressRecord) -> Result<&str> {
    validate::validate_postal_code(&record.postal_code)?;
    Ok(&record.postal_code)
}

/// Returns the validation result that should be displayed
/// below the given field.
pub fn field_invalidation(
    record: &AddressRecord,
    field: AddressField,
) -> Option<PostalCodeInvalidation> {
    if !field.is_validated() {
        return None;
    }
    validate::validate_postal_code(record.get(field)).err()
}
