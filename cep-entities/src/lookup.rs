use crate::{address::AddressRecord, field::AddressField};

/// The address details returned by a postal code lookup.
///
/// `None` means that the value was missing in the response.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AddressLookup {
    pub street       : Option<String>,
    pub complement   : Option<String>,
    pub neighborhood : Option<String>,
    pub city         : Option<String>,
    pub state        : Option<String>,
}

impl AddressLookup {
    pub fn is_empty(&self) -> bool {
        self.street.is_none()
            && self.complement.is_none()
            && self.neighborhood.is_none()
            && self.city.is_none()
            && self.state.is_none()
    }

    /// The looked up values in form field order.
    ///
    /// The postal code is never part of a lookup result.
    pub fn fields(&self) -> [(AddressField, Option<&str>); 5] {
        [
            (AddressField::Street, self.street.as_deref()),
            (AddressField::Complement, self.complement.as_deref()),
            (AddressField::Neighborhood, self.neighborhood.as_deref()),
            (AddressField::City, self.city.as_deref()),
            (AddressField::State, self.state.as_deref()),
        ]
    }
}

impl From<&AddressRecord> for AddressLookup {
    fn from(from: &AddressRecord) -> Self {
        let AddressRecord {
            postal_code: _,
            street,
            complement,
            neighborhood,
            city,
            state,
        } = from;
        Self {
            street: Some(street.clone()),
            complement: Some(complement.clone()),
            neighborhood: Some(neighborhood.clone()),
            city: Some(city.clone()),
            state: Some(state.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_lookup() {
        assert!(AddressLookup::default().is_empty());
        let l = AddressLookup {
            city: Some(String::new()),
            ..Default::default()
        };
        assert!(!l.is_empty());
    }

    #[test]
    fn fields_never_contain_the_postal_code() {
        let l = AddressLookup::default();
        assert!(l
            .fields()
            .iter()
            .all(|(f, _)| *f != AddressField::PostalCode));
    }
}
