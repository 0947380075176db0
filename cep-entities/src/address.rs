use crate::field::AddressField;

/// The six values of the address form.
///
/// All fields are always present. An empty string means
/// that nothing has been entered (or looked up) yet.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AddressRecord {
    pub postal_code  : String,
    pub street       : String,
    pub complement   : String,
    pub neighborhood : String,
    pub city         : String,
    pub state        : String,
}

impl AddressRecord {
    pub fn new(postal_code: impl Into<String>) -> Self {
        Self {
            postal_code: postal_code.into(),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    pub fn get(&self, field: AddressField) -> &str {
        match field {
            AddressField::PostalCode => &self.postal_code,
            AddressField::Street => &self.street,
            AddressField::Complement => &self.complement,
            AddressField::Neighborhood => &self.neighborhood,
            AddressField::City => &self.city,
            AddressField::State => &self.state,
        }
    }

    pub fn get_mut(&mut self, field: AddressField) -> &mut String {
        match field {
            AddressField::PostalCode => &mut self.postal_code,
            AddressField::Street => &mut self.street,
            AddressField::Complement => &mut self.complement,
            AddressField::Neighborhood => &mut self.neighborhood,
            AddressField::City => &mut self.city,
            AddressField::State => &mut self.state,
        }
    }

    pub fn set(&mut self, field: AddressField, value: impl Into<String>) {
        *self.get_mut(field) = value.into();
    }
}
