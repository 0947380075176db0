use strum::{EnumCount, EnumIter, EnumString};

/// The input fields of the address form.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum AddressField {
    #[strum(serialize = "cep", serialize = "postal-code", serialize = "postal_code", serialize = "zip")]
    PostalCode,
    #[strum(serialize = "logradouro", serialize = "street")]
    Street,
    #[strum(serialize = "complemento", serialize = "complement")]
    Complement,
    #[strum(serialize = "bairro", serialize = "neighborhood")]
    Neighborhood,
    #[strum(serialize = "cidade", serialize = "city")]
    City,
    #[strum(serialize = "estado", serialize = "state")]
    State,
}

impl AddressField {
    /// The label that is displayed next to the input.
    pub const fn label(self) -> &'static str {
        match self {
            Self::PostalCode => "CEP",
            Self::Street => "Logradouro",
            Self::Complement => "Complemento",
            Self::Neighborhood => "Bairro",
            Self::City => "Cidade",
            Self::State => "Estado",
        }
    }

    /// The key that is used for this field in exported files.
    pub const fn key(self) -> &'static str {
        match self {
            Self::PostalCode => "cep",
            Self::Street => "logradouro",
            Self::Complement => "complemento",
            Self::Neighborhood => "bairro",
            Self::City => "cidade",
            Self::State => "estado",
        }
    }

    /// Only the postal code is subject to validation.
    pub const fn is_validated(self) -> bool {
        matches!(self, Self::PostalCode)
    }
}
