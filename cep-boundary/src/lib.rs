use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

/// The exported address as it is written into `cep.txt`.
///
/// The keys are the names of the form fields.
#[rustfmt::skip]
#[derive(Serialize)]
pub struct Address {
    pub cep         : String,
    pub logradouro  : String,
    pub complemento : String,
    pub bairro      : String,
    pub cidade      : String,
    pub estado      : String,
}

/// Response body of `GET https://viacep.com.br/ws/{cep}/json/`.
///
/// Only the keys that are merged into the form are listed here,
/// everything else (`uf`, `ibge`, `ddd`, `erro`, ...) is ignored.
#[rustfmt::skip]
#[derive(Default, Deserialize)]
pub struct ViaCepAddress {
    #[serde(default)]
    pub logradouro  : Option<String>,
    #[serde(default)]
    pub complemento : Option<String>,
    #[serde(default)]
    pub bairro      : Option<String>,
    #[serde(default)]
    pub localidade  : Option<String>,
    #[serde(default)]
    pub estado      : Option<String>,
}
