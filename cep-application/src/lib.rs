#[macro_use]
extern crate log;

mod export_address;
mod form;
mod lookup;

pub mod prelude {
    pub use super::{export_address::*, form::*, lookup::*};
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::ExportError>;

pub(crate) use cep_core::{
    entities::*,
    gateways::{download::*, lookup::*},
    usecases,
    util::validate::{PostalCodeInvalidation, Validate},
};

#[cfg(test)]
pub(crate) mod tests;
