pub mod gateways;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use cep_entities::{address::*, field::*, lookup::*};
}
