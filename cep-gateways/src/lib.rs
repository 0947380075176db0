pub mod download;
pub mod viacep;
