pub mod download;
pub mod lookup;
