//! Domain aggregates exposed by the veterinarian service layer.

pub mod types;
pub mod vet;
