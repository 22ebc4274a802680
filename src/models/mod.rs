//! Database and configuration models for the veterinarian service.

pub mod config;
pub mod vet;
