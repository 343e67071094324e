//! Storage backends for the repository traits in `flota_core::storage`.

#[cfg(feature = "inmemory")]
pub mod inmemory;

#[cfg(feature = "postgres")]
pub mod postgres;
