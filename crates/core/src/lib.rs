//! Core domain logic for the flota service.
//!
//! This crate holds the pure, I/O-free half of the system: the wire
//! types for drivers and automobiles, the join semantics implemented as
//! plain functions over slices, and the storage traits the server's
//! backends implement. Nothing here depends on axum or sqlx.

pub mod flota;
pub mod storage;
