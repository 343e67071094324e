//! Table definitions for the PostgreSQL backend.
//!
//! The database owns these entities; the service only creates the
//! tables when they are absent so a fresh install can boot. There is
//! deliberately no foreign key from `automoviles.nombre_conductor` to
//! `conductores`: dangling references are part of the data model and
//! what the orphan queries report.

/// Idempotent table creation, executed at startup.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS conductores (
    nombre TEXT PRIMARY KEY,
    edad INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS automoviles (
    patente TEXT PRIMARY KEY,
    marca TEXT NOT NULL,
    nombre_conductor TEXT
);
"#;
