//! Wire types for the drivers/automobiles API.
//!
//! Field names are serialized as-is and form the JSON contract the
//! frontend consumes, so they keep the Spanish column names of the
//! underlying tables.

use serde::{Deserialize, Serialize};

/// A registered driver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conductor {
    pub nombre: String,
    pub edad: i32,
}

/// An automobile, possibly assigned to a driver by name.
///
/// `nombre_conductor` can be NULL in the database or reference a driver
/// that no longer exists; the service treats both as "unassigned" when
/// computing orphans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Automovil {
    pub marca: String,
    pub patente: String,
    pub nombre_conductor: Option<String>,
}

/// Plate-search result: automobile columns plus the owning driver's age
/// (LEFT JOIN, so `edad` is absent for unassigned or dangling cars).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutomovilEncontrado {
    pub marca: String,
    pub patente: String,
    pub nombre_conductor: Option<String>,
    pub edad: Option<i32>,
}

/// One row of the symmetric-orphans query (FULL OUTER JOIN where either
/// side is missing): a driver without a car carries only the driver
/// columns, a car without a registered driver only the car columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solito {
    pub nombre: Option<String>,
    pub edad: Option<i32>,
    pub marca: Option<String>,
    pub patente: Option<String>,
    pub nombre_conductor: Option<String>,
}

impl Solito {
    /// Orphan row for a driver that has no automobile.
    pub fn conductor(conductor: &Conductor) -> Self {
        Self {
            nombre: Some(conductor.nombre.clone()),
            edad: Some(conductor.edad),
            marca: None,
            patente: None,
            nombre_conductor: None,
        }
    }

    /// Orphan row for an automobile with no matching driver.
    pub fn automovil(automovil: &Automovil) -> Self {
        Self {
            nombre: None,
            edad: None,
            marca: Some(automovil.marca.clone()),
            patente: Some(automovil.patente.clone()),
            nombre_conductor: automovil.nombre_conductor.clone(),
        }
    }
}

/// Plate search criteria for the `/auto` endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatenteFilter {
    /// Exact plate match (`patente=HXJH55`).
    Exacta(String),
    /// Prefix match (`iniciopatente=H`, i.e. `LIKE 'H%'`).
    Inicio(String),
}

impl PatenteFilter {
    /// Whether a plate satisfies this filter.
    pub fn matches(&self, patente: &str) -> bool {
        match self {
            PatenteFilter::Exacta(p) => patente == p,
            PatenteFilter::Inicio(prefijo) => patente.starts_with(prefijo.as_str()),
        }
    }
}
