//! Seed rows for the in-memory backend.
//!
//! The set deliberately covers every join shape the endpoints compute:
//! paired drivers, drivers without a car, an unassigned car, and a car
//! whose driver reference is dangling.

use flota_core::flota::{Automovil, Conductor};

/// Demo drivers.
pub fn conductores_demo() -> Vec<Conductor> {
    [("Ana", 34), ("Bruno", 52), ("Carla", 19), ("Diego", 45)]
        .into_iter()
        .map(|(nombre, edad)| Conductor {
            nombre: nombre.to_string(),
            edad,
        })
        .collect()
}

/// Demo automobiles.
pub fn automoviles_demo() -> Vec<Automovil> {
    [
        ("Fiat", "AB123CD", Some("Ana")),
        ("Toyota", "HXJH55", Some("Bruno")),
        // Dangling reference: there is no driver named "Esteban"
        ("Renault", "HX990A", Some("Esteban")),
        // Unassigned car
        ("Chevrolet", "ZZ001B", None),
    ]
    .into_iter()
    .map(|(marca, patente, nombre_conductor)| Automovil {
        marca: marca.to_string(),
        patente: patente.to_string(),
        nombre_conductor: nombre_conductor.map(String::from),
    })
    .collect()
}
