//! Pure implementations of the service's join queries.
//!
//! Each function mirrors one of the SQL shapes the Postgres backend
//! runs (LEFT JOIN with NULL filter, FULL OUTER JOIN orphans, LEFT JOIN
//! plate search). The in-memory backend delegates here, so the router
//! tests exercise the same semantics the SQL encodes.

use super::types::{Automovil, AutomovilEncontrado, Conductor, PatenteFilter, Solito};

/// Whether an automobile is assigned to this driver.
fn asignado_a(automovil: &Automovil, conductor: &Conductor) -> bool {
    automovil.nombre_conductor.as_deref() == Some(conductor.nombre.as_str())
}

/// Whether an automobile's driver reference resolves to a real driver.
/// NULL and dangling references both count as unresolved.
fn tiene_conductor(automovil: &Automovil, conductores: &[Conductor]) -> bool {
    match automovil.nombre_conductor.as_deref() {
        Some(nombre) => conductores.iter().any(|c| c.nombre == nombre),
        None => false,
    }
}

/// Drivers with no automobile and `edad >= edad_minima`.
///
/// Equivalent to:
/// `SELECT c.* FROM conductores c LEFT JOIN automoviles a ON c.nombre =
/// a.nombre_conductor WHERE a.nombre_conductor IS NULL AND c.edad >= $1`
pub fn conductores_sin_auto(
    conductores: &[Conductor],
    automoviles: &[Automovil],
    edad_minima: i32,
) -> Vec<Conductor> {
    conductores
        .iter()
        .filter(|c| c.edad >= edad_minima)
        .filter(|c| !automoviles.iter().any(|a| asignado_a(a, c)))
        .cloned()
        .collect()
}

/// Symmetric orphans of both tables: drivers without an automobile and
/// automobiles whose driver reference is NULL or dangling.
///
/// Equivalent to the FULL OUTER JOIN filtered on either side being
/// NULL. Driver-side orphans come first; within each side, input order
/// is preserved.
pub fn solitos(conductores: &[Conductor], automoviles: &[Automovil]) -> Vec<Solito> {
    let mut filas: Vec<Solito> = conductores
        .iter()
        .filter(|c| !automoviles.iter().any(|a| asignado_a(a, c)))
        .map(Solito::conductor)
        .collect();

    filas.extend(
        automoviles
            .iter()
            .filter(|a| !tiene_conductor(a, conductores))
            .map(Solito::automovil),
    );

    filas
}

/// Plate search with the owning driver's age attached (LEFT JOIN, so
/// `edad` is None for unassigned or dangling cars).
pub fn buscar_automoviles(
    automoviles: &[Automovil],
    conductores: &[Conductor],
    filtro: &PatenteFilter,
) -> Vec<AutomovilEncontrado> {
    automoviles
        .iter()
        .filter(|a| filtro.matches(&a.patente))
        .map(|a| {
            let edad = a
                .nombre_conductor
                .as_deref()
                .and_then(|nombre| conductores.iter().find(|c| c.nombre == nombre))
                .map(|c| c.edad);
            AutomovilEncontrado {
                marca: a.marca.clone(),
                patente: a.patente.clone(),
                nombre_conductor: a.nombre_conductor.clone(),
                edad,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conductor(nombre: &str, edad: i32) -> Conductor {
        Conductor {
            nombre: nombre.to_string(),
            edad,
        }
    }

    fn automovil(marca: &str, patente: &str, nombre_conductor: Option<&str>) -> Automovil {
        Automovil {
            marca: marca.to_string(),
            patente: patente.to_string(),
            nombre_conductor: nombre_conductor.map(String::from),
        }
    }

    fn flota_de_prueba() -> (Vec<Conductor>, Vec<Automovil>) {
        let conductores = vec![
            conductor("Ana", 34),
            conductor("Bruno", 52),
            conductor("Carla", 19),
            conductor("Diego", 45),
        ];
        let automoviles = vec![
            automovil("Fiat", "AB123CD", Some("Ana")),
            automovil("Toyota", "HXJH55", Some("Bruno")),
            // Dangling reference: no driver named "Esteban"
            automovil("Renault", "HX990A", Some("Esteban")),
            // Unassigned car
            automovil("Chevrolet", "ZZ001B", None),
        ];
        (conductores, automoviles)
    }

    #[test]
    fn test_sin_auto_excludes_drivers_with_a_car() {
        let (conductores, automoviles) = flota_de_prueba();
        let sin_auto = conductores_sin_auto(&conductores, &automoviles, 0);
        let nombres: Vec<&str> = sin_auto.iter().map(|c| c.nombre.as_str()).collect();
        assert_eq!(nombres, vec!["Carla", "Diego"]);
    }

    #[test]
    fn test_sin_auto_applies_minimum_age() {
        let (conductores, automoviles) = flota_de_prueba();
        let sin_auto = conductores_sin_auto(&conductores, &automoviles, 30);
        let nombres: Vec<&str> = sin_auto.iter().map(|c| c.nombre.as_str()).collect();
        assert_eq!(nombres, vec!["Diego"]);
    }

    #[test]
    fn test_sin_auto_minimum_age_is_inclusive() {
        let (conductores, automoviles) = flota_de_prueba();
        let sin_auto = conductores_sin_auto(&conductores, &automoviles, 45);
        assert_eq!(sin_auto.len(), 1);
        assert_eq!(sin_auto[0].nombre, "Diego");
    }

    #[test]
    fn test_solitos_includes_both_sides() {
        let (conductores, automoviles) = flota_de_prueba();
        let filas = solitos(&conductores, &automoviles);

        // Two drivers without a car, then two cars without a driver.
        assert_eq!(filas.len(), 4);
        assert_eq!(filas[0].nombre.as_deref(), Some("Carla"));
        assert_eq!(filas[1].nombre.as_deref(), Some("Diego"));
        assert_eq!(filas[2].patente.as_deref(), Some("HX990A"));
        assert_eq!(filas[2].nombre_conductor.as_deref(), Some("Esteban"));
        assert_eq!(filas[3].patente.as_deref(), Some("ZZ001B"));
        assert!(filas[3].nombre_conductor.is_none());
    }

    #[test]
    fn test_solitos_empty_when_everyone_is_paired() {
        let conductores = vec![conductor("Ana", 34)];
        let automoviles = vec![automovil("Fiat", "AB123CD", Some("Ana"))];
        assert!(solitos(&conductores, &automoviles).is_empty());
    }

    #[test]
    fn test_buscar_exacta_attaches_driver_age() {
        let (conductores, automoviles) = flota_de_prueba();
        let filtro = PatenteFilter::Exacta("HXJH55".to_string());
        let encontrados = buscar_automoviles(&automoviles, &conductores, &filtro);

        assert_eq!(encontrados.len(), 1);
        assert_eq!(encontrados[0].marca, "Toyota");
        assert_eq!(encontrados[0].edad, Some(52));
    }

    #[test]
    fn test_buscar_inicio_matches_multiple_plates() {
        let (conductores, automoviles) = flota_de_prueba();
        let filtro = PatenteFilter::Inicio("HX".to_string());
        let encontrados = buscar_automoviles(&automoviles, &conductores, &filtro);

        let patentes: Vec<&str> = encontrados.iter().map(|a| a.patente.as_str()).collect();
        assert_eq!(patentes, vec!["HXJH55", "HX990A"]);
    }

    #[test]
    fn test_buscar_dangling_driver_has_no_age() {
        let (conductores, automoviles) = flota_de_prueba();
        let filtro = PatenteFilter::Exacta("HX990A".to_string());
        let encontrados = buscar_automoviles(&automoviles, &conductores, &filtro);

        assert_eq!(encontrados.len(), 1);
        assert_eq!(encontrados[0].nombre_conductor.as_deref(), Some("Esteban"));
        assert_eq!(encontrados[0].edad, None);
    }

    #[test]
    fn test_buscar_no_match_returns_empty() {
        let (conductores, automoviles) = flota_de_prueba();
        let filtro = PatenteFilter::Exacta("NOPE00".to_string());
        assert!(buscar_automoviles(&automoviles, &conductores, &filtro).is_empty());
    }
}
