use async_trait::async_trait;

use crate::flota::{Automovil, AutomovilEncontrado, Conductor, PatenteFilter, Solito};

use super::Result;

/// Repository for driver queries.
#[async_trait]
pub trait ConductorRepository: Send + Sync {
    /// Gets every driver.
    async fn list_conductores(&self) -> Result<Vec<Conductor>>;

    /// Gets drivers with no automobile and age greater than or equal to
    /// `edad_minima`.
    async fn conductores_sin_auto(&self, edad_minima: i32) -> Result<Vec<Conductor>>;
}

/// Repository for automobile queries.
#[async_trait]
pub trait AutomovilRepository: Send + Sync {
    /// Gets every automobile.
    async fn list_automoviles(&self) -> Result<Vec<Automovil>>;

    /// Searches automobiles by plate, attaching the owning driver's age.
    async fn buscar_automoviles(
        &self,
        filtro: &PatenteFilter,
    ) -> Result<Vec<AutomovilEncontrado>>;
}

/// Repository for the cross-table orphans query.
#[async_trait]
pub trait SolitoRepository: Send + Sync {
    /// Gets drivers without an automobile and automobiles without a
    /// registered driver, as one combined row set.
    async fn solitos(&self) -> Result<Vec<Solito>>;
}
