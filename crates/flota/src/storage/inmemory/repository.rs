//! In-memory repository implementation.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use flota_core::flota::{
    self, Automovil, AutomovilEncontrado, Conductor, PatenteFilter, Solito,
};
use flota_core::storage::{
    AutomovilRepository, ConductorRepository, Result, SolitoRepository,
};

/// In-memory storage backend for demo and testing.
///
/// Rows live in `Vec`s behind `Arc<RwLock<_>>`; the join semantics come
/// from the pure functions in `flota_core::flota`, so this backend and
/// the Postgres one answer queries identically.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    conductores: Arc<RwLock<Vec<Conductor>>>,
    automoviles: Arc<RwLock<Vec<Automovil>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with the given rows.
    pub fn with_data(conductores: Vec<Conductor>, automoviles: Vec<Automovil>) -> Self {
        Self {
            conductores: Arc::new(RwLock::new(conductores)),
            automoviles: Arc::new(RwLock::new(automoviles)),
        }
    }
}

#[async_trait]
impl ConductorRepository for InMemoryRepository {
    async fn list_conductores(&self) -> Result<Vec<Conductor>> {
        Ok(self.conductores.read().await.clone())
    }

    async fn conductores_sin_auto(&self, edad_minima: i32) -> Result<Vec<Conductor>> {
        let conductores = self.conductores.read().await;
        let automoviles = self.automoviles.read().await;
        Ok(flota::conductores_sin_auto(
            &conductores,
            &automoviles,
            edad_minima,
        ))
    }
}

#[async_trait]
impl AutomovilRepository for InMemoryRepository {
    async fn list_automoviles(&self) -> Result<Vec<Automovil>> {
        Ok(self.automoviles.read().await.clone())
    }

    async fn buscar_automoviles(
        &self,
        filtro: &PatenteFilter,
    ) -> Result<Vec<AutomovilEncontrado>> {
        let conductores = self.conductores.read().await;
        let automoviles = self.automoviles.read().await;
        Ok(flota::buscar_automoviles(&automoviles, &conductores, filtro))
    }
}

#[async_trait]
impl SolitoRepository for InMemoryRepository {
    async fn solitos(&self) -> Result<Vec<Solito>> {
        let conductores = self.conductores.read().await;
        let automoviles = self.automoviles.read().await;
        Ok(flota::solitos(&conductores, &automoviles))
    }
}
