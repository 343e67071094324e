//! Application state with repository-based storage.
//!
//! The state is cloned into every handler and holds one trait object
//! per storage concern. Backend selection happens at compile time via
//! mutually exclusive cargo features.

use std::sync::Arc;

use flota_core::storage::{AutomovilRepository, ConductorRepository, SolitoRepository};

// ============================================================================
// Compile-time feature validation
// ============================================================================

// Storage features: exactly one must be enabled, they are mutually exclusive
#[cfg(all(feature = "postgres", feature = "inmemory"))]
compile_error!("Cannot enable both 'postgres' and 'inmemory' storage features");

#[cfg(not(any(feature = "postgres", feature = "inmemory")))]
compile_error!("Must enable exactly one storage feature: 'postgres' or 'inmemory'");

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Driver queries.
    pub conductores: Arc<dyn ConductorRepository>,
    /// Automobile queries.
    pub automoviles: Arc<dyn AutomovilRepository>,
    /// Cross-table orphans query.
    pub solitos: Arc<dyn SolitoRepository>,
}

impl AppState {
    /// Creates an AppState whose three repositories are backed by one
    /// storage implementation.
    pub fn from_repository<R>(repo: Arc<R>) -> Self
    where
        R: ConductorRepository + AutomovilRepository + SolitoRepository + 'static,
    {
        Self {
            conductores: repo.clone(),
            automoviles: repo.clone(),
            solitos: repo,
        }
    }

    /// Creates an AppState over the in-memory backend seeded with demo
    /// rows covering every join shape.
    #[cfg(feature = "inmemory")]
    pub fn with_demo_data() -> Self {
        use crate::demo_data;
        use crate::storage::inmemory::InMemoryRepository;

        let repo = InMemoryRepository::with_data(
            demo_data::conductores_demo(),
            demo_data::automoviles_demo(),
        );
        Self::from_repository(Arc::new(repo))
    }

    /// Creates an AppState over an empty in-memory backend.
    #[cfg(feature = "inmemory")]
    pub fn empty() -> Self {
        use crate::storage::inmemory::InMemoryRepository;

        Self::from_repository(Arc::new(InMemoryRepository::new()))
    }
}
