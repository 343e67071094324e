mod queries;
mod types;

pub use queries::{buscar_automoviles, conductores_sin_auto, solitos};
pub use types::{Automovil, AutomovilEncontrado, Conductor, PatenteFilter, Solito};
