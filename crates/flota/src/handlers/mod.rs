pub mod automoviles;
pub mod conductores;
pub mod error;
pub mod root;
pub mod solitos;
