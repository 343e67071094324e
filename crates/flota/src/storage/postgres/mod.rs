mod error;
mod repository;
mod schema;

pub use repository::PostgresRepository;
