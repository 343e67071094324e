//! PostgreSQL repository implementation.
//!
//! Implements the repository traits from `flota_core::storage` over a
//! `sqlx` connection pool. Every operation is a single parameterized
//! query; the join shapes mirror the pure functions in
//! `flota_core::flota`.

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use flota_core::flota::{Automovil, AutomovilEncontrado, Conductor, PatenteFilter, Solito};
use flota_core::storage::{
    AutomovilRepository, ConductorRepository, RepositoryError, Result, SolitoRepository,
};

use super::error::map_sqlx_error;
use super::schema;

use crate::config::Config;

/// PostgreSQL-based repository implementation.
pub struct PostgresRepository {
    pool: PgPool,
}

impl PostgresRepository {
    /// Connects the pool and verifies the database answers.
    ///
    /// The `SELECT NOW()` ping surfaces a bad `DATABASE_URL` at startup
    /// instead of on the first request.
    pub async fn new(config: &Config) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.pg_max_connections)
            .connect(&config.database_url)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        let (ahora,): (String,) = sqlx::query_as("SELECT NOW()::TEXT")
            .fetch_one(&pool)
            .await
            .map_err(map_sqlx_error)?;

        tracing::info!(server_time = %ahora, "Connected to PostgreSQL");

        Ok(Self { pool })
    }

    /// Creates the tables if they don't exist yet.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::raw_sql(schema::CREATE_TABLES)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(())
    }
}

#[async_trait]
impl ConductorRepository for PostgresRepository {
    async fn list_conductores(&self) -> Result<Vec<Conductor>> {
        let rows = sqlx::query_as::<_, (String, i32)>("SELECT nombre, edad FROM conductores")
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(rows
            .into_iter()
            .map(|(nombre, edad)| Conductor { nombre, edad })
            .collect())
    }

    async fn conductores_sin_auto(&self, edad_minima: i32) -> Result<Vec<Conductor>> {
        let rows = sqlx::query_as::<_, (String, i32)>(
            r#"
            SELECT c.nombre, c.edad
            FROM conductores c
            LEFT JOIN automoviles a ON c.nombre = a.nombre_conductor
            WHERE a.nombre_conductor IS NULL
              AND c.edad >= $1
            "#,
        )
        .bind(edad_minima)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows
            .into_iter()
            .map(|(nombre, edad)| Conductor { nombre, edad })
            .collect())
    }
}

#[async_trait]
impl AutomovilRepository for PostgresRepository {
    async fn list_automoviles(&self) -> Result<Vec<Automovil>> {
        let rows = sqlx::query_as::<_, (String, String, Option<String>)>(
            "SELECT marca, patente, nombre_conductor FROM automoviles",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows
            .into_iter()
            .map(|(marca, patente, nombre_conductor)| Automovil {
                marca,
                patente,
                nombre_conductor,
            })
            .collect())
    }

    async fn buscar_automoviles(
        &self,
        filtro: &PatenteFilter,
    ) -> Result<Vec<AutomovilEncontrado>> {
        let (condicion, valor) = match filtro {
            PatenteFilter::Exacta(patente) => ("a.patente = $1", patente.clone()),
            PatenteFilter::Inicio(prefijo) => ("a.patente LIKE $1", format!("{prefijo}%")),
        };

        let sql = format!(
            r#"
            SELECT a.marca, a.patente, a.nombre_conductor, c.edad
            FROM automoviles a
            LEFT JOIN conductores c ON a.nombre_conductor = c.nombre
            WHERE {condicion}
            "#
        );

        let rows = sqlx::query_as::<_, (String, String, Option<String>, Option<i32>)>(&sql)
            .bind(valor)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(rows
            .into_iter()
            .map(
                |(marca, patente, nombre_conductor, edad)| AutomovilEncontrado {
                    marca,
                    patente,
                    nombre_conductor,
                    edad,
                },
            )
            .collect())
    }
}

#[async_trait]
impl SolitoRepository for PostgresRepository {
    async fn solitos(&self) -> Result<Vec<Solito>> {
        type Fila = (
            Option<String>,
            Option<i32>,
            Option<String>,
            Option<String>,
            Option<String>,
        );

        let rows = sqlx::query_as::<_, Fila>(
            r#"
            SELECT c.nombre, c.edad, a.marca, a.patente, a.nombre_conductor
            FROM conductores c
            FULL OUTER JOIN automoviles a ON c.nombre = a.nombre_conductor
            WHERE c.nombre IS NULL OR a.nombre_conductor IS NULL
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows
            .into_iter()
            .map(|(nombre, edad, marca, patente, nombre_conductor)| Solito {
                nombre,
                edad,
                marca,
                patente,
                nombre_conductor,
            })
            .collect())
    }
}
