use axum::{extract::State, Json};

use flota_core::flota::Solito;

use crate::{handlers::error::ApiError, state::AppState};

/// Symmetric orphans of both tables (GET /solitos): drivers without an
/// automobile plus automobiles without a registered driver.
pub async fn list_solitos(State(state): State<AppState>) -> Result<Json<Vec<Solito>>, ApiError> {
    let solitos = state
        .solitos
        .solitos()
        .await
        .map_err(ApiError::storage("Error al consultar solitos"))?;

    Ok(Json(solitos))
}
