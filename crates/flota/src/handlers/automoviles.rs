use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use flota_core::flota::{Automovil, AutomovilEncontrado, PatenteFilter};

use crate::{handlers::error::ApiError, state::AppState};

/// List all automobiles (GET /automoviles).
pub async fn list_automoviles(
    State(state): State<AppState>,
) -> Result<Json<Vec<Automovil>>, ApiError> {
    let automoviles = state
        .automoviles
        .list_automoviles()
        .await
        .map_err(ApiError::storage("Error al consultar automoviles"))?;

    Ok(Json(automoviles))
}

/// Query string for GET /auto.
#[derive(Debug, Deserialize)]
pub struct BuscarAutoParams {
    patente: Option<String>,
    iniciopatente: Option<String>,
}

impl BuscarAutoParams {
    /// Turns the raw parameters into a plate filter. Empty strings
    /// count as absent; when both parameters are present, `patente`
    /// wins.
    fn filtro(self) -> Option<PatenteFilter> {
        match (self.patente, self.iniciopatente) {
            (Some(p), _) if !p.is_empty() => Some(PatenteFilter::Exacta(p)),
            (_, Some(p)) if !p.is_empty() => Some(PatenteFilter::Inicio(p)),
            _ => None,
        }
    }
}

/// Search automobiles by exact plate or plate prefix
/// (GET /auto?patente=P | GET /auto?iniciopatente=P).
///
/// Responds 400 when neither parameter is given and 404 when the search
/// matches nothing.
pub async fn buscar_auto(
    State(state): State<AppState>,
    Query(params): Query<BuscarAutoParams>,
) -> Result<Json<Vec<AutomovilEncontrado>>, ApiError> {
    let filtro = params.filtro().ok_or(ApiError::BadRequest(
        "Debe proporcionar el parámetro \"patente\" o \"iniciopatente\"",
    ))?;

    let encontrados = state
        .automoviles
        .buscar_automoviles(&filtro)
        .await
        .map_err(ApiError::storage("Error al buscar automóvil"))?;

    if encontrados.is_empty() {
        return Err(ApiError::NotFound(
            "No se encontraron automóviles con los criterios especificados",
        ));
    }

    Ok(Json(encontrados))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(patente: Option<&str>, iniciopatente: Option<&str>) -> BuscarAutoParams {
        BuscarAutoParams {
            patente: patente.map(String::from),
            iniciopatente: iniciopatente.map(String::from),
        }
    }

    #[test]
    fn test_patente_wins_over_iniciopatente() {
        let filtro = params(Some("HXJH55"), Some("HX")).filtro();
        assert_eq!(filtro, Some(PatenteFilter::Exacta("HXJH55".to_string())));
    }

    #[test]
    fn test_empty_patente_falls_back_to_prefix() {
        let filtro = params(Some(""), Some("HX")).filtro();
        assert_eq!(filtro, Some(PatenteFilter::Inicio("HX".to_string())));
    }

    #[test]
    fn test_no_params_yields_no_filter() {
        assert_eq!(params(None, None).filtro(), None);
        assert_eq!(params(Some(""), Some("")).filtro(), None);
    }
}
