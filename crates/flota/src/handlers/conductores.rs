use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use flota_core::flota::Conductor;

use crate::{handlers::error::ApiError, state::AppState};

/// List all drivers (GET /conductores).
pub async fn list_conductores(
    State(state): State<AppState>,
) -> Result<Json<Vec<Conductor>>, ApiError> {
    let conductores = state
        .conductores
        .list_conductores()
        .await
        .map_err(ApiError::storage("Error al consultar conductores"))?;

    Ok(Json(conductores))
}

/// Query string for GET /conductoressinauto.
///
/// `edad` arrives as a raw string so a missing and a non-numeric value
/// produce the same 400, as the original API did.
#[derive(Debug, Deserialize)]
pub struct SinAutoParams {
    edad: Option<String>,
}

/// Parses `edad` the way the original API did (`parseInt(edad, 10)`):
/// optional sign, then the leading run of digits; trailing garbage is
/// ignored. Returns None only when no leading integer exists.
fn parse_edad(valor: &str) -> Option<i32> {
    let valor = valor.trim();
    let (resto, signo) = match valor.as_bytes().first() {
        Some(b'-') => (&valor[1..], -1),
        Some(b'+') => (&valor[1..], 1),
        _ => (valor, 1),
    };

    let fin = resto
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(resto.len());
    if fin == 0 {
        return None;
    }

    resto[..fin].parse::<i32>().ok().map(|n| signo * n)
}

/// Drivers without an automobile, at least `edad` years old
/// (GET /conductoressinauto?edad=N).
pub async fn conductores_sin_auto(
    State(state): State<AppState>,
    Query(params): Query<SinAutoParams>,
) -> Result<Json<Vec<Conductor>>, ApiError> {
    let edad_minima: i32 = params
        .edad
        .as_deref()
        .and_then(parse_edad)
        .ok_or(ApiError::BadRequest(
            "El parámetro edad es obligatorio y debe ser un número",
        ))?;

    let conductores = state
        .conductores
        .conductores_sin_auto(edad_minima)
        .await
        .map_err(ApiError::storage("Error al consultar conductores sin auto"))?;

    Ok(Json(conductores))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_edad_plain_number() {
        assert_eq!(parse_edad("30"), Some(30));
        assert_eq!(parse_edad(" 45 "), Some(45));
    }

    #[test]
    fn test_parse_edad_ignores_trailing_garbage() {
        assert_eq!(parse_edad("30abc"), Some(30));
        assert_eq!(parse_edad("19.5"), Some(19));
    }

    #[test]
    fn test_parse_edad_signs() {
        assert_eq!(parse_edad("+7"), Some(7));
        assert_eq!(parse_edad("-5x"), Some(-5));
    }

    #[test]
    fn test_parse_edad_rejects_no_leading_integer() {
        assert_eq!(parse_edad("treinta"), None);
        assert_eq!(parse_edad(""), None);
        assert_eq!(parse_edad("-"), None);
        assert_eq!(parse_edad("abc30"), None);
    }
}
