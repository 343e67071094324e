/// Health check (GET /).
///
/// Plain-text banner confirming the API is up.
#[axum::debug_handler]
pub async fn root() -> &'static str {
    "¡API de Conductores y Automóviles funcionando!"
}
