use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::types::MessageBody;
use models::errors::ValidationErrors;
use service::errors::ServiceError;
use thiserror::Error;

pub const INTERNAL_ERROR_MESSAGE: &str = "Error interno del servidor";
pub const ID_MISMATCH_MESSAGE: &str = "El ID en la URL no coincide con el ID del cliente";
pub const VALIDATION_MESSAGE: &str = "Uno o más campos no son válidos";

/// Error response: a status plus `{"mensaje": ...}`, with per-field
/// details under `errores` for validation failures.
#[derive(Debug, Error)]
#[error("{status}: {mensaje}")]
pub struct JsonApiError {
    pub status: StatusCode,
    pub mensaje: String,
    pub errores: Option<ValidationErrors>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, mensaje: impl Into<String>) -> Self {
        Self { status, mensaje: mensaje.into(), errores: None }
    }

    pub fn bad_request(mensaje: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, mensaje)
    }

    pub fn validation(errores: ValidationErrors) -> Self {
        Self { status: StatusCode::BAD_REQUEST, mensaje: VALIDATION_MESSAGE.into(), errores: Some(errores) }
    }

    /// Mapping for list/get: unexpected failures are the server's fault.
    pub fn read(e: ServiceError) -> Self {
        match e {
            ServiceError::NotFound { .. } => Self::new(StatusCode::NOT_FOUND, e.to_string()),
            _ => Self::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE),
        }
    }

    /// Mapping for create/update/delete: unexpected failures are reported
    /// as 400 carrying the failure's own message.
    pub fn write(e: ServiceError) -> Self {
        match e {
            ServiceError::NotFound { .. } => Self::new(StatusCode::NOT_FOUND, e.to_string()),
            _ => Self::bad_request(e.to_string()),
        }
    }
}

impl From<JsonRejection> for JsonApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl From<PathRejection> for JsonApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        match self.errores {
            Some(errores) => (
                self.status,
                Json(serde_json::json!({"mensaje": self.mensaje, "errores": errores})),
            )
                .into_response(),
            None => (self.status, Json(MessageBody::new(self.mensaje))).into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_failures_hide_details_behind_500() {
        let err = JsonApiError::read(ServiceError::Db("connection refused".into()));
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.mensaje, INTERNAL_ERROR_MESSAGE);
    }

    #[test]
    fn write_failures_surface_message_as_400() {
        let err = JsonApiError::write(ServiceError::Db("duplicate key".into()));
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.mensaje, "database error: duplicate key");
    }

    #[test]
    fn display_names_status_and_message() {
        let err = JsonApiError::bad_request(ID_MISMATCH_MESSAGE);
        assert_eq!(
            err.to_string(),
            "400 Bad Request: El ID en la URL no coincide con el ID del cliente"
        );
    }

    #[test]
    fn not_found_is_404_on_both_paths() {
        for err in [
            JsonApiError::read(ServiceError::customer_not_found(3)),
            JsonApiError::write(ServiceError::customer_not_found(3)),
        ] {
            assert_eq!(err.status, StatusCode::NOT_FOUND);
            assert_eq!(err.mensaje, "Cliente con ID 3 no encontrado");
        }
    }
}
