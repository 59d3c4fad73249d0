// ============================================================================
// ERRORES - ApiError (transporte/HTTP) y FormError (flujos de UI)
// ============================================================================

use thiserror::Error;

/// Status con el que el backend señala un access token expirado
pub const AUTHORIZATION_FAILURE_STATUS: u16 = 403;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {}", message.as_deref().unwrap_or("sin mensaje"))]
    Status { status: u16, message: Option<String> },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("CSRF token error: {0}")]
    Csrf(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Solo los 403 disparan el refresh de tokens
    pub fn is_authorization_failure(&self) -> bool {
        self.status() == Some(AUTHORIZATION_FAILURE_STATUS)
    }

    /// Mensaje del servidor si vino en el body
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } => message.as_deref().filter(|m| !m.is_empty()),
            _ => None,
        }
    }

    /// Mensaje para el usuario: el del servidor o el fallback dado
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message()
            .map(str::to_string)
            .unwrap_or_else(|| fallback.to_string())
    }
}

/// Errores de los flujos de formularios (validación + API)
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("required fields are empty")]
    MissingFields,

    #[error("email verification not completed")]
    NotVerified,

    #[error("email change requires verification")]
    EmailChangeNeedsVerification,

    #[error("login required")]
    NotLoggedIn,

    #[error("no seat selected")]
    NoSeatSelected,

    #[error("seat {0} is already booked")]
    SeatAlreadyBooked(i64),

    #[error("cancelled by user")]
    Cancelled,

    #[error("rejected by server: {0}")]
    Rejected(String),

    #[error("{context}: {source}")]
    Api {
        context: &'static str,
        #[source]
        source: ApiError,
    },
}

impl FormError {
    pub fn api(context: &'static str, source: ApiError) -> Self {
        FormError::Api { context, source }
    }

    /// Texto para el alert. `context` es la clave i18n del prefijo del flujo
    pub fn user_message(&self, lang: &str) -> String {
        use crate::utils::i18n::t;

        match self {
            FormError::MissingFields => t("campos_vacios", lang),
            FormError::NotVerified => t("verificacion_requerida", lang),
            FormError::EmailChangeNeedsVerification => t("cambio_email_requiere_verificacion", lang),
            FormError::NotLoggedIn => t("login_requerido", lang),
            FormError::NoSeatSelected => t("seleccione_asiento", lang),
            FormError::SeatAlreadyBooked(_) => t("asiento_ya_reservado", lang),
            FormError::Cancelled => String::new(),
            FormError::Rejected(message) => message.clone(),
            FormError::Api { context, source } => match source {
                ApiError::Status { .. } => {
                    let prefix = t(context, lang);
                    let detail = source.user_message(&t("error_desconocido", lang));
                    format!("{}: {}", prefix, detail)
                }
                ApiError::Csrf(_) => t("error_csrf", lang),
                _ => t("error_inesperado", lang),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_403_is_authorization_failure() {
        let forbidden = ApiError::Status { status: 403, message: None };
        let unauthorized = ApiError::Status { status: 401, message: None };
        assert!(forbidden.is_authorization_failure());
        assert!(!unauthorized.is_authorization_failure());
        assert!(!ApiError::Network("offline".into()).is_authorization_failure());
    }

    #[test]
    fn test_user_message_prefers_server_text() {
        let with_message = ApiError::Status { status: 400, message: Some("이미 예약된 좌석".into()) };
        let empty_message = ApiError::Status { status: 400, message: Some(String::new()) };
        assert_eq!(with_message.user_message("fallback"), "이미 예약된 좌석");
        assert_eq!(empty_message.user_message("fallback"), "fallback");
    }

    #[test]
    fn test_form_error_api_message_uses_context_prefix() {
        let err = FormError::api(
            "fallo_verificacion",
            ApiError::Status { status: 400, message: Some("bad code".into()) },
        );
        assert_eq!(err.user_message("EN"), "Verification failed: bad code");

        let offline = FormError::api("fallo_verificacion", ApiError::Network("down".into()));
        assert_eq!(offline.user_message("EN"), "An unexpected error occurred. Please try again later.");
    }
}
