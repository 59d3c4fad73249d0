// ============================================================================
// VIEWMODELS - lógica de los flujos de UI (sin DOM)
// ============================================================================
// Devuelven Result<_, FormError>; los mensajes de éxito y la navegación
// salen por el Notifier/Navigator de la sesión.
// ============================================================================

pub mod auth_viewmodel;
pub mod seat_viewmodel;
pub mod profile_viewmodel;
pub mod notice_viewmodel;
pub mod reservation_viewmodel;

pub use auth_viewmodel::AuthViewModel;
pub use seat_viewmodel::SeatViewModel;
pub use profile_viewmodel::ProfileViewModel;
pub use notice_viewmodel::NoticeViewModel;
pub use reservation_viewmodel::ReservationViewModel;

use crate::error::{ApiError, FormError};
use crate::services::SessionService;
use crate::utils::i18n::t;

/// Status del servidor -> su mensaje (o el texto de `fallback_key`);
/// red/parse/CSRF -> mensaje genérico
pub(crate) fn server_or(error: ApiError, fallback_key: &'static str, lang: &str) -> FormError {
    match error {
        ApiError::Status { .. } => FormError::Rejected(error.user_message(&t(fallback_key, lang))),
        other => FormError::api(fallback_key, other),
    }
}

/// Mostrar el error de un flujo en un alert (cancelar no muestra nada)
pub fn alert_error(session: &SessionService, error: &FormError) {
    if matches!(error, FormError::Cancelled) {
        return;
    }
    log::warn!("⚠️ [UI] {}", error);
    session.notifier().alert(&error.user_message(&session.language()));
}
