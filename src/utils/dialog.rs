// ============================================================================
// DIALOG - alert/confirm nativos del navegador
// ============================================================================

use crate::services::session_service::Notifier;

pub struct BrowserNotifier;

impl Notifier for BrowserNotifier {
    fn alert(&self, message: &str) {
        if message.is_empty() {
            return;
        }
        if let Some(win) = web_sys::window() {
            if win.alert_with_message(message).is_err() {
                log::warn!("⚠️ [DIALOG] alert() falló: {}", message);
            }
        }
    }

    /// Si el diálogo no se puede mostrar se toma como "cancelar"
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|win| win.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}
