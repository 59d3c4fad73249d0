// ============================================================================
// SESSION SERVICE - estado de login + colaboradores inyectados
// ============================================================================
// Storage, navegación y diálogos entran por traits para poder
// sustituirlos en tests (MemorySessionStore, RecordingNavigator, ...)
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::CONFIG;
use crate::models::{SessionState, UserId};
use crate::router::Route;
use crate::utils::i18n::t;
use crate::utils::storage::{load_from_storage, remove_from_storage, save_to_storage};

/// Copia persistida del estado de sesión
pub trait SessionStore {
    fn load(&self) -> Option<SessionState>;
    fn save(&self, state: &SessionState) -> Result<(), String>;
    fn clear(&self) -> Result<(), String>;
}

pub trait Navigator {
    fn navigate(&self, route: Route);
}

/// Diálogos bloqueantes del navegador (alert / confirm)
pub trait Notifier {
    fn alert(&self, message: &str);
    fn confirm(&self, message: &str) -> bool;
}

/// localStorage bajo una clave fija
pub struct LocalSessionStore {
    key: String,
}

impl LocalSessionStore {
    pub fn new() -> Self {
        Self {
            key: CONFIG.session_storage_key.clone(),
        }
    }
}

impl Default for LocalSessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore for LocalSessionStore {
    fn load(&self) -> Option<SessionState> {
        load_from_storage(&self.key)
    }

    fn save(&self, state: &SessionState) -> Result<(), String> {
        save_to_storage(&self.key, state)
    }

    fn clear(&self) -> Result<(), String> {
        remove_from_storage(&self.key)
    }
}

#[derive(Clone)]
pub struct SessionService {
    state: Rc<RefCell<SessionState>>,
    language: Rc<RefCell<String>>,
    store: Rc<dyn SessionStore>,
    navigator: Rc<dyn Navigator>,
    notifier: Rc<dyn Notifier>,
}

impl SessionService {
    pub fn new(
        store: Rc<dyn SessionStore>,
        navigator: Rc<dyn Navigator>,
        notifier: Rc<dyn Notifier>,
        language: Rc<RefCell<String>>,
    ) -> Self {
        Self {
            state: Rc::new(RefCell::new(SessionState::logged_out())),
            language,
            store,
            navigator,
            notifier,
        }
    }

    /// Rehidratar desde storage (al arrancar la app)
    pub fn restore(&self) -> SessionState {
        let restored = self.store.load().unwrap_or_default();
        if restored.logged_in {
            log::info!("💾 [SESSION] Sesión restaurada para {}", restored.student_id);
        }
        *self.state.borrow_mut() = restored.clone();
        restored
    }

    pub fn current(&self) -> SessionState {
        self.state.borrow().clone()
    }

    pub fn is_logged_in(&self) -> bool {
        self.state.borrow().logged_in
    }

    pub fn user_id(&self) -> Option<UserId> {
        self.state.borrow().user_id.clone()
    }

    pub fn student_id(&self) -> String {
        self.state.borrow().student_id.clone()
    }

    pub fn language(&self) -> String {
        self.language.borrow().clone()
    }

    pub fn navigator(&self) -> Rc<dyn Navigator> {
        self.navigator.clone()
    }

    pub fn notifier(&self) -> Rc<dyn Notifier> {
        self.notifier.clone()
    }

    pub fn navigate(&self, route: Route) {
        self.navigator.navigate(route);
    }

    /// Login correcto: actualizar y persistir
    pub fn login(&self, user_id: Option<UserId>, student_id: &str) {
        let state = SessionState::logged_in(user_id, student_id);
        if let Err(e) = self.store.save(&state) {
            log::error!("❌ [SESSION] Error guardando sesión: {}", e);
        }
        *self.state.borrow_mut() = state;
        log::info!("✅ [SESSION] Login de {}", student_id);
    }

    /// Logout o baja de cuenta: estado por defecto y storage vacío
    pub fn logout(&self) {
        *self.state.borrow_mut() = SessionState::logged_out();
        if let Err(e) = self.store.clear() {
            log::error!("❌ [SESSION] Error limpiando storage: {}", e);
        }
        log::info!("👋 [SESSION] Sesión cerrada");
    }

    /// Refresh token caducado: avisar, resetear, persistir el estado vacío y volver al login
    pub fn expire(&self) {
        log::warn!("⚠️ [SESSION] Refresh token expirado, forzando logout");
        self.notifier.alert(&t("sesion_expirada", &self.language()));

        let cleared = SessionState::logged_out();
        if let Err(e) = self.store.save(&cleared) {
            log::error!("❌ [SESSION] Error guardando sesión vacía: {}", e);
        }
        *self.state.borrow_mut() = cleared;

        self.navigator.navigate(Route::Login);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::TestHarness;

    #[test]
    fn test_restore_reads_store() {
        let harness = TestHarness::new();
        harness
            .store
            .seed(SessionState::logged_in(Some(UserId::Number(5)), "20230001"));

        let restored = harness.session.restore();
        assert!(restored.logged_in);
        assert!(harness.session.is_logged_in());
        assert_eq!(harness.session.student_id(), "20230001");
    }

    #[test]
    fn test_login_persists_state() {
        let harness = TestHarness::new();
        harness.session.login(Some(UserId::Number(11)), "20241111");

        let saved = harness.store.saved().expect("saved state");
        assert!(saved.logged_in);
        assert_eq!(saved.user_id, Some(UserId::Number(11)));
    }

    #[test]
    fn test_logout_clears_store() {
        let harness = TestHarness::new();
        harness.session.login(Some(UserId::Number(11)), "20241111");
        harness.session.logout();

        assert!(!harness.session.is_logged_in());
        assert!(harness.store.saved().is_none());
    }

    #[test]
    fn test_expire_alerts_persists_and_redirects() {
        let harness = TestHarness::new();
        harness.session.login(Some(UserId::Number(11)), "20241111");
        harness.session.expire();

        assert_eq!(harness.session.current(), SessionState::logged_out());
        assert_eq!(harness.store.saved(), Some(SessionState::logged_out()));
        assert_eq!(harness.navigator.routes(), vec![Route::Login]);
        assert_eq!(harness.notifier.alerts().len(), 1);
    }
}
