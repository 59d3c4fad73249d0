// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::CONFIG;
use crate::models::{NoticeDetail, ReservationRow};
use crate::router::{BrowserNavigator, Route};
use crate::services::{ApiClient, LocalSessionStore, SessionService};
use crate::state::{Activity, LoginForm, NoticePager, ProfileForm, SeatBoard, SharedForm, VerificationForm};
use crate::utils::dialog::BrowserNotifier;
use crate::utils::storage::{load_language_pref, save_language_pref};

/// Estado global de la aplicación
#[derive(Clone)]
pub struct AppState {
    pub route: Rc<RefCell<Route>>,
    pub language: Rc<RefCell<String>>,
    pub session: SessionService,
    pub api: ApiClient,

    // Formularios
    pub login_form: SharedForm<LoginForm>,
    pub auth_form: SharedForm<VerificationForm>,
    pub profile: SharedForm<ProfileForm>,

    // Datos por página
    pub seats: Rc<RefCell<SeatBoard>>,
    pub notices: Rc<RefCell<NoticePager>>,
    pub notice_detail: Rc<RefCell<Option<NoticeDetail>>>,
    pub reservations: Rc<RefCell<Vec<ReservationRow>>>,

    // UI
    pub activity: Activity,
    pub load_error: Rc<RefCell<Option<String>>>,

    pub change_subscribers: Rc<RefCell<Vec<Rc<dyn Fn()>>>>,
}

impl AppState {
    pub fn new() -> Self {
        let language = Rc::new(RefCell::new(load_language_pref(&CONFIG.default_language)));
        let session = SessionService::new(
            Rc::new(LocalSessionStore::new()),
            Rc::new(BrowserNavigator),
            Rc::new(BrowserNotifier),
            language.clone(),
        );
        let api = ApiClient::new(session.clone());

        Self {
            route: Rc::new(RefCell::new(Route::Main)),
            language,
            session,
            api,

            login_form: Rc::new(RefCell::new(LoginForm::default())),
            auth_form: VerificationForm::shared(),
            profile: Rc::new(RefCell::new(ProfileForm::default())),

            seats: Rc::new(RefCell::new(SeatBoard::new())),
            notices: Rc::new(RefCell::new(NoticePager::new(CONFIG.notices_per_page))),
            notice_detail: Rc::new(RefCell::new(None)),
            reservations: Rc::new(RefCell::new(Vec::new())),

            activity: Activity::new(),
            load_error: Rc::new(RefCell::new(None)),

            change_subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn lang(&self) -> String {
        self.language.borrow().clone()
    }

    pub fn set_language(&self, lang: &str) {
        *self.language.borrow_mut() = lang.to_string();
        save_language_pref(lang);
        log::info!("🌐 [STATE] Idioma -> {}", lang);
        self.notify_subscribers();
    }

    pub fn current_route(&self) -> Route {
        self.route.borrow().clone()
    }

    /// Cambio de página: los formularios y errores no sobreviven
    pub fn enter_route(&self, route: Route) {
        *self.route.borrow_mut() = route;
        *self.auth_form.borrow_mut() = VerificationForm::default();
        self.login_form.borrow_mut().clear();
        *self.load_error.borrow_mut() = None;
    }

    /// Hay alguna carga de página pendiente
    pub fn is_loading(&self) -> bool {
        self.activity.is_loading()
    }

    /// Botones deshabilitados mientras corre una acción
    pub fn is_busy(&self) -> bool {
        self.activity.is_action_running()
    }

    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.change_subscribers.borrow_mut().push(Rc::new(callback));
    }

    /// Notificar a todos los subscribers (re-render completo)
    pub fn notify_subscribers(&self) {
        let subscribers: Vec<_> = self.change_subscribers.borrow().iter().cloned().collect();
        for callback in subscribers {
            callback();
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
