// Dobles de prueba para el pipeline HTTP y el SessionService

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use serde_json::{json, Value};

use crate::error::ApiError;
use crate::models::SessionState;
use crate::router::Route;
use crate::services::api_client::ApiClient;
use crate::services::http::{ApiRequest, ApiResponse, HttpMethod, Transport};
use crate::services::session_service::{Navigator, Notifier, SessionService, SessionStore};

type Scripted = Result<ApiResponse, ApiError>;

/// Transporte con respuestas programadas por (método, path).
/// Cada respuesta se consume una vez; sin respuesta -> 404.
#[derive(Default)]
pub struct MockTransport {
    scripted: RefCell<HashMap<(HttpMethod, String), VecDeque<Scripted>>>,
    requests: RefCell<Vec<ApiRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, method: HttpMethod, path: &str, status: u16, body: Value) -> &Self {
        self.push(method, path, Ok(ApiResponse::new(status, body)))
    }

    pub fn fail(&self, method: HttpMethod, path: &str, error: ApiError) -> &Self {
        self.push(method, path, Err(error))
    }

    /// Token CSRF válido para las próximas `times` peticiones
    pub fn csrf(&self, times: usize) -> &Self {
        for i in 0..times {
            self.respond(HttpMethod::Get, "/csrf-token", 200, json!({ "csrfToken": format!("csrf-{}", i) }));
        }
        self
    }

    fn push(&self, method: HttpMethod, path: &str, response: Scripted) -> &Self {
        self.scripted
            .borrow_mut()
            .entry((method, path.to_string()))
            .or_default()
            .push_back(response);
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    pub fn count(&self, method: HttpMethod, path: &str) -> usize {
        self.requests
            .borrow()
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .count()
    }

    /// Paths en orden de envío
    pub fn paths(&self) -> Vec<String> {
        self.requests.borrow().iter().map(|r| r.path.clone()).collect()
    }
}

impl Transport for Rc<MockTransport> {
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, ApiError> {
        self.requests.borrow_mut().push(request.clone());
        let next = self
            .scripted
            .borrow_mut()
            .get_mut(&(request.method, request.path.clone()))
            .and_then(VecDeque::pop_front);
        next.unwrap_or_else(|| Ok(ApiResponse::new(404, json!({ "message": "not scripted" }))))
    }
}

#[derive(Default)]
pub struct MemorySessionStore {
    saved: RefCell<Option<SessionState>>,
}

impl MemorySessionStore {
    pub fn seed(&self, state: SessionState) {
        *self.saved.borrow_mut() = Some(state);
    }

    pub fn saved(&self) -> Option<SessionState> {
        self.saved.borrow().clone()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Option<SessionState> {
        self.saved.borrow().clone()
    }

    fn save(&self, state: &SessionState) -> Result<(), String> {
        *self.saved.borrow_mut() = Some(state.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), String> {
        *self.saved.borrow_mut() = None;
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    routes: RefCell<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn routes(&self) -> Vec<Route> {
        self.routes.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.routes.borrow_mut().push(route);
    }
}

pub struct RecordingNotifier {
    alerts: RefCell<Vec<String>>,
    confirm_answer: RefCell<bool>,
}

impl Default for RecordingNotifier {
    fn default() -> Self {
        Self {
            alerts: RefCell::new(Vec::new()),
            confirm_answer: RefCell::new(true),
        }
    }
}

impl RecordingNotifier {
    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }

    pub fn answer_confirm(&self, answer: bool) {
        *self.confirm_answer.borrow_mut() = answer;
    }
}

impl Notifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }

    fn confirm(&self, _message: &str) -> bool {
        *self.confirm_answer.borrow()
    }
}

/// SessionService + ApiClient cableados con dobles en memoria
pub struct TestHarness {
    pub transport: Rc<MockTransport>,
    pub store: Rc<MemorySessionStore>,
    pub navigator: Rc<RecordingNavigator>,
    pub notifier: Rc<RecordingNotifier>,
    pub session: SessionService,
    pub api: ApiClient<Rc<MockTransport>>,
}

impl TestHarness {
    pub fn new() -> Self {
        let transport = Rc::new(MockTransport::new());
        let store = Rc::new(MemorySessionStore::default());
        let navigator = Rc::new(RecordingNavigator::default());
        let notifier = Rc::new(RecordingNotifier::default());
        let session = SessionService::new(
            store.clone(),
            navigator.clone(),
            notifier.clone(),
            Rc::new(RefCell::new("EN".to_string())),
        );
        let api = ApiClient::with_transport(transport.clone(), session.clone());

        Self {
            transport,
            store,
            navigator,
            notifier,
            session,
            api,
        }
    }

    /// Harness con un usuario ya logueado
    pub fn logged_in() -> Self {
        let harness = Self::new();
        harness
            .session
            .login(Some(crate::models::UserId::Number(7)), "20240007");
        harness
    }
}
