// ============================================================================
// SERVICES - SOLO comunicación API + sesión
// ============================================================================

pub mod http;
pub mod api_client;
pub mod session_service;

#[cfg(test)]
pub mod testing;

pub use http::{ApiRequest, ApiResponse, CsrfHeader, GlooTransport, HttpMethod, Transport};
pub use api_client::{ApiClient, RefreshState, RequestAttempt};
pub use session_service::{LocalSessionStore, Navigator, Notifier, SessionService, SessionStore};
