// ============================================================================
// API CLIENT - peticiones autenticadas + refresh silencioso de tokens
// ============================================================================
// Flujo ante un 403:
//   Authorized -> RefreshPending -> (refresh OK)  -> replay una vez -> Authorized
//                                -> (refresh 403) -> expire()        -> LoggedOut
// Un request re-enviado (Replay) nunca vuelve a disparar el refresh.
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::models::{
    BookedSeat, CsrfTokenResponse, LoginRequest, LoginResponse, MessageResponse, ModifyUserRequest,
    NoticeDetail, NoticeDetailResponse, NoticeListResponse, NoticeSummary, RegisterRequest,
    Reservation, ReservationsResponse, ReserveRequest, ResetPasswordRequest, Seat, SeatsResponse,
    UserInfo, UserInfoResponse, VerifyCodeRequest, VerifyEmailRequest, WithdrawRequest,
};
use crate::services::http::{ApiRequest, ApiResponse, CsrfHeader, GlooTransport, Transport};
use crate::services::session_service::SessionService;

const CSRF_PATH: &str = "/csrf-token";
const TOKEN_REFRESH_PATH: &str = "/users/token/refresh";

/// Estado del pipeline de refresh
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshState {
    Authorized,
    RefreshPending,
    LoggedOut,
}

/// Intento de un request: el original o su único re-envío
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestAttempt {
    Initial,
    Replay,
}

#[derive(Clone)]
pub struct ApiClient<T: Transport = GlooTransport> {
    transport: T,
    session: SessionService,
    refresh_state: Rc<Cell<RefreshState>>,
}

impl ApiClient<GlooTransport> {
    pub fn new(session: SessionService) -> Self {
        Self::with_transport(GlooTransport::new(), session)
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn with_transport(transport: T, session: SessionService) -> Self {
        Self {
            transport,
            session,
            refresh_state: Rc::new(Cell::new(RefreshState::Authorized)),
        }
    }

    pub fn session(&self) -> &SessionService {
        &self.session
    }

    pub fn refresh_state(&self) -> RefreshState {
        self.refresh_state.get()
    }

    /// Tras un login nuevo el pipeline vuelve a Authorized
    pub fn mark_authorized(&self) {
        self.refresh_state.set(RefreshState::Authorized);
    }

    /// Enviar un request pasando por el interceptor de 403
    pub async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.dispatch(&request, RequestAttempt::Initial).await
    }

    async fn dispatch(
        &self,
        request: &ApiRequest,
        attempt: RequestAttempt,
    ) -> Result<ApiResponse, ApiError> {
        let error = match self.send_checked(request).await {
            Ok(response) => return Ok(response),
            Err(error) => error,
        };

        if !error.is_authorization_failure() || attempt == RequestAttempt::Replay {
            return Err(error);
        }

        log::info!("🔄 [API] 403 en {}, intentando refresh de tokens", request.path);
        self.refresh_state.set(RefreshState::RefreshPending);

        match self.refresh_tokens().await {
            Ok(()) => {
                self.refresh_state.set(RefreshState::Authorized);
                log::info!("✅ [API] Tokens renovados, re-enviando {}", request.path);
                // El resultado del re-envío se devuelve tal cual
                self.send_checked(request).await
            }
            Err(refresh_error) if refresh_error.is_authorization_failure() => {
                log::warn!("⚠️ [API] Refresh rechazado (403), sesión expirada");
                self.refresh_state.set(RefreshState::LoggedOut);
                self.session.expire();
                Err(error)
            }
            Err(refresh_error) => {
                log::error!("❌ [API] Error en refresh: {}", refresh_error);
                self.refresh_state.set(RefreshState::Authorized);
                Err(error)
            }
        }
    }

    /// Un envío sin interceptor: status no-2xx -> ApiError::Status
    async fn send_checked(&self, request: &ApiRequest) -> Result<ApiResponse, ApiError> {
        self.transport.send(request).await?.into_result()
    }

    /// Token CSRF nuevo (nunca se cachea)
    pub async fn fetch_csrf_token(&self) -> Result<String, ApiError> {
        let response = self
            .send_checked(&ApiRequest::get(CSRF_PATH))
            .await
            .map_err(|e| {
                log::error!("❌ [API] Error obteniendo CSRF token: {}", e);
                ApiError::Csrf(e.to_string())
            })?;
        let token = response
            .json::<CsrfTokenResponse>()
            .map_err(|e| ApiError::Csrf(e.to_string()))?;
        Ok(token.csrf_token)
    }

    async fn refresh_tokens(&self) -> Result<(), ApiError> {
        let csrf = self.fetch_csrf_token().await?;
        let request = ApiRequest::post(TOKEN_REFRESH_PATH)
            .empty_json()
            .csrf(&csrf, CsrfHeader::Standard);
        self.send_checked(&request).await.map(|_| ())
    }

    async fn get_json<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R, ApiError> {
        self.execute(request).await?.json()
    }

    /// CSRF -> request con el header -> JSON
    async fn with_csrf<R: DeserializeOwned>(
        &self,
        request: ApiRequest,
        header: CsrfHeader,
    ) -> Result<R, ApiError> {
        let token = self.fetch_csrf_token().await?;
        self.execute(request.csrf(&token, header)).await?.json()
    }

    /// Como `with_csrf`, pero cualquier 2xx vale: el body solo aporta el mensaje
    async fn acknowledged(
        &self,
        request: ApiRequest,
        header: CsrfHeader,
    ) -> Result<MessageResponse, ApiError> {
        let token = self.fetch_csrf_token().await?;
        let response = self.execute(request.csrf(&token, header)).await?;
        Ok(MessageResponse::from_body(&response.body))
    }

    // ------------------------------------------------------------------------
    // Usuarios
    // ------------------------------------------------------------------------

    pub async fn login(&self, body: &LoginRequest) -> Result<LoginResponse, ApiError> {
        log::info!("🔐 [API] Login de {}", body.id);
        self.with_csrf(ApiRequest::post("/users/login").json(body)?, CsrfHeader::Standard)
            .await
    }

    pub async fn register(&self, body: &RegisterRequest) -> Result<MessageResponse, ApiError> {
        self.acknowledged(ApiRequest::post("/users/register").json(body)?, CsrfHeader::Standard)
            .await
    }

    pub async fn logout(&self) -> Result<MessageResponse, ApiError> {
        self.acknowledged(ApiRequest::post("/users/logout").empty_json(), CsrfHeader::Standard)
            .await
    }

    pub async fn request_verification(
        &self,
        body: &VerifyEmailRequest,
    ) -> Result<MessageResponse, ApiError> {
        log::info!("📧 [API] Código de verificación ({:?}) para {}", body.purpose, body.email);
        self.acknowledged(ApiRequest::post("/users/verify-email").json(body)?, CsrfHeader::Standard)
            .await
    }

    pub async fn verify_code(&self, body: &VerifyCodeRequest) -> Result<MessageResponse, ApiError> {
        self.acknowledged(ApiRequest::post("/users/verify-code").json(body)?, CsrfHeader::Standard)
            .await
    }

    pub async fn reset_password(
        &self,
        body: &ResetPasswordRequest,
    ) -> Result<MessageResponse, ApiError> {
        self.acknowledged(
            ApiRequest::patch("/users/password/reset").json(body)?,
            CsrfHeader::Standard,
        )
        .await
    }

    pub async fn modify_user(&self, body: &ModifyUserRequest) -> Result<MessageResponse, ApiError> {
        self.acknowledged(ApiRequest::patch("/users/modify").json(body)?, CsrfHeader::Standard)
            .await
    }

    pub async fn withdraw(&self, body: &WithdrawRequest) -> Result<MessageResponse, ApiError> {
        self.acknowledged(ApiRequest::patch("/users/account").json(body)?, CsrfHeader::Standard)
            .await
    }

    pub async fn user_info(&self) -> Result<UserInfo, ApiError> {
        let response: UserInfoResponse = self
            .with_csrf(ApiRequest::get("/users/info"), CsrfHeader::Standard)
            .await?;
        Ok(response.user)
    }

    pub async fn my_reservations(&self) -> Result<Vec<Reservation>, ApiError> {
        let response: ReservationsResponse = self
            .with_csrf(ApiRequest::get("/users/reservations"), CsrfHeader::Legacy)
            .await?;
        Ok(response.reservations)
    }

    // ------------------------------------------------------------------------
    // Asientos / reservas
    // ------------------------------------------------------------------------

    pub async fn seats(&self) -> Result<Vec<Seat>, ApiError> {
        let response: SeatsResponse = self.get_json(ApiRequest::get("/seats")).await?;
        Ok(response.seats)
    }

    pub async fn booked_seats(&self) -> Result<Vec<BookedSeat>, ApiError> {
        self.get_json(ApiRequest::get("/reservations")).await
    }

    pub async fn reserve(&self, body: &ReserveRequest) -> Result<MessageResponse, ApiError> {
        log::info!("💺 [API] Reservando asiento {}", body.seat_id);
        self.acknowledged(ApiRequest::post("/reservations").json(body)?, CsrfHeader::Standard)
            .await
    }

    pub async fn exit_seat(&self) -> Result<MessageResponse, ApiError> {
        self.acknowledged(ApiRequest::delete("/reservations"), CsrfHeader::Standard)
            .await
    }

    // ------------------------------------------------------------------------
    // Avisos
    // ------------------------------------------------------------------------

    pub async fn notices(&self) -> Result<Vec<NoticeSummary>, ApiError> {
        let response: NoticeListResponse = self.get_json(ApiRequest::get("/notice")).await?;
        Ok(response.notices)
    }

    pub async fn notice(&self, id: i64) -> Result<NoticeDetail, ApiError> {
        let response: NoticeDetailResponse =
            self.get_json(ApiRequest::get(format!("/notice/{}", id))).await?;
        Ok(response.notice)
    }

    pub async fn increment_views(&self, id: i64) -> Result<(), ApiError> {
        self.acknowledged(
            ApiRequest::patch(format!("/notice/{}/increment-views", id)).empty_json(),
            CsrfHeader::Legacy,
        )
        .await?;
        Ok(())
    }
}
