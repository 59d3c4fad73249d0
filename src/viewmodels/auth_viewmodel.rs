// ============================================================================
// AUTH VIEWMODEL - login, registro, contraseña y recuperación de cuenta
// ============================================================================

use crate::error::FormError;
use crate::models::{
    LoginRequest, LoginResponse, RegisterRequest, ResetPasswordRequest, VerificationPurpose,
    VerifyCodeRequest, VerifyEmailRequest,
};
use crate::router::Route;
use crate::services::{ApiClient, GlooTransport, SessionService, Transport};
use crate::state::{LoginForm, SharedForm, VerificationForm};
use crate::utils::i18n::t;
use crate::viewmodels::server_or;

pub struct AuthViewModel<T: Transport = GlooTransport> {
    api: ApiClient<T>,
}

impl<T: Transport> AuthViewModel<T> {
    pub fn new(api: ApiClient<T>) -> Self {
        Self { api }
    }

    fn session(&self) -> &SessionService {
        self.api.session()
    }

    fn lang(&self) -> String {
        self.session().language()
    }

    fn alert(&self, key: &str) {
        self.session().notifier().alert(&t(key, &self.lang()));
    }

    pub async fn login(&self, form: &LoginForm) -> Result<LoginResponse, FormError> {
        if form.id.trim().is_empty() || form.password.is_empty() {
            return Err(FormError::MissingFields);
        }

        let request = LoginRequest {
            id: form.id.trim().to_string(),
            password: form.password.clone(),
        };
        let response = self
            .api
            .login(&request)
            .await
            .map_err(|e| server_or(e, "fallo_login", &self.lang()))?;

        self.session().login(response.user_id.clone(), &request.id);
        self.api.mark_authorized();

        let greeting = t("login_exitoso", &self.lang()).replace("{name}", &response.name);
        self.session().notifier().alert(&greeting);
        self.session().navigate(Route::Main);
        Ok(response)
    }

    /// Enviar el código al email del formulario
    pub async fn request_code(
        &self,
        purpose: VerificationPurpose,
        form: &SharedForm<VerificationForm>,
    ) -> Result<(), FormError> {
        let snapshot = form.borrow().clone();
        if snapshot.email.trim().is_empty() {
            return Err(FormError::MissingFields);
        }

        let request = VerifyEmailRequest {
            email: snapshot.email.trim().to_string(),
            purpose,
            id: snapshot.id.trim().to_string(),
            name: match purpose {
                VerificationPurpose::Register | VerificationPurpose::RecoverAccount => {
                    Some(snapshot.name.trim().to_string())
                }
                _ => None,
            },
        };
        self.api
            .request_verification(&request)
            .await
            .map_err(|e| FormError::api("fallo_envio_email", e))?;

        self.alert("codigo_enviado");
        Ok(())
    }

    /// Código correcto -> `verified = true`
    pub async fn verify_code(&self, form: &SharedForm<VerificationForm>) -> Result<(), FormError> {
        let snapshot = form.borrow().clone();
        if snapshot.email.trim().is_empty() || snapshot.code.trim().is_empty() {
            return Err(FormError::MissingFields);
        }

        let request = VerifyCodeRequest {
            email: snapshot.email.trim().to_string(),
            code: snapshot.code.trim().to_string(),
        };
        self.api
            .verify_code(&request)
            .await
            .map_err(|e| FormError::api("fallo_verificacion", e))?;

        form.borrow_mut().verified = true;
        self.alert("verificacion_completa");
        Ok(())
    }

    pub async fn register(&self, form: &SharedForm<VerificationForm>) -> Result<(), FormError> {
        let snapshot = form.borrow().clone();
        if !snapshot.verified {
            return Err(FormError::NotVerified);
        }
        if [&snapshot.name, &snapshot.id, &snapshot.password, &snapshot.email]
            .iter()
            .any(|v| v.trim().is_empty())
        {
            return Err(FormError::MissingFields);
        }

        let request = RegisterRequest {
            name: snapshot.name.trim().to_string(),
            id: snapshot.id.trim().to_string(),
            password: snapshot.password.clone(),
            email: snapshot.email.trim().to_string(),
        };
        self.api
            .register(&request)
            .await
            .map_err(|e| FormError::api("error_registro", e))?;

        log::info!("✅ [AUTH] Registro completado para {}", request.id);
        self.alert("registro_exitoso");
        self.session().navigate(Route::Login);
        Ok(())
    }

    /// Sin verificación previa no se envía nada
    pub async fn reset_password(&self, form: &SharedForm<VerificationForm>) -> Result<(), FormError> {
        let snapshot = form.borrow().clone();
        if !snapshot.verified {
            return Err(FormError::NotVerified);
        }
        if [&snapshot.id, &snapshot.email, &snapshot.password]
            .iter()
            .any(|v| v.trim().is_empty())
        {
            return Err(FormError::MissingFields);
        }

        let request = ResetPasswordRequest {
            id: snapshot.id.trim().to_string(),
            email: snapshot.email.trim().to_string(),
            password: snapshot.password.clone(),
        };
        self.api
            .reset_password(&request)
            .await
            .map_err(|e| FormError::api("fallo_cambio_password", e))?;

        self.alert("password_cambiado");
        self.session().navigate(Route::Login);
        Ok(())
    }

    /// La cuenta se reactiva al verificar el código (purpose `recoverAccount`)
    pub async fn recover_account(&self, form: &SharedForm<VerificationForm>) -> Result<(), FormError> {
        if !form.borrow().verified {
            return Err(FormError::NotVerified);
        }
        log::info!("✅ [AUTH] Cuenta recuperada: {}", form.borrow().id);
        self.alert("cuenta_recuperada");
        self.session().navigate(Route::Login);
        Ok(())
    }
}
