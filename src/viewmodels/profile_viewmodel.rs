// ============================================================================
// PROFILE VIEWMODEL - info del usuario, modificación, logout y baja
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::FormError;
use crate::models::{
    MessageResponse, ModifyUserRequest, VerificationPurpose, VerifyCodeRequest, VerifyEmailRequest,
    WithdrawRequest,
};
use crate::router::Route;
use crate::services::{ApiClient, GlooTransport, SessionService, Transport};
use crate::state::{ProfileForm, SharedForm};
use crate::utils::i18n::t;
use crate::viewmodels::server_or;

pub struct ProfileViewModel<T: Transport = GlooTransport> {
    api: ApiClient<T>,
    form: SharedForm<ProfileForm>,
}

impl<T: Transport> ProfileViewModel<T> {
    pub fn new(api: ApiClient<T>, form: SharedForm<ProfileForm>) -> Self {
        Self { api, form }
    }

    fn session(&self) -> &SessionService {
        self.api.session()
    }

    fn lang(&self) -> String {
        self.session().language()
    }

    fn alert(&self, message: &str) {
        self.session().notifier().alert(message);
    }

    /// Sin login no se pide nada
    pub async fn load(&self) -> Result<(), FormError> {
        if !self.session().is_logged_in() {
            return Ok(());
        }
        let user = self
            .api
            .user_info()
            .await
            .map_err(|e| FormError::api("error_carga_usuario", e))?;
        *self.form.borrow_mut() = ProfileForm::from_user(&user);
        Ok(())
    }

    pub async fn request_email_code(&self) -> Result<(), FormError> {
        let snapshot = self.form.borrow().clone();
        if snapshot.email.trim().is_empty() {
            return Err(FormError::MissingFields);
        }
        let request = VerifyEmailRequest {
            email: snapshot.email.trim().to_string(),
            purpose: VerificationPurpose::ModifyInfo,
            id: snapshot.id.clone(),
            name: None,
        };
        self.api
            .request_verification(&request)
            .await
            .map_err(|e| FormError::api("fallo_envio_email", e))?;
        self.alert(&t("codigo_enviado", &self.lang()));
        Ok(())
    }

    pub async fn verify_code(&self) -> Result<(), FormError> {
        let snapshot = self.form.borrow().clone();
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
        {
            let mut form = self.form.borrow_mut();
            form.verified = true;
            form.verified_email = request.email.clone();
        }
        self.alert(&t("verificacion_completa", &self.lang()));
        Ok(())
    }

    pub async fn modify(&self) -> Result<(), FormError> {
        let snapshot = self.form.borrow().clone();
        let email_verified = snapshot.email_verified();
        if snapshot.email_changed() && !email_verified {
            return Err(FormError::EmailChangeNeedsVerification);
        }

        let request = ModifyUserRequest {
            name: snapshot.name.clone(),
            email: snapshot.email.clone(),
            password: snapshot.password.clone(),
            new_password: snapshot.new_password.clone(),
            is_verified: email_verified,
        };
        let response = self
            .api
            .modify_user(&request)
            .await
            .map_err(|e| server_or(e, "error_generico", &self.lang()))?;

        if let Some(message) = response.message.filter(|m| !m.is_empty()) {
            self.alert(&message);
        }
        let mut form = self.form.borrow_mut();
        form.clear_secrets();
        let email = form.email.clone();
        form.initial_email = email;
        Ok(())
    }

    pub async fn logout(&self) -> Result<(), FormError> {
        if !self.session().is_logged_in() {
            return Err(FormError::NotLoggedIn);
        }
        let response = self
            .api
            .logout()
            .await
            .map_err(|_| FormError::Rejected(t("error_logout", &self.lang())))?;
        self.finish_session(response, "logout_exitoso", "fallo_logout")
    }

    /// `confirmed` = respuesta del usuario al diálogo de confirmación
    pub async fn withdraw(&self, confirmed: bool) -> Result<(), FormError> {
        let session = self.session();
        let user_id = match session.user_id() {
            Some(id) if session.is_logged_in() => id,
            _ => return Err(FormError::NotLoggedIn),
        };
        if !confirmed {
            return Err(FormError::Cancelled);
        }

        let response = self
            .api
            .withdraw(&WithdrawRequest { user_id })
            .await
            .map_err(|_| FormError::Rejected(t("error_baja", &self.lang())))?;
        self.finish_session(response, "baja_exitosa", "fallo_baja")
    }

    /// Logout/baja: `success` -> limpiar sesión y storage, ir al login
    fn finish_session(
        &self,
        response: MessageResponse,
        success_key: &str,
        failure_key: &str,
    ) -> Result<(), FormError> {
        if !response.success {
            return Err(FormError::Rejected(t(failure_key, &self.lang())));
        }
        self.session().logout();
        *self.form.borrow_mut() = ProfileForm::default();
        self.alert(&t(success_key, &self.lang()));
        self.session().navigate(Route::Login);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::http::HttpMethod;
    use crate::services::testing::{MockTransport, TestHarness};
    use futures::executor::block_on;
    use serde_json::json;

    fn vm(h: &TestHarness) -> ProfileViewModel<Rc<MockTransport>> {
        ProfileViewModel::new(h.api.clone(), Rc::new(RefCell::new(ProfileForm::default())))
    }

    fn loaded(h: &TestHarness) -> ProfileViewModel<Rc<MockTransport>> {
        h.transport.csrf(1).respond(
            HttpMethod::Get,
            "/users/info",
            200,
            json!({ "user": { "id": 20240007, "name": "Park", "email": "park@uni.ac.kr" } }),
        );
        let vm = vm(h);
        block_on(vm.load()).unwrap();
        vm
    }

    #[test]
    fn test_load_skips_when_logged_out() {
        let h = TestHarness::new();
        block_on(vm(&h).load()).unwrap();
        assert!(h.transport.requests().is_empty());
    }

    #[test]
    fn test_load_fills_form_with_csrf_header() {
        let h = TestHarness::logged_in();
        let vm = loaded(&h);

        let form = vm.form.borrow().clone();
        assert_eq!(form.id, "20240007");
        assert_eq!(form.initial_email, "park@uni.ac.kr");
        let info = h.transport.requests().pop().unwrap();
        assert_eq!(info.header_value("X-CSRF-Token"), Some("csrf-0"));
    }

    #[test]
    fn test_changed_email_needs_verification() {
        let h = TestHarness::logged_in();
        let vm = loaded(&h);
        vm.form.borrow_mut().email = "park@new.kr".into();
        let before = h.transport.requests().len();

        assert_eq!(block_on(vm.modify()), Err(FormError::EmailChangeNeedsVerification));
        assert_eq!(h.transport.requests().len(), before);
    }

    #[test]
    fn test_email_edited_after_verification_is_rejected() {
        let h = TestHarness::logged_in();
        let vm = loaded(&h);
        vm.form.borrow_mut().email = "verified@x.kr".into();
        vm.form.borrow_mut().code = "123456".into();
        h.transport
            .csrf(1)
            .respond(HttpMethod::Post, "/users/verify-code", 200, json!({ "message": "ok" }));
        block_on(vm.verify_code()).unwrap();

        vm.form.borrow_mut().email = "unverified@x.kr".into();
        let before = h.transport.requests().len();

        assert_eq!(block_on(vm.modify()), Err(FormError::EmailChangeNeedsVerification));
        assert_eq!(h.transport.requests().len(), before);
    }

    #[test]
    fn test_verified_email_change_is_sent_as_verified() {
        let h = TestHarness::logged_in();
        let vm = loaded(&h);
        vm.form.borrow_mut().email = "park@new.kr".into();
        vm.form.borrow_mut().code = "123456".into();
        h.transport
            .csrf(1)
            .respond(HttpMethod::Post, "/users/verify-code", 200, json!({ "message": "ok" }));
        block_on(vm.verify_code()).unwrap();
        h.transport
            .csrf(1)
            .respond(HttpMethod::Patch, "/users/modify", 200, json!({ "message": "수정 완료" }));

        block_on(vm.modify()).unwrap();

        let body = h.transport.requests().pop().unwrap().body.unwrap();
        assert_eq!(body["email"], "park@new.kr");
        assert_eq!(body["isVerified"], true);
        assert_eq!(vm.form.borrow().initial_email, "park@new.kr");
    }

    #[test]
    fn test_modify_clears_secrets() {
        let h = TestHarness::logged_in();
        let vm = loaded(&h);
        {
            let mut form = vm.form.borrow_mut();
            form.password = "old".into();
            form.new_password = "new".into();
        }
        h.transport
            .csrf(1)
            .respond(HttpMethod::Patch, "/users/modify", 200, json!({ "message": "수정 완료" }));

        block_on(vm.modify()).unwrap();

        let body = h.transport.requests().pop().unwrap().body.unwrap();
        assert_eq!(body["newpassword"], "new");
        assert_eq!(body["isVerified"], false);
        assert!(vm.form.borrow().password.is_empty());
        assert_eq!(h.notifier.alerts(), vec!["수정 완료".to_string()]);
    }

    #[test]
    fn test_logout_success_clears_session() {
        let h = TestHarness::logged_in();
        h.transport
            .csrf(1)
            .respond(HttpMethod::Post, "/users/logout", 200, json!({ "success": true }));

        block_on(vm(&h).logout()).unwrap();

        assert!(!h.session.is_logged_in());
        assert!(h.store.saved().is_none());
        assert_eq!(h.navigator.routes(), vec![Route::Login]);
    }

    #[test]
    fn test_logout_without_success_flag_is_rejected() {
        let h = TestHarness::logged_in();
        h.transport
            .csrf(1)
            .respond(HttpMethod::Post, "/users/logout", 200, json!({ "success": false }));

        assert!(matches!(block_on(vm(&h).logout()), Err(FormError::Rejected(_))));
        assert!(h.session.is_logged_in());
    }

    #[test]
    fn test_withdraw_cancelled_sends_nothing() {
        let h = TestHarness::logged_in();
        assert_eq!(block_on(vm(&h).withdraw(false)), Err(FormError::Cancelled));
        assert!(h.transport.requests().is_empty());
    }

    #[test]
    fn test_withdraw_sends_user_id() {
        let h = TestHarness::logged_in();
        h.transport
            .csrf(1)
            .respond(HttpMethod::Patch, "/users/account", 200, json!({ "success": true }));

        block_on(vm(&h).withdraw(true)).unwrap();

        let body = h.transport.requests().pop().unwrap().body.unwrap();
        assert_eq!(body, json!({ "user_Id": 7 }));
        assert!(!h.session.is_logged_in());
    }
}
