// ============================================================================
// FORM STATE - formularios con verificación por email
// ============================================================================
// Compartidos como Rc<RefCell<..>>: los inputs escriben sin re-render y
// los viewmodels leen un snapshot antes de cada await.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::UserInfo;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub id: String,
    pub password: String,
}

impl LoginForm {
    pub fn clear(&mut self) {
        self.id.clear();
        self.password.clear();
    }
}

/// Registro, cambio de contraseña y recuperación de cuenta
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VerificationForm {
    pub id: String,
    pub name: String,
    pub email: String,
    pub code: String,
    pub password: String,
    pub verified: bool,
}

impl VerificationForm {
    pub fn shared() -> SharedForm<Self> {
        Rc::new(RefCell::new(Self::default()))
    }
}

/// Perfil editable en la pantalla principal
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileForm {
    pub id: String,
    pub name: String,
    pub email: String,
    pub initial_email: String,
    pub password: String,
    pub new_password: String,
    pub code: String,
    pub verified: bool,
    /// Email al que corresponde el código verificado
    pub verified_email: String,
}

impl ProfileForm {
    pub fn from_user(user: &UserInfo) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            initial_email: user.email.clone(),
            ..Self::default()
        }
    }

    pub fn email_changed(&self) -> bool {
        self.email != self.initial_email
    }

    /// El email actual es el que se verificó
    pub fn email_verified(&self) -> bool {
        self.verified && self.verified_email == self.email.trim()
    }

    /// Editar el email invalida una verificación anterior
    pub fn set_email(&mut self, email: String) {
        if email.trim() != self.verified_email {
            self.verified = false;
        }
        self.email = email;
    }

    /// Tras guardar: fuera contraseñas y código
    pub fn clear_secrets(&mut self) {
        self.password.clear();
        self.new_password.clear();
        self.code.clear();
    }
}

pub type SharedForm<F> = Rc<RefCell<F>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_tracks_email_change() {
        let user = UserInfo {
            id: "20240007".into(),
            name: "Kim".into(),
            email: "kim@uni.ac.kr".into(),
        };
        let mut form = ProfileForm::from_user(&user);
        assert!(!form.email_changed());

        form.email = "kim@other.kr".into();
        assert!(form.email_changed());

        form.password = "old".into();
        form.new_password = "new".into();
        form.code = "123456".into();
        form.clear_secrets();
        assert_eq!((form.password.as_str(), form.new_password.as_str(), form.code.as_str()), ("", "", ""));
        assert_eq!(form.email, "kim@other.kr");
    }

    #[test]
    fn test_editing_email_drops_verification() {
        let mut form = ProfileForm {
            email: "kim@other.kr".into(),
            verified: true,
            verified_email: "kim@other.kr".into(),
            ..ProfileForm::default()
        };
        assert!(form.email_verified());

        form.set_email("kim@third.kr".into());
        assert!(!form.verified);
        assert!(!form.email_verified());
    }
}
