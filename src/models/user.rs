use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::models::UserId;

// ============================================================================
// USUARIOS - requests/responses de /users/*
// ============================================================================

/// Response de `GET /csrf-token`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct CsrfTokenResponse {
    #[serde(rename = "csrfToken")]
    pub csrf_token: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub id: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "userId", default)]
    pub user_id: Option<UserId>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct RegisterRequest {
    pub name: String,
    pub id: String,
    pub password: String,
    pub email: String,
}

/// Para qué se pide el código de verificación por email
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub enum VerificationPurpose {
    #[serde(rename = "verifyAccount")]
    Register,
    #[serde(rename = "resetPassword")]
    ResetPassword,
    #[serde(rename = "modifyInfo")]
    ModifyInfo,
    #[serde(rename = "recoverAccount")]
    RecoverAccount,
}

#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct VerifyEmailRequest {
    pub email: String,
    pub purpose: VerificationPurpose,
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct VerifyCodeRequest {
    pub email: String,
    pub code: String,
}

#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct ResetPasswordRequest {
    pub id: String,
    pub email: String,
    pub password: String,
}

/// Body de `PATCH /users/modify`
#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct ModifyUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "newpassword")]
    pub new_password: String,
    #[serde(rename = "isVerified")]
    pub is_verified: bool,
}

/// Body de `PATCH /users/account` (baja de cuenta)
#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct WithdrawRequest {
    #[serde(rename = "user_Id")]
    pub user_id: UserId,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct UserInfo {
    #[serde(deserialize_with = "string_from_number_or_string", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct UserInfoResponse {
    pub user: UserInfo,
}

/// Respuesta genérica `{success?, message?}`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct MessageResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl MessageResponse {
    /// Body de un 2xx: objeto -> campos, texto plano -> mensaje, resto -> vacío
    pub fn from_body(body: &Value) -> Self {
        match body {
            Value::Object(_) => serde_json::from_value(body.clone()).unwrap_or_else(|e| {
                log::warn!("⚠️ [API] Respuesta con formato inesperado: {}", e);
                Self::default()
            }),
            Value::String(text) => Self {
                message: Some(text.clone()),
                ..Self::default()
            },
            _ => Self::default(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(i64),
    Text(String),
}

pub(crate) fn string_from_number_or_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => n.to_string(),
        NumberOrString::Text(s) => s,
    })
}

pub(crate) fn id_from_number_or_string<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plain_text_body_becomes_message() {
        let ack = MessageResponse::from_body(&Value::String("회원가입 성공".into()));
        assert_eq!(ack.message.as_deref(), Some("회원가입 성공"));
        assert!(!ack.success);

        let ack = MessageResponse::from_body(&json!({ "success": true }));
        assert!(ack.success);
        assert_eq!(MessageResponse::from_body(&Value::Null), MessageResponse::default());
    }

    #[test]
    fn test_purpose_wire_names() {
        let req = VerifyEmailRequest {
            email: "a@b.c".into(),
            purpose: VerificationPurpose::Register,
            id: "2024".into(),
            name: Some("Kim".into()),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["purpose"], "verifyAccount");
        assert_eq!(json["name"], "Kim");

        let req = VerifyEmailRequest { purpose: VerificationPurpose::ResetPassword, name: None, ..req };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["purpose"], "resetPassword");
        assert!(json.get("name").is_none());
    }

    #[test]
    fn test_modify_request_field_names() {
        let json = serde_json::to_value(ModifyUserRequest {
            name: "Kim".into(),
            email: "k@x.io".into(),
            password: "old".into(),
            new_password: "new".into(),
            is_verified: true,
        })
        .unwrap();
        assert_eq!(json["newpassword"], "new");
        assert_eq!(json["isVerified"], true);
    }

    #[test]
    fn test_user_info_numeric_id() {
        let info: UserInfoResponse =
            serde_json::from_str(r#"{"user":{"id":20231234,"name":"Lee","email":"l@x.io"}}"#).unwrap();
        assert_eq!(info.user.id, "20231234");
    }

    #[test]
    fn test_withdraw_body() {
        let json = serde_json::to_value(WithdrawRequest { user_id: UserId::Number(9) }).unwrap();
        assert_eq!(json, serde_json::json!({ "user_Id": 9 }));
    }
}
