use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

// ============================================================================
// ESTADO DE SESIÓN PERSISTIDO
// ============================================================================

/// ID interno del usuario tal como lo devuelve `/users/login`.
/// El backend lo manda como número, pero se acepta también texto.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Number(i64),
    Text(String),
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserId::Number(n) => write!(f, "{}", n),
            UserId::Text(s) => f.write_str(s),
        }
    }
}

/// Estado de login. Se guarda en localStorage como
/// `{"isLoggedIn": bool, "userId": number|null, "id": "학번"}`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SessionState {
    #[serde(rename = "isLoggedIn", default)]
    pub logged_in: bool,

    #[serde(rename = "userId", default, deserialize_with = "deserialize_user_id")]
    pub user_id: Option<UserId>,

    /// Número de estudiante (학번) usado para el login
    #[serde(rename = "id", default)]
    pub student_id: String,
}

impl SessionState {
    pub fn logged_in(user_id: Option<UserId>, student_id: impl Into<String>) -> Self {
        Self {
            logged_in: true,
            user_id,
            student_id: student_id.into(),
        }
    }

    /// Estado inicial / tras logout
    pub fn logged_out() -> Self {
        Self::default()
    }
}

/// `null`, texto vacío y el `-1` que escribían versiones antiguas significan "sin usuario"
fn deserialize_user_id<'de, D>(deserializer: D) -> Result<Option<UserId>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<UserId>::deserialize(deserializer)?;
    Ok(raw.filter(|id| match id {
        UserId::Number(n) => *n >= 0,
        UserId::Text(s) => !s.is_empty(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persisted_shape_uses_legacy_field_names() {
        let state = SessionState::logged_in(Some(UserId::Number(7)), "20231234");
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["isLoggedIn"], true);
        assert_eq!(json["userId"], 7);
        assert_eq!(json["id"], "20231234");
    }

    #[test]
    fn test_legacy_sentinel_user_id_is_absent() {
        let state: SessionState =
            serde_json::from_str(r#"{"isLoggedIn":false,"userId":-1,"id":""}"#).unwrap();
        assert_eq!(state, SessionState::logged_out());

        let state: SessionState = serde_json::from_str(r#"{"isLoggedIn":false,"userId":null}"#).unwrap();
        assert!(state.user_id.is_none());
    }

    #[test]
    fn test_missing_fields_default_to_logged_out() {
        let state: SessionState = serde_json::from_str("{}").unwrap();
        assert!(!state.logged_in);
        assert!(state.student_id.is_empty());
    }

    #[test]
    fn test_text_user_id_roundtrips() {
        let state: SessionState =
            serde_json::from_str(r#"{"isLoggedIn":true,"userId":"u-42","id":"2024"}"#).unwrap();
        assert_eq!(state.user_id, Some(UserId::Text("u-42".into())));
        assert_eq!(state.user_id.unwrap().to_string(), "u-42");
    }
}
