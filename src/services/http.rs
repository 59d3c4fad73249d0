// ============================================================================
// HTTP - request/response del API + transporte gloo-net (con cookies)
// ============================================================================
// El transporte NO interpreta status: eso lo hace ApiClient (refresh, errores)
// ============================================================================

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use web_sys::RequestCredentials;

use crate::config::CONFIG;
use crate::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
    Delete,
}

/// Nombre del header CSRF. El backend acepta los dos, y algunas rutas
/// (reservas del usuario, contador de vistas) siempre usaron el corto.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CsrfHeader {
    Standard,
    Legacy,
}

impl CsrfHeader {
    pub fn name(self) -> &'static str {
        match self {
            CsrfHeader::Standard => "X-CSRF-Token",
            CsrfHeader::Legacy => "CSRF-Token",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub path: String,
    pub body: Option<Value>,
    pub headers: Vec<(String, String)>,
}

impl ApiRequest {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            headers: Vec::new(),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Patch, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, path)
    }

    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, ApiError> {
        let value = serde_json::to_value(body)
            .map_err(|e| ApiError::Parse(format!("Serialization error: {}", e)))?;
        self.body = Some(value);
        Ok(self)
    }

    /// Body `{}` (logout, refresh, contador de vistas)
    pub fn empty_json(mut self) -> Self {
        self.body = Some(Value::Object(Default::default()));
        self
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn csrf(self, token: &str, header: CsrfHeader) -> Self {
        self.header(header.name(), token)
    }

    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Campo `message` del body, si existe
    pub fn message(&self) -> Option<String> {
        self.body
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string)
    }

    /// 2xx -> Ok, resto -> ApiError::Status con el mensaje del servidor
    pub fn into_result(self) -> Result<Self, ApiError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(ApiError::Status {
                status: self.status,
                message: self.message(),
            })
        }
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        // Un body vacío se trata como `{}` para que los campos con default funcionen
        let value = if self.body.is_null() {
            Value::Object(Default::default())
        } else {
            self.body.clone()
        };
        serde_json::from_value(value).map_err(|e| ApiError::Parse(e.to_string()))
    }
}

/// Convierte el texto de la respuesta en JSON (vacío -> Null, no-JSON -> String)
pub fn parse_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}

/// Transporte HTTP. Un solo hilo (WASM): los futures no son Send.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, ApiError>;
}

/// Transporte real: fetch del navegador con `credentials: include`
#[derive(Clone)]
pub struct GlooTransport {
    base_url: String,
}

impl GlooTransport {
    pub fn new() -> Self {
        Self {
            base_url: CONFIG.backend_url.clone(),
        }
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for GlooTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for GlooTransport {
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, ApiError> {
        let url = self.url(&request.path);

        let mut builder = match request.method {
            HttpMethod::Get => Request::get(&url),
            HttpMethod::Post => Request::post(&url),
            HttpMethod::Patch => Request::patch(&url),
            HttpMethod::Delete => Request::delete(&url),
        }
        .credentials(RequestCredentials::Include);

        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let response = match &request.body {
            Some(body) => builder
                .json(body)
                .map_err(|e| ApiError::Parse(format!("Request build error: {}", e)))?
                .send()
                .await,
            None => builder.send().await,
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Network(format!("Error leyendo respuesta: {}", e)))?;

        log::debug!("🌐 [HTTP] {:?} {} -> {}", request.method, request.path, status);

        Ok(ApiResponse::new(status, parse_body(&text)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_into_result_extracts_server_message() {
        let err = ApiResponse::new(409, json!({ "message": "이미 예약 중입니다" }))
            .into_result()
            .unwrap_err();
        assert_eq!(
            err,
            ApiError::Status { status: 409, message: Some("이미 예약 중입니다".into()) }
        );
        assert!(ApiResponse::new(204, Value::Null).into_result().is_ok());
    }

    #[test]
    fn test_parse_body_variants() {
        assert_eq!(parse_body(""), Value::Null);
        assert_eq!(parse_body("{\"a\":1}"), json!({ "a": 1 }));
        assert_eq!(parse_body("Forbidden"), Value::String("Forbidden".into()));
    }

    #[test]
    fn test_null_body_deserializes_defaults() {
        #[derive(serde::Deserialize)]
        struct Ack {
            #[serde(default)]
            success: bool,
        }
        let ack: Ack = ApiResponse::new(200, Value::Null).json().unwrap();
        assert!(!ack.success);
    }

    #[test]
    fn test_csrf_header_names() {
        let req = ApiRequest::get("/users/reservations").csrf("tok", CsrfHeader::Legacy);
        assert_eq!(req.header_value("csrf-token"), Some("tok"));
        assert_eq!(req.header_value("X-CSRF-Token"), None);

        let req = ApiRequest::post("/users/logout").empty_json().csrf("tok", CsrfHeader::Standard);
        assert_eq!(req.header_value("X-CSRF-Token"), Some("tok"));
        assert_eq!(req.body, Some(json!({})));
    }

    #[test]
    fn test_gloo_url_join() {
        let transport = GlooTransport::with_base_url("http://localhost:3002/");
        assert_eq!(transport.url("/seats"), "http://localhost:3002/seats");
    }
}
