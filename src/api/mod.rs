use crate::models::{AdminUser, ShortUrlRecord};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub(crate) const NETWORK_ERROR_MESSAGE: &str = "Network error. Please try again.";
pub(crate) const SHORTEN_FAILED_MESSAGE: &str = "Failed to create short URL";
pub(crate) const LIST_FAILED_MESSAGE: &str = "Failed to fetch URLs. Your session may have expired.";
pub(crate) const LOGIN_FAILED_MESSAGE: &str = "Login failed. Please check your credentials.";
pub(crate) const LOGOUT_FAILED_MESSAGE: &str = "Logout failed. Please try again.";
const STATUS_FAILED_MESSAGE: &str = "Not signed in";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ApiErrorKind {
    /// The backend answered with a non-2xx status.
    Rejected,
    /// No response at all (offline, DNS, CORS).
    Network,
    /// A 2xx response whose body didn't decode.
    Parse,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub(crate) struct ApiError {
    pub kind: ApiErrorKind,
    pub status: Option<u16>,
    pub message: String,
    /// Underlying cause, for logs only.
    pub detail: Option<String>,
}

impl ApiError {
    fn network(e: impl std::fmt::Display) -> Self {
        Self {
            kind: ApiErrorKind::Network,
            status: None,
            message: NETWORK_ERROR_MESSAGE.to_string(),
            detail: Some(e.to_string()),
        }
    }

    // The user sees the same text as for a dropped connection.
    fn parse(e: impl std::fmt::Display) -> Self {
        Self {
            kind: ApiErrorKind::Parse,
            status: None,
            message: NETWORK_ERROR_MESSAGE.to_string(),
            detail: Some(e.to_string()),
        }
    }

    fn rejected(status: u16, body: &str, fallback: &str) -> Self {
        Self {
            kind: ApiErrorKind::Rejected,
            status: Some(status),
            message: server_message(body).unwrap_or_else(|| fallback.to_string()),
            detail: None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status, Some(401) | Some(403))
    }
}

pub(crate) type ApiResult<T> = Result<T, ApiError>;

/// `message` field of a JSON error body, if any.
fn server_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .and_then(|m| m.as_str())
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}

/// Turn a raw HTTP response into a typed result.
///
/// Split out from the transport so every status/body combination can be
/// checked without a browser.
pub(crate) fn interpret_response<T: serde::de::DeserializeOwned>(
    status: u16,
    body: &str,
    fallback: &str,
) -> ApiResult<T> {
    if (200..300).contains(&status) {
        serde_json::from_str(body).map_err(ApiError::parse)
    } else {
        Err(ApiError::rejected(status, body, fallback))
    }
}

/// Like [`interpret_response`] for endpoints whose success body is ignored.
pub(crate) fn interpret_empty_response(status: u16, body: &str, fallback: &str) -> ApiResult<()> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ApiError::rejected(status, body, fallback))
    }
}

#[derive(Clone, Debug)]
pub(crate) struct EnvConfig {
    pub api_url: String,
    pub log_level: log::Level,
}

pub(crate) const DEFAULT_API_URL: &str = "http://localhost:5000";

impl EnvConfig {
    /// Read deployment settings from `window.ENV`.
    pub fn new() -> Self {
        let api_url = read_env_string(&["API_URL", "api_url"]);
        let log_level = read_env_string(&["LOG_LEVEL", "log_level"]);
        Self::from_values(api_url, log_level)
    }

    pub fn from_values(api_url: Option<String>, log_level: Option<String>) -> Self {
        let api_url = api_url
            .map(|u| u.trim().trim_end_matches('/').to_string())
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let log_level = log_level
            .and_then(|l| l.trim().parse::<log::Level>().ok())
            .unwrap_or(log::Level::Info);

        Self { api_url, log_level }
    }
}

// First key present on `window.ENV` wins; README documents the upper-case form.
fn read_env_string(keys: &[&str]) -> Option<String> {
    let window = web_sys::window()?;
    let env = window.get("ENV")?;
    if env.is_undefined() || !env.is_object() {
        return None;
    }
    keys.iter().find_map(|k| {
        js_sys::Reflect::get(&env, &(*k).into())
            .ok()
            .and_then(|v| v.as_string())
    })
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct AuthStatusResponse {
    #[serde(default)]
    pub user: Option<AdminUser>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct LoginResponse {
    #[serde(default)]
    pub user: Option<AdminUser>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct ShortenRequest {
    #[serde(rename = "originalUrl")]
    pub original_url: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct ShortenResponse {
    #[serde(rename = "shortUrl")]
    pub short_url: String,
}

/// Typed access to the shortener backend.
///
/// Sessions are cookie based; the browser owns the cookie jar and every
/// request opts in to sending it.
#[derive(Clone, Debug)]
pub(crate) struct ApiClient {
    pub(crate) base_url: String,
}

impl ApiClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &EnvConfig) -> Self {
        Self::new(config.api_url.clone())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    #[cfg(target_arch = "wasm32")]
    fn with_credentials(req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        req.fetch_credentials_include()
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn with_credentials(req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        req
    }

    async fn send(
        &self,
        method: reqwest::Method,
        path: &str,
        body: Option<&impl Serialize>,
    ) -> ApiResult<(u16, String)> {
        let client = reqwest::Client::new();
        let mut req = Self::with_credentials(client.request(method, self.url(path)));

        if let Some(b) = body {
            req = req.json(b);
        }

        let res = req.send().await.map_err(ApiError::network)?;
        let status = res.status().as_u16();
        let text = res.text().await.map_err(ApiError::network)?;
        Ok((status, text))
    }

    async fn request<T: serde::de::DeserializeOwned>(
        &self,
        method: reqwest::Method,
        path: &str,
        body: Option<&impl Serialize>,
        fallback: &str,
    ) -> ApiResult<T> {
        let (status, text) = self.send(method, path, body).await?;
        interpret_response(status, &text, fallback)
    }

    pub async fn auth_status(&self) -> ApiResult<AuthStatusResponse> {
        self.request(
            reqwest::Method::GET,
            "/api/auth/status",
            None::<&()>,
            STATUS_FAILED_MESSAGE,
        )
        .await
    }

    pub async fn login(&self, username: &str, password: &str) -> ApiResult<AdminUser> {
        let res: LoginResponse = self
            .request(
                reqwest::Method::POST,
                "/api/admin/login",
                Some(&LoginRequest {
                    username: username.to_string(),
                    password: password.to_string(),
                }),
                LOGIN_FAILED_MESSAGE,
            )
            .await?;
        Ok(res.user.unwrap_or_else(|| AdminUser::named(username)))
    }

    pub async fn logout(&self) -> ApiResult<()> {
        let (status, text) = self
            .send(reqwest::Method::POST, "/api/admin/logout", None::<&()>)
            .await?;
        interpret_empty_response(status, &text, LOGOUT_FAILED_MESSAGE)
    }

    pub async fn list_urls(&self) -> ApiResult<Vec<ShortUrlRecord>> {
        let list: Option<Vec<ShortUrlRecord>> = self
            .request(
                reqwest::Method::GET,
                "/api/admin/urls",
                None::<&()>,
                LIST_FAILED_MESSAGE,
            )
            .await?;
        Ok(list.unwrap_or_default())
    }

    pub async fn shorten(&self, original_url: &str) -> ApiResult<String> {
        let res: ShortenResponse = self
            .request(
                reqwest::Method::POST,
                "/api/shorten",
                Some(&ShortenRequest {
                    original_url: original_url.to_string(),
                }),
                SHORTEN_FAILED_MESSAGE,
            )
            .await?;
        Ok(res.short_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_client_trims_trailing_slash() {
        let client = ApiClient::new("https://api.sho.rt/".to_string());
        assert_eq!(client.base_url, "https://api.sho.rt");
        assert_eq!(client.url("/api/shorten"), "https://api.sho.rt/api/shorten");
    }

    #[test]
    fn test_success_body_is_decoded() {
        let res: ApiResult<ShortenResponse> = interpret_response(
            201,
            r#"{"shortUrl": "https://short.ly/abc123"}"#,
            SHORTEN_FAILED_MESSAGE,
        );
        assert_eq!(res.expect("should decode").short_url, "https://short.ly/abc123");
    }

    #[test]
    fn test_rejected_prefers_server_message() {
        let res: ApiResult<ShortenResponse> = interpret_response(
            400,
            r#"{"message": "Invalid URL"}"#,
            SHORTEN_FAILED_MESSAGE,
        );
        let err = res.expect_err("400 should fail");
        assert_eq!(err.kind, ApiErrorKind::Rejected);
        assert_eq!(err.status, Some(400));
        assert_eq!(err.to_string(), "Invalid URL");
    }

    #[test]
    fn test_rejected_without_message_uses_fallback() {
        let res: ApiResult<Vec<ShortUrlRecord>> =
            interpret_response(401, r#"{"error": "nope"}"#, LIST_FAILED_MESSAGE);
        let err = res.expect_err("401 should fail");
        assert_eq!(err.message, LIST_FAILED_MESSAGE);
        assert!(err.is_unauthorized());
    }

    #[test]
    fn test_rejected_with_html_body_uses_fallback() {
        let res: ApiResult<ShortenResponse> =
            interpret_response(502, "<html>Bad gateway</html>", SHORTEN_FAILED_MESSAGE);
        assert_eq!(res.expect_err("502 should fail").message, SHORTEN_FAILED_MESSAGE);
    }

    #[test]
    fn test_blank_server_message_uses_fallback() {
        let res: ApiResult<ShortenResponse> =
            interpret_response(422, r#"{"message": "  "}"#, SHORTEN_FAILED_MESSAGE);
        assert_eq!(res.expect_err("422 should fail").message, SHORTEN_FAILED_MESSAGE);
    }

    #[test]
    fn test_undecodable_success_reads_as_network_error() {
        let res: ApiResult<ShortenResponse> =
            interpret_response(200, "not json", SHORTEN_FAILED_MESSAGE);
        let err = res.expect_err("bad body should fail");
        assert_eq!(err.kind, ApiErrorKind::Parse);
        assert_eq!(err.message, NETWORK_ERROR_MESSAGE);
        assert!(err.detail.is_some());
    }

    #[test]
    fn test_network_error_has_generic_message() {
        let err = ApiError::network("dns lookup failed");
        assert_eq!(err.kind, ApiErrorKind::Network);
        assert_eq!(err.status, None);
        assert_eq!(err.to_string(), NETWORK_ERROR_MESSAGE);
        assert_eq!(err.detail.as_deref(), Some("dns lookup failed"));
    }

    #[test]
    fn test_null_url_list_decodes_as_none() {
        let res: ApiResult<Option<Vec<ShortUrlRecord>>> =
            interpret_response(200, "null", LIST_FAILED_MESSAGE);
        assert!(res.expect("null should decode").is_none());
    }

    #[test]
    fn test_url_list_contract_deserialize() {
        let body = r#"[
            {"_id": "a", "originalUrl": "https://example.com/1", "shortUrl": "x1", "visits": 3},
            {"_id": "b", "originalUrl": "https://example.com/2", "shortUrl": "x2", "visits": 7}
        ]"#;
        let res: ApiResult<Option<Vec<ShortUrlRecord>>> =
            interpret_response(200, body, LIST_FAILED_MESSAGE);
        let list = res.expect("list should decode").unwrap_or_default();
        assert_eq!(list.len(), 2);
        assert_eq!(list[1].visits, 7);
    }

    #[test]
    fn test_empty_response_ignores_success_body() {
        assert!(interpret_empty_response(204, "", LOGOUT_FAILED_MESSAGE).is_ok());
        let err = interpret_empty_response(500, "", LOGOUT_FAILED_MESSAGE)
            .expect_err("500 should fail");
        assert_eq!(err.message, LOGOUT_FAILED_MESSAGE);
    }

    #[test]
    fn test_auth_status_contract_deserialize() {
        let res: ApiResult<AuthStatusResponse> = interpret_response(
            200,
            r#"{"user": {"username": "admin", "id": "42"}}"#,
            STATUS_FAILED_MESSAGE,
        );
        let user = res.expect("status should decode").user.expect("user present");
        assert_eq!(user.display_name(), "admin");
    }

    #[test]
    fn test_shorten_request_serialization() {
        let v = serde_json::to_value(ShortenRequest {
            original_url: "https://example.com/very/long/path".to_string(),
        })
        .expect("should serialize");
        assert_eq!(v["originalUrl"], "https://example.com/very/long/path");
    }

    #[test]
    fn test_env_config_defaults() {
        let cfg = EnvConfig::from_values(None, None);
        assert_eq!(cfg.api_url, DEFAULT_API_URL);
        assert_eq!(cfg.log_level, log::Level::Info);
    }

    #[test]
    fn test_env_config_reads_values() {
        let cfg = EnvConfig::from_values(
            Some(" https://api.sho.rt/ ".to_string()),
            Some("debug".to_string()),
        );
        assert_eq!(cfg.api_url, "https://api.sho.rt");
        assert_eq!(cfg.log_level, log::Level::Debug);
    }

    #[test]
    fn test_env_config_ignores_bad_values() {
        let cfg = EnvConfig::from_values(Some("   ".to_string()), Some("loud".to_string()));
        assert_eq!(cfg.api_url, DEFAULT_API_URL);
        assert_eq!(cfg.log_level, log::Level::Info);
    }
}
