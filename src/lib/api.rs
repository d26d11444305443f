//! HTTP helpers for the collaborator JSON APIs with consistent timeouts and
//! error handling. Feature clients use these helpers to avoid duplicating
//! request setup. The transport owns credential attachment: the session token
//! from the credential store rides along as a bearer header on every request
//! that has one, so callers never handle the token themselves.

use super::{config::AppConfig, errors::AppError};
use crate::features::auth::session::SessionStore;
use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::to_string;
use web_sys::{AbortController, RequestCredentials};

/// Default request timeout (milliseconds) applied to all HTTP helpers.
const DEFAULT_TIMEOUT_MS: u32 = 10_000;
/// Maximum number of error body characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

/// Which collaborator a request is addressed to.
#[derive(Clone, Copy, Debug)]
pub enum Base {
    /// Authorization plus postings/matching service.
    Api,
    /// Profile/resume service.
    Profile,
}

/// Fetches JSON, with optional query parameters.
pub async fn get_json<T: DeserializeOwned>(
    base: Base,
    path: &str,
    query: &[(&str, String)],
) -> Result<T, AppError> {
    let url = build_url(base, path);
    let response = send_with_timeout(|signal| {
        let mut builder = Request::get(&url)
            .credentials(RequestCredentials::Include)
            .abort_signal(Some(signal));
        builder = attach_bearer(builder);
        if !query.is_empty() {
            builder = builder.query(query.iter().map(|(name, value)| (*name, value.as_str())));
        }

        builder
            .build()
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_json_response(response).await
}

/// Posts JSON and parses a JSON response.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    base: Base,
    path: &str,
    body: &B,
) -> Result<T, AppError> {
    send_json(Request::post(&build_url(base, path)), body).await
}

/// Puts JSON and parses a JSON response.
pub async fn put_json<B: Serialize, T: DeserializeOwned>(
    base: Base,
    path: &str,
    body: &B,
) -> Result<T, AppError> {
    send_json(Request::put(&build_url(base, path)), body).await
}

async fn send_json<B: Serialize, T: DeserializeOwned>(
    builder: gloo_net::http::RequestBuilder,
    body: &B,
) -> Result<T, AppError> {
    let payload = to_string(body)
        .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;
    let response = send_with_timeout(move |signal| {
        let builder = attach_bearer(
            builder
                .header("Content-Type", "application/json")
                .credentials(RequestCredentials::Include)
                .abort_signal(Some(signal)),
        );

        builder
            .body(payload)
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_json_response(response).await
}

/// Adds the bearer header when a session token is present.
fn attach_bearer(builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match SessionStore::read().token {
        Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
        None => builder,
    }
}

/// Builds a URL from the selected collaborator base and the provided path.
fn build_url(base: Base, path: &str) -> String {
    let config = AppConfig::load();
    let base_url = match base {
        Base::Api => config.api_base_url,
        Base::Profile => config.profile_base_url,
    };
    build_url_with_base(&base_url, path)
}

fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Maps network errors into user-facing `AppError` variants with timeout detection.
fn map_request_error(err: gloo_net::Error) -> AppError {
    let message = err.to_string();
    let lowered = message.to_lowercase();

    if lowered.contains("timeout") || lowered.contains("abort") {
        AppError::Timeout("Request timed out. Please try again.".to_string())
    } else {
        AppError::Network(format!("Unable to reach the server: {message}"))
    }
}

/// Sends a request with an abort timeout to avoid hanging UI state.
async fn send_with_timeout(
    build_request: impl FnOnce(&web_sys::AbortSignal) -> Result<gloo_net::http::Request, AppError>,
) -> Result<gloo_net::http::Response, AppError> {
    let controller = AbortController::new()
        .map_err(|_| AppError::Config("Failed to initialize request timeout.".to_string()))?;
    let signal = controller.signal();
    let timeout_controller = controller.clone();
    let _timeout = Timeout::new(DEFAULT_TIMEOUT_MS, move || timeout_controller.abort());

    let request = build_request(&signal)?;
    request.send().await.map_err(map_request_error)
}

/// Parses JSON responses and surfaces HTTP errors with readable messages.
async fn handle_json_response<T: DeserializeOwned>(
    response: gloo_net::http::Response,
) -> Result<T, AppError> {
    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(AppError::Http {
            status,
            message: error_message_from_body(&body),
        })
    }
}

/// Pulls the collaborator's own message out of a JSON error body, falling
/// back to the sanitized raw body. The services are inconsistent about the
/// key (`error` on some endpoints, `message` on others), so both are checked.
fn error_message_from_body(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            ["error", "message"]
                .iter()
                .find_map(|key| value.get(key).and_then(|m| m.as_str()).map(str::to_string))
        })
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| sanitize_body(body))
}

/// Sanitizes HTTP error bodies for user-facing messages by trimming and truncating.
fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{build_url_with_base, error_message_from_body, sanitize_body};

    #[test]
    fn build_url_joins_base_and_path() {
        assert_eq!(
            build_url_with_base("https://api.example.net/", "/job/match"),
            "https://api.example.net/job/match"
        );
        assert_eq!(
            build_url_with_base("https://api.example.net", "job/1"),
            "https://api.example.net/job/1"
        );
    }

    #[test]
    fn build_url_with_empty_base_stays_relative() {
        assert_eq!(build_url_with_base("", "/auth/login"), "/auth/login");
        assert_eq!(build_url_with_base("   ", "/auth/login"), "/auth/login");
    }

    #[test]
    fn error_message_prefers_error_key() {
        let body = r#"{"error":"Missing raw_jd_text","message":"other"}"#;
        assert_eq!(error_message_from_body(body), "Missing raw_jd_text");
    }

    #[test]
    fn error_message_falls_back_to_message_key() {
        let body = r#"{"status":"error","message":"Invalid credentials"}"#;
        assert_eq!(error_message_from_body(body), "Invalid credentials");
    }

    #[test]
    fn error_message_falls_back_to_sanitized_body() {
        assert_eq!(error_message_from_body("upstream exploded"), "upstream exploded");
        assert_eq!(error_message_from_body("  "), "Request failed.");
    }

    #[test]
    fn sanitize_body_truncates_long_bodies() {
        let long = "x".repeat(500);
        assert_eq!(sanitize_body(&long).chars().count(), 200);
    }
}
