// SPDX-License-Identifier: MPL-2.0
//! HTTP client for the restaurant backend.
//!
//! Response interpretation lives in free functions over already-read bodies
//! and headers so it can be tested without a server.

use super::auth::{OtpCode, PhoneNumber};
use super::restaurant::{parse_results, Restaurant};
use crate::config::ApiConfig;
use crate::error::{Error, Result};
use reqwest::header::HeaderMap;
use serde_json::Value;

const USER_AGENT: &str = concat!("LogoStamp/", env!("CARGO_PKG_VERSION"));

/// Headers that may carry the session token, in lookup order.
const TOKEN_HEADERS: [&str; 4] = ["authorization", "token", "bearer", "x-auth-token"];

/// Response body, parsed as JSON when possible.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Json(Value),
    Text(String),
}

impl Body {
    #[must_use]
    pub fn parse(text: &str) -> Self {
        serde_json::from_str(text).map_or_else(|_| Body::Text(text.to_string()), Body::Json)
    }

    fn json(&self) -> Option<&Value> {
        match self {
            Body::Json(value) => Some(value),
            Body::Text(_) => None,
        }
    }
}

/// Builds the shared HTTP client.
pub fn http_client() -> Result<reqwest::Client> {
    Ok(reqwest::Client::builder().user_agent(USER_AGENT).build()?)
}

/// Whether a registration response means an OTP was sent.
///
/// Returns the server's message (or a generic one) as an API error otherwise.
pub fn check_registration(status: u16, body: &Body) -> Result<()> {
    let accepted = status == 200
        || match body {
            Body::Json(value) => {
                value.get("status_code").and_then(Value::as_u64) == Some(200)
                    || value.get("status").and_then(Value::as_str) == Some("Success")
            }
            Body::Text(text) => text.to_lowercase().contains("otp"),
        };
    if accepted {
        return Ok(());
    }
    let message = body
        .json()
        .and_then(|v| v.get("message"))
        .and_then(Value::as_str)
        .unwrap_or("Could not send OTP. Please try again.");
    Err(Error::Api(message.to_string()))
}

/// Drops a leading `Bearer ` scheme, case-insensitively.
#[must_use]
pub fn strip_bearer(raw: &str) -> &str {
    let trimmed = raw.trim();
    match trimmed.get(..7) {
        Some(prefix) if prefix.eq_ignore_ascii_case("bearer ") => trimmed[7..].trim_start(),
        _ => trimmed,
    }
}

/// Finds the session token in a login response.
///
/// Body fields win over headers; `header` looks a value up by lower-case name.
#[must_use]
pub fn extract_token<'a>(body: &'a Body, header: impl Fn(&str) -> Option<&'a str>) -> Option<String> {
    let from_body = body.json().and_then(|v| {
        ["/token", "/data/token"]
            .iter()
            .find_map(|path| v.pointer(path).and_then(Value::as_str))
            .filter(|s| !s.is_empty())
    });
    let raw = from_body.or_else(|| {
        TOKEN_HEADERS
            .iter()
            .find_map(|name| header(name).filter(|s| !s.is_empty()))
    })?;
    let token = strip_bearer(raw);
    (!token.is_empty()).then(|| token.to_string())
}

#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    dial_code: String,
}

impl Client {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        Ok(Self::with_http(http_client()?, config))
    }

    #[must_use]
    pub fn with_http(http: reqwest::Client, config: &ApiConfig) -> Self {
        Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            dial_code: config.dial_code.clone(),
        }
    }

    #[must_use]
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Requests an OTP for `phone`.
    pub async fn register_phone(&self, phone: &PhoneNumber) -> Result<()> {
        let response = self
            .http
            .post(self.url("/v1/pwa/user/register"))
            .header(reqwest::header::ACCEPT, "application/json")
            .form(&[("phone", phone.as_str()), ("dial_code", self.dial_code.as_str())])
            .send()
            .await?;
        let status = response.status().as_u16();
        let body = Body::parse(&response.text().await?);
        tracing::debug!(status, "register response");
        check_registration(status, &body)
    }

    /// Verifies the OTP and returns the session token, if the server sent one.
    pub async fn login_with_otp(&self, phone: &PhoneNumber, otp: &OtpCode) -> Result<Option<String>> {
        let response = self
            .http
            .post(self.url("/v1/pwa/user/login"))
            .header(reqwest::header::ACCEPT, "application/json")
            .form(&[
                ("phone", phone.as_str()),
                ("otp", otp.as_str()),
                ("dial_code", self.dial_code.as_str()),
            ])
            .send()
            .await?;
        let status = response.status();
        let headers: HeaderMap = response.headers().clone();
        let body = Body::parse(&response.text().await?);
        tracing::debug!(status = status.as_u16(), "login response");

        let token = extract_token(&body, |name| {
            headers.get(name).and_then(|v| v.to_str().ok())
        });
        if token.is_none() && !status.is_success() {
            return Err(Error::Api("Invalid OTP. Try 123456.".to_string()));
        }
        Ok(token)
    }

    pub async fn fetch_restaurants(&self, city_id: u32, token: Option<&str>) -> Result<Vec<Restaurant>> {
        let mut request = self
            .http
            .get(self.url("/v1/m/restaurant"))
            .query(&[("city_id", city_id)])
            .header(reqwest::header::ACCEPT, "application/json");
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        let response = request.send().await?;
        tracing::debug!(status = response.status().as_u16(), "restaurant list response");
        let body = response.text().await?;
        let value: Value = serde_json::from_str(&body)
            .map_err(|err| Error::Api(format!("restaurant list is not JSON: {err}")))?;
        Ok(parse_results(&value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn body_parse_falls_back_to_text() {
        assert_eq!(Body::parse("{\"a\":1}"), Body::Json(json!({ "a": 1 })));
        assert_eq!(Body::parse("OTP sent"), Body::Text("OTP sent".into()));
    }

    #[test]
    fn registration_success_signals() {
        assert!(check_registration(200, &Body::Text(String::new())).is_ok());
        assert!(check_registration(201, &Body::Json(json!({ "status_code": 200 }))).is_ok());
        assert!(check_registration(201, &Body::Json(json!({ "status": "Success" }))).is_ok());
        assert!(check_registration(202, &Body::Text("Your OTP is on its way".into())).is_ok());
    }

    #[test]
    fn registration_failure_carries_server_message() {
        let err = check_registration(400, &Body::Json(json!({ "message": "Invalid phone" })))
            .expect_err("rejected");
        assert!(matches!(err, Error::Api(ref m) if m == "Invalid phone"));

        let err = check_registration(500, &Body::Text("boom".into())).expect_err("rejected");
        assert!(matches!(err, Error::Api(ref m) if m.starts_with("Could not send OTP")));
    }

    #[test]
    fn strip_bearer_is_case_insensitive() {
        assert_eq!(strip_bearer("Bearer abc"), "abc");
        assert_eq!(strip_bearer("bearer   abc"), "abc");
        assert_eq!(strip_bearer("abc"), "abc");
        assert_eq!(strip_bearer("Bear"), "Bear");
    }

    #[test]
    fn token_prefers_body_over_headers() {
        let body = Body::Json(json!({ "token": "body-token" }));
        let token = extract_token(&body, |_| Some("Bearer header-token"));
        assert_eq!(token.as_deref(), Some("body-token"));

        let nested = Body::Json(json!({ "data": { "token": "Bearer nested" } }));
        assert_eq!(extract_token(&nested, |_| None).as_deref(), Some("nested"));
    }

    #[test]
    fn token_falls_back_to_headers_in_order() {
        let body = Body::Text("ok".into());
        let token = extract_token(&body, |name| match name {
            "bearer" => Some("third"),
            "x-auth-token" => Some("fourth"),
            _ => None,
        });
        assert_eq!(token.as_deref(), Some("third"));
        assert_eq!(extract_token(&body, |_| None), None);
    }
}
