/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
 * SPDX-License-Identifier: LicenseRef-NvidiaProprietary
 *
 * NVIDIA CORPORATION, its affiliates and licensors retain all intellectual
 * property and proprietary rights in and to this material, related
 * documentation and any modifications thereto. Any use, reproduction,
 * disclosure or distribution of this material and related documentation
 * without an express license agreement from NVIDIA CORPORATION or
 * its affiliates is strictly prohibited.
 */

//! Client for the session based `/data` interface of Dell iDRAC BMCs.

pub mod attributes;
pub mod request;
pub mod xml;

use std::time::Duration;

use reqwest::header::{ACCEPT, COOKIE, HeaderValue, USER_AGENT};
use reqwest::{Client as HttpClient, ClientBuilder};
use tracing::debug;

pub use crate::attributes::{Attribute, BootDevice, CodecError, PowerState};
pub use crate::request::{DataRequest, uses_post};
pub use crate::xml::{TranslateError, xml_to_json};

/// Cookie the firmware hands out on login and expects on every later request.
pub const SESSION_COOKIE: &str = "_appwebSessionId_";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(thiserror::Error, Debug)]
pub enum IdracError {
    #[error("Network error talking to iDRAC at {url}. {source}")]
    Transport { url: String, source: reqwest::Error },

    #[error("HTTP {status_code} at {url}: {body}")]
    Protocol {
        url: String,
        status_code: u16,
        body: String,
    },

    #[error("Login to {host} failed: {reason}")]
    Auth { host: String, reason: String },

    #[error("Could not translate response from {url}. {source}")]
    Translate { url: String, source: TranslateError },

    #[error("Could not build HTTP client: {0}")]
    ClientBuild(reqwest::Error),
}

impl IdracError {
    /// Translated body of a non-success response, when the device sent one.
    pub fn body(&self) -> Option<&str> {
        match self {
            IdracError::Protocol { body, .. } if !body.is_empty() => Some(body),
            _ => None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct SessionClientBuilder {
    host: String,
    base_url: Option<String>,
    timeout: Duration,
    connect_timeout: Duration,
    accept_invalid_certs: bool,
}

impl SessionClientBuilder {
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Deadline for establishing the connection, TLS handshake included.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    // iDRACs ship with self-signed certs, so this defaults to true
    pub fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    /// Talk to `base_url` instead of `https://<host>`.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn build(self) -> Result<SessionClient, IdracError> {
        let http = ClientBuilder::new()
            .danger_accept_invalid_certs(self.accept_invalid_certs)
            .connect_timeout(self.connect_timeout)
            .timeout(self.timeout)
            .build()
            .map_err(IdracError::ClientBuild)?;

        let base_url = self
            .base_url
            .unwrap_or_else(|| format!("https://{}", self.host));

        Ok(SessionClient {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            host: self.host,
            username: None,
            auth_token: None,
        })
    }
}

struct Response {
    body: String,
    session_token: Option<String>,
}

/// One authenticated conversation with one iDRAC.
#[derive(Debug, Clone)]
pub struct SessionClient {
    http: HttpClient,
    base_url: String,
    host: String,
    username: Option<String>,
    auth_token: Option<String>,
}

impl SessionClient {
    pub fn builder(host: impl Into<String>) -> SessionClientBuilder {
        SessionClientBuilder {
            host: host.into(),
            base_url: None,
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            accept_invalid_certs: true,
        }
    }

    /// Resume a session obtained by an earlier `login`.
    pub fn with_session(
        mut self,
        username: impl Into<String>,
        auth_token: impl Into<String>,
    ) -> Self {
        self.username = Some(username.into());
        self.auth_token = Some(auth_token.into());
        self
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn auth_token(&self) -> Option<&str> {
        self.auth_token.as_deref()
    }

    pub async fn login(&mut self, username: &str, password: &str) -> Result<String, IdracError> {
        let form = [("user", username), ("password", password)];
        let response = self.execute("login", "", Some(&form[..])).await?;

        let Some(token) = response.session_token else {
            return Err(IdracError::Auth {
                host: self.host.clone(),
                reason: format!("no {SESSION_COOKIE} cookie in login response"),
            });
        };
        tracing::info!(host = %self.host, username, "logged in");

        self.username = Some(username.to_string());
        self.auth_token = Some(token.clone());
        Ok(token)
    }

    pub async fn set_power_state(&self, state: PowerState) -> Result<String, IdracError> {
        self.data(&DataRequest::set_power(state)).await
    }

    pub async fn set_boot_override(
        &self,
        device: BootDevice,
        once: bool,
    ) -> Result<String, IdracError> {
        self.data(&DataRequest::set_boot(device, once)).await
    }

    pub async fn query(&self, attributes: &[Attribute]) -> Result<String, IdracError> {
        self.data(&DataRequest::get(attributes)).await
    }

    /// Fetches the Java Web Start descriptor of the virtual console. The
    /// firmware encodes host, user and a unix timestamp in the file name.
    pub async fn download_console_viewer(&self, timestamp: i64) -> Result<Vec<u8>, IdracError> {
        let url = format!(
            "{}/viewer.jnlp({}@0@{}@{timestamp})",
            self.base_url,
            self.host,
            self.username.as_deref().unwrap_or_default(),
        );
        debug!("GET {url}");

        let response = self
            .authenticated(self.http.get(&url))
            .send()
            .await
            .map_err(|source| IdracError::Transport {
                url: url.clone(),
                source,
            })?;

        let status_code = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|source| IdracError::Transport {
                url: url.clone(),
                source,
            })?;

        if status_code != reqwest::StatusCode::OK {
            return Err(IdracError::Protocol {
                url,
                status_code: status_code.as_u16(),
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }
        Ok(bytes.to_vec())
    }

    async fn data(&self, request: &DataRequest) -> Result<String, IdracError> {
        let response = self
            .execute("", request.query_string(), None)
            .await?;
        Ok(response.body)
    }

    fn authenticated(&self, req_b: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.auth_token {
            Some(token) => req_b.header(COOKIE, format!("{SESSION_COOKIE}={token}")),
            None => req_b,
        }
    }

    // Every call to the device goes through here: pick the method from the
    // query string, attach the session cookie, translate the XML body.
    async fn execute(
        &self,
        path: &str,
        query: &str,
        form: Option<&[(&str, &str)]>,
    ) -> Result<Response, IdracError> {
        let mut url = format!("{}/data", self.base_url);
        if !path.is_empty() {
            url.push('/');
            url.push_str(path);
        }
        if !query.is_empty() {
            url.push('?');
            url.push_str(query);
        }

        let method = request::method_for(query);
        debug!("{method} {url}");

        let mut req_b = self.http.request(method.clone(), &url);
        req_b = req_b.header(ACCEPT, HeaderValue::from_static("*/*"));
        req_b = req_b.header(USER_AGENT, HeaderValue::from_static("libidrac/0.1"));
        req_b = self.authenticated(req_b);
        if let Some(form) = form {
            req_b = req_b.form(form);
        }

        let response = req_b.send().await.map_err(|source| IdracError::Transport {
            url: url.clone(),
            source,
        })?;

        let status_code = response.status();
        let session_token = response
            .cookies()
            .find(|cookie| cookie.name() == SESSION_COOKIE)
            .map(|cookie| cookie.value().to_string());
        let raw_body = response.text().await.map_err(|source| IdracError::Transport {
            url: url.clone(),
            source,
        })?;
        debug!("RX {status_code} from {method} {url}");

        if !status_code.is_success() {
            // keep whatever the device said, translated if possible
            let body = xml_to_json(&raw_body).unwrap_or(raw_body);
            return Err(IdracError::Protocol {
                url,
                status_code: status_code.as_u16(),
                body,
            });
        }

        let body =
            xml_to_json(&raw_body).map_err(|source| IdracError::Translate { url, source })?;
        Ok(Response {
            body,
            session_token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_to_https_host() {
        let client = SessionClient::builder("10.0.0.5").build().unwrap();
        assert_eq!(client.base_url, "https://10.0.0.5");
        assert_eq!(client.host(), "10.0.0.5");
        assert!(client.auth_token().is_none());
    }

    #[test]
    fn base_url_override_strips_trailing_slash() {
        let client = SessionClient::builder("bmc-1")
            .base_url("http://127.0.0.1:8080/")
            .build()
            .unwrap()
            .with_session("root", "abc");
        assert_eq!(client.base_url, "http://127.0.0.1:8080");
        assert_eq!(client.username(), Some("root"));
        assert_eq!(client.auth_token(), Some("abc"));
    }

    #[test]
    fn protocol_error_exposes_body() {
        let err = IdracError::Protocol {
            url: "https://bmc/data".to_string(),
            status_code: 503,
            body: r#"{"root":{"status":"busy"}}"#.to_string(),
        };
        assert_eq!(err.body(), Some(r#"{"root":{"status":"busy"}}"#));
        assert!(err.to_string().starts_with("HTTP 503"));
    }
}
