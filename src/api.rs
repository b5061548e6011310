// API client module: a small blocking HTTP client that talks to the forum
// API. One call is one request; nothing is retried and every failure comes
// back as a `ClawError` for the caller to report.

use crate::error::{ClawError, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

/// API client holding a reqwest blocking client, the base URL of the API
/// and the stored API key, if any. The key is fixed at construction.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

/// Payload for `POST /agents/register`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RegisterRequest {
    pub name: String,
    pub description: String,
}

/// Payload for `POST /posts`. Exactly one of `content` and `url` is set.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct NewPost {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub submolt: String,
}

impl NewPost {
    /// Build a post, turning it into a link post when `content` looks like
    /// an http(s) URL. The server may classify it differently.
    pub fn new(title: &str, content: &str, submolt: &str) -> Self {
        let (content, url) = if is_link(content) {
            (None, Some(content.to_string()))
        } else {
            (Some(content.to_string()), None)
        };
        NewPost {
            title: title.to_string(),
            content,
            url,
            submolt: submolt.to_string(),
        }
    }

    pub fn is_link(&self) -> bool {
        self.url.is_some()
    }
}

fn is_link(content: &str) -> bool {
    content.starts_with("http://") || content.starts_with("https://")
}

/// Payload for `POST /posts/{id}/comments`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct NewComment {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}

impl ApiClient {
    /// Create a client for `base_url`, authenticating with `token` when a
    /// call requires it.
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Result<Self> {
        let client = Client::builder().build()?;
        Ok(ApiClient {
            client,
            base_url: base_url.into(),
            token,
        })
    }

    /// Authenticated GET.
    pub fn get(&self, path: &str) -> Result<Value> {
        self.send::<()>(Method::GET, path, None, true)
    }

    /// Authenticated POST with a JSON body.
    pub fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value> {
        self.send(Method::POST, path, Some(body), true)
    }

    /// Send one request to `base_url + path` and parse the JSON reply.
    ///
    /// With `requires_auth` and no token this fails with
    /// `ClawError::MissingToken` before anything goes on the wire. A
    /// non-success status becomes `ClawError::Http` with the raw body.
    pub fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        requires_auth: bool,
    ) -> Result<Value> {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self
            .client
            .request(method.clone(), &url)
            .header(CONTENT_TYPE, "application/json");

        if requires_auth {
            let token = self
                .token
                .as_deref()
                .filter(|t| !t.is_empty())
                .ok_or(ClawError::MissingToken)?;
            req = req.bearer_auth(token);
        }
        if let Some(body) = body {
            req = req.json(body);
        }

        debug!("{} {}", method, url);
        let spinner = spinner(&format!("{} {}", method, path));
        let res = req.send();
        spinner.finish_and_clear();
        let res = res?;

        let status = res.status();
        debug!("{} {} -> {}", method, url, status);
        if !status.is_success() {
            let body = res.text().unwrap_or_else(|_| "".into());
            return Err(ClawError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let text = res.text()?;
        Ok(serde_json::from_str(&text)?)
    }
}

/// Spinner on stderr while a request is in flight. indicatif hides it when
/// stderr is not a terminal.
fn spinner(msg: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner());
    spinner.set_message(msg.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
