//! HTTP client for stock listing pages.

mod aggregate;

use std::time::Duration;

use reqwest::header::{HeaderValue, ACCEPT, ACCEPT_LANGUAGE, CACHE_CONTROL, COOKIE};
use reqwest::{Client, Url};

use crate::cookies::{parse_cookies, render_cookie_header};
use crate::error::ScraperError;

/// HTTP client for the listing pages that carry product cards.
///
/// Forwards the configured session cookie on every request and turns non-2xx
/// responses into [`ScraperError::UnexpectedStatus`]. Requests are never
/// retried; a failed run is retried by the next scheduled invocation.
pub struct PageClient {
    client: Client,
    cookie_header: Option<HeaderValue>,
}

impl PageClient {
    /// Creates a `PageClient` with the given request timeout, `User-Agent`,
    /// and raw cookie string (`"a=1; b=2"`, may be empty).
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed. A cookie that cannot form a header value is
    /// dropped with a warning rather than failing construction.
    pub fn new(timeout_secs: u64, user_agent: &str, cookie: &str) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let rendered = render_cookie_header(&parse_cookies(cookie));
        let cookie_header = if rendered.is_empty() {
            None
        } else {
            match HeaderValue::from_str(&rendered) {
                Ok(mut value) => {
                    value.set_sensitive(true);
                    Some(value)
                }
                Err(e) => {
                    tracing::warn!(error = %e, "cookie is not a valid header value, sending requests without it");
                    None
                }
            }
        };

        Ok(Self {
            client,
            cookie_header,
        })
    }

    /// Fetches one page and returns its body as text.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::InvalidUrl`] if `url` cannot be parsed.
    /// - [`ScraperError::UnexpectedStatus`] on any non-2xx status.
    /// - [`ScraperError::Http`] on network failure or timeout.
    pub async fn fetch_page(&self, url: &str) -> Result<String, ScraperError> {
        let parsed = Url::parse(url).map_err(|e| ScraperError::InvalidUrl {
            url: url.to_owned(),
            reason: e.to_string(),
        })?;

        let mut request = self
            .client
            .get(parsed)
            .header(ACCEPT, "text/html,application/xhtml+xml;q=0.9,*/*;q=0.8")
            .header(ACCEPT_LANGUAGE, "zh-CN,zh;q=0.9,en;q=0.8")
            .header(CACHE_CONTROL, "no-cache");

        if let Some(cookie) = &self.cookie_header {
            request = request.header(COOKIE, cookie.clone());
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        Ok(response.text().await?)
    }
}
