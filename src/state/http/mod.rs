#[cfg(test)]
pub mod mock;
mod types;

use std::sync::Arc;

use anyhow::{Context, Result};
use reqwest::cookie::{CookieStore, Jar};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client as AsyncClient, Method, Url};

pub use self::types::Envelope;
use crate::config::{API_BASE_URL, VERSION};

#[derive(Debug, Clone)]
pub struct HttpClient {
    pub client: AsyncClient,
    pub base_url: String,
    pub ua: String,
    jar: Arc<Jar>,
}

impl HttpClient {
    /// Builds a client for `api_url` (or the default origin), seeding the
    /// cookie jar from a previously saved `Cookie` header value.
    pub fn new(api_url: Option<String>, cookies: Option<&str>) -> Result<Self> {
        let mut headers = HeaderMap::new();

        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let ua = format!(
            "backendless_cli/{VERSION} on {}",
            sys_info::os_type().unwrap_or_else(|_| "unknown".to_string())
        );

        let base_url = match api_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => API_BASE_URL.to_string(),
        };

        let jar = Arc::new(Jar::default());

        let client = AsyncClient::builder()
            .user_agent(ua.clone())
            .default_headers(headers)
            .cookie_provider(jar.clone())
            .build()
            .context("Failed to build HTTP client")?;

        let http = Self {
            client,
            base_url,
            ua,
            jar,
        };

        if let Some(cookies) = cookies {
            http.restore_cookies(cookies)?;
        }

        Ok(http)
    }

    /// Seeds the jar with a `Cookie` header value saved for this origin.
    pub fn restore_cookies(&self, cookies: &str) -> Result<()> {
        let url = Url::parse(&self.base_url)
            .with_context(|| format!("Invalid API url `{}`", self.base_url))?;

        for cookie in cookies.split(';').map(str::trim).filter(|c| !c.is_empty()) {
            self.jar.add_cookie_str(cookie, &url);
        }

        Ok(())
    }

    /// Cookies the server has set for the API origin, in `Cookie` header form.
    pub fn cookies(&self) -> Option<String> {
        let url = Url::parse(&self.base_url).ok()?;

        self.jar
            .cookies(&url)?
            .to_str()
            .ok()
            .map(std::string::ToString::to_string)
    }

    /// Sends one request to `base_url + path`.
    ///
    /// `body` must already be serialized JSON. Any HTTP status, including
    /// 4xx and 5xx, comes back as an [`Envelope`]; only transport failures
    /// are errors.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<Envelope> {
        let method = method
            .parse::<Method>()
            .with_context(|| format!("Invalid HTTP method `{method}`"))?;

        let mut request = self
            .client
            .request(method.clone(), format!("{}{}", self.base_url, path));

        log::debug!("request: {} {}", method, path);

        if let Some(body) = body {
            // show body in debug mode / when developing
            #[cfg(debug_assertions)]
            log::debug!("request body: {}", String::from_utf8_lossy(&body));

            request = request.header(CONTENT_TYPE, "application/json").body(body);
        }

        let request = request.build()?;

        #[cfg(debug_assertions)]
        let now = tokio::time::Instant::now();

        let response = self
            .client
            .execute(request)
            .await
            .with_context(|| format!("Failed to send {method} {path}"))?;

        let status = response.status().as_u16();

        let raw = response
            .bytes()
            .await
            .with_context(|| format!("Failed to read response of {method} {path}"))?;

        #[cfg(debug_assertions)]
        log::debug!("response {} in: {:#?}", status, now.elapsed());

        Ok(Envelope::from_raw(status, &raw))
    }
}
