use crate::endpoint::{build_url, Category};
use crate::error::{NagiosError, Result};
use crate::params::Params;
use crate::response;
use reqwest::blocking::{Client as HttpClient, ClientBuilder};
use reqwest::Method;
use std::time::Duration;
use url::Url;

/// Create the default HTTP client for API requests.
/// The 5-second timeout bounds the whole request, connect included.
pub fn create_api_client() -> HttpClient {
    ClientBuilder::new()
        .pool_max_idle_per_host(10)
        .timeout(Duration::from_secs(5))
        .connect_timeout(Duration::from_secs(5))
        .build()
        .expect("Failed to create HTTP client")
}

/// Client for the Nagios XI REST API.
///
/// Holds the server base URL, the API token, and a pooled blocking HTTP
/// client. Immutable after construction; a single instance can be shared
/// across threads for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct Client {
    /// Server base URL, e.g. `https://nagios.example.com/nagiosxi`
    pub url: String,
    /// API token, sent as the `apikey` query parameter on every request
    token: String,
    /// Shared HTTP client
    http: HttpClient,
    /// Log requests to stderr
    debug: bool,
}

impl Client {
    /// Create a new client for the given server URL and API token
    pub fn new(url: &str, token: &str) -> Self {
        Client {
            url: url.to_string(),
            token: token.to_string(),
            http: create_api_client(),
            debug: false,
        }
    }

    /// Enable debug logging of requests to stderr
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Build the URL for a request against this client's server
    pub(crate) fn build_url(
        &self,
        category: Category,
        object_type: &str,
        method: &Method,
        identifiers: &[&str],
    ) -> Result<Url> {
        build_url(&self.url, &self.token, category, object_type, method, identifiers)
    }

    /// Execute a request and return the raw response body.
    ///
    /// The full body is read before the outcome is evaluated; the server
    /// reports failures in the body, not the HTTP status. Transport failures
    /// (connection, timeout) surface as [`NagiosError::Reqwest`] before any
    /// body exists.
    pub(crate) fn send(&self, method: Method, url: Url, params: Option<&Params>) -> Result<Vec<u8>> {
        let mut request = self
            .http
            .request(method.clone(), url.clone())
            .header("Content-Type", "application/x-www-form-urlencoded")
            .header("Accept", "*/*");

        if let Some(params) = params {
            request = request.body(params.encode());
        }

        let start = std::time::Instant::now();
        let http_response = request.send()?;
        let status = http_response.status();

        let body = http_response.bytes()?;

        if self.debug {
            let duration = start.elapsed();
            eprintln!(
                "[nagios] {} {} => {:?} (status: {})",
                method,
                url.path(),
                duration,
                status
            );
        }

        match response::interpret(&body) {
            Ok(()) => Ok(body.to_vec()),
            Err(NagiosError::Json(e)) if status.is_client_error() || status.is_server_error() => {
                Err(NagiosError::http(
                    status.as_u16(),
                    String::from_utf8_lossy(&body).into_owned(),
                    Some(Box::new(e)),
                ))
            }
            Err(e) => Err(e),
        }
    }

    /// GET with the parameter set as the request body
    pub(crate) fn get(&self, url: Url, params: &Params) -> Result<Vec<u8>> {
        self.send(Method::GET, url, Some(params))
    }

    /// POST with the parameter set as the request body
    pub(crate) fn post(&self, url: Url, params: &Params) -> Result<Vec<u8>> {
        self.send(Method::POST, url, Some(params))
    }

    /// PUT with no body; parameters are carried in the URL by the caller
    pub(crate) fn put(&self, url: Url) -> Result<Vec<u8>> {
        self.send(Method::PUT, url, None)
    }

    /// DELETE with the parameter set as the request body
    pub(crate) fn delete(&self, url: Url, params: &Params) -> Result<Vec<u8>> {
        self.send(Method::DELETE, url, Some(params))
    }

    /// Commit pending configuration changes and restart the monitoring core.
    ///
    /// Called automatically after every mutating operation. Exposed so a
    /// caller can re-trigger the commit if the automatic apply failed; the
    /// preceding mutation is never rolled back.
    pub fn apply_config(&self) -> Result<()> {
        let url = self.build_url(Category::System, "applyconfig", &Method::POST, &[])?;

        self.post(url, &Params::new())?;

        Ok(())
    }
}
