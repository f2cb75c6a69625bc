//! HTTP client for the profiled process's symbol endpoint.

use super::resolver::SymbolResolver;
use crate::utils::config::{DEFAULT_SYMBOL_TIMEOUT, SYMBOL_ENDPOINT_PATH};
use crate::utils::error::SymbolError;
use log::debug;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;

/// Resolves address batches by POSTing them to `/pprof/symbol`
pub struct HttpSymbolResolver {
    client: Client,
    endpoint: String,
    timeout: Duration,
}

impl HttpSymbolResolver {
    /// Create a new resolver with the default timeout
    pub fn new(base_url: impl AsRef<str>) -> Result<Self, SymbolError> {
        Self::with_timeout(base_url, DEFAULT_SYMBOL_TIMEOUT)
    }

    /// Create a resolver with a custom per-request timeout
    pub fn with_timeout(base_url: impl AsRef<str>, timeout: Duration) -> Result<Self, SymbolError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(SymbolError::RequestFailed)?;

        Ok(Self {
            client,
            endpoint: symbol_endpoint(base_url.as_ref()),
            timeout,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Per-request timeout applied to every batch
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl SymbolResolver for HttpSymbolResolver {
    fn resolve_batch(&self, addresses: &[String]) -> Result<String, SymbolError> {
        debug!(
            "POST {} with {} addresses",
            self.endpoint,
            addresses.len()
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "text/plain")
            .body(addresses.join("\n"))
            .send()
            .map_err(SymbolError::RequestFailed)?;

        // Check HTTP status
        let status = response.status();
        if !status.is_success() {
            return Err(SymbolError::InvalidResponse(format!(
                "HTTP {}: {}",
                status,
                response.text().unwrap_or_default()
            )));
        }

        response.text().map_err(SymbolError::RequestFailed)
    }
}

/// Complete a base URL with the symbol endpoint path when it is missing
pub fn symbol_endpoint(base_url: &str) -> String {
    let base = base_url.trim_end_matches('/');
    if base.ends_with(SYMBOL_ENDPOINT_PATH) {
        base.to_string()
    } else {
        format!("{}{}", base, SYMBOL_ENDPOINT_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_endpoint() {
        assert_eq!(
            symbol_endpoint("http://localhost:8080"),
            "http://localhost:8080/pprof/symbol"
        );
        assert_eq!(
            symbol_endpoint("http://localhost:8080/"),
            "http://localhost:8080/pprof/symbol"
        );
        assert_eq!(
            symbol_endpoint("http://localhost:8080/pprof/symbol"),
            "http://localhost:8080/pprof/symbol"
        );
    }

    #[test]
    fn test_resolver_keeps_normalized_endpoint() {
        let resolver = HttpSymbolResolver::new("http://127.0.0.1:8080").unwrap();
        assert_eq!(resolver.endpoint(), "http://127.0.0.1:8080/pprof/symbol");
        assert_eq!(resolver.timeout(), DEFAULT_SYMBOL_TIMEOUT);
    }

    #[test]
    fn test_resolver_carries_custom_timeout() {
        let resolver =
            HttpSymbolResolver::with_timeout("http://127.0.0.1:8080", Duration::from_secs(5))
                .unwrap();
        assert_eq!(resolver.timeout(), Duration::from_secs(5));
    }
}
