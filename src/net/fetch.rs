//! Menu tree acquisition with a hard fallback.
//!
//! The menu has no surface for showing a fetch failure, so `MenuSource`
//! never lets one out: any network error, non-success status, malformed
//! payload or timeout logs a warning and serves the bundled dataset
//! instead. The timeout rides on the blocking client, which aborts the
//! in-flight request when it expires.

use std::time::Duration;

use url::Url;

use crate::menu::MenuTree;

/// The investigation console's report endpoint, queried with an empty
/// filter set to obtain the action tree for the current case.
pub const DEFAULT_ENDPOINT: &str =
    "http://188.121.115.30:9030/dml/v1/sima7/fraud-graph/transaction/report";

/// Bound on the whole remote call before the bundled dataset takes over.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Error during menu fetch. Absorbed inside `MenuSource::fetch`; only the
/// log sees it.
pub struct FetchError {
    pub message: String,
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Where the menu tree comes from.
#[derive(Debug, Clone)]
pub struct MenuSource {
    endpoint: Option<String>,
    timeout: Duration,
}

impl Default for MenuSource {
    fn default() -> Self {
        Self::remote(DEFAULT_ENDPOINT)
    }
}

impl MenuSource {
    /// A source backed by a remote report endpoint.
    pub fn remote(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: Some(endpoint.into()),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// A source that never touches the network.
    pub fn bundled_only() -> Self {
        Self {
            endpoint: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Fetch the menu tree (blocking). Never fails.
    pub fn fetch(&self) -> MenuTree {
        let Some(ref endpoint) = self.endpoint else {
            return MenuTree::bundled();
        };
        match self.try_fetch(endpoint) {
            Ok(tree) => tree,
            Err(e) => {
                log::warn!("menu fetch failed, serving bundled dataset: {}", e);
                MenuTree::bundled()
            }
        }
    }

    fn try_fetch(&self, endpoint: &str) -> Result<MenuTree, FetchError> {
        let parsed = Url::parse(endpoint).map_err(|e| FetchError {
            message: format!("invalid endpoint: {}", e),
        })?;

        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("rondel/", env!("CARGO_PKG_VERSION")))
            .timeout(self.timeout)
            .build()
            .map_err(|e| FetchError {
                message: format!("client error: {}", e),
            })?;

        // The report endpoint answers a POST carrying an empty filter set.
        let response = client
            .post(parsed.as_str())
            .header("Content-Type", "application/json")
            .body("[]")
            .send()
            .map_err(|e| FetchError {
                message: format!("request failed: {}", e),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError {
                message: format!("endpoint returned HTTP {}", status),
            });
        }

        let body = response.text().map_err(|e| FetchError {
            message: format!("failed to read body: {}", e),
        })?;

        MenuTree::from_json(&body).map_err(|e| FetchError { message: e.message })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_source_skips_the_network() {
        let tree = MenuSource::bundled_only().fetch();
        assert_eq!(tree.entry_count(), MenuTree::bundled().entry_count());
    }

    #[test]
    fn invalid_endpoint_falls_back() {
        let tree = MenuSource::remote("not an endpoint").fetch();
        assert_eq!(tree.items.len(), MenuTree::bundled().items.len());
    }

    #[test]
    fn timed_out_endpoint_falls_back() {
        // A listener that accepts the connection but never answers; the
        // client timeout has to cut the request short.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        let tree = MenuSource::remote(format!("http://{}/report", addr))
            .with_timeout(Duration::from_millis(300))
            .fetch();
        assert_eq!(tree.items.len(), MenuTree::bundled().items.len());
    }

    #[test]
    fn unreachable_endpoint_falls_back() {
        // Discard port on loopback: refused immediately, well inside the
        // timeout.
        let tree = MenuSource::remote("http://127.0.0.1:9/report")
            .with_timeout(Duration::from_millis(500))
            .fetch();
        assert_eq!(tree.items.len(), MenuTree::bundled().items.len());
    }
}
