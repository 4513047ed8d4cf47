// src/breach/mod.rs
use sha1::{Digest, Sha1};
use std::time::Duration;
use thiserror::Error;

/// Default range-query endpoint of the Have I Been Pwned password API.
pub const DEFAULT_HIBP_BASE_URL: &str = "https://api.pwnedpasswords.com/range";

/// How long a single lookup may take before it is abandoned.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Capability to test a password against a breach corpus. Implementations
/// must absorb every failure mode internally; callers only ever see a bool.
/// Futures need not be Send; actix workers are single-threaded.
#[allow(async_fn_in_trait)]
pub trait BreachChecker {
    /// True iff the password is known to appear in the breach corpus.
    /// Any lookup failure resolves to false.
    async fn is_breached(&self, password: &str) -> bool;
}

#[derive(Debug, Error)]
enum BreachError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status: {0}")]
    Status(reqwest::StatusCode),
}

/// k-anonymity range client for the HIBP password API. Only the first five
/// hex characters of the SHA-1 digest ever leave the process.
#[derive(Debug, Clone)]
pub struct HibpClient {
    http: reqwest::Client,
    base_url: String,
}

impl HibpClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn lookup(&self, password: &str) -> Result<bool, BreachError> {
        let (prefix, suffix) = hash_prefix_suffix(password);
        let url = format!("{}/{}", self.base_url, prefix);

        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(BreachError::Status(response.status()));
        }

        let body = response.text().await?;
        Ok(range_contains_suffix(&body, &suffix))
    }
}

impl BreachChecker for HibpClient {
    async fn is_breached(&self, password: &str) -> bool {
        match self.lookup(password).await {
            Ok(found) => found,
            Err(e) => {
                // Fail open: a broken breach lookup must never block analysis.
                log::warn!("Breach lookup failed, treating as not breached: {}", e);
                false
            }
        }
    }
}

/// Uppercase hex SHA-1 of the password, split into the 5-character range
/// prefix and the 35-character suffix.
fn hash_prefix_suffix(password: &str) -> (String, String) {
    let digest = hex::encode_upper(Sha1::digest(password.as_bytes()));
    let (prefix, suffix) = digest.split_at(5);
    (prefix.to_string(), suffix.to_string())
}

/// Scan a newline-delimited `SUFFIX:COUNT` range response for an exact
/// suffix match. Malformed lines are skipped.
fn range_contains_suffix(body: &str, suffix: &str) -> bool {
    body.lines()
        .filter_map(|line| line.split_once(':'))
        .any(|(candidate, _count)| candidate.trim() == suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha1_split_matches_known_digest() {
        // SHA-1("password") = 5BAA61E4C9B93F3F0682250B6CF8331B7EE68FD8
        let (prefix, suffix) = hash_prefix_suffix("password");
        assert_eq!(prefix, "5BAA6");
        assert_eq!(suffix, "1E4C9B93F3F0682250B6CF8331B7EE68FD8");
        assert_eq!(suffix.len(), 35);
    }

    #[test]
    fn range_response_exact_match() {
        let body = "0018A45C4D1DEF81644B54AB7F969B88D65:1\n\
                    1E4C9B93F3F0682250B6CF8331B7EE68FD8:3861493\n\
                    011053FD0102E94D6AE2F8B83D76FAF94F6:1";
        assert!(range_contains_suffix(body, "1E4C9B93F3F0682250B6CF8331B7EE68FD8"));
        assert!(!range_contains_suffix(body, "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF"));
    }

    #[test]
    fn malformed_lines_are_skipped() {
        let body = "garbage\n\n1E4C9B93F3F0682250B6CF8331B7EE68FD8:42";
        assert!(range_contains_suffix(body, "1E4C9B93F3F0682250B6CF8331B7EE68FD8"));
        assert!(!range_contains_suffix("no colons here", "ANY"));
    }

    #[tokio::test]
    async fn unreachable_service_fails_open() {
        // Nothing listens on this port; the connection is refused immediately.
        let client = HibpClient::new("http://127.0.0.1:1", Duration::from_secs(1)).unwrap();
        assert!(!client.is_breached("password").await);
    }
}
