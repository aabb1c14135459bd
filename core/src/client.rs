//! The profile fetcher: input parsing, one batched lookup, result triage.
//!
//! RULE: the fetcher owns the success/empty/failure decision. Transports
//! only move bytes and report what the server said; they never decide
//! whether an empty result is an error.

use crate::{
    config::ApiConfig,
    error::{ProfileError, ProfileResult},
    profile::{CustomerProfileRecord, CustomerQuery, ProfileResponse},
    types::CustomerId,
};
use serde::Deserialize;

/// Split raw input on commas, trim, drop empty pieces.
///
/// Fails with `ProfileError::Validation` when nothing is left.
pub fn parse_customer_ids(raw: &str) -> ProfileResult<Vec<CustomerId>> {
    let ids: Vec<CustomerId> = raw
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(String::from)
        .collect();
    if ids.is_empty() {
        return Err(ProfileError::Validation);
    }
    Ok(ids)
}

/// Moves one lookup request to the service and decodes its envelope.
///
/// Implementations return `ProfileError::Transport` for anything that keeps
/// a well-formed envelope from coming back.
pub trait ProfileTransport {
    fn post_customers(&self, query: &CustomerQuery) -> ProfileResult<ProfileResponse>;
}

impl<T: ProfileTransport + ?Sized> ProfileTransport for &T {
    fn post_customers(&self, query: &CustomerQuery) -> ProfileResult<ProfileResponse> {
        (**self).post_customers(query)
    }
}

impl<T: ProfileTransport + ?Sized> ProfileTransport for Box<T> {
    fn post_customers(&self, query: &CustomerQuery) -> ProfileResult<ProfileResponse> {
        (**self).post_customers(query)
    }
}

pub struct ProfileFetcher<T> {
    transport: T,
}

impl<T: ProfileTransport> ProfileFetcher<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Parse `raw`, look the identifiers up in one call, and return the
    /// records in service order.
    pub fn fetch_profiles(&self, raw: &str) -> ProfileResult<Vec<CustomerProfileRecord>> {
        let ids = parse_customer_ids(raw)?;
        log::info!("fetching {} customer profile(s)", ids.len());
        log::debug!("lookup ids: {ids:?}");

        let response = self.transport.post_customers(&CustomerQuery { customer_id: ids })?;

        if !response.success {
            log::warn!("lookup rejected by service: {:?}", response.message);
            return Err(ProfileError::transport(None, response.message));
        }
        if response.data.is_empty() {
            log::warn!("lookup succeeded with no matching customers");
            return Err(ProfileError::NotFound);
        }

        log::info!("received {} customer profile(s)", response.data.len());
        Ok(response.data)
    }
}

// ── HTTP transport ─────────────────────────────────────────────────

/// Only the message is read from error bodies; the rest may be anything.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Blocking JSON-over-HTTP transport. No timeout, no retries.
pub struct HttpTransport {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(api: &ApiConfig) -> ProfileResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .no_proxy()
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to create HTTP client: {e}"))?;
        Ok(Self {
            client,
            endpoint: api.customers_endpoint(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl ProfileTransport for HttpTransport {
    fn post_customers(&self, query: &CustomerQuery) -> ProfileResult<ProfileResponse> {
        log::debug!("POST {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .header("Accept", "application/json")
            .json(query)
            .send()
            .map_err(|e| {
                log::warn!("network error calling {}: {e}", self.endpoint);
                ProfileError::transport(None, None)
            })?;

        let status = response.status();
        let body = response.text().map_err(|e| {
            log::warn!("failed to read response body from {}: {e}", self.endpoint);
            ProfileError::transport(Some(status.as_u16()), None)
        })?;
        log::info!("lookup response: {status} ({} bytes)", body.len());

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.message);
            return Err(ProfileError::transport(Some(status.as_u16()), message));
        }

        serde_json::from_str(&body).map_err(|e| {
            log::warn!("undecodable lookup response from {}: {e}", self.endpoint);
            ProfileError::transport(Some(status.as_u16()), None)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_trimmed_and_blank_pieces_dropped() {
        let ids = parse_customer_ids(" CUST0000001 ,, CUST0000002,  ").unwrap();
        assert_eq!(ids, vec!["CUST0000001", "CUST0000002"]);
    }

    #[test]
    fn blank_input_is_a_validation_error() {
        for raw in ["", "   ", ",", " , ,, "] {
            assert!(
                matches!(parse_customer_ids(raw), Err(ProfileError::Validation)),
                "expected validation error for {raw:?}"
            );
        }
    }
}
