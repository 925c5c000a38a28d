//! DNS-over-HTTPS JSON resolver.
//!
//! Speaks the JSON flavour served by `https://dns.google/resolve` and
//! `https://cloudflare-dns.com/dns-query`:
//!
//! ```text
//! GET <endpoint>?name=_dmarc.example.com&type=TXT
//! Accept: application/dns-json
//!
//! {"Status":0,"Answer":[{"name":"_dmarc.example.com.","type":16,"TTL":300,"data":"\"v=DMARC1; p=reject\""}]}
//! ```

use std::sync::Arc;

use reqwest::header::ACCEPT;
use serde::Deserialize;
use url::Url;

use super::TxtResolver;
use crate::config::{DOH_JSON_ACCEPT, TXT_RR_TYPE};
use crate::error_handling::LookupError;

/// DNS response code for a name that does not exist.
const RCODE_NXDOMAIN: u32 = 3;

#[derive(Debug, Deserialize)]
struct DohResponse {
    #[serde(rename = "Status", default)]
    status: u32,
    #[serde(rename = "Answer", default)]
    answer: Option<Vec<DohAnswer>>,
}

#[derive(Debug, Deserialize)]
struct DohAnswer {
    #[serde(rename = "type", default)]
    rr_type: Option<u16>,
    data: String,
}

/// Resolver backed by a DNS-over-HTTPS JSON endpoint.
#[derive(Debug, Clone)]
pub struct DohResolver {
    client: Arc<reqwest::Client>,
    endpoint: Url,
}

impl DohResolver {
    /// Creates a resolver for `endpoint` using a shared HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error if `endpoint` is not an absolute URL.
    pub fn new(client: Arc<reqwest::Client>, endpoint: &str) -> Result<Self, url::ParseError> {
        let endpoint = Url::parse(endpoint)?;
        Ok(Self { client, endpoint })
    }

    /// Endpoint queries are sent to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Builds the request URL for a TXT query of `name`.
    pub(crate) fn query_url(&self, name: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("name", name)
            .append_pair("type", "TXT");
        url
    }
}

/// Decodes a DNS-over-HTTPS JSON body into TXT answer data.
///
/// NXDOMAIN and a missing or empty `Answer` both mean "no records". Other
/// non-zero statuses (SERVFAIL, REFUSED, ...) are failures. Answers of other
/// RR types, such as the CNAME hops of an aliased name, are skipped.
pub(crate) fn parse_doh_response(body: &str) -> Result<Vec<String>, LookupError> {
    let response: DohResponse =
        serde_json::from_str(body).map_err(|e| LookupError::Decode(e.to_string()))?;

    match response.status {
        0 => {}
        RCODE_NXDOMAIN => return Ok(Vec::new()),
        status => return Err(LookupError::Status(status)),
    }

    Ok(response
        .answer
        .unwrap_or_default()
        .into_iter()
        .filter(|answer| answer.rr_type.map_or(true, |t| t == TXT_RR_TYPE))
        .map(|answer| answer.data)
        .collect())
}

impl TxtResolver for DohResolver {
    async fn query_txt(&self, name: &str) -> Result<Vec<String>, LookupError> {
        let body = self
            .client
            .get(self.query_url(name))
            .header(ACCEPT, DOH_JSON_ACCEPT)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        parse_doh_response(&body)
    }
}
