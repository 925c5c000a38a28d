//! TXT queries through the system resolver configuration.

use std::sync::Arc;

use hickory_resolver::error::ResolveErrorKind;
use hickory_resolver::proto::rr::{RData, RecordType};
use hickory_resolver::TokioAsyncResolver;

use super::TxtResolver;
use crate::error_handling::LookupError;

/// Resolver backed by `hickory-resolver`.
#[derive(Clone)]
pub struct SystemResolver {
    resolver: Arc<TokioAsyncResolver>,
}

impl SystemResolver {
    /// Wraps an initialized resolver (see `initialization::init_resolver`).
    pub fn new(resolver: Arc<TokioAsyncResolver>) -> Self {
        Self { resolver }
    }
}

/// Makes `name` absolute so search domains never get appended.
fn fully_qualified(name: &str) -> String {
    format!("{}.", name.trim_end_matches('.'))
}

impl TxtResolver for SystemResolver {
    async fn query_txt(&self, name: &str) -> Result<Vec<String>, LookupError> {
        let fqdn = fully_qualified(name);
        match self.resolver.lookup(fqdn.as_str(), RecordType::TXT).await {
            Ok(lookup) => {
                let txt_records: Vec<String> = lookup
                    .iter()
                    .filter_map(|rdata| {
                        if let RData::TXT(txt) = rdata {
                            // TXT records can contain multiple strings - join them
                            Some(
                                txt.iter()
                                    .map(|bytes| String::from_utf8_lossy(bytes).to_string())
                                    .collect::<Vec<String>>()
                                    .join(""),
                            )
                        } else {
                            None
                        }
                    })
                    .collect();
                Ok(txt_records)
            }
            // NXDOMAIN and NODATA both surface as NoRecordsFound
            Err(e) if matches!(e.kind(), ResolveErrorKind::NoRecordsFound { .. }) => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }
}
