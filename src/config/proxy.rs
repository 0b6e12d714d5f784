//! User-app proxy mapping.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::checks::check_hostname;

/// Pairs a cloud's API host with the host proxying its user applications.
///
/// Serialized as a two-element array, e.g.
/// `["iu.jetstream-cloud.org", "proxy-j7m-iu.exosphere.app"]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAppProxy(pub String, pub String);

impl UserAppProxy {
    pub fn new(cloud_host: impl Into<String>, proxy_host: impl Into<String>) -> Self {
        Self(cloud_host.into(), proxy_host.into())
    }

    pub fn cloud_host(&self) -> &str {
        &self.0
    }

    pub fn proxy_host(&self) -> &str {
        &self.1
    }
}

/// Validates every pair and rejects a cloud host listed twice.
pub(crate) fn check_proxies(proxies: &[UserAppProxy]) -> Result<(), String> {
    let mut seen = HashSet::new();

    for (i, proxy) in proxies.iter().enumerate() {
        check_hostname(proxy.cloud_host()).map_err(|e| format!("entry {}: cloud host: {}", i, e))?;
        check_hostname(proxy.proxy_host()).map_err(|e| format!("entry {}: proxy host: {}", i, e))?;

        if !seen.insert(proxy.cloud_host().to_ascii_lowercase()) {
            return Err(format!(
                "entry {}: cloud host {} is listed more than once",
                i,
                proxy.cloud_host()
            ));
        }
    }

    Ok(())
}
