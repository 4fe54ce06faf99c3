//! Single-shot page fetcher wrapping reqwest.
//!
//! One GET per run, optionally through an HTTPS proxy. No retries and no
//! timeout: a failed fetch aborts the run and the operator re-runs it.

use crate::types::{EnumGenError, EnumGenResult};

/// HTTP client used to download one reference page.
#[derive(Clone)]
pub struct PageFetcher {
    client: reqwest::Client,
}

impl PageFetcher {
    /// Build a fetcher, routing `https` requests through `proxy` when given.
    pub fn new(proxy: Option<&str>) -> EnumGenResult<Self> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("http-enumgen/", env!("CARGO_PKG_VERSION")));

        if let Some(url) = proxy {
            let proxy = reqwest::Proxy::https(url)
                .map_err(|e| EnumGenError::InvalidProxy(format!("{url}: {e}")))?;
            builder = builder.proxy(proxy);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }

    /// GET `url` and return the body as text.
    ///
    /// Non-success statuses are logged but not treated as errors; the body
    /// is handed to the extractor as-is.
    pub async fn fetch(&self, url: &str) -> EnumGenResult<String> {
        tracing::info!("fetching {url}");
        let resp = self.client.get(url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            tracing::warn!("{url} answered {status}");
        }

        let body = resp.text().await?;
        tracing::debug!("fetched {} bytes from {url}", body.len());
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_without_proxy() {
        assert!(PageFetcher::new(None).is_ok());
    }

    #[test]
    fn test_new_with_proxy() {
        assert!(PageFetcher::new(Some("http://127.0.0.1:7891")).is_ok());
    }

    #[test]
    fn test_invalid_proxy() {
        assert!(matches!(
            PageFetcher::new(Some("http://[::1")),
            Err(EnumGenError::InvalidProxy(_))
        ));
    }
}
