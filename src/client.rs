//! Blocking client for the generation service.
//!
//! The client is intentionally thin: it POSTs a [`DesignRequest`] as
//! JSON to `<endpoint>/generate`, decodes the response envelope, and
//! maps the three failure classes (service-reported, transport,
//! malformed body) onto [`Error`] variants. Layout computation happens
//! entirely on the service side.

use crate::{ClientConfig, DesignRequest, Error, GenerateResponse, GeneratedPlan, Result};
use reqwest::blocking::Client;
use std::time::Duration;
use url::Url;

/// A synchronous client for `POST /generate`.
///
/// One instance may serve many submissions; each call is an
/// independent request/response cycle with no state carried between
/// them beyond the connection pool.
#[derive(Debug)]
pub struct GenerateClient {
    client: Client,
    config: ClientConfig,
    generate_url: Url,
}

impl GenerateClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| {
                Error::InitializationError(format!("Failed to build HTTP client: {}", e))
            })?;

        // Resolve /generate relative to the endpoint; a missing trailing
        // slash would otherwise drop the last path segment on join.
        let mut base = config.endpoint.clone();
        if !base.ends_with('/') {
            base.push('/');
        }
        let generate_url = Url::parse(&base)
            .and_then(|u| u.join("generate"))
            .map_err(|e| Error::InitializationError(format!("Invalid endpoint URL: {}", e)))?;

        Ok(Self {
            client,
            config,
            generate_url,
        })
    }

    /// Submit a design request and wait for the generated layout.
    ///
    /// On `success=false` the service's error string is surfaced
    /// verbatim in [`Error::Generation`]. Transport failures and
    /// non-JSON bodies map to [`Error::NetworkError`]; a success
    /// envelope with no layout is [`Error::MalformedResponse`].
    pub fn generate(&self, request: &DesignRequest) -> Result<GeneratedPlan> {
        log::debug!(
            "POST {} ({} rooms requested)",
            self.generate_url,
            request.num_rooms
        );

        let mut req = self
            .client
            .post(self.generate_url.clone())
            .header("User-Agent", self.config.user_agent.clone())
            .json(request);
        for (name, value) in &self.config.headers {
            req = req.header(name.as_str(), value.as_str());
        }

        let res = req
            .send()
            .map_err(|e| Error::NetworkError(format!("HTTP POST failed: {}", e)))?;

        let body = res
            .text()
            .map_err(|e| Error::NetworkError(format!("Failed to read response body: {}", e)))?;

        let response: GenerateResponse = serde_json::from_str(&body)
            .map_err(|e| Error::NetworkError(format!("Response was not valid JSON: {}", e)))?;

        if !response.success {
            let msg = response
                .error
                .unwrap_or_else(|| "service reported failure without a message".to_string());
            log::warn!("generation rejected: {}", msg);
            return Err(Error::Generation(msg));
        }

        let rooms = response.layout.ok_or_else(|| {
            Error::MalformedResponse("success response carried no layout".to_string())
        })?;

        Ok(GeneratedPlan {
            request: request.clone(),
            rooms,
        })
    }
}
