// Copyright 2025 The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

use log::{debug, warn};
use url::Url;

use super::endpoint::Endpoint;
use super::error::HttpError;

#[derive(Debug, Clone)]
pub(crate) struct HttpClient {
    origin: String,
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new(base_url: Url) -> Result<Self, HttpError> {
        // Single attempt per call, no timeout and no idle connection reuse.
        let client = reqwest::Client::builder()
            .pool_max_idle_per_host(0)
            .build()
            .map_err(HttpError::RequestFailed)?;
        Self::with_client(base_url, client)
    }

    pub fn with_client(base_url: Url, client: reqwest::Client) -> Result<Self, HttpError> {
        let origin = base_url.origin();
        if !origin.is_tuple() {
            return Err(HttpError::OpaqueOrigin(base_url));
        }

        Ok(Self {
            origin: origin.ascii_serialization(),
            client,
        })
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub async fn send<E: Endpoint>(&self, endpoint: &E) -> Result<E::Response, HttpError> {
        let path = endpoint.path();
        let url = format!("{}{}", self.origin, path);
        debug!(url = url.as_str(); "HTTP: GET");

        let resp = self.client.get(&url).send().await.map_err(|e| {
            let err = HttpError::from_transport(e);
            warn!(url = url.as_str(), error:% = err; "HTTP: Request failed");
            err
        })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read response body".into());
            warn!(url = url.as_str(), status = status.as_u16(); "HTTP: Node rejected request");
            return Err(HttpError::MethodNotAllowed { status, body });
        }

        let body = resp.bytes().await.map_err(HttpError::from_transport)?;
        endpoint.decode(&body).map_err(|source| {
            warn!(url = url.as_str(), error:% = source; "HTTP: Response did not match endpoint type");
            HttpError::Decode { path, source }
        })
    }
}
