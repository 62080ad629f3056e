use std::time::Duration;

use anyhow::Context;
use parking_client::SpotApi;
use parking_core::{
    endpoints::{CSRF_COOKIE, CSRF_HEADER, ENTRY, RESERVE_SPOT, SPOTS_DATA, VALIDATE_LICENSE_PLATE},
    format::{cookie::get_cookie, error::RequestError},
    messages::{
        entry::EntryRequest, reply::ApiReply, reserve_spot::ReserveSpotRequest,
        spots::SpotsSnapshot, validate_license_plate::ValidateLicensePlateRequest,
    },
};
use reqwest::{header::COOKIE, Client, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use url::Url;

/// `SpotApi` over the site's JSON endpoints.
pub struct HttpSpotApi {
    client: Client,
    base_url: Url,
    cookie: Option<String>,
}

impl HttpSpotApi {
    pub fn new(base_url: &str, cookie: Option<String>, timeout: Duration) -> anyhow::Result<Self> {
        let base_url =
            Url::parse(base_url).with_context(|| format!("invalid base url {}", base_url))?;
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("building http client")?;
        Ok(Self {
            client,
            base_url,
            cookie,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, RequestError> {
        self.base_url
            .join(path)
            .map_err(|e| RequestError::Transport(e.to_string()))
    }

    fn with_cookie(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.cookie {
            Some(cookie) => builder.header(COOKIE, cookie),
            None => builder,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, RequestError> {
        let url = self.endpoint(path)?;
        log::debug!("GET {}", url);
        let response = self
            .with_cookie(self.client.get(url))
            .send()
            .await
            .map_err(|e| RequestError::Transport(e.to_string()))?;
        decode(response).await
    }

    async fn post_form<B: Serialize>(&self, path: &str, body: &B) -> Result<ApiReply, RequestError> {
        let url = self.endpoint(path)?;
        log::debug!("POST {}", url);
        let mut builder = self.with_cookie(self.client.post(url)).form(body);
        match self.cookie.as_deref().and_then(|c| get_cookie(c, CSRF_COOKIE)) {
            Some(token) => builder = builder.header(CSRF_HEADER, token),
            None => log::warn!("no {} cookie, posting without {}", CSRF_COOKIE, CSRF_HEADER),
        }
        let response = builder
            .send()
            .await
            .map_err(|e| RequestError::Transport(e.to_string()))?;
        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, RequestError> {
    let status = response.status();
    if !status.is_success() {
        log::warn!("{} answered {}", response.url(), status);
        return Err(RequestError::Status(status.as_u16()));
    }
    let body = response
        .bytes()
        .await
        .map_err(|e| RequestError::Transport(e.to_string()))?;
    serde_json::from_slice(&body).map_err(|e| RequestError::Decode(e.to_string()))
}

impl SpotApi for HttpSpotApi {
    async fn fetch_spots(&self) -> Result<SpotsSnapshot, RequestError> {
        self.get_json(SPOTS_DATA).await
    }

    async fn validate_license_plate(
        &self,
        request: &ValidateLicensePlateRequest,
    ) -> Result<ApiReply, RequestError> {
        self.post_form(VALIDATE_LICENSE_PLATE, request).await
    }

    async fn reserve_spot(&self, request: &ReserveSpotRequest) -> Result<ApiReply, RequestError> {
        self.post_form(RESERVE_SPOT, request).await
    }

    async fn enter_vehicle(&self, request: &EntryRequest) -> Result<ApiReply, RequestError> {
        self.post_form(ENTRY, request).await
    }
}
