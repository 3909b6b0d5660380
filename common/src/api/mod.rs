pub mod models;

use crate::config::{ConfigFile, DEFAULT_ENDPOINT};
use crate::errors::*;
use crate::http;
use async_trait::async_trait;
pub use models::*;
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::borrow::Cow;

pub struct Client {
    endpoint: String,
    client: http::Client,
}

impl Client {
    pub fn new(config: ConfigFile, endpoint: Option<String>) -> Result<Client> {
        let endpoint = if let Some(endpoint) = endpoint {
            endpoint
        } else if let Some(endpoint) = config.http.endpoint {
            endpoint
        } else {
            DEFAULT_ENDPOINT.to_string()
        };

        debug!("setting corpore endpoint to {:?}", endpoint);
        let client = http::client()?;
        Ok(Client { endpoint, client })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.endpoint.trim_end_matches('/'), path)
    }

    pub fn get(&self, path: Cow<'static, str>) -> RequestBuilder {
        self.client.get(self.url(&path))
    }

    pub fn post(&self, path: Cow<'static, str>) -> RequestBuilder {
        self.client.post(self.url(&path))
    }

    pub fn put(&self, path: Cow<'static, str>) -> RequestBuilder {
        self.client.put(self.url(&path))
    }

    pub fn delete(&self, path: Cow<'static, str>) -> RequestBuilder {
        self.client.delete(self.url(&path))
    }
}

/// Reads the envelope from a response, turning any non-2xx status into an error that
/// carries the envelope's message.
pub async fn read_envelope<T: DeserializeOwned>(response: Response) -> Result<Envelope<T>> {
    let status = response.status();
    let envelope = response
        .json::<Envelope<T>>()
        .await
        .with_context(|| format!("Failed to decode response body (http status {status})"))?;

    if !status.is_success() {
        bail!("Request failed with http status {}: {}", status, envelope.message);
    }

    Ok(envelope)
}

#[async_trait]
pub trait WorkerRestApi {
    async fn get_workers(&self) -> Result<Envelope<Vec<Worker>>>;
    async fn get_worker(&self, id: i32) -> Result<Envelope<Worker>>;
    async fn create_worker(&self, request: WorkerRequest) -> Result<Envelope<Vec<Worker>>>;
    async fn update_worker(
        &self,
        id: i32,
        request: WorkerRequest,
    ) -> Result<Envelope<Vec<Worker>>>;
    async fn delete_worker(&self, id: i32) -> Result<Envelope<Vec<Worker>>>;
    async fn deactivate_worker(&self, id: i32) -> Result<Envelope<Vec<Worker>>>;
}

#[async_trait]
pub trait ServiceOrderRestApi {
    async fn get_service_orders(&self) -> Result<Envelope<Vec<ServiceOrder>>>;
    async fn get_service_order(&self, id: i32) -> Result<Envelope<ServiceOrder>>;
    async fn create_service_order(
        &self,
        request: ServiceOrderRequest,
    ) -> Result<Envelope<Vec<ServiceOrder>>>;
    async fn update_service_order(
        &self,
        id: i32,
        request: ServiceOrderRequest,
    ) -> Result<Envelope<Vec<ServiceOrder>>>;
    async fn delete_service_order(&self, id: i32) -> Result<Envelope<Vec<ServiceOrder>>>;
}

#[async_trait]
impl WorkerRestApi for Client {
    async fn get_workers(&self) -> Result<Envelope<Vec<Worker>>> {
        let response = self.get(Cow::Borrowed("worker")).send().await?;
        read_envelope(response).await
    }

    async fn get_worker(&self, id: i32) -> Result<Envelope<Worker>> {
        let response = self
            .get(Cow::Owned(format!("worker/{id}")))
            .send()
            .await?;
        read_envelope(response).await
    }

    async fn create_worker(&self, request: WorkerRequest) -> Result<Envelope<Vec<Worker>>> {
        let response = self
            .post(Cow::Borrowed("worker"))
            .json(&request)
            .send()
            .await?;
        read_envelope(response).await
    }

    async fn update_worker(
        &self,
        id: i32,
        request: WorkerRequest,
    ) -> Result<Envelope<Vec<Worker>>> {
        let response = self
            .put(Cow::Owned(format!("worker/{id}")))
            .json(&request)
            .send()
            .await?;
        read_envelope(response).await
    }

    async fn delete_worker(&self, id: i32) -> Result<Envelope<Vec<Worker>>> {
        let response = self
            .delete(Cow::Owned(format!("worker/{id}")))
            .send()
            .await?;
        read_envelope(response).await
    }

    async fn deactivate_worker(&self, id: i32) -> Result<Envelope<Vec<Worker>>> {
        let response = self
            .put(Cow::Owned(format!("worker/{id}/deactivate")))
            .send()
            .await?;
        read_envelope(response).await
    }
}

#[async_trait]
impl ServiceOrderRestApi for Client {
    async fn get_service_orders(&self) -> Result<Envelope<Vec<ServiceOrder>>> {
        let response = self.get(Cow::Borrowed("service-order")).send().await?;
        read_envelope(response).await
    }

    async fn get_service_order(&self, id: i32) -> Result<Envelope<ServiceOrder>> {
        let response = self
            .get(Cow::Owned(format!("service-order/{id}")))
            .send()
            .await?;
        read_envelope(response).await
    }

    async fn create_service_order(
        &self,
        request: ServiceOrderRequest,
    ) -> Result<Envelope<Vec<ServiceOrder>>> {
        let response = self
            .post(Cow::Borrowed("service-order"))
            .json(&request)
            .send()
            .await?;
        read_envelope(response).await
    }

    async fn update_service_order(
        &self,
        id: i32,
        request: ServiceOrderRequest,
    ) -> Result<Envelope<Vec<ServiceOrder>>> {
        let response = self
            .put(Cow::Owned(format!("service-order/{id}")))
            .json(&request)
            .send()
            .await?;
        read_envelope(response).await
    }

    async fn delete_service_order(&self, id: i32) -> Result<Envelope<Vec<ServiceOrder>>> {
        let response = self
            .delete(Cow::Owned(format!("service-order/{id}")))
            .send()
            .await?;
        read_envelope(response).await
    }
}
