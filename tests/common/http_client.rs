//! Thin reqwest wrapper over the gateway routes.

use reqwest::StatusCode;
use serde_json::Value;

use healsumm::gateway::{HealthResponse, ReadyResponse};

pub struct TestClient {
    base_url: String,
    client: reqwest::Client,
}

impl TestClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    pub async fn health(&self) -> reqwest::Result<HealthResponse> {
        self.client
            .get(format!("{}/healthz", self.base_url))
            .send()
            .await?
            .json()
            .await
    }

    pub async fn ready(&self) -> reqwest::Result<(StatusCode, ReadyResponse)> {
        let res = self
            .client
            .get(format!("{}/ready", self.base_url))
            .send()
            .await?;
        let status = res.status();
        Ok((status, res.json().await?))
    }

    pub async fn summarize(&self, body: Value) -> reqwest::Result<(StatusCode, Value)> {
        let res = self
            .client
            .post(format!("{}/api/summarize", self.base_url))
            .json(&body)
            .send()
            .await?;
        let status = res.status();
        Ok((status, res.json().await?))
    }

    pub async fn batch(&self) -> reqwest::Result<(StatusCode, Value)> {
        let res = self
            .client
            .post(format!("{}/api/batch", self.base_url))
            .send()
            .await?;
        let status = res.status();
        Ok((status, res.json().await?))
    }

    pub async fn results(&self) -> reqwest::Result<Vec<Value>> {
        self.client
            .get(format!("{}/api/results", self.base_url))
            .send()
            .await?
            .json()
            .await
    }

    pub async fn index(&self) -> reqwest::Result<String> {
        self.client.get(&self.base_url).send().await?.text().await
    }
}
