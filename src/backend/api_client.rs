use super::error::ApiError;
use super::types::*;
use reqwest::multipart::{Form, Part};
use reqwest::Client;

pub struct MlApiClient {
    client: Client,
    base_url: String,
}

impl MlApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get_status(&self) -> Result<StatusSnapshot, ApiError> {
        let url = format!("{}/status", self.base_url);
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }

        response
            .json::<StatusSnapshot>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    pub async fn predict(
        &self,
        model: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<InferenceResult, ApiError> {
        let url = format!("{}/predict/{}", self.base_url, model);
        let part = Part::bytes(bytes).file_name(file_name.to_string());
        let form = Form::new().part("file", part);

        let response = self.client.post(&url).multipart(form).send().await?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }

        response
            .json::<InferenceResult>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    pub async fn start_training(&self, smoke_test: bool) -> Result<TrainResponse, ApiError> {
        let url = format!("{}/train", self.base_url);
        let response = self
            .client
            .post(&url)
            .query(&[("smoke_test", smoke_test)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }

        response
            .json::<TrainResponse>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }
}
