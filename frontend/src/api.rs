use async_trait::async_trait;
use gloo_file::Blob;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use shared::{
    ErrorBody, HistoryResponse, LoginRequest, PredictionHistoryItem, PredictionResult,
    RegisterRequest, Statistics, TokenResponse, User,
};

use crate::error::ClientError;

/// An image picked by the user, read into memory for a single upload.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageFile {
    pub name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// The REST contract of the auth/inference server.
#[async_trait(?Send)]
pub trait PredictionApi {
    async fn login(&self, credentials: &LoginRequest) -> Result<TokenResponse, ClientError>;
    async fn register(&self, account: &RegisterRequest) -> Result<(), ClientError>;
    async fn current_user(&self, token: &str) -> Result<User, ClientError>;
    async fn predict(&self, token: &str, image: &ImageFile)
        -> Result<PredictionResult, ClientError>;
    async fn history(
        &self,
        token: &str,
        limit: u32,
    ) -> Result<Vec<PredictionHistoryItem>, ClientError>;
    async fn statistics(&self, token: &str) -> Result<Statistics, ClientError>;
}

#[derive(Clone, Debug, PartialEq)]
pub struct HttpApi {
    base_url: String,
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorized(builder: RequestBuilder, token: &str) -> RequestBuilder {
        builder.header("Authorization", &format!("Bearer {}", token))
    }

    fn json_get(&self, path: &str, token: &str) -> RequestBuilder {
        log::debug!("GET {}", path);
        Self::authorized(
            Request::get(&self.url(path)).header("Content-Type", "application/json"),
            token,
        )
    }
}

#[async_trait(?Send)]
impl PredictionApi for HttpApi {
    async fn login(&self, credentials: &LoginRequest) -> Result<TokenResponse, ClientError> {
        log::debug!("POST /api/auth/login");
        let request = Request::post(&self.url("/api/auth/login"))
            .json(credentials)
            .map_err(build_error)?;
        decode(request.send().await.map_err(network_error)?).await
    }

    async fn register(&self, account: &RegisterRequest) -> Result<(), ClientError> {
        log::debug!("POST /api/auth/register");
        let request = Request::post(&self.url("/api/auth/register"))
            .json(account)
            .map_err(build_error)?;
        expect_success(request.send().await.map_err(network_error)?).await
    }

    async fn current_user(&self, token: &str) -> Result<User, ClientError> {
        let response = self
            .json_get("/api/auth/me", token)
            .send()
            .await
            .map_err(network_error)?;
        decode(response).await
    }

    async fn predict(
        &self,
        token: &str,
        image: &ImageFile,
    ) -> Result<PredictionResult, ClientError> {
        log::debug!("POST /api/predict ({}, {} bytes)", image.name, image.bytes.len());
        let blob = Blob::new_with_options(image.bytes.as_slice(), Some(image.mime_type.as_str()));
        let form_data = web_sys::FormData::new()
            .map_err(|e| ClientError::Network(format!("FormData unavailable: {:?}", e)))?;
        form_data
            .append_with_blob_and_filename("file", blob.as_ref(), &image.name)
            .map_err(|e| ClientError::Network(format!("Failed to attach file: {:?}", e)))?;

        let request = Self::authorized(Request::post(&self.url("/api/predict")), token)
            .body(form_data)
            .map_err(build_error)?;
        decode(request.send().await.map_err(network_error)?).await
    }

    async fn history(
        &self,
        token: &str,
        limit: u32,
    ) -> Result<Vec<PredictionHistoryItem>, ClientError> {
        let response = self
            .json_get("/api/predictions", token)
            .query([("limit", limit.to_string())])
            .send()
            .await
            .map_err(network_error)?;
        let history: HistoryResponse = decode(response).await?;
        Ok(history.predictions)
    }

    async fn statistics(&self, token: &str) -> Result<Statistics, ClientError> {
        let response = self
            .json_get("/api/statistics", token)
            .send()
            .await
            .map_err(network_error)?;
        decode(response).await
    }
}

fn network_error(err: gloo_net::Error) -> ClientError {
    log::error!("Network error: {}", err);
    ClientError::Network(err.to_string())
}

fn build_error(err: gloo_net::Error) -> ClientError {
    ClientError::Network(format!("Failed to build request: {}", err))
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    if response.ok() {
        return response
            .json::<T>()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()));
    }
    Err(failure(response).await)
}

async fn expect_success(response: Response) -> Result<(), ClientError> {
    if response.ok() {
        Ok(())
    } else {
        Err(failure(response).await)
    }
}

async fn failure(response: Response) -> ClientError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    log::warn!("{} failed with status {}", response.url(), status);
    status_error(status, &body)
}

/// Maps a non-2xx status and its body onto the error taxonomy.
pub(crate) fn status_error(status: u16, body: &str) -> ClientError {
    let detail = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.message());

    if status == 401 {
        ClientError::Unauthorized { detail }
    } else {
        ClientError::Server { status, detail }
    }
}
