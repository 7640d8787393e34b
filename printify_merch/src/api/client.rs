use std::{fs, path::Path, time::Duration};

use base64::{engine::general_purpose::STANDARD, Engine};
use log::debug;
use reqwest::{header::AUTHORIZATION, Method, StatusCode};
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    batch::{Catalog, CreateProductError, UploadError},
    model::{ProductDraft, ShopId, Token, UploadedAsset},
};

use super::models::{
    Blueprint, CreateProductRequest, CreateProductResponse, Shop, UploadImageRequest,
    UploadImageResponse,
};

pub const BASE_URL: &str = "https://api.printify.com/v1";
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Таймаут на запрос целиком, включая выгрузку обложки.
const TIMEOUT: Duration = Duration::from_secs(120);

/// Внутренний клиент.
struct InnerClient {
    client: reqwest::blocking::Client,
    base_url: String,
    token: Token,
}

impl InnerClient {
    /// Создаёт новый инстанс внутреннего клиента.
    fn new(base_url: &str, token: Token) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(TIMEOUT)
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
            token,
        })
    }

    fn get<R: DeserializeOwned>(&self, api_method: &str) -> Result<R> {
        self.request::<(), R>(Method::GET, api_method, None)
    }

    fn post<B: Serialize, R: DeserializeOwned>(&self, api_method: &str, payload: &B) -> Result<R> {
        self.request(Method::POST, api_method, Some(payload))
    }

    fn request<B: Serialize, R: DeserializeOwned>(
        &self,
        http_method: Method,
        api_method: &str,
        payload: Option<&B>,
    ) -> Result<R> {
        let url = self.build_url(api_method);
        let mut req_builder = self
            .client
            .request(http_method.clone(), &url)
            .header(AUTHORIZATION, self.token.bearer());

        if let Some(b) = payload {
            req_builder = req_builder.json(b)
        }

        debug!("Запрос в АПИ: {} {} с токеном {}", http_method, url, self.token);
        let resp = req_builder.send()?;

        let status = resp.status();
        let body = resp.text()?;

        if !matches!(status, StatusCode::OK | StatusCode::CREATED) {
            return Err(Error::Status { status, body });
        }

        debug!("Тело ответа на {}: {}", url, body);

        let data = serde_json::from_str(&body)?;

        Ok(data)
    }

    fn build_url(&self, method: &str) -> String {
        format!("{}/{}", self.base_url, method.trim_start_matches('/'))
    }
}

/// Клиент Printify, авторизованный персональным токеном.
pub struct PrintifyClient {
    client: InnerClient,
}

impl PrintifyClient {
    pub fn new(base_url: &str, token: Token) -> Result<Self> {
        Ok(Self {
            client: InnerClient::new(base_url, token)?,
        })
    }

    pub fn shops(&self) -> Result<Vec<Shop>> {
        self.client.get("/shops.json")
    }

    /// Возвращает первый магазин аккаунта.
    pub fn first_shop(&self) -> anyhow::Result<Shop> {
        first_of(self.shops()?)
    }

    pub fn blueprints(&self) -> Result<Vec<Blueprint>> {
        self.client.get("/catalog/blueprints.json")
    }
}

impl Catalog for PrintifyClient {
    fn upload_image(&self, path: &Path) -> std::result::Result<UploadedAsset, UploadError> {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let bytes = fs::read(path).map_err(|e| UploadError::ReadFile {
            file_name: file_name.clone(),
            source: e,
        })?;

        let payload = UploadImageRequest {
            file_name: file_name.clone(),
            contents: STANDARD.encode(bytes),
        };

        let resp: UploadImageResponse = self
            .client
            .post("/uploads/images.json", &payload)
            .map_err(|e| UploadError::Api {
                file_name: file_name.clone(),
                source: e,
            })?;

        Ok(UploadedAsset {
            remote_id: resp.id,
            source_filename: file_name,
        })
    }

    fn create_product(
        &self,
        shop_id: ShopId,
        draft: ProductDraft<'_>,
    ) -> std::result::Result<String, CreateProductError> {
        let req = CreateProductRequest::from(draft);

        let resp: CreateProductResponse = self
            .client
            .post(&format!("/shops/{}/products.json", shop_id), &req)
            .map_err(|e| CreateProductError {
                title: req.title.clone(),
                source: e,
            })?;

        Ok(resp.id)
    }
}

/// Берём первый магазин, пустой список означает что работать не с чем.
fn first_of(shops: Vec<Shop>) -> anyhow::Result<Shop> {
    shops
        .into_iter()
        .next()
        .ok_or(anyhow::anyhow!("account has no shops"))
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("transport: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("got {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("deserialize: {0}")]
    Deserialize(#[from] serde_json::Error),
}
