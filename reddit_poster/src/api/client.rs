use std::time::Duration;

use log::debug;
use reqwest::{blocking::RequestBuilder, header::AUTHORIZATION, StatusCode};
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    dispatch::{Poster, Submission},
    model::{AccessToken, Post, PostTarget},
};

use super::models::{Me, SubmitRequest, SubmitResponse};

pub(super) const AUTH_BASE_URL: &str = "https://www.reddit.com";
const OAUTH_BASE_URL: &str = "https://oauth.reddit.com";
const SHORTLINK_BASE_URL: &str = "https://redd.it";
const TIMEOUT: Duration = Duration::from_secs(30);

/// Как авторизуем запрос.
pub(super) enum Auth<'a> {
    /// Доступы приложения, нужны только для получения токена.
    Basic { user: &'a str, password: &'a str },

    Bearer(&'a AccessToken),
}

/// Внутренний клиент.
pub(super) struct InnerClient {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl InnerClient {
    /// Создаёт новый инстанс внутреннего клиента.
    pub(super) fn new(base_url: &str, user_agent: &str) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(user_agent)
            .timeout(TIMEOUT)
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.to_owned(),
        })
    }

    pub(super) fn get<R: DeserializeOwned>(&self, api_method: &str, auth: Auth<'_>) -> Result<R> {
        let url = self.build_url(api_method);
        debug!("Запрос в АПИ: GET {}", url);

        self.send(Self::authorize(self.client.get(&url), auth))
    }

    pub(super) fn post_form<F: Serialize + ?Sized, R: DeserializeOwned>(
        &self,
        api_method: &str,
        form: &F,
        auth: Auth<'_>,
    ) -> Result<R> {
        let url = self.build_url(api_method);
        debug!("Запрос в АПИ: POST {}", url);

        self.send(Self::authorize(self.client.post(&url).form(form), auth))
    }

    fn authorize(builder: RequestBuilder, auth: Auth<'_>) -> RequestBuilder {
        match auth {
            Auth::Basic { user, password } => builder.basic_auth(user, Some(password)),
            Auth::Bearer(t) => builder.header(AUTHORIZATION, format!("Bearer {}", t.value)),
        }
    }

    fn send<R: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<R> {
        let resp = builder.send()?;

        let status = resp.status();
        let body = resp.text()?;

        if status != StatusCode::OK {
            return Err(Error::Status { status, body });
        }

        debug!("Тело ответа: {}", body);

        let data = serde_json::from_str(&body)?;

        Ok(data)
    }

    fn build_url(&self, method: &str) -> String {
        format!("{}/{}", self.base_url, method.trim_start_matches('/'))
    }
}

/// Клиент Reddit с действующим токеном.
pub struct AuthorizedClient {
    client: InnerClient,
    access_token: AccessToken,
}

impl AuthorizedClient {
    pub fn from_token(access_token: AccessToken, user_agent: &str) -> Result<Self> {
        Ok(Self {
            client: InnerClient::new(OAUTH_BASE_URL, user_agent)?,
            access_token,
        })
    }

    /// Имя пользователя, от которого будут посты.
    pub fn me(&self) -> Result<String> {
        let me: Me = self
            .client
            .get("/api/v1/me", Auth::Bearer(&self.access_token))?;

        Ok(me.name)
    }
}

impl Poster for AuthorizedClient {
    fn submit(&self, target: &PostTarget, post: &Post) -> Result<Submission> {
        if self.access_token.is_expired() {
            return Err(Error::TokenExpired);
        }

        let req = SubmitRequest::new(target, post);

        debug!("Request {:?}", req);
        let resp: SubmitResponse =
            self.client
                .post_form("/api/submit", &req, Auth::Bearer(&self.access_token))?;

        if let Some(detail) = resp.json.error_detail() {
            return Err(Error::Api(detail));
        }

        let data = resp.json.data.unwrap_or_default();

        let link = match (data.id, data.url) {
            (Some(id), _) => format!("{}/{}", SHORTLINK_BASE_URL, id),
            (None, Some(url)) => url,
            (None, None) => return Err(Error::Api("response has no post id".into())),
        };

        Ok(Submission { link })
    }
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

    #[error("{0}")]
    Api(String),

    #[error("access token expired")]
    TokenExpired,
}
