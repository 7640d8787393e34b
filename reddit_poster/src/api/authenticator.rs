use crate::{config::Credentials, model::AccessToken};

use super::{
    client::{Auth, Error, InnerClient, Result, AUTH_BASE_URL},
    models::{PasswordGrantRequest, TokenResponse},
};

/// Аутентификатор по логину и паролю (OAuth2 password grant).
///
/// Работает только для приложений типа "script": доступы приложения уходят
/// в basic auth, логин и пароль пользователя в теле запроса.
pub struct PasswordAuthenticator<'a> {
    client: InnerClient,
    credentials: &'a Credentials,
}

impl<'a> PasswordAuthenticator<'a> {
    pub fn new(credentials: &'a Credentials) -> Result<Self> {
        Ok(Self {
            client: InnerClient::new(AUTH_BASE_URL, &credentials.user_agent())?,
            credentials,
        })
    }

    /// Обменивает логин и пароль на токен доступа.
    pub fn authenticate(&self) -> Result<AccessToken> {
        const URL: &str = "/api/v1/access_token";

        let payload = PasswordGrantRequest {
            grant_type: "password".to_owned(),
            username: self.credentials.username.clone(),
            password: self.credentials.password.clone(),
        };

        let auth = Auth::Basic {
            user: &self.credentials.client_id,
            password: &self.credentials.client_secret,
        };

        let resp: TokenResponse = self.client.post_form(URL, &payload, auth)?;

        if let Some(e) = resp.error {
            return Err(Error::Api(format!("authentication failed: {}", e)));
        }

        let value = resp.access_token.unwrap_or_default();

        AccessToken::expiring_in(value, resp.expires_in)
            .map_err(|e| Error::Api(format!("access token: {}", e)))
    }
}
