use serde::{Deserialize, Serialize};

use crate::model::{Post, PostKind, PostTarget};

#[derive(Default, Debug, Clone, PartialEq, Serialize)]
pub struct PasswordGrantRequest {
    pub grant_type: String,
    pub username: String,
    pub password: String,
}

/// Ответ на запрос токена. При ошибке Reddit отвечает 200 с полем `error`.
#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
pub struct TokenResponse {
    pub access_token: Option<String>,
    pub expires_in: Option<i64>,
    pub error: Option<String>,
}

#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
pub struct Me {
    pub name: String,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize)]
pub struct SubmitRequest {
    pub api_type: String,
    pub sr: String,
    pub kind: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flair_text: Option<String>,
    pub sendreplies: bool,
}

impl SubmitRequest {
    pub fn new(target: &PostTarget, post: &Post) -> Self {
        let (kind, url, text) = match &post.kind {
            PostKind::Link(url) => ("link", Some(url.clone()), None),
            PostKind::Text(body) => ("self", None, Some(body.clone())),
        };

        Self {
            api_type: "json".to_owned(),
            sr: target.forum.clone(),
            kind: kind.to_owned(),
            title: post.title.clone(),
            url,
            text,
            flair_text: target.flair.clone(),
            sendreplies: true,
        }
    }
}

#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
pub struct SubmitResponse {
    pub json: SubmitResponseJson,
}

#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
pub struct SubmitResponseJson {
    /// Каждая ошибка это `[код, сообщение, поле]`.
    #[serde(default)]
    pub errors: Vec<Vec<Option<String>>>,
    pub data: Option<SubmitResponseData>,
}

#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
pub struct SubmitResponseData {
    pub id: Option<String>,
    pub url: Option<String>,
}

impl SubmitResponseJson {
    /// Ошибки API одной строкой.
    pub fn error_detail(&self) -> Option<String> {
        if self.errors.is_empty() {
            return None;
        }

        let detail = self
            .errors
            .iter()
            .map(|e| {
                e.iter()
                    .take(2)
                    .flatten()
                    .cloned()
                    .collect::<Vec<_>>()
                    .join(": ")
            })
            .collect::<Vec<_>>()
            .join("; ");

        Some(detail)
    }
}
