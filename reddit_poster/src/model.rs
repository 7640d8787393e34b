use std::fmt::Display;

use chrono::{DateTime, Duration, Utc};

use crate::category;

/// Куда отправляем пост.
#[derive(Debug, Clone, PartialEq)]
pub struct PostTarget {
    /// Имя сабреддита без `r/`.
    pub forum: String,

    pub flair: Option<String>,
}

impl PostTarget {
    pub fn new(forum: &str) -> Self {
        Self {
            forum: forum.to_owned(),
            flair: category::flair(forum).map(str::to_owned),
        }
    }
}

/// Содержимое поста.
#[derive(Debug, Clone, PartialEq)]
pub enum PostKind {
    /// Пост-ссылка.
    Link(String),

    /// Текстовый пост, тело может быть пустым.
    Text(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub title: String,
    pub kind: PostKind,
}

impl Post {
    /// Непустое тело важнее ссылки. Если нет ни того ни другого, получится
    /// текстовый пост из одного заголовка.
    pub fn new(title: String, url: Option<String>, body: Option<String>) -> Self {
        let kind = match (url, body.filter(|b| !b.is_empty())) {
            (_, Some(body)) => PostKind::Text(body),
            (Some(url), None) => PostKind::Link(url),
            (None, None) => PostKind::Text(String::new()),
        };

        Self { title, kind }
    }
}

/// Токен доступа к API Reddit.
#[derive(Debug, Clone)]
pub struct AccessToken {
    /// Значение токена.
    pub(crate) value: String,

    /// Дата и время когда токен станет не валидным.
    expire_at: Option<DateTime<Utc>>,
}

impl AccessToken {
    /// Создаёт новый инстанс токена.
    pub fn new(value: String, expire_at: Option<DateTime<Utc>>) -> TokenNewResult {
        let value = value.trim().to_owned();
        if value.is_empty() {
            return Err(TokenNewError::EmptyValue);
        }

        let token = Self { value, expire_at };

        if token.is_expired() {
            return Err(TokenNewError::AlreadyExpired);
        }

        Ok(token)
    }

    /// Токен который живёт `expires_in` секунд с текущего момента.
    pub fn expiring_in(value: String, expires_in: Option<i64>) -> TokenNewResult {
        Self::new(value, expires_in.map(|s| Utc::now() + Duration::seconds(s)))
    }

    /// Проверяет что токен уже протух.
    pub fn is_expired(&self) -> bool {
        matches!(self.expire_at, Some(date) if date < Utc::now())
    }
}

impl Display for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

pub type TokenNewResult = std::result::Result<AccessToken, TokenNewError>;

#[derive(Debug, thiserror::Error)]
pub enum TokenNewError {
    #[error("value is empty")]
    EmptyValue,

    #[error("already expired")]
    AlreadyExpired,
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! post_kind_tests {
        ($($name:ident: $value:expr,)*) => {
        $(
            #[test]
            fn $name() {
                let (expected, url, body): (PostKind, Option<&str>, Option<&str>) = $value;
                let post = Post::new("t".into(), url.map(Into::into), body.map(Into::into));
                assert_eq!(expected, post.kind);
            }
        )*
        }
    }

    post_kind_tests! {
        post_kind_link: (PostKind::Link("https://aram.band".into()), Some("https://aram.band"), None),
        post_kind_text: (PostKind::Text("hello".into()), None, Some("hello")),
        post_kind_body_wins: (PostKind::Text("hello".into()), Some("https://aram.band"), Some("hello")),
        post_kind_title_only: (PostKind::Text(String::new()), None, None),
        post_kind_empty_body_keeps_link: (PostKind::Link("https://aram.band".into()), Some("https://aram.band"), Some("")),
        post_kind_empty_body_alone: (PostKind::Text(String::new()), None, Some("")),
    }

    #[test]
    fn target_picks_up_flair() {
        assert_eq!(Some("Feedback".into()), PostTarget::new("WeAreTheMusicMakers").flair);
        assert_eq!(None, PostTarget::new("drums").flair);
    }

    #[test]
    fn token_rejects_empty_and_expired() {
        assert!(matches!(
            AccessToken::new(" ".into(), None),
            Err(TokenNewError::EmptyValue)
        ));
        assert!(matches!(
            AccessToken::expiring_in("abc".into(), Some(-10)),
            Err(TokenNewError::AlreadyExpired)
        ));
    }

    #[test]
    fn token_without_expiry_never_expires() {
        let token = AccessToken::expiring_in("abc".into(), None).unwrap();

        assert!(!token.is_expired());
        assert_eq!("abc", token.to_string());
    }
}
