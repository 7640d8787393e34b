use std::env;

/// Имена переменных окружения с доступами к Reddit.
pub const CLIENT_ID_ENV: &str = "REDDIT_CLIENT_ID";
pub const CLIENT_SECRET_ENV: &str = "REDDIT_CLIENT_SECRET";
pub const USERNAME_ENV: &str = "REDDIT_USERNAME";
pub const PASSWORD_ENV: &str = "REDDIT_PASSWORD";

pub const ALL_ENV: [&str; 4] = [CLIENT_ID_ENV, CLIENT_SECRET_ENV, USERNAME_ENV, PASSWORD_ENV];

/// Доступы приложения типа "script".
#[derive(Debug, Clone, PartialEq)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// Читает доступы из окружения.
    pub fn from_env() -> Result {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Пустое значение считается отсутствующим.
    pub fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Result {
        let mut missing = Vec::new();
        let mut get = |name: &'static str| match lookup(name).filter(|v| !v.is_empty()) {
            Some(v) => v,
            None => {
                missing.push(name);
                String::new()
            }
        };

        let creds = Self {
            client_id: get(CLIENT_ID_ENV),
            client_secret: get(CLIENT_SECRET_ENV),
            username: get(USERNAME_ENV),
            password: get(PASSWORD_ENV),
        };

        if !missing.is_empty() {
            return Err(Error::Missing(missing));
        }

        Ok(creds)
    }

    pub fn user_agent(&self) -> String {
        format!("A-RAM-Bot/1.0 (by /u/{})", self.username)
    }
}

pub type Result = std::result::Result<Credentials, Error>;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    #[error("missing Reddit credentials: {}", .0.join(", "))]
    Missing(Vec<&'static str>),
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn all_present() {
        let creds = Credentials::from_lookup(lookup(&[
            (CLIENT_ID_ENV, "id"),
            (CLIENT_SECRET_ENV, "secret"),
            (USERNAME_ENV, "aram"),
            (PASSWORD_ENV, "hunter2"),
        ]))
        .unwrap();

        assert_eq!("id", creds.client_id);
        assert_eq!("A-RAM-Bot/1.0 (by /u/aram)", creds.user_agent());
    }

    #[test]
    fn reports_every_missing_variable() {
        let err = Credentials::from_lookup(lookup(&[
            (CLIENT_ID_ENV, "id"),
            (USERNAME_ENV, ""),
        ]))
        .unwrap_err();

        assert_eq!(
            Error::Missing(vec![CLIENT_SECRET_ENV, USERNAME_ENV, PASSWORD_ENV]),
            err
        );
        assert_eq!(
            "missing Reddit credentials: REDDIT_CLIENT_SECRET, REDDIT_USERNAME, REDDIT_PASSWORD",
            err.to_string()
        );
    }
}
