use std::{env, path::PathBuf};

use anyhow::anyhow;
use serde::{Deserialize, Serialize};

use crate::{
    api,
    model::{default_templates, ProductTemplate, Token},
};
use resolve_path::PathResolveExt;

/// Переменная окружения с токеном Printify.
pub const TOKEN_ENV: &str = "PRINTIFY_TOKEN";

#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Адрес API Printify.
    pub base_url: String,

    /// Путь до папки с обложками альбомов.
    pub images_path: PathBuf,

    /// Шаблоны товаров которые создаются для каждой обложки.
    pub templates: Vec<ProductTemplate>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: api::BASE_URL.to_owned(),
            images_path: PathBuf::from("./album_covers"),
            templates: default_templates(),
        }
    }
}

/// Загружает конфигурацию.
/// Без файла используются значения по умолчанию.
pub fn load(path: Option<PathBuf>) -> anyhow::Result<Config> {
    let mut cfg = match path {
        // confy создаёт файл если его нет, а нам этого не нужно.
        Some(p) if !p.exists() => return Err(anyhow!("config file {:?} not found", p)),
        Some(p) => confy::load_path(p)?,
        None => Config::default(),
    };

    normalize(&mut cfg)?;

    Ok(cfg)
}

pub fn normalize(cfg: &mut Config) -> anyhow::Result<()> {
    // Чтобы правильно обработать относительные пути и `~`.
    cfg.images_path = cfg.images_path.try_resolve()?.into_owned();

    Ok(())
}

/// Достаёт токен из окружения.
pub fn token() -> anyhow::Result<Token> {
    let value = env::var(TOKEN_ENV).map_err(|_| anyhow!("{} is not set", TOKEN_ENV))?;

    Token::new(value).map_err(|e| anyhow!("{}: {}", TOKEN_ENV, e))
}
