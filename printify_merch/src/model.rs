use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Шаблон товара.
/// Описывает базовую модель из каталога Printify, в которую будет помещена
/// обложка альбома.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProductTemplate {
    /// Название шаблона, попадает в заголовок товара.
    pub name: String,

    /// Идентификатор базовой модели в каталоге.
    pub blueprint_id: u64,

    /// Идентификатор типографии.
    pub print_provider_id: u64,

    /// Цена в основных единицах валюты (например 24.99).
    pub base_price: f64,

    /// Варианты модели (размер, цвет) которые будут включены в товар.
    pub variants: Vec<u64>,
}

impl ProductTemplate {
    /// Цена одного варианта в минимальных единицах валюты (центах).
    /// Дробная часть отбрасывается.
    pub fn price_minor_units(&self) -> u32 {
        (self.base_price * 100.0).floor() as u32
    }
}

/// Набор шаблонов по умолчанию.
pub fn default_templates() -> Vec<ProductTemplate> {
    vec![
        ProductTemplate {
            name: "Unisex T-Shirt".to_owned(),
            blueprint_id: 6,
            print_provider_id: 99,
            base_price: 24.99,
            variants: vec![12, 13, 14, 15, 16],
        },
        ProductTemplate {
            name: "Hoodie".to_owned(),
            blueprint_id: 77,
            print_provider_id: 99,
            base_price: 44.99,
            variants: vec![1, 2, 3, 4, 5],
        },
        ProductTemplate {
            name: "Mug 11oz".to_owned(),
            blueprint_id: 438,
            print_provider_id: 28,
            base_price: 14.99,
            variants: vec![65139],
        },
        ProductTemplate {
            name: "Poster".to_owned(),
            blueprint_id: 49,
            print_provider_id: 25,
            base_price: 19.99,
            variants: vec![421],
        },
    ]
}

/// Загруженное в Printify изображение.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedAsset {
    /// Идентификатор изображения на стороне Printify.
    pub remote_id: String,

    /// Имя исходного файла.
    pub source_filename: String,
}

/// Всё что нужно чтобы собрать запрос на создание товара.
#[derive(Debug, Clone, Copy)]
pub struct ProductDraft<'a> {
    pub display_name: &'a str,
    pub asset: &'a UploadedAsset,
    pub template: &'a ProductTemplate,
}

impl ProductDraft<'_> {
    pub fn title(&self) -> String {
        format!("{} - {}", self.display_name, self.template.name)
    }
}

/// Делает из имени файла (без расширения) человекочитаемое название альбома.
///
/// `_` и `-` заменяются на пробелы, первая буква каждого слова становится
/// заглавной, остальные строчными.
pub fn display_name(stem: &str) -> String {
    let mut prev_is_letter = false;

    stem.chars()
        .map(|c| if c == '_' || c == '-' { ' ' } else { c })
        .flat_map(|c| {
            let mapped: Vec<char> = if prev_is_letter {
                c.to_lowercase().collect()
            } else {
                c.to_uppercase().collect()
            };
            prev_is_letter = c.is_alphabetic();
            mapped
        })
        .collect()
}

pub type ShopId = u64;

/// Токен доступа к API Printify.
#[derive(Debug, Clone)]
pub struct Token {
    value: String,
}

impl Token {
    /// Создаёт новый инстанс токена.
    pub fn new(value: String) -> TokenNewResult {
        let value = value.trim().to_owned();
        if value.is_empty() {
            return Err(TokenNewError::EmptyValue);
        }

        Ok(Self { value })
    }

    pub(crate) fn bearer(&self) -> String {
        format!("Bearer {}", self.value)
    }
}

impl Display for Token {
    // Значение токена в логи не попадает.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let skip = self.value.chars().count().saturating_sub(4);
        let tail: String = self.value.chars().skip(skip).collect();
        write!(f, "***{}", tail)
    }
}

pub type TokenNewResult = std::result::Result<Token, TokenNewError>;

#[derive(Debug, thiserror::Error)]
pub enum TokenNewError {
    #[error("value is empty")]
    EmptyValue,
}
