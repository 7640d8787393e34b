use std::{io, path::Path, path::PathBuf};

use log::{debug, warn};

use crate::{
    api,
    model::{display_name, ProductDraft, ProductTemplate, ShopId, UploadedAsset},
};

/// Каталог товаров, в который мы выгружаем изображения и создаём товары.
pub trait Catalog {
    /// Загружает изображение и возвращает его идентификатор на стороне каталога.
    fn upload_image(&self, path: &Path) -> Result<UploadedAsset, UploadError>;

    /// Создаёт товар и возвращает его идентификатор.
    fn create_product(
        &self,
        shop_id: ShopId,
        draft: ProductDraft<'_>,
    ) -> Result<String, CreateProductError>;
}

#[derive(thiserror::Error, Debug)]
pub enum UploadError {
    #[error("read {file_name}: {source}")]
    ReadFile {
        file_name: String,
        source: io::Error,
    },

    #[error("upload {file_name}: {source}")]
    Api {
        file_name: String,
        source: api::Error,
    },
}

#[derive(thiserror::Error, Debug)]
#[error("create {title}: {source}")]
pub struct CreateProductError {
    pub title: String,
    pub source: api::Error,
}

/// Итог обработки всех изображений.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Сколько товаров создано.
    pub created: usize,

    /// Сколько изображений не удалось загрузить.
    pub failed_uploads: usize,

    /// Сколько товаров не удалось создать.
    pub failed_products: usize,
}

/// Создаёт товары по всем шаблонам для каждого изображения.
///
/// Ошибка на одном изображении или одном товаре не останавливает обработку
/// остальных. Если изображение не удалось загрузить, товары для него не
/// создаются.
pub fn run<C: Catalog>(
    catalog: &C,
    shop_id: ShopId,
    images: &[PathBuf],
    templates: &[ProductTemplate],
) -> Summary {
    let mut summary = Summary::default();

    for path in images {
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let album_name = display_name(&stem);

        println!("\nProcessing: {}", album_name);

        let asset = match catalog.upload_image(path) {
            Ok(asset) => {
                println!(
                    "  ✓ Uploaded: {} -> ID: {}",
                    asset.source_filename, asset.remote_id
                );
                asset
            }
            Err(e) => {
                warn!("Пропускаем {:?}: {}", path, e);
                println!("  ✗ Failed to {}", e);
                summary.failed_uploads += 1;
                continue;
            }
        };

        for template in templates {
            let draft = ProductDraft {
                display_name: &album_name,
                asset: &asset,
                template,
            };

            debug!("Создаём товар {:?}", draft.title());
            match catalog.create_product(shop_id, draft) {
                Ok(id) => {
                    println!("  ✓ Created: {} (ID: {})", draft.title(), id);
                    summary.created += 1;
                }
                Err(e) => {
                    warn!("Товар не создан: {}", e);
                    println!("  ✗ Failed to {}", e);
                    summary.failed_products += 1;
                }
            }
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use reqwest::StatusCode;

    use super::*;
    use crate::model::default_templates;

    /// Каталог который ничего не отправляет, а только запоминает вызовы.
    #[derive(Default)]
    struct RecordingCatalog {
        fail_upload_for: Vec<&'static str>,
        fail_product_for: Vec<&'static str>,
        uploads: RefCell<Vec<String>>,
        products: RefCell<Vec<(ShopId, String, String)>>,
    }

    fn status_error() -> api::Error {
        api::Error::Status {
            status: StatusCode::BAD_REQUEST,
            body: "nope".into(),
        }
    }

    impl Catalog for RecordingCatalog {
        fn upload_image(&self, path: &Path) -> Result<UploadedAsset, UploadError> {
            let file_name = path.file_name().unwrap().to_string_lossy().into_owned();
            self.uploads.borrow_mut().push(file_name.clone());

            if self.fail_upload_for.contains(&file_name.as_str()) {
                return Err(UploadError::Api {
                    file_name,
                    source: status_error(),
                });
            }

            Ok(UploadedAsset {
                remote_id: format!("id-{}", file_name),
                source_filename: file_name,
            })
        }

        fn create_product(
            &self,
            shop_id: ShopId,
            draft: ProductDraft<'_>,
        ) -> Result<String, CreateProductError> {
            let title = draft.title();
            self.products
                .borrow_mut()
                .push((shop_id, title.clone(), draft.asset.remote_id.clone()));

            if self.fail_product_for.contains(&title.as_str()) {
                return Err(CreateProductError {
                    title,
                    source: status_error(),
                });
            }

            Ok(format!("product-{}", self.products.borrow().len()))
        }
    }

    fn images(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(|n| PathBuf::from("covers").join(n)).collect()
    }

    #[test]
    fn creates_every_template_for_every_image() {
        let catalog = RecordingCatalog::default();
        let templates = default_templates();
        let images = images(&["one.png", "two_b.jpg", "three-c.webp"]);

        let summary = run(&catalog, 7, &images, &templates);

        assert_eq!(3, catalog.uploads.borrow().len());
        assert_eq!(12, catalog.products.borrow().len());
        assert_eq!(
            Summary {
                created: 12,
                failed_uploads: 0,
                failed_products: 0
            },
            summary
        );
        assert!(catalog.products.borrow().iter().all(|(shop, _, _)| *shop == 7));
    }

    #[test]
    fn failed_upload_skips_only_that_image() {
        let catalog = RecordingCatalog {
            fail_upload_for: vec!["broken.png"],
            ..Default::default()
        };
        let templates = default_templates();
        let images = images(&["broken.png", "fine_one.png"]);

        let summary = run(&catalog, 1, &images, &templates);

        assert_eq!(2, catalog.uploads.borrow().len());
        let products = catalog.products.borrow();
        assert_eq!(templates.len(), products.len());
        assert!(products.iter().all(|(_, title, asset)| {
            title.starts_with("Fine One - ") && asset == "id-fine_one.png"
        }));
        assert_eq!(1, summary.failed_uploads);
        assert_eq!(templates.len(), summary.created);
    }

    #[test]
    fn failed_product_does_not_stop_the_rest() {
        let catalog = RecordingCatalog {
            fail_product_for: vec!["A - Hoodie"],
            ..Default::default()
        };
        let templates = default_templates();
        let images = images(&["a.png", "b.png"]);

        let summary = run(&catalog, 1, &images, &templates);

        assert_eq!(8, catalog.products.borrow().len());
        assert_eq!(7, summary.created);
        assert_eq!(1, summary.failed_products);
    }

    #[test]
    fn no_templates_means_uploads_only() {
        let catalog = RecordingCatalog::default();

        let summary = run(&catalog, 1, &images(&["a.png"]), &[]);

        assert_eq!(1, catalog.uploads.borrow().len());
        assert!(catalog.products.borrow().is_empty());
        assert_eq!(Summary::default(), summary);
    }
}
