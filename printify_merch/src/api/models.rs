use serde::{Deserialize, Serialize};

use crate::model::ProductDraft;

#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
pub struct Shop {
    pub id: u64,
    pub title: String,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize)]
pub struct UploadImageRequest {
    pub file_name: String,
    /// Содержимое файла в base64.
    pub contents: String,
}

#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
pub struct UploadImageResponse {
    pub id: String,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize)]
pub struct CreateProductRequest {
    pub title: String,
    pub description: String,
    pub blueprint_id: u64,
    pub print_provider_id: u64,
    pub variants: Vec<VariantRequest>,
    pub print_areas: Vec<PrintAreaRequest>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize)]
pub struct VariantRequest {
    pub id: u64,
    /// Цена в центах.
    pub price: u32,
    pub is_enabled: bool,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize)]
pub struct PrintAreaRequest {
    pub variant_ids: Vec<u64>,
    pub placeholders: Vec<PlaceholderRequest>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize)]
pub struct PlaceholderRequest {
    pub position: String,
    pub images: Vec<PlacedImageRequest>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize)]
pub struct PlacedImageRequest {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub angle: i32,
}

impl From<ProductDraft<'_>> for CreateProductRequest {
    fn from(value: ProductDraft<'_>) -> Self {
        let template = value.template;
        let price = template.price_minor_units();

        Self {
            title: value.title(),
            description: format!(
                "Official A-RAM merch featuring the {} artwork.",
                value.display_name
            ),
            blueprint_id: template.blueprint_id,
            print_provider_id: template.print_provider_id,
            variants: template
                .variants
                .iter()
                .map(|&id| VariantRequest {
                    id,
                    price,
                    is_enabled: true,
                })
                .collect(),
            // Картинка всегда одна, по центру лицевой стороны, без масштаба и поворота.
            print_areas: vec![PrintAreaRequest {
                variant_ids: template.variants.clone(),
                placeholders: vec![PlaceholderRequest {
                    position: "front".to_owned(),
                    images: vec![PlacedImageRequest {
                        id: value.asset.remote_id.clone(),
                        x: 0.5,
                        y: 0.5,
                        scale: 1.0,
                        angle: 0,
                    }],
                }],
            }],
        }
    }
}

#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
pub struct CreateProductResponse {
    pub id: String,
}

#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
pub struct Blueprint {
    pub id: u64,
    pub title: String,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::model::{default_templates, UploadedAsset};

    fn asset() -> UploadedAsset {
        UploadedAsset {
            remote_id: "5e16d66791287a0006e522b2".into(),
            source_filename: "album_art-v2.png".into(),
        }
    }

    #[test]
    fn product_request_from_draft() {
        let asset = asset();
        let template = default_templates().remove(0);

        let req = CreateProductRequest::from(ProductDraft {
            display_name: "Album Art V2",
            asset: &asset,
            template: &template,
        });

        assert_eq!("Album Art V2 - Unisex T-Shirt", req.title);
        assert_eq!(
            "Official A-RAM merch featuring the Album Art V2 artwork.",
            req.description
        );
        assert_eq!(6, req.blueprint_id);
        assert_eq!(99, req.print_provider_id);
        assert_eq!(5, req.variants.len());
        assert!(req
            .variants
            .iter()
            .all(|v| v.is_enabled && v.price == template.price_minor_units()));
        assert_eq!(
            vec![12, 13, 14, 15, 16],
            req.variants.iter().map(|v| v.id).collect::<Vec<_>>()
        );
    }

    #[test]
    fn product_request_serializes_print_area() {
        let asset = asset();
        let template = default_templates().remove(2);

        let req = CreateProductRequest::from(ProductDraft {
            display_name: "Doom",
            asset: &asset,
            template: &template,
        });

        let value = serde_json::to_value(&req).unwrap();

        assert_eq!(
            json!([{
                "variant_ids": [65139],
                "placeholders": [{
                    "position": "front",
                    "images": [{
                        "id": "5e16d66791287a0006e522b2",
                        "x": 0.5,
                        "y": 0.5,
                        "scale": 1.0,
                        "angle": 0
                    }]
                }]
            }]),
            value["print_areas"]
        );
        assert_eq!(
            json!([{"id": 65139, "price": 1499, "is_enabled": true}]),
            value["variants"]
        );
    }

    #[test]
    fn shop_list_deserializes() {
        let body = r#"[{"id": 5432, "title": "A-RAM", "sales_channel": "custom_integration"}]"#;

        let shops: Vec<Shop> = serde_json::from_str(body).unwrap();

        assert_eq!(5432, shops[0].id);
        assert_eq!("A-RAM", shops[0].title);
    }
}
