//! # Seeded Defaults
//!
//! The content the storefront ships with: the default layout and the
//! starter catalog. Used on first launch (when a slice has never been
//! persisted) and by the `seed` binary in boladas-store.

use crate::catalog::Catalog;
use crate::money::Money;
use crate::types::{Category, Condition, HomeSection, LayoutSettings, Product};

impl Default for LayoutSettings {
    fn default() -> Self {
        LayoutSettings {
            primary_color: "#1e293b".to_string(),
            background_color: "#ffffff".to_string(),
            brand_name: "SÓ BOLADAS".to_string(),
            banner_text: "🇲🇿 Qualidade e Confiança em Eletrônicos Usados | Entregas em toda Maputo e Províncias".to_string(),
            banner_font_size: 10,
            hero_image: "https://images.unsplash.com/photo-1550009158-9ebf69173e03?auto=format&fit=crop&q=80&w=1200".to_string(),
            hero_badge: "Outlet Premium Moçambique".to_string(),
            hero_title: "Eletrônicos Selecionados de Elite.".to_string(),
            hero_title_size: 64,
            hero_subtitle: "Curadoria técnica rigorosa em Maputo. Aparelhos revisados e garantidos com o melhor preço do mercado.".to_string(),
            hero_subtitle_size: 18,
            header_bg_image: String::new(),
            font_family: "Inter".to_string(),
            whatsapp_number: "258840000000".to_string(),
            show_ai_tips: true,
            home_sections: vec![
                HomeSection {
                    id: "sec_1".to_string(),
                    title: "Smartphones de Elite".to_string(),
                    subtitle: "Aparelhos selecionados com bateria acima de 85% e garantia de 3 meses.".to_string(),
                    image_url: "https://images.unsplash.com/photo-1556656793-062ff987b50d?auto=format&fit=crop&q=80&w=800".to_string(),
                    button_text: "Ver Smartphones".to_string(),
                },
                HomeSection {
                    id: "sec_2".to_string(),
                    title: "Laptops para Produtividade".to_string(),
                    subtitle: "Encontre MacBooks e ThinkPads em estado impecável para o seu trabalho ou estudo.".to_string(),
                    image_url: "https://images.unsplash.com/photo-1517336714731-489689fd1ca8?auto=format&fit=crop&q=80&w=800".to_string(),
                    button_text: "Explorar Laptops".to_string(),
                },
            ],
        }
    }
}

/// The starter catalog shown before an admin lists anything.
pub fn default_catalog() -> Catalog {
    Catalog::new(vec![
        Product {
            id: "1".to_string(),
            name: "iPhone 13 Pro 128GB - Grafite".to_string(),
            description: "Estado de novo, saúde da bateria 92%. Testado tecnicamente.".to_string(),
            price_centavos: Money::from_meticais(45_000).centavos(),
            original_price_centavos: Money::from_meticais(52_000).centavos(),
            category: Category::Smartphones,
            condition: Condition::Excellent,
            images: vec![
                "https://images.unsplash.com/photo-1632661674596-df8be070a5c5?auto=format&fit=crop&q=80&w=600".to_string(),
                "https://images.unsplash.com/photo-1510557880182-3d4d3cba35a5?auto=format&fit=crop&q=80&w=600".to_string(),
            ],
            rating: 4.8,
            reviews_count: 124,
        },
        Product {
            id: "2".to_string(),
            name: "MacBook Air M1 2020".to_string(),
            description: "8GB RAM, 256GB SSD. Performance incrível para trabalho.".to_string(),
            price_centavos: Money::from_meticais(65_000).centavos(),
            original_price_centavos: Money::from_meticais(75_000).centavos(),
            category: Category::Laptops,
            condition: Condition::Excellent,
            images: vec![
                "https://images.unsplash.com/photo-1611186871348-b1ce696e52c9?auto=format&fit=crop&q=80&w=600".to_string(),
                "https://images.unsplash.com/photo-1517336714731-489689fd1ca8?auto=format&fit=crop&q=80&w=600".to_string(),
            ],
            rating: 4.9,
            reviews_count: 45,
        },
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CategoryFilter;

    #[test]
    fn test_default_catalog_ids_are_unique() {
        let catalog = default_catalog();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.get("1").is_some());
        assert!(catalog.get("2").is_some());
    }

    #[test]
    fn test_default_layout_has_home_sections() {
        let layout = LayoutSettings::default();
        assert_eq!(layout.home_sections.len(), 2);
        assert_eq!(layout.brand_name, "SÓ BOLADAS");
        assert!(layout.show_ai_tips);
    }

    #[test]
    fn test_partial_stored_layout_merges_over_defaults() {
        // The spread-merge of the reference: stored fields win, missing
        // fields come from the shipped defaults.
        let layout: LayoutSettings =
            serde_json::from_str(r#"{"brandName": "OUTRA LOJA", "showAiTips": false}"#).unwrap();

        assert_eq!(layout.brand_name, "OUTRA LOJA");
        assert!(!layout.show_ai_tips);
        assert_eq!(layout.whatsapp_number, "258840000000");
        assert_eq!(layout.home_sections.len(), 2);
    }

    #[test]
    fn test_default_catalog_is_browsable() {
        let catalog = default_catalog();
        let phones = catalog.filtered("", &CategoryFilter::Only(Category::Smartphones));
        assert_eq!(phones.len(), 1);
        assert_eq!(phones[0].name, "iPhone 13 Pro 128GB - Grafite");
    }
}
