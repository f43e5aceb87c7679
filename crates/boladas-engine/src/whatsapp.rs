//! # WhatsApp Handoff
//!
//! The messaging boundary: the engine composes a prefilled order message
//! and a `wa.me` link; an external opener owns delivery. The engine has no
//! visibility into whether the message was ever sent.

use serde::Serialize;
use url::Url;

use boladas_core::{CartItem, Money, User};

use crate::error::{EngineError, EngineResult};

/// A prepared handoff: destination, plain message, and the ready-to-open
/// link with the message query-encoded.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WhatsAppHandoff {
    pub number: String,
    pub message: String,
    pub url: String,
}

/// Composes the checkout message: customer name, contact, one line per
/// item, and the bold total.
pub fn checkout_message(
    brand_name: &str,
    user: &User,
    items: &[CartItem],
    total: Money,
) -> String {
    let item_lines: Vec<String> = items
        .iter()
        .map(|item| {
            format!(
                "- {} ({}x) - MT {}",
                item.product.name,
                item.quantity,
                item.product.price().format_amount()
            )
        })
        .collect();

    format!(
        "Olá! Gostaria de finalizar o pedido na {} (Moçambique):\n\n\
         Cliente: {}\n\
         Contacto: {}\n\n\
         Itens:\n{}\n\n\
         *Total: MT {}*\n\n\
         Como posso proceder com o pagamento?",
        brand_name,
        user.full_name,
        user.contact(),
        item_lines.join("\n"),
        total.format_amount()
    )
}

/// Builds the `wa.me` link with the message in the `text` query parameter.
pub fn handoff(number: &str, message: &str) -> EngineResult<WhatsAppHandoff> {
    let mut url = Url::parse(&format!("https://wa.me/{}", number))
        .map_err(|e| EngineError::validation(format!("Invalid WhatsApp number: {}", e)))?;
    url.query_pairs_mut().append_pair("text", message);

    Ok(WhatsAppHandoff {
        number: number.to_string(),
        message: message.to_string(),
        url: url.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use boladas_core::{Cart, Category, Condition, Product, Role, UserSettings};
    use chrono::Utc;

    fn buyer() -> User {
        User {
            id: "u-1".to_string(),
            full_name: "Beatriz Cossa".to_string(),
            email: "buyer@example.com".to_string(),
            phone: String::new(),
            password: None,
            role: Role::Customer,
            created_at: Utc::now(),
            orders: Vec::new(),
            settings: UserSettings::default(),
        }
    }

    fn cart_with_iphone() -> Cart {
        let product = Product {
            id: "1".to_string(),
            name: "iPhone 13 Pro".to_string(),
            description: String::new(),
            price_centavos: Money::from_meticais(45_000).centavos(),
            original_price_centavos: Money::from_meticais(52_000).centavos(),
            category: Category::Smartphones,
            condition: Condition::Excellent,
            images: vec!["img".to_string()],
            rating: 4.8,
            reviews_count: 124,
        };
        let mut cart = Cart::new();
        cart.add(&product);
        cart.add(&product);
        cart
    }

    #[test]
    fn test_message_layout() {
        let cart = cart_with_iphone();
        let message = checkout_message("SÓ BOLADAS", &buyer(), &cart.items, cart.subtotal());

        assert!(message.starts_with("Olá! Gostaria de finalizar o pedido na SÓ BOLADAS"));
        assert!(message.contains("Cliente: Beatriz Cossa"));
        // No phone registered: the e-mail is the contact.
        assert!(message.contains("Contacto: buyer@example.com"));
        assert!(message.contains("- iPhone 13 Pro (2x) - MT 45.000"));
        assert!(message.contains("*Total: MT 90.000*"));
        assert!(message.ends_with("Como posso proceder com o pagamento?"));
    }

    #[test]
    fn test_handoff_url_encodes_the_message() {
        let handoff = handoff("258840000000", "Olá! Total: MT 90.000").unwrap();

        assert!(handoff.url.starts_with("https://wa.me/258840000000?text="));
        // The raw message never leaks unencoded into the URL.
        assert!(!handoff.url.contains("Olá! Total"));
        assert_eq!(handoff.message, "Olá! Total: MT 90.000");
    }
}
