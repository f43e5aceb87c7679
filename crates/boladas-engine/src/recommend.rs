//! # AI Recommendation Boundary
//!
//! A single best-effort text request to the Gemini `generateContent`
//! endpoint. No retry, no caching, no error surface: the absence of a tip
//! is a normal, non-error outcome, and a failed or disabled call can never
//! block or corrupt cart/session/catalog state.

use serde_json::Value;
use tracing::{debug, warn};

use boladas_core::CategoryFilter;

use crate::engine::Engine;

const GEMINI_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent";

/// Client for the recommendation service. Disabled when no API key is
/// configured.
#[derive(Debug, Clone)]
pub struct RecommendationClient {
    http: reqwest::Client,
    api_key: Option<String>,
}

impl RecommendationClient {
    /// Creates a client; `None` disables every call.
    pub fn new(api_key: Option<String>) -> Self {
        RecommendationClient {
            http: reqwest::Client::new(),
            api_key,
        }
    }

    /// Whether a key is configured.
    pub fn is_enabled(&self) -> bool {
        self.api_key.is_some()
    }

    /// Asks for a short shopping tip for a search query.
    ///
    /// Returns `None` when disabled, on any transport failure, or when the
    /// response carries no text. Failures are logged and swallowed.
    pub async fn shopping_tip(&self, brand_name: &str, query: &str) -> Option<String> {
        let api_key = self.api_key.as_deref()?;

        let prompt = format!(
            "O usuário está procurando por: \"{}\". Como um assistente de vendas da loja \
             \"{}\" (venda de eletrônicos usados), recomende brevemente que tipo de produto \
             ele deve focar e dê uma dica de economia.",
            query, brand_name
        );

        let body = serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });

        let response = self
            .http
            .post(GEMINI_API_URL)
            .query(&[("key", api_key)])
            .json(&body)
            .send()
            .await;

        let response = match response {
            Ok(r) => r,
            Err(e) => {
                warn!(error = %e, "Recommendation request failed; degrading to no tip");
                return None;
            }
        };

        if !response.status().is_success() {
            warn!(status = %response.status(), "Recommendation service returned an error status");
            return None;
        }

        let payload: Value = match response.json().await {
            Ok(v) => v,
            Err(e) => {
                warn!(error = %e, "Recommendation response was not valid JSON");
                return None;
            }
        };

        payload
            .pointer("/candidates/0/content/parts/0/text")
            .and_then(Value::as_str)
            .map(str::to_string)
    }
}

impl Engine {
    /// A best-effort shopping tip for the current search.
    ///
    /// Fire-and-forget from the state machine's perspective: gated by the
    /// layout's `show_ai_tips` flag, and `None` on any failure.
    pub async fn shopping_tip(&self, query: &str) -> Option<String> {
        let (enabled, brand_name) = self
            .layout
            .with(|l| (l.show_ai_tips, l.brand_name.clone()));

        if !enabled {
            debug!("AI tips disabled in layout settings");
            return None;
        }

        self.recommend.shopping_tip(&brand_name, query).await
    }

    /// Convenience used by the search view: a tip only makes sense when
    /// the catalog search came up short.
    pub async fn shopping_tip_for_empty_search(
        &self,
        query: &str,
        filter: &CategoryFilter,
    ) -> Option<String> {
        match self.search(query, filter) {
            Ok(hits) if hits.is_empty() => self.shopping_tip(query).await,
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_support::*;

    #[tokio::test]
    async fn test_disabled_client_returns_none_without_network() {
        let client = RecommendationClient::new(None);
        assert!(!client.is_enabled());
        assert!(client.shopping_tip("SÓ BOLADAS", "drone barato").await.is_none());
    }

    #[tokio::test]
    async fn test_engine_tip_is_gated_by_layout_flag() {
        let engine = test_engine().await;
        login_as_admin(&engine).await;

        let mut layout = engine.layout();
        layout.show_ai_tips = false;
        engine.update_layout(layout).await.unwrap();

        // Disabled flag short-circuits before any client work.
        assert!(engine.shopping_tip("drone barato").await.is_none());
    }

    #[tokio::test]
    async fn test_tip_for_successful_search_is_skipped() {
        let engine = test_engine().await;

        // "iphone" matches the default catalog, so no tip is requested.
        assert!(engine
            .shopping_tip_for_empty_search("iphone", &CategoryFilter::All)
            .await
            .is_none());
    }
}
