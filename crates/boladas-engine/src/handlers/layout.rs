//! # Layout Handlers
//!
//! The singleton layout/theming configuration. The admin edits a working
//! copy in the panel and saves it wholesale; home sections are created,
//! deleted and reordered through the same replacement.

use tracing::info;

use boladas_core::LayoutSettings;

use crate::engine::Engine;
use crate::error::EngineResult;

impl Engine {
    /// The current layout configuration.
    pub fn layout(&self) -> LayoutSettings {
        self.layout.snapshot()
    }

    /// Replaces the layout wholesale (admin only).
    pub async fn update_layout(&self, layout: LayoutSettings) -> EngineResult<LayoutSettings> {
        self.require_admin()?;

        let sections = layout.home_sections.len();
        self.layout.with_mut(|l| *l = layout.clone());
        self.persist_layout().await?;

        info!(brand = %layout.brand_name, home_sections = sections, "Layout updated");
        Ok(layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_support::*;
    use crate::error::ErrorCode;
    use boladas_core::HomeSection;

    #[tokio::test]
    async fn test_update_layout_requires_admin() {
        let engine = test_engine().await;

        let err = engine.update_layout(LayoutSettings::default()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::Forbidden);
    }

    #[tokio::test]
    async fn test_wholesale_replacement_persists() {
        let engine = test_engine().await;
        login_as_admin(&engine).await;

        let mut layout = engine.layout();
        layout.brand_name = "SÓ BOLADAS PREMIUM".to_string();
        layout.home_sections.push(HomeSection {
            id: "sec_3".to_string(),
            title: "Consolas".to_string(),
            subtitle: "PS5 e Xbox Series revisadas.".to_string(),
            image_url: "https://example.com/consoles.jpg".to_string(),
            button_text: "Ver Agora".to_string(),
        });
        engine.update_layout(layout).await.unwrap();

        let reopened = reopen(&engine).await;
        let restored = reopened.layout();
        assert_eq!(restored.brand_name, "SÓ BOLADAS PREMIUM");
        assert_eq!(restored.home_sections.len(), 3);
        assert_eq!(restored.home_sections[2].id, "sec_3");
    }

    #[tokio::test]
    async fn test_section_removal_via_replacement() {
        let engine = test_engine().await;
        login_as_admin(&engine).await;

        let mut layout = engine.layout();
        layout.home_sections.retain(|s| s.id != "sec_1");
        engine.update_layout(layout).await.unwrap();

        assert_eq!(engine.layout().home_sections.len(), 1);
        assert_eq!(engine.layout().home_sections[0].id, "sec_2");
    }
}
