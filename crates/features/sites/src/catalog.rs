//! Static catalog of page sections and visual themes.
//!
//! The catalog is advisory metadata for site builders; the provisioning core
//! stores whatever `style` and `initialContent` the caller sends without
//! checking membership here.

use serde::Serialize;
use utoipa::ToSchema;

/// A composable page section.
#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
pub struct Section {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Mandatory sections are always part of a generated site.
    pub mandatory: bool,
}

/// A visual theme preset.
#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
pub struct Theme {
    pub id: &'static str,
    pub name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<&'static str>,
}

pub const SECTIONS: &[Section] = &[
    Section { id: "header", name: "Header", description: "Navigation bar", mandatory: true },
    Section { id: "footer", name: "Footer", description: "Impressum and privacy", mandatory: true },
    Section { id: "hero", name: "Hero Section", description: "Full-width banner", mandatory: false },
    Section { id: "features", name: "Features", description: "Services showcase", mandatory: false },
    Section {
        id: "testimonials",
        name: "Testimonials",
        description: "Customer reviews",
        mandatory: false,
    },
    Section { id: "contact", name: "Contact Form", description: "Visitor contact", mandatory: false },
];

pub const THEMES: &[Theme] = &[
    Theme { id: "light", name: "Light Theme", image: None },
    Theme { id: "dark", name: "Dark Theme", image: None },
    Theme { id: "material", name: "Material Design", image: None },
    Theme { id: "minimal", name: "Minimalist", image: None },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_header_and_footer_are_mandatory() {
        let mandatory: Vec<_> =
            SECTIONS.iter().filter(|s| s.mandatory).map(|s| s.id).collect();
        assert_eq!(mandatory, ["header", "footer"]);
    }

    #[test]
    fn theme_without_image_omits_the_field() {
        let value = serde_json::to_value(THEMES[0]).unwrap();
        assert_eq!(value, serde_json::json!({ "id": "light", "name": "Light Theme" }));
    }
}
