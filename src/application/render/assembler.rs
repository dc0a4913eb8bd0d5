use askama::Template;
use tracing::debug;

use crate::domain::{
    portfolio::PortfolioConfig,
    theme::{Palette, resolve_theme},
    typography::resolve_font_stack,
};

use super::{
    animation::resolve_entrance_animation,
    binding::bind_content,
    ordering::order_sections,
    templates::render_section,
    types::{RenderError, RenderedDocument, SectionFrame},
};

const DOCUMENT_TITLE: &str = "Portfolio Preview";
const SOURCE_TITLE: &str = "Portfolio Source";

#[derive(Template)]
#[template(path = "preview/document.html")]
struct DocumentTemplate<'a> {
    title: &'a str,
    font_stack: &'a str,
    palette: &'a Palette,
    surface: &'a str,
    entrance_css: &'a str,
    fragments: &'a [String],
}

#[derive(Template)]
#[template(path = "preview/source.html")]
struct SourceViewTemplate<'a> {
    title: &'a str,
    listing: &'a str,
}

/// Render a configuration into its visual document and source listing.
///
/// Theme, order and entrance animation are resolved once per call. Every
/// occurrence in `components` yields exactly one fragment, duplicates included.
pub fn assemble(config: &PortfolioConfig) -> Result<RenderedDocument, RenderError> {
    let palette = resolve_theme(&config.theme);
    let ordered = order_sections(&config.components);
    let entrance = resolve_entrance_animation(&config.animations);
    let content = config.content.as_ref();

    let fragments = ordered
        .iter()
        .enumerate()
        .map(|(index, section)| {
            let frame = SectionFrame::new(palette, &entrance, index);
            let data = bind_content(section, content);
            render_section(&data, &frame).map_err(|source| RenderError::Section {
                section: section.as_str().to_string(),
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let visual = DocumentTemplate {
        title: DOCUMENT_TITLE,
        font_stack: resolve_font_stack(&config.typography),
        palette,
        surface: palette.surface(),
        entrance_css: entrance.stylesheet(),
        fragments: &fragments,
    }
    .render()
    .map_err(RenderError::Document)?;

    debug!(
        target: "vitrine::render",
        theme = %config.theme,
        sections = fragments.len(),
        bytes = visual.len(),
        "document assembled"
    );

    let source = escape_markup(&visual);
    Ok(RenderedDocument { visual, source })
}

/// Escape angle brackets so markup displays as text. Nothing else changes.
pub fn escape_markup(markup: &str) -> String {
    let mut escaped = String::with_capacity(markup.len() + markup.len() / 8);
    for ch in markup.chars() {
        match ch {
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Code-view page showing the visual document byte for byte.
///
/// The page escapes the full markup itself, so entities already present in the
/// document stay visible as written.
pub fn source_view_page(document: &RenderedDocument) -> Result<String, RenderError> {
    SourceViewTemplate {
        title: SOURCE_TITLE,
        listing: &document.visual,
    }
    .render()
    .map_err(RenderError::SourceView)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn config(value: serde_json::Value) -> PortfolioConfig {
        PortfolioConfig::from_value(value).expect("valid config")
    }

    fn positions(html: &str, markers: &[&str]) -> Vec<usize> {
        markers
            .iter()
            .map(|id| {
                html.find(&format!(r#"data-section="{id}""#))
                    .unwrap_or_else(|| panic!("missing {id}"))
            })
            .collect()
    }

    #[test]
    fn sections_render_in_canonical_order() {
        let doc = assemble(&config(json!({
            "theme": "dark",
            "components": ["footer", "hero", "navbar"],
            "animations": ["fade-in"],
        })))
        .expect("renders");

        let at = positions(&doc.visual, &["navbar", "hero", "footer"]);
        assert!(at[0] < at[1] && at[1] < at[2]);
        assert!(doc.visual.contains("background: #1a1a1a"));
        assert_eq!(doc.visual.matches("@keyframes").count(), 1);
    }

    #[test]
    fn duplicates_render_once_per_occurrence() {
        let doc = assemble(&config(json!({
            "theme": "minimal",
            "components": ["hero", "hero"],
            "animations": [],
        })))
        .expect("renders");

        assert_eq!(doc.visual.matches(r#"data-section="hero""#).count(), 2);
        assert!(!doc.visual.contains("@keyframes"));
    }

    #[test]
    fn empty_component_list_yields_a_bare_shell() {
        let doc = assemble(&config(json!({
            "theme": "minimal",
            "components": [],
            "animations": ["fade-in"],
        })))
        .expect("renders");

        assert!(doc.visual.starts_with("<!DOCTYPE html>"));
        assert!(!doc.visual.contains("data-section="));
    }

    #[test]
    fn stagger_delays_follow_render_order() {
        let doc = assemble(&config(json!({
            "theme": "minimal",
            "components": ["contact", "navbar"],
            "animations": ["staggered-reveal", "slide-up"],
        })))
        .expect("renders");

        let navbar = doc.visual.find(r#"data-section="navbar""#).expect("navbar");
        let contact = doc.visual.find(r#"data-section="contact""#).expect("contact");
        let first_delay = doc.visual.find("animation-delay: 0.0s;").expect("first delay");
        let second_delay = doc.visual.find("animation-delay: 0.1s;").expect("second delay");
        assert!(navbar < first_delay && first_delay < contact && contact < second_delay);
    }

    #[test]
    fn source_differs_only_by_escaped_brackets() {
        let doc = assemble(&PortfolioConfig::default()).expect("renders");

        assert!(!doc.source.contains('<'));
        assert!(!doc.source.contains('>'));
        let restored = doc.source.replace("&lt;", "<").replace("&gt;", ">");
        assert_eq!(restored, doc.visual);
    }

    #[test]
    fn escape_markup_leaves_other_characters_alone() {
        assert_eq!(escape_markup(r#"<a href="x">&amp;</a>"#), r#"&lt;a href="x"&gt;&amp;&lt;/a&gt;"#);
    }

    #[test]
    fn source_view_page_embeds_the_listing() {
        let doc = RenderedDocument {
            visual: "<p>hi</p>".into(),
            source: escape_markup("<p>hi</p>"),
        };
        let page = source_view_page(&doc).expect("renders");
        assert!(page.contains(r#"<div class="code">&lt;p&gt;hi&lt;/p&gt;</div>"#));
        assert!(page.contains("<title>Portfolio Source</title>"));
    }

    #[test]
    fn source_view_page_keeps_existing_entities_visible() {
        let visual = "<p>R&amp;D</p>".to_string();
        let doc = RenderedDocument {
            source: escape_markup(&visual),
            visual,
        };
        let page = source_view_page(&doc).expect("renders");
        assert!(page.contains("&lt;p&gt;R&amp;amp;D&lt;/p&gt;"));
    }
}
