//! The declarative portfolio configuration the preview engine consumes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{
    animations::{Animation, AnimationId},
    content::ContentBundle,
    error::DomainError,
    sections::{SectionId, SectionKind},
    theme::{Theme, ThemeId},
    typography::{FontId, Typography},
};

/// `components` may hold duplicates and ids outside the registry; neither is
/// an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioConfig {
    pub theme: ThemeId,
    pub components: Vec<SectionId>,
    pub animations: Vec<AnimationId>,
    #[serde(default = "default_typography")]
    pub typography: FontId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<ContentBundle>,
    /// Editor state this crate does not interpret (layout, palette picks, publish flag).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_typography() -> FontId {
    Typography::Sans.into()
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Minimal.into(),
            components: [
                SectionKind::Navbar,
                SectionKind::Hero,
                SectionKind::About,
                SectionKind::Skills,
                SectionKind::Projects,
                SectionKind::Experience,
                SectionKind::Contact,
                SectionKind::Footer,
            ]
            .into_iter()
            .map(SectionId::from)
            .collect(),
            animations: vec![Animation::FadeIn.into(), Animation::SlideUp.into()],
            typography: default_typography(),
            content: Some(ContentBundle::builtin().clone()),
            extra: Map::new(),
        }
    }
}

impl PortfolioConfig {
    /// Parse a configuration document, rejecting anything that does not match
    /// the declared shape.
    pub fn from_json(raw: &str) -> Result<Self, DomainError> {
        serde_json::from_str(raw)
            .map_err(|err| DomainError::validation(format!("malformed configuration: {err}")))
    }

    pub fn from_value(value: Value) -> Result<Self, DomainError> {
        serde_json::from_value(value)
            .map_err(|err| DomainError::validation(format!("malformed configuration: {err}")))
    }

    /// Overlay the top-level keys of `patch` onto this configuration.
    ///
    /// Nested objects are replaced, not merged. The result is re-validated.
    pub fn merged_with(&self, patch: Value) -> Result<Self, DomainError> {
        let Value::Object(patch) = patch else {
            return Err(DomainError::validation(
                "configuration patch must be a JSON object",
            ));
        };

        let current = serde_json::to_value(self).map_err(|err| {
            DomainError::invariant(format!("configuration failed to serialize: {err}"))
        })?;
        let Value::Object(mut merged) = current else {
            return Err(DomainError::invariant(
                "configuration did not serialize to an object",
            ));
        };

        for (key, value) in patch {
            merged.insert(key, value);
        }

        Self::from_value(Value::Object(merged))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn unknown_ids_load_without_error() {
        let config = PortfolioConfig::from_json(
            r#"{"theme":"neon","components":["hero","timeline-3d"],"animations":["wobble"]}"#,
        )
        .expect("unknown ids are not structural errors");

        assert_eq!(config.theme.as_str(), "neon");
        assert_eq!(config.components[1], SectionId::Unknown("timeline-3d".into()));
        assert_eq!(config.typography.known(), Some(Typography::Sans));
    }

    #[test]
    fn wrong_shapes_are_rejected() {
        for raw in [
            r#"{"theme":"dark","components":"hero","animations":[]}"#,
            r#"{"theme":1,"components":[],"animations":[]}"#,
            r#"{"components":[],"animations":[]}"#,
            r#"["theme"]"#,
        ] {
            let err = PortfolioConfig::from_json(raw).expect_err(raw);
            assert!(matches!(err, DomainError::Validation { .. }), "{raw}");
        }
    }

    #[test]
    fn merge_replaces_top_level_keys_only() {
        let base = PortfolioConfig::default();
        let merged = base
            .merged_with(json!({ "theme": "dark", "layout": "grid" }))
            .expect("valid patch");

        assert_eq!(merged.theme.known(), Some(Theme::Dark));
        assert_eq!(merged.components, base.components);
        assert_eq!(merged.extra.get("layout"), Some(&json!("grid")));
    }

    #[test]
    fn merge_rejects_patches_that_break_the_shape() {
        let base = PortfolioConfig::default();
        assert!(base.merged_with(json!({ "components": 3 })).is_err());
        assert!(base.merged_with(json!(["theme"])).is_err());
    }

    #[test]
    fn default_configuration_round_trips() {
        let config = PortfolioConfig::default();
        let json = serde_json::to_string(&config).expect("serialize");
        assert_eq!(PortfolioConfig::from_json(&json).expect("parse"), config);
    }
}
