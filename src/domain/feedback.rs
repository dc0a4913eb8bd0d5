//! Editor feedback events and their reward scoring.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    pub event: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FeedbackEvent {
    pub fn named(event: impl Into<String>) -> Self {
        Self {
            timestamp: None,
            session_id: None,
            event: event.into(),
            details: None,
            extra: Map::new(),
        }
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Deterministic reward for this event: table value plus contextual bonuses.
    pub fn reward(&self) -> i32 {
        base_reward(&self.event) + self.details.as_ref().map_or(0, context_bonus)
    }
}

/// Table value for an event name; unrecognised events score zero.
pub fn base_reward(event: &str) -> i32 {
    match event {
        "like" => 5,
        "dislike" => -3,
        "keep_theme" => 1,
        "change_theme" => -1,
        "keep_layout" => 1,
        "change_layout" => -1,
        "publish" => 10,
        "abandon" => -10,
        "save_config" => 2,
        "edit" => -1,
        "add_component" => 2,
        "remove_component" => -1,
        "reorder_components" => 1,
        "add_animation" => 3,
        "remove_animation" => -1,
        "change_animation" => 1,
        "enable_hover_effects" => 2,
        "disable_hover_effects" => -1,
        "apply_liquid_design" => 4,
        "use_green_palette" => 3,
        "improve_contrast" => 5,
        "add_glass_effect" => 2,
        "use_gradients" => 2,
        "increase_accessibility" => 5,
        "improve_readability" => 4,
        "optimize_animations" => 3,
        "reduce_motion" => 2,
        "preview_desktop" | "preview_tablet" | "preview_mobile" => 1,
        "switch_view_mode" => 1,
        "use_rl_recommendation" => 3,
        "follow_ai_suggestion" => 4,
        "customize_beyond_suggestions" => 2,
        _ => 0,
    }
}

fn context_bonus(details: &Value) -> i32 {
    let mut bonus = 0;

    if details.get("theme").and_then(Value::as_str) == Some("minimal")
        && contains_str(details.get("animations"), "fade-in")
    {
        bonus += 1;
    }

    let components = details.get("config").and_then(|config| config.get("components"));
    if contains_str(components, "navbar") && contains_str(components, "hero") {
        bonus += 2;
    }

    if truthy(details.get("improvedContrast")) || truthy(details.get("betterReadability")) {
        bonus += 3;
    }

    bonus
}

fn contains_str(list: Option<&Value>, needle: &str) -> bool {
    list.and_then(Value::as_array)
        .is_some_and(|items| items.iter().any(|item| item.as_str() == Some(needle)))
}

fn truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(flag)) => *flag,
        Some(Value::Number(number)) => number.as_f64().is_some_and(|n| n != 0.0),
        Some(Value::String(text)) => !text.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn table_values_apply_without_details() {
        assert_eq!(FeedbackEvent::named("publish").reward(), 10);
        assert_eq!(FeedbackEvent::named("abandon").reward(), -10);
        assert_eq!(FeedbackEvent::named("preview_tablet").reward(), 1);
    }

    #[test]
    fn unknown_events_score_zero() {
        assert_eq!(FeedbackEvent::named("telepathy").reward(), 0);
    }

    #[test]
    fn minimal_theme_with_fade_in_earns_a_bonus() {
        let event = FeedbackEvent::named("keep_theme")
            .with_details(json!({ "theme": "minimal", "animations": ["slide-up", "fade-in"] }));
        assert_eq!(event.reward(), 2);
    }

    #[test]
    fn navbar_and_hero_together_earn_a_bonus() {
        let event = FeedbackEvent::named("save_config")
            .with_details(json!({ "config": { "components": ["hero", "navbar"] } }));
        assert_eq!(event.reward(), 4);

        let partial = FeedbackEvent::named("save_config")
            .with_details(json!({ "config": { "components": ["hero"] } }));
        assert_eq!(partial.reward(), 2);
    }

    #[test]
    fn readability_flags_stack_with_the_table_value() {
        let event = FeedbackEvent::named("improve_contrast")
            .with_details(json!({ "improvedContrast": true, "betterReadability": true }));
        assert_eq!(event.reward(), 8);

        let falsy = FeedbackEvent::named("improve_contrast")
            .with_details(json!({ "improvedContrast": false, "betterReadability": 0 }));
        assert_eq!(falsy.reward(), 5);
    }

    #[test]
    fn wire_shape_uses_camel_case() {
        let event: FeedbackEvent =
            serde_json::from_str(r#"{"event":"like","sessionId":"s-1","source":"toolbar"}"#)
                .expect("valid event");
        assert_eq!(event.session_id.as_deref(), Some("s-1"));
        assert_eq!(event.extra.get("source"), Some(&json!("toolbar")));
    }
}
