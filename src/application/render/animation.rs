use crate::domain::animations::{Animation, AnimationId, EntranceVisual};

/// Delay added per ordered section when staggering is on.
pub const STAGGER_STEP_MS: u64 = 100;
/// Later sections share this delay instead of growing further.
pub const STAGGER_CAP_MS: u64 = 1_200;

/// The single entrance effect for one render, plus whether sections stagger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EntranceAnimation {
    pub visual: Option<EntranceVisual>,
    pub stagger: bool,
}

impl EntranceAnimation {
    /// Class applied to every section root; empty when no entrance applies.
    pub fn class_name(&self) -> &'static str {
        self.visual.map_or("", EntranceVisual::class_name)
    }

    /// Stylesheet for the active visual only.
    pub fn stylesheet(&self) -> &'static str {
        self.visual.map_or("", EntranceVisual::stylesheet)
    }

    /// Inline style for the section drawn at `index`.
    pub fn delay_rule(&self, index: usize) -> String {
        if !self.stagger {
            return String::new();
        }
        let step = u64::try_from(index).unwrap_or(u64::MAX);
        let millis = step.saturating_mul(STAGGER_STEP_MS).min(STAGGER_CAP_MS);
        format!("animation-delay: {}.{}s;", millis / 1_000, (millis % 1_000) / 100)
    }
}

/// Pick the entrance visual from the first id in `animations` that has one.
///
/// The scan follows the list's own order, so exactly one visual is active.
pub fn resolve_entrance_animation(animations: &[AnimationId]) -> EntranceAnimation {
    let visual = animations
        .iter()
        .find_map(|id| id.known().and_then(Animation::entrance_visual));
    let stagger = animations
        .iter()
        .any(|id| id.known() == Some(Animation::StaggeredReveal));

    EntranceAnimation { visual, stagger }
}
