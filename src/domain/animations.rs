//! Animation identifiers and the entrance visuals they stand for.

use super::catalog::{Catalog, CatalogId};

pub type AnimationId = CatalogId<Animation>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationCategory {
    Entrance,
    Hover,
    Transition,
    Micro,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Animation {
    FadeIn,
    SlideUp,
    SlideLeft,
    SlideRight,
    ZoomIn,
    RotateIn,
    BounceIn,
    ScaleUp,
    ScaleDown,
    Glow,
    ShadowPop,
    Tilt,
    Parallax,
    SmoothFade,
    SlideTransition,
    CardFlip,
    StaggeredReveal,
    ButtonRipple,
    IconBounce,
    Typewriter,
    ProgressBar,
}

impl Animation {
    pub fn category(self) -> AnimationCategory {
        match self {
            Animation::FadeIn
            | Animation::SlideUp
            | Animation::SlideLeft
            | Animation::SlideRight
            | Animation::ZoomIn
            | Animation::RotateIn
            | Animation::BounceIn => AnimationCategory::Entrance,
            Animation::ScaleUp
            | Animation::ScaleDown
            | Animation::Glow
            | Animation::ShadowPop
            | Animation::Tilt
            | Animation::Parallax => AnimationCategory::Hover,
            Animation::SmoothFade
            | Animation::SlideTransition
            | Animation::CardFlip
            | Animation::StaggeredReveal => AnimationCategory::Transition,
            Animation::ButtonRipple
            | Animation::IconBounce
            | Animation::Typewriter
            | Animation::ProgressBar => AnimationCategory::Micro,
        }
    }

    /// The entrance visual this id selects when it appears in a configuration.
    ///
    /// Hover ids double as stand-ins for the closest entrance visual; transition
    /// and micro-interaction ids never select one.
    pub fn entrance_visual(self) -> Option<EntranceVisual> {
        match self {
            Animation::FadeIn | Animation::ScaleDown | Animation::Glow => {
                Some(EntranceVisual::FadeIn)
            }
            Animation::SlideUp | Animation::Parallax => Some(EntranceVisual::SlideUp),
            Animation::SlideLeft => Some(EntranceVisual::SlideLeft),
            Animation::SlideRight => Some(EntranceVisual::SlideRight),
            Animation::ZoomIn | Animation::ScaleUp | Animation::ShadowPop => {
                Some(EntranceVisual::ZoomIn)
            }
            Animation::RotateIn | Animation::Tilt => Some(EntranceVisual::RotateIn),
            Animation::BounceIn => Some(EntranceVisual::BounceIn),
            Animation::SmoothFade
            | Animation::SlideTransition
            | Animation::CardFlip
            | Animation::StaggeredReveal
            | Animation::ButtonRipple
            | Animation::IconBounce
            | Animation::Typewriter
            | Animation::ProgressBar => None,
        }
    }
}

impl Catalog for Animation {
    const ALL: &'static [Self] = &[
        Animation::FadeIn,
        Animation::SlideUp,
        Animation::SlideLeft,
        Animation::SlideRight,
        Animation::ZoomIn,
        Animation::RotateIn,
        Animation::BounceIn,
        Animation::ScaleUp,
        Animation::ScaleDown,
        Animation::Glow,
        Animation::ShadowPop,
        Animation::Tilt,
        Animation::Parallax,
        Animation::SmoothFade,
        Animation::SlideTransition,
        Animation::CardFlip,
        Animation::StaggeredReveal,
        Animation::ButtonRipple,
        Animation::IconBounce,
        Animation::Typewriter,
        Animation::ProgressBar,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Animation::FadeIn => "fade-in",
            Animation::SlideUp => "slide-up",
            Animation::SlideLeft => "slide-left",
            Animation::SlideRight => "slide-right",
            Animation::ZoomIn => "zoom-in",
            Animation::RotateIn => "rotate-in",
            Animation::BounceIn => "bounce-in",
            Animation::ScaleUp => "scale-up",
            Animation::ScaleDown => "scale-down",
            Animation::Glow => "glow",
            Animation::ShadowPop => "shadow-pop",
            Animation::Tilt => "tilt",
            Animation::Parallax => "parallax",
            Animation::SmoothFade => "smooth-fade",
            Animation::SlideTransition => "slide-transition",
            Animation::CardFlip => "card-flip",
            Animation::StaggeredReveal => "staggered-reveal",
            Animation::ButtonRipple => "button-ripple",
            Animation::IconBounce => "icon-bounce",
            Animation::Typewriter => "typewriter",
            Animation::ProgressBar => "progress-bar",
        }
    }
}

/// The small vocabulary of entrance effects the document stylesheet can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntranceVisual {
    FadeIn,
    SlideUp,
    SlideLeft,
    SlideRight,
    ZoomIn,
    RotateIn,
    BounceIn,
}

impl EntranceVisual {
    pub fn class_name(self) -> &'static str {
        match self {
            EntranceVisual::FadeIn => "fade-in",
            EntranceVisual::SlideUp => "slide-up",
            EntranceVisual::SlideLeft => "slide-left",
            EntranceVisual::SlideRight => "slide-right",
            EntranceVisual::ZoomIn => "zoom-in",
            EntranceVisual::RotateIn => "rotate-in",
            EntranceVisual::BounceIn => "bounce-in",
        }
    }

    /// Class rule plus its `@keyframes` block.
    pub fn stylesheet(self) -> &'static str {
        match self {
            EntranceVisual::FadeIn => concat!(
                ".fade-in { animation: fadeIn 0.8s ease-in-out both; }\n",
                "@keyframes fadeIn {\n",
                "  from { opacity: 0; transform: translateY(20px); }\n",
                "  to { opacity: 1; transform: translateY(0); }\n",
                "}\n",
            ),
            EntranceVisual::SlideUp => concat!(
                ".slide-up { animation: slideUp 0.6s ease-out both; }\n",
                "@keyframes slideUp {\n",
                "  from { transform: translateY(30px); opacity: 0; }\n",
                "  to { transform: translateY(0); opacity: 1; }\n",
                "}\n",
            ),
            EntranceVisual::SlideLeft => concat!(
                ".slide-left { animation: slideLeft 0.6s ease-out both; }\n",
                "@keyframes slideLeft {\n",
                "  from { transform: translateX(30px); opacity: 0; }\n",
                "  to { transform: translateX(0); opacity: 1; }\n",
                "}\n",
            ),
            EntranceVisual::SlideRight => concat!(
                ".slide-right { animation: slideRight 0.6s ease-out both; }\n",
                "@keyframes slideRight {\n",
                "  from { transform: translateX(-30px); opacity: 0; }\n",
                "  to { transform: translateX(0); opacity: 1; }\n",
                "}\n",
            ),
            EntranceVisual::ZoomIn => concat!(
                ".zoom-in { animation: zoomIn 0.6s ease-out both; }\n",
                "@keyframes zoomIn {\n",
                "  from { transform: scale(0.8); opacity: 0; }\n",
                "  to { transform: scale(1); opacity: 1; }\n",
                "}\n",
            ),
            EntranceVisual::RotateIn => concat!(
                ".rotate-in { animation: rotateIn 0.8s ease-out both; }\n",
                "@keyframes rotateIn {\n",
                "  from { transform: rotate(-10deg) scale(0.8); opacity: 0; }\n",
                "  to { transform: rotate(0deg) scale(1); opacity: 1; }\n",
                "}\n",
            ),
            EntranceVisual::BounceIn => concat!(
                ".bounce-in { animation: bounceIn 0.8s cubic-bezier(0.68, -0.55, 0.265, 1.55) both; }\n",
                "@keyframes bounceIn {\n",
                "  0% { transform: scale(0.3); opacity: 0; }\n",
                "  50% { transform: scale(1.05); opacity: 0.8; }\n",
                "  70% { transform: scale(0.9); opacity: 0.9; }\n",
                "  100% { transform: scale(1); opacity: 1; }\n",
                "}\n",
            ),
        }
    }
}
