//! Section template registry: one askama template per section variant.

use askama::Template;

use super::{
    binding::{
        AboutData, AwardsData, BlogData, ContactData, EducationData, ExperienceData, FooterData,
        GalleryData, HeroData, NavbarData, PlaceholderData, ProjectsData, SectionData,
        SkillsData, TestimonialsData,
    },
    types::SectionFrame,
};

macro_rules! section_template {
    ($name:ident, $data:ty, $path:literal) => {
        #[derive(Template)]
        #[template(path = $path)]
        struct $name<'a> {
            frame: &'a SectionFrame,
            data: &'a $data,
        }
    };
}

section_template!(NavbarTemplate, NavbarData, "sections/navbar.html");
section_template!(HeroTemplate, HeroData, "sections/hero.html");
section_template!(AboutTemplate, AboutData, "sections/about.html");
section_template!(SkillsTemplate, SkillsData, "sections/skills.html");
section_template!(ExperienceTemplate, ExperienceData, "sections/experience.html");
section_template!(EducationTemplate, EducationData, "sections/education.html");
section_template!(ProjectsTemplate, ProjectsData, "sections/projects.html");
section_template!(TestimonialsTemplate, TestimonialsData, "sections/testimonials.html");
section_template!(AwardsTemplate, AwardsData, "sections/awards.html");
section_template!(BlogTemplate, BlogData, "sections/blog.html");
section_template!(GalleryTemplate, GalleryData, "sections/gallery.html");
section_template!(ContactTemplate, ContactData, "sections/contact.html");
section_template!(FooterTemplate, FooterData, "sections/footer.html");
section_template!(PlaceholderTemplate, PlaceholderData, "sections/placeholder.html");

/// Render one section fragment. Pure: output depends only on the arguments.
pub fn render_section(data: &SectionData, frame: &SectionFrame) -> Result<String, askama::Error> {
    match data {
        SectionData::Navbar(data) => NavbarTemplate { frame, data }.render(),
        SectionData::Hero(data) => HeroTemplate { frame, data }.render(),
        SectionData::About(data) => AboutTemplate { frame, data }.render(),
        SectionData::Skills(data) => SkillsTemplate { frame, data }.render(),
        SectionData::Experience(data) => ExperienceTemplate { frame, data }.render(),
        SectionData::Education(data) => EducationTemplate { frame, data }.render(),
        SectionData::Projects(data) => ProjectsTemplate { frame, data }.render(),
        SectionData::Testimonials(data) => TestimonialsTemplate { frame, data }.render(),
        SectionData::Awards(data) => AwardsTemplate { frame, data }.render(),
        SectionData::Blog(data) => BlogTemplate { frame, data }.render(),
        SectionData::Gallery(data) => GalleryTemplate { frame, data }.render(),
        SectionData::Contact(data) => ContactTemplate { frame, data }.render(),
        SectionData::Footer(data) => FooterTemplate { frame, data }.render(),
        SectionData::Placeholder(data) => PlaceholderTemplate { frame, data }.render(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        application::render::{animation::EntranceAnimation, binding::bind_content},
        domain::{
            animations::EntranceVisual, content::ContentBundle, sections::SectionId, theme::Theme,
        },
    };

    fn frame(index: usize) -> SectionFrame {
        let entrance = EntranceAnimation {
            visual: Some(EntranceVisual::ZoomIn),
            stagger: true,
        };
        SectionFrame::new(Theme::Dark.palette(), &entrance, index)
    }

    fn render(id: &str, content: Option<&ContentBundle>) -> String {
        let data = bind_content(&SectionId::from(id), content);
        render_section(&data, &frame(2)).expect("section renders")
    }

    #[test]
    fn fragments_carry_section_marker_class_and_delay() {
        let html = render("contact", None);
        assert!(html.starts_with(r#"<section id="contact" data-section="contact" class="zoom-in""#));
        assert!(html.contains("animation-delay: 0.2s;"));
        assert!(html.contains("#1a1a1a"));
    }

    #[test]
    fn user_text_is_escaped() {
        let content: ContentBundle = serde_json::from_str(
            r#"{"personalInfo":{"name":"<script>alert(1)</script>","tagline":"R&D"}}"#,
        )
        .expect("valid bundle");
        let html = render("hero", Some(&content));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("R&amp;D"));
    }

    #[test]
    fn placeholder_names_the_unknown_section() {
        let html = render("podcast", None);
        assert!(html.contains(">Podcast</h2>"));
        assert!(html.contains(r#"data-section="podcast""#));
    }

    #[test]
    fn every_known_section_renders_its_marker() {
        use crate::domain::{catalog::Catalog, sections::SectionKind};

        for kind in SectionKind::ALL {
            let html = render(kind.as_str(), None);
            let marker = format!(r#"data-section="{}""#, kind.as_str());
            assert!(html.contains(&marker), "{kind:?}");
        }
    }

    #[test]
    fn experience_timeline_alternates_sides() {
        let html = render("experience", None);
        let left = html.find("justify-content: flex-start").expect("left entry");
        let right = html.find("justify-content: flex-end").expect("right entry");
        assert!(left < right);
    }

    #[test]
    fn footer_lists_configured_social_links() {
        let html = render("footer", None);
        assert!(html.contains(r#"href="https://github.com/johndoe""#));
        assert!(html.contains(r#"href="mailto:john.doe@example.com""#));
        assert!(html.contains("© John Doe. All rights reserved."));
    }
}
