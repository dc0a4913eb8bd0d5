//! Section identifiers and their canonical display order.

use super::catalog::{Catalog, CatalogId};

pub type SectionId = CatalogId<SectionKind>;

/// Every section the template registry knows how to draw, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionKind {
    Navbar,
    Hero,
    About,
    Skills,
    Experience,
    Education,
    Projects,
    Testimonials,
    Awards,
    Blog,
    Gallery,
    Contact,
    Footer,
}

impl SectionKind {
    /// Position in the canonical page order; lower draws first.
    pub fn priority(self) -> usize {
        match self {
            SectionKind::Navbar => 0,
            SectionKind::Hero => 1,
            SectionKind::About => 2,
            SectionKind::Skills => 3,
            SectionKind::Experience => 4,
            SectionKind::Education => 5,
            SectionKind::Projects => 6,
            SectionKind::Testimonials => 7,
            SectionKind::Awards => 8,
            SectionKind::Blog => 9,
            SectionKind::Gallery => 10,
            SectionKind::Contact => 11,
            SectionKind::Footer => 12,
        }
    }
}

impl Catalog for SectionKind {
    const ALL: &'static [Self] = &[
        SectionKind::Navbar,
        SectionKind::Hero,
        SectionKind::About,
        SectionKind::Skills,
        SectionKind::Experience,
        SectionKind::Education,
        SectionKind::Projects,
        SectionKind::Testimonials,
        SectionKind::Awards,
        SectionKind::Blog,
        SectionKind::Gallery,
        SectionKind::Contact,
        SectionKind::Footer,
    ];

    fn as_str(self) -> &'static str {
        match self {
            SectionKind::Navbar => "navbar",
            SectionKind::Hero => "hero",
            SectionKind::About => "about",
            SectionKind::Skills => "skills",
            SectionKind::Experience => "experience",
            SectionKind::Education => "education",
            SectionKind::Projects => "projects",
            SectionKind::Testimonials => "testimonials",
            SectionKind::Awards => "awards",
            SectionKind::Blog => "blog",
            SectionKind::Gallery => "gallery",
            SectionKind::Contact => "contact",
            SectionKind::Footer => "footer",
        }
    }
}
