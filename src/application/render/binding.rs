//! Resolves the data each section template needs from the content bundle.
//!
//! Object fields fall back leaf by leaf to the built-in profile. Lists are
//! leaves themselves: a supplied list, even an empty one, replaces the sample.

use crate::domain::{
    content::{ContentBundle, SocialLinks},
    sections::{SectionId, SectionKind},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionData {
    Navbar(NavbarData),
    Hero(HeroData),
    About(AboutData),
    Skills(SkillsData),
    Experience(ExperienceData),
    Education(EducationData),
    Projects(ProjectsData),
    Testimonials(TestimonialsData),
    Awards(AwardsData),
    Blog(BlogData),
    Gallery(GalleryData),
    Contact(ContactData),
    Footer(FooterData),
    Placeholder(PlaceholderData),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialBadge {
    pub label: &'static str,
    pub title: &'static str,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavbarData {
    pub brand: String,
    pub links: Vec<NavLink>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroData {
    pub name: String,
    pub tagline: String,
    pub description: String,
    pub avatar: Option<String>,
    pub resume: Option<String>,
    pub socials: Vec<SocialBadge>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stat {
    pub value: String,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AboutData {
    pub initials: String,
    pub description: String,
    pub stats: Vec<Stat>,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillBar {
    pub name: String,
    pub level: u32,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillGroup {
    pub category: String,
    pub skills: Vec<SkillBar>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillsData {
    pub groups: Vec<SkillGroup>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineSide {
    Left,
    Right,
}

impl TimelineSide {
    /// Even positions sit left of the rail, odd positions right.
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            TimelineSide::Left
        } else {
            TimelineSide::Right
        }
    }

    pub fn justify(self) -> &'static str {
        match self {
            TimelineSide::Left => "flex-start",
            TimelineSide::Right => "flex-end",
        }
    }

    pub fn align(self) -> &'static str {
        match self {
            TimelineSide::Left => "right",
            TimelineSide::Right => "left",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineEntry {
    pub title: String,
    pub company: String,
    pub period: String,
    pub description: String,
    pub current: bool,
    pub justify: &'static str,
    pub align: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperienceData {
    pub entries: Vec<TimelineEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub period: String,
    pub description: Option<String>,
    pub gpa: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EducationData {
    pub entries: Vec<EducationEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCard {
    pub title: String,
    pub description: String,
    pub meta: String,
    pub technologies: Vec<String>,
    pub featured: bool,
    pub live: Option<String>,
    pub source: Option<String>,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectsData {
    pub cards: Vec<ProjectCard>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    pub text: String,
    pub author: String,
    pub byline: String,
    pub stars: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestimonialsData {
    pub quotes: Vec<Quote>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AwardCard {
    pub title: String,
    pub organization: String,
    pub year: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AwardsData {
    pub awards: Vec<AwardCard>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostCard {
    pub title: String,
    pub excerpt: String,
    pub category: String,
    pub date: String,
    pub read_time: String,
    pub href: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogData {
    pub posts: Vec<PostCard>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryTile {
    pub title: String,
    pub caption: Option<String>,
    pub image: Option<String>,
    pub glyph: &'static str,
    pub span: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryData {
    pub tiles: Vec<GalleryTile>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactData {
    pub email: String,
    pub mailto: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub availability: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterData {
    pub name: String,
    pub socials: Vec<SocialBadge>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderData {
    pub id: String,
    pub heading: String,
}

const NAV_LINKS: [NavLink; 4] = [
    NavLink {
        label: "Home",
        href: "#hero",
    },
    NavLink {
        label: "About",
        href: "#about",
    },
    NavLink {
        label: "Work",
        href: "#projects",
    },
    NavLink {
        label: "Contact",
        href: "#contact",
    },
];

struct Network {
    label: &'static str,
    title: &'static str,
    mail: bool,
    in_hero: bool,
}

impl Network {
    fn badge(&self, href: String) -> SocialBadge {
        SocialBadge {
            label: self.label,
            title: self.title,
            href,
        }
    }
}

const NETWORKS: [Network; 7] = [
    Network {
        label: "GH",
        title: "GitHub",
        mail: false,
        in_hero: true,
    },
    Network {
        label: "LI",
        title: "LinkedIn",
        mail: false,
        in_hero: true,
    },
    Network {
        label: "TW",
        title: "Twitter",
        mail: false,
        in_hero: false,
    },
    Network {
        label: "IG",
        title: "Instagram",
        mail: false,
        in_hero: false,
    },
    Network {
        label: "DR",
        title: "Dribbble",
        mail: false,
        in_hero: false,
    },
    Network {
        label: "BE",
        title: "Behance",
        mail: false,
        in_hero: false,
    },
    Network {
        label: "@",
        title: "Email",
        mail: true,
        in_hero: false,
    },
];
const EMAIL_SLOT: usize = 6;

const GALLERY_GLYPHS: [&str; 9] = ["🎨", "📱", "💻", "🖼️", "✏️", "📐", "🌅", "🧩", "📷"];
const ABOUT_TAG_LIMIT: usize = 8;
const MAX_RATING: f64 = 5.0;
const MAX_SKILL_LEVEL: f64 = 100.0;
const FALLBACK_SKILL_COLOR: &str = "currentColor";

/// Resolve the data for one section occurrence.
///
/// Ids outside the registry bind to a placeholder carrying the raw id.
pub fn bind_content(section: &SectionId, content: Option<&ContentBundle>) -> SectionData {
    let Some(kind) = section.known() else {
        return SectionData::Placeholder(placeholder(section.as_str()));
    };

    let source = Resolver {
        user: content.unwrap_or(ContentBundle::empty()),
        fallback: ContentBundle::builtin(),
    };

    match kind {
        SectionKind::Navbar => SectionData::Navbar(NavbarData {
            brand: source.name().to_string(),
            links: NAV_LINKS.to_vec(),
        }),
        SectionKind::Hero => SectionData::Hero(source.hero()),
        SectionKind::About => SectionData::About(source.about()),
        SectionKind::Skills => SectionData::Skills(source.skills()),
        SectionKind::Experience => SectionData::Experience(source.experience()),
        SectionKind::Education => SectionData::Education(source.education()),
        SectionKind::Projects => SectionData::Projects(source.projects()),
        SectionKind::Testimonials => SectionData::Testimonials(source.testimonials()),
        SectionKind::Awards => SectionData::Awards(source.awards()),
        SectionKind::Blog => SectionData::Blog(source.blog()),
        SectionKind::Gallery => SectionData::Gallery(source.gallery()),
        SectionKind::Contact => SectionData::Contact(source.contact()),
        SectionKind::Footer => SectionData::Footer(FooterData {
            name: source.name().to_string(),
            socials: footer_socials(&source),
        }),
    }
}

fn placeholder(id: &str) -> PlaceholderData {
    let mut chars = id.chars();
    let heading = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => "Untitled".to_string(),
    };
    PlaceholderData {
        id: id.to_string(),
        heading,
    }
}

struct Resolver<'a> {
    user: &'a ContentBundle,
    fallback: &'a ContentBundle,
}

/// Supplied leaf if present, else the built-in leaf.
fn leaf<'a>(user: &'a Option<String>, fallback: &'a Option<String>) -> &'a str {
    user.as_deref().or(fallback.as_deref()).unwrap_or_default()
}

fn list<'a, T>(user: &'a Option<Vec<T>>, fallback: &'a Option<Vec<T>>) -> &'a [T] {
    user.as_deref().or(fallback.as_deref()).unwrap_or_default()
}

fn present(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Restrict link targets to web, mail, phone, fragment and root-relative forms.
pub(crate) fn link_target(raw: &str) -> String {
    let trimmed = raw.trim();
    let lower = trimmed.to_ascii_lowercase();
    let allowed = ["http://", "https://", "mailto:", "tel:"]
        .iter()
        .any(|scheme| lower.starts_with(scheme))
        || trimmed.starts_with('#')
        || (trimmed.starts_with('/') && !trimmed.starts_with("//"));

    if allowed {
        trimmed.to_string()
    } else {
        "#".to_string()
    }
}

/// Colour values that cannot end the surrounding style declaration.
fn css_color(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let safe = !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "#(),.% -".contains(c));
    safe.then(|| trimmed.to_string())
}

fn optional_link(raw: Option<&str>) -> Option<String> {
    raw.and_then(present).map(|value| link_target(&value))
}

impl<'a> Resolver<'a> {
    fn name(&self) -> &'a str {
        leaf(
            &self.user.personal_info.name,
            &self.fallback.personal_info.name,
        )
    }

    /// Resolved link for each network in `NETWORKS` order; `None` when unset.
    fn socials(&self) -> Vec<Option<String>> {
        social_slots(&self.user.social_links)
            .into_iter()
            .zip(social_slots(&self.fallback.social_links))
            .zip(NETWORKS)
            .map(|((user, fallback), network)| {
                let value = present(leaf(user, fallback))?;
                Some(if network.mail {
                    link_target(&format!("mailto:{value}"))
                } else {
                    link_target(&value)
                })
            })
            .collect()
    }

    fn hero(&self) -> HeroData {
        let personal = &self.user.personal_info;
        let fallback = &self.fallback.personal_info;

        let links = self.socials();
        let mut socials: Vec<SocialBadge> = NETWORKS
            .iter()
            .zip(&links)
            .filter(|(network, _)| network.in_hero)
            .filter_map(|(network, href)| Some(network.badge(href.clone()?)))
            .collect();
        if let Some(email) = present(leaf(&personal.email, &fallback.email)) {
            socials.push(NETWORKS[EMAIL_SLOT].badge(link_target(&format!("mailto:{email}"))));
        }

        HeroData {
            name: self.name().to_string(),
            tagline: leaf(&personal.tagline, &fallback.tagline).to_string(),
            description: leaf(&personal.description, &fallback.description).to_string(),
            avatar: optional_link(Some(leaf(&personal.profile_image, &fallback.profile_image))),
            resume: optional_link(Some(leaf(&personal.resume_url, &fallback.resume_url))),
            socials,
        }
    }

    fn about(&self) -> AboutData {
        let skills = list(&self.user.skills, &self.fallback.skills);
        let projects = list(&self.user.projects, &self.fallback.projects);
        let experience = list(&self.user.experience, &self.fallback.experience);

        AboutData {
            initials: initials(self.name()),
            description: leaf(
                &self.user.personal_info.description,
                &self.fallback.personal_info.description,
            )
            .to_string(),
            stats: vec![
                Stat {
                    value: projects.len().to_string(),
                    label: "Projects",
                },
                Stat {
                    value: skills.len().to_string(),
                    label: "Skills",
                },
                Stat {
                    value: experience.len().to_string(),
                    label: "Roles",
                },
            ],
            tags: skills
                .iter()
                .take(ABOUT_TAG_LIMIT)
                .map(|skill| skill.name.clone())
                .collect(),
        }
    }

    fn skills(&self) -> SkillsData {
        let mut groups: Vec<SkillGroup> = Vec::new();
        for skill in list(&self.user.skills, &self.fallback.skills) {
            let bar = SkillBar {
                name: skill.name.clone(),
                level: skill_percent(skill.level),
                color: skill
                    .color
                    .as_deref()
                    .and_then(css_color)
                    .unwrap_or_else(|| FALLBACK_SKILL_COLOR.to_string()),
            };
            match groups
                .iter_mut()
                .find(|group| group.category == skill.category)
            {
                Some(group) => group.skills.push(bar),
                None => groups.push(SkillGroup {
                    category: skill.category.clone(),
                    skills: vec![bar],
                }),
            }
        }
        SkillsData { groups }
    }

    fn experience(&self) -> ExperienceData {
        let entries = list(&self.user.experience, &self.fallback.experience)
            .iter()
            .enumerate()
            .map(|(index, role)| {
                let side = TimelineSide::for_index(index);
                TimelineEntry {
                    title: role.title.clone(),
                    company: role.company.clone(),
                    period: role.period.clone(),
                    description: role.description.clone(),
                    current: role.current,
                    justify: side.justify(),
                    align: side.align(),
                }
            })
            .collect();
        ExperienceData { entries }
    }

    fn education(&self) -> EducationData {
        let entries = list(&self.user.education, &self.fallback.education)
            .iter()
            .map(|entry| EducationEntry {
                degree: entry.degree.clone(),
                institution: entry.institution.clone(),
                period: entry.period.clone(),
                description: entry.description.as_deref().and_then(present),
                gpa: entry.gpa.as_deref().and_then(present),
            })
            .collect();
        EducationData { entries }
    }

    fn projects(&self) -> ProjectsData {
        let cards = list(&self.user.projects, &self.fallback.projects)
            .iter()
            .enumerate()
            .map(|(index, project)| {
                let meta = [project.category.as_str(), project.date.as_str()]
                    .into_iter()
                    .filter(|part| !part.trim().is_empty())
                    .collect::<Vec<_>>()
                    .join(" · ");
                ProjectCard {
                    title: project.title.clone(),
                    description: project.description.clone(),
                    meta,
                    technologies: project.technologies.clone(),
                    featured: project.featured,
                    live: optional_link(project.live_url.as_deref()),
                    source: optional_link(project.github_url.as_deref()),
                    label: format!("Project {}", index + 1),
                }
            })
            .collect();
        ProjectsData { cards }
    }

    fn testimonials(&self) -> TestimonialsData {
        let quotes = list(&self.user.testimonials, &self.fallback.testimonials)
            .iter()
            .map(|testimonial| {
                let byline = match testimonial.company.as_deref().and_then(present) {
                    Some(company) if !testimonial.role.is_empty() => {
                        format!("{}, {company}", testimonial.role)
                    }
                    Some(company) => company,
                    None => testimonial.role.clone(),
                };
                Quote {
                    text: testimonial.text.clone(),
                    author: testimonial.author.clone(),
                    byline,
                    stars: stars(testimonial.rating),
                }
            })
            .collect();
        TestimonialsData { quotes }
    }

    fn awards(&self) -> AwardsData {
        let awards = list(&self.user.awards, &self.fallback.awards)
            .iter()
            .map(|award| AwardCard {
                title: award.title.clone(),
                organization: award.organization.clone(),
                year: award.year.clone(),
                description: award.description.clone(),
            })
            .collect();
        AwardsData { awards }
    }

    fn blog(&self) -> BlogData {
        let posts = list(&self.user.blog, &self.fallback.blog)
            .iter()
            .map(|post| PostCard {
                title: post.title.clone(),
                excerpt: post.excerpt.clone(),
                category: post.category.clone(),
                date: post.date.clone(),
                read_time: post.read_time.clone(),
                href: optional_link(post.url.as_deref()),
            })
            .collect();
        BlogData { posts }
    }

    fn gallery(&self) -> GalleryData {
        let tiles = list(&self.user.gallery, &self.fallback.gallery)
            .iter()
            .enumerate()
            .map(|(index, item)| GalleryTile {
                title: item.title.clone(),
                caption: item.description.as_deref().and_then(present),
                image: optional_link(Some(item.image.as_str())),
                glyph: GALLERY_GLYPHS[index % GALLERY_GLYPHS.len()],
                span: gallery_span(index),
            })
            .collect();
        GalleryData { tiles }
    }

    fn contact(&self) -> ContactData {
        let contact = &self.user.contact;
        let fallback = &self.fallback.contact;
        let email = leaf(&contact.email, &fallback.email).to_string();

        ContactData {
            mailto: link_target(&format!("mailto:{email}")),
            email,
            phone: present(leaf(&contact.phone, &fallback.phone)),
            location: present(leaf(&contact.location, &fallback.location)),
            availability: present(leaf(&contact.availability, &fallback.availability)),
        }
    }
}

fn footer_socials(source: &Resolver<'_>) -> Vec<SocialBadge> {
    NETWORKS
        .iter()
        .zip(source.socials())
        .filter_map(|(network, href)| Some(network.badge(href?)))
        .collect()
}

fn social_slots(links: &SocialLinks) -> [&Option<String>; 7] {
    [
        &links.github,
        &links.linkedin,
        &links.twitter,
        &links.instagram,
        &links.dribbble,
        &links.behance,
        &links.email,
    ]
}

fn initials(name: &str) -> String {
    let letters: String = name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect();
    if letters.is_empty() {
        "?".to_string()
    } else {
        letters
    }
}

/// Round to the nearest whole number inside `0..=max`.
fn clamp_whole(value: f64, max: f64) -> u32 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, max) as u32
}

fn skill_percent(level: f64) -> u32 {
    clamp_whole(level, MAX_SKILL_LEVEL)
}

fn stars(rating: f64) -> String {
    let filled = clamp_whole(rating, MAX_RATING) as usize;
    let mut out = "★".repeat(filled);
    out.push_str(&"☆".repeat(MAX_RATING as usize - filled));
    out
}

/// Tall and wide tiles repeat on a nine-tile cycle.
fn gallery_span(index: usize) -> &'static str {
    match index % 9 {
        0 | 4 | 8 => "grid-row: span 2;",
        1 | 6 => "grid-column: span 2;",
        _ => "",
    }
}
