//! The user-editable content bundle and the built-in sample profile.
//!
//! Object-shaped parts carry optional leaves so a partial edit keeps every
//! field it names; list-shaped parts are replaced wholesale.

use std::sync::LazyLock;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContentBundle {
    #[serde(deserialize_with = "null_as_default")]
    pub personal_info: PersonalInfo,
    #[serde(deserialize_with = "null_as_default")]
    pub social_links: SocialLinks,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<Skill>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projects: Option<Vec<Project>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience: Option<Vec<Experience>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education: Option<Vec<Education>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub testimonials: Option<Vec<Testimonial>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub awards: Option<Vec<Award>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blog: Option<Vec<BlogPost>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gallery: Option<Vec<GalleryItem>>,
    #[serde(deserialize_with = "null_as_default")]
    pub contact: ContactInfo,
    /// Keys this version does not interpret, kept for round trips.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SocialLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dribbble: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub behance: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_contact: Option<String>,
}

/// `level` is a percentage; out-of-range values are clamped when rendered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Skill {
    pub name: String,
    pub level: f64,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub technologies: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    pub category: String,
    pub featured: bool,
    pub date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Experience {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub company: String,
    pub period: String,
    pub description: String,
    pub current: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub degree: String,
    pub institution: String,
    pub period: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Testimonial {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub text: String,
    pub author: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub rating: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Award {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub organization: String,
    pub year: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlogPost {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub excerpt: String,
    pub date: String,
    pub read_time: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GalleryItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Treat an explicit `null` like an omitted key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

static BUILTIN: LazyLock<ContentBundle> = LazyLock::new(sample_profile);
static EMPTY: LazyLock<ContentBundle> = LazyLock::new(ContentBundle::default);

impl ContentBundle {
    /// The sample profile every missing field falls back to.
    pub fn builtin() -> &'static ContentBundle {
        &BUILTIN
    }

    /// A bundle with nothing supplied.
    pub fn empty() -> &'static ContentBundle {
        &EMPTY
    }
}

fn text(value: &str) -> Option<String> {
    Some(value.to_string())
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn skill(name: &str, level: f64, category: &str, color: &str) -> Skill {
    Skill {
        name: name.to_string(),
        level,
        category: category.to_string(),
        color: text(color),
    }
}

fn sample_profile() -> ContentBundle {
    ContentBundle {
        personal_info: PersonalInfo {
            name: text("John Doe"),
            tagline: text("Full Stack Developer & UI/UX Designer"),
            description: text(
                "I'm a passionate full-stack developer with over 5 years of experience creating \
                 digital solutions that make a difference. I specialize in modern web technologies \
                 and love turning complex problems into simple, beautiful designs.",
            ),
            email: text("john.doe@example.com"),
            phone: text("+1 (555) 123-4567"),
            location: text("San Francisco, CA"),
            website: text("https://johndoe.dev"),
            profile_image: text("/placeholder-avatar.jpg"),
            resume_url: text("/resume.pdf"),
        },
        social_links: SocialLinks {
            github: text("https://github.com/johndoe"),
            linkedin: text("https://linkedin.com/in/johndoe"),
            twitter: text("https://twitter.com/johndoe"),
            instagram: None,
            dribbble: None,
            behance: None,
            email: text("john.doe@example.com"),
        },
        skills: Some(vec![
            skill("React/Next.js", 90.0, "Frontend", "#61dafb"),
            skill("TypeScript", 85.0, "Frontend", "#3178c6"),
            skill("CSS/Tailwind", 88.0, "Frontend", "#06b6d4"),
            skill("Node.js", 85.0, "Backend", "#339933"),
            skill("Python/Django", 80.0, "Backend", "#3776ab"),
            skill("PostgreSQL", 75.0, "Backend", "#336791"),
            skill("AWS/Azure", 70.0, "DevOps", "#ff9900"),
            skill("Docker", 75.0, "DevOps", "#2496ed"),
            skill("CI/CD", 72.0, "DevOps", "#4285f4"),
        ]),
        projects: Some(vec![
            Project {
                id: text("1"),
                title: "E-Commerce Platform".into(),
                description: "Full-stack web application with React, Node.js, and MongoDB. \
                              Features include user authentication, payment processing, and \
                              admin dashboard."
                    .into(),
                image: text("/project1.jpg"),
                technologies: strings(&["React", "Node.js", "MongoDB", "Stripe"]),
                live_url: text("https://ecommerce-demo.com"),
                github_url: text("https://github.com/johndoe/ecommerce"),
                category: "Web App".into(),
                featured: true,
                date: "2024".into(),
            },
            Project {
                id: text("2"),
                title: "Mobile Task Manager".into(),
                description: "Cross-platform mobile app built with React Native. Real-time \
                              synchronization and offline capabilities."
                    .into(),
                image: text("/project2.jpg"),
                technologies: strings(&["React Native", "Firebase", "Redux"]),
                live_url: text("https://taskmanager-app.com"),
                github_url: text("https://github.com/johndoe/taskmanager"),
                category: "Mobile".into(),
                featured: true,
                date: "2024".into(),
            },
            Project {
                id: text("3"),
                title: "Data Dashboard".into(),
                description: "Interactive dashboard for business analytics with real-time data \
                              visualization and reporting features."
                    .into(),
                image: text("/project3.jpg"),
                technologies: strings(&["Vue.js", "D3.js", "Python", "PostgreSQL"]),
                live_url: text("https://dashboard-demo.com"),
                github_url: text("https://github.com/johndoe/dashboard"),
                category: "Web App".into(),
                featured: false,
                date: "2023".into(),
            },
        ]),
        experience: Some(vec![
            Experience {
                id: text("1"),
                title: "Senior Full Stack Developer".into(),
                company: "Tech Innovations Inc.".into(),
                period: "2022 - Present".into(),
                description: "Led development of scalable web applications, mentored junior \
                              developers, and implemented CI/CD pipelines."
                    .into(),
                current: true,
            },
            Experience {
                id: text("2"),
                title: "Frontend Developer".into(),
                company: "Digital Solutions Ltd.".into(),
                period: "2020 - 2022".into(),
                description: "Built responsive user interfaces, collaborated with design teams, \
                              and optimized application performance."
                    .into(),
                current: false,
            },
            Experience {
                id: text("3"),
                title: "Junior Developer".into(),
                company: "StartupXYZ".into(),
                period: "2019 - 2020".into(),
                description: "Developed features for MVP products, learned modern frameworks, \
                              and contributed to code reviews."
                    .into(),
                current: false,
            },
        ]),
        education: Some(vec![
            Education {
                id: text("1"),
                degree: "Bachelor of Computer Science".into(),
                institution: "University of Technology".into(),
                period: "2016 - 2020".into(),
                description: text(
                    "Specialized in Software Engineering and Data Structures. Graduated Magna \
                     Cum Laude.",
                ),
                gpa: text("3.8"),
            },
            Education {
                id: text("2"),
                degree: "Full Stack Web Development Bootcamp".into(),
                institution: "Code Academy Pro".into(),
                period: "2019".into(),
                description: text(
                    "Intensive 6-month program covering modern web technologies and best \
                     practices.",
                ),
                gpa: None,
            },
        ]),
        testimonials: Some(vec![
            Testimonial {
                id: text("1"),
                text: "John delivered exceptional work on our e-commerce platform. His attention \
                       to detail and technical expertise made the project a huge success."
                    .into(),
                author: "Sarah Johnson".into(),
                role: "CEO".into(),
                company: text("TechCorp"),
                rating: 5.0,
            },
            Testimonial {
                id: text("2"),
                text: "Working with John was a pleasure. He understood our requirements \
                       perfectly and delivered beyond our expectations."
                    .into(),
                author: "Mike Chen".into(),
                role: "Product Manager".into(),
                company: text("InnovateLab"),
                rating: 5.0,
            },
            Testimonial {
                id: text("3"),
                text: "Professional, reliable, and skilled. John helped us transform our \
                       digital presence completely."
                    .into(),
                author: "Emily Davis".into(),
                role: "Founder".into(),
                company: text("StartupXYZ"),
                rating: 5.0,
            },
        ]),
        awards: Some(vec![
            Award {
                id: text("1"),
                title: "Best Web Application".into(),
                organization: "Tech Awards 2023".into(),
                year: "2023".into(),
                description: "Recognized for innovative e-commerce platform design".into(),
            },
            Award {
                id: text("2"),
                title: "Developer of the Year".into(),
                organization: "Local Tech Community".into(),
                year: "2022".into(),
                description: "Outstanding contribution to open source projects".into(),
            },
            Award {
                id: text("3"),
                title: "Innovation Award".into(),
                organization: "Startup Pitch Competition".into(),
                year: "2021".into(),
                description: "First place for mobile app concept and execution".into(),
            },
        ]),
        blog: Some(vec![
            BlogPost {
                id: text("1"),
                title: "Building Scalable React Applications".into(),
                excerpt: "Learn best practices for structuring large React applications with \
                          proper state management and component architecture."
                    .into(),
                date: "Dec 15, 2024".into(),
                read_time: "8 min read".into(),
                category: "React".into(),
                url: text("/blog/scalable-react-apps"),
            },
            BlogPost {
                id: text("2"),
                title: "The Future of Web Development".into(),
                excerpt: "Exploring upcoming trends in web development including AI \
                          integration, serverless computing, and modern frameworks."
                    .into(),
                date: "Dec 10, 2024".into(),
                read_time: "6 min read".into(),
                category: "Technology".into(),
                url: text("/blog/future-web-dev"),
            },
            BlogPost {
                id: text("3"),
                title: "Optimizing Database Performance".into(),
                excerpt: "Practical tips and techniques for improving database query \
                          performance and scaling your data layer effectively."
                    .into(),
                date: "Dec 5, 2024".into(),
                read_time: "10 min read".into(),
                category: "Backend".into(),
                url: text("/blog/database-optimization"),
            },
        ]),
        gallery: Some(vec![
            GalleryItem {
                id: text("1"),
                title: "Project Screenshot 1".into(),
                description: text("Dashboard interface design"),
                image: "/gallery1.jpg".into(),
                category: text("UI Design"),
            },
            GalleryItem {
                id: text("2"),
                title: "Mobile App Design".into(),
                description: text("Clean mobile interface"),
                image: "/gallery2.jpg".into(),
                category: text("Mobile"),
            },
            GalleryItem {
                id: text("3"),
                title: "Website Mockup".into(),
                description: text("Modern website layout"),
                image: "/gallery3.jpg".into(),
                category: text("Web Design"),
            },
        ]),
        contact: ContactInfo {
            email: text("john.doe@example.com"),
            phone: text("+1 (555) 123-4567"),
            location: text("San Francisco, CA"),
            availability: text("Available for new projects"),
            preferred_contact: text("email"),
        },
        extra: Map::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_personal_info_keeps_only_supplied_leaves() {
        let bundle: ContentBundle =
            serde_json::from_str(r#"{"personalInfo":{"name":"Ada"}}"#).expect("valid bundle");
        assert_eq!(bundle.personal_info.name.as_deref(), Some("Ada"));
        assert_eq!(bundle.personal_info.tagline, None);
        assert_eq!(bundle.skills, None);
    }

    #[test]
    fn list_items_tolerate_missing_fields() {
        let bundle: ContentBundle =
            serde_json::from_str(r#"{"projects":[{"title":"Lathe"}]}"#).expect("valid bundle");
        let projects = bundle.projects.expect("projects supplied");
        assert_eq!(projects[0].title, "Lathe");
        assert!(projects[0].technologies.is_empty());
        assert!(!projects[0].featured);
    }

    #[test]
    fn unrecognised_keys_survive_a_round_trip() {
        let raw = r#"{"customSections":{"talks":[]}}"#;
        let bundle: ContentBundle = serde_json::from_str(raw).expect("valid bundle");
        let json = serde_json::to_value(&bundle).expect("serialize");
        assert_eq!(json["customSections"], serde_json::json!({ "talks": [] }));
    }

    #[test]
    fn null_object_parts_read_as_absent() {
        let bundle: ContentBundle = serde_json::from_str(
            r#"{"personalInfo":null,"socialLinks":null,"contact":null}"#,
        )
        .expect("null parts are tolerated");
        assert_eq!(bundle.personal_info, PersonalInfo::default());
        assert_eq!(bundle.social_links, SocialLinks::default());
        assert_eq!(bundle.contact, ContactInfo::default());
    }

    #[test]
    fn numeric_fields_accept_any_json_number() {
        let bundle: ContentBundle = serde_json::from_str(
            r#"{"skills":[{"name":"Rust","level":87.5},{"name":"Go","level":-4}],
                "testimonials":[{"author":"Grace","rating":4.6}]}"#,
        )
        .expect("fractional and negative numbers are tolerated");
        let skills = bundle.skills.expect("skills supplied");
        assert_eq!(skills[0].level, 87.5);
        assert_eq!(skills[1].level, -4.0);
        assert_eq!(bundle.testimonials.expect("testimonials")[0].rating, 4.6);
    }

    #[test]
    fn builtin_profile_fills_every_personal_leaf() {
        let info = &ContentBundle::builtin().personal_info;
        assert_eq!(info.name.as_deref(), Some("John Doe"));
        assert!(info.tagline.is_some() && info.description.is_some());
        assert!(info.profile_image.is_some() && info.resume_url.is_some());
    }
}
