//! Portfolio project records and the compiled-in fallback list.

use serde::{Deserialize, Serialize};

/// Image shown when a record has no usable image reference.
pub const PLACEHOLDER_IMAGE: &str = "/images/placeholder.jpg";
/// Demo value meaning "this project has no live demo".
pub const NO_DEMO: &str = "#";

/// One portfolio entry. Field names on the wire follow the backend
/// (`desc`, `img`, `github`); the long names are accepted too, and the short
/// name wins when a record carries both.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ProjectRecord")]
pub struct Project {
    pub title: String,
    #[serde(rename = "desc")]
    pub description: String,
    #[serde(rename = "img", skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(rename = "github", skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demo: Option<String>,
}

/// Wire form of a project. Every field is optional and `null` reads as absent.
#[derive(Deserialize)]
struct ProjectRecord {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    desc: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    img: Option<String>,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    github: Option<String>,
    #[serde(default)]
    source: Option<String>,
    #[serde(default)]
    demo: Option<String>,
}

impl From<ProjectRecord> for Project {
    fn from(record: ProjectRecord) -> Self {
        Self {
            title: record.title.unwrap_or_default(),
            description: record.desc.or(record.description).unwrap_or_default(),
            image: record.img.or(record.image),
            source: record.github.or(record.source),
            demo: record.demo,
        }
    }
}

impl Project {
    /// Image reference to render, falling back to [`PLACEHOLDER_IMAGE`].
    pub fn image_src(&self) -> &str {
        non_blank(self.image.as_deref()).unwrap_or(PLACEHOLDER_IMAGE)
    }

    /// Live demo link, or `None` when absent, blank, or the [`NO_DEMO`] sentinel.
    pub fn demo_url(&self) -> Option<&str> {
        non_blank(self.demo.as_deref()).filter(|demo| *demo != NO_DEMO)
    }

    /// Source code link, or `None` when absent or blank.
    pub fn source_url(&self) -> Option<&str> {
        non_blank(self.source.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.trim().is_empty())
}

/// The built-in list rendered whenever the remote source is unreachable,
/// fails, or has nothing to show. Always exactly three records.
pub fn fallback_projects() -> Vec<Project> {
    vec![
        Project {
            title: "Restaurant Web App".to_string(),
            description: "A modern restaurant ordering system with responsive UI and smooth UX."
                .to_string(),
            image: Some("/images/restaurant.jpg".to_string()),
            source: Some("https://github.com/akordonald15-hue/Dchops".to_string()),
            demo: Some("https://restaurant-demo.com".to_string()),
        },
        Project {
            title: "Oil Company Production Tool".to_string(),
            description: "An engineering desktop app for production calculations and reporting."
                .to_string(),
            image: Some("/images/OilApp.webp".to_string()),
            source: Some("https://github.com/yourusername/oil-calculator".to_string()),
            demo: Some(NO_DEMO.to_string()),
        },
        Project {
            title: "DovaTech".to_string(),
            description: "A sleek Website Crafted For DovaTech Company".to_string(),
            image: Some("/images/portfolio.jpg".to_string()),
            source: Some("https://github.com/yourusername/portfolio".to_string()),
            demo: Some(NO_DEMO.to_string()),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::{fallback_projects, Project, PLACEHOLDER_IMAGE};
    use serde_json::json;

    fn project_with_demo(demo: Option<&str>) -> Project {
        Project {
            title: "Demo".to_string(),
            demo: demo.map(str::to_string),
            ..Project::default()
        }
    }

    #[test]
    fn sentinel_demo_is_not_a_link() {
        assert_eq!(project_with_demo(Some("#")).demo_url(), None);
        assert_eq!(project_with_demo(None).demo_url(), None);
        assert_eq!(project_with_demo(Some("  ")).demo_url(), None);
    }

    #[test]
    fn real_demo_is_a_link() {
        let project = project_with_demo(Some("https://demo.example"));
        assert_eq!(project.demo_url(), Some("https://demo.example"));
    }

    #[test]
    fn missing_image_uses_placeholder() {
        let mut project = Project::default();
        assert_eq!(project.image_src(), PLACEHOLDER_IMAGE);

        project.image = Some(String::new());
        assert_eq!(project.image_src(), PLACEHOLDER_IMAGE);

        project.image = Some("/images/a.png".to_string());
        assert_eq!(project.image_src(), "/images/a.png");
    }

    #[test]
    fn source_link_requires_value() {
        let mut project = Project::default();
        assert_eq!(project.source_url(), None);

        project.source = Some("https://github.com/someone/repo".to_string());
        assert_eq!(project.source_url(), Some("https://github.com/someone/repo"));
    }

    #[test]
    fn decodes_backend_field_names() {
        let project: Project = serde_json::from_value(json!({
            "title": "A",
            "desc": "first",
            "img": "/a.png",
            "github": "https://github.com/a",
            "demo": "#"
        }))
        .expect("decode project");

        assert_eq!(project.title, "A");
        assert_eq!(project.description, "first");
        assert_eq!(project.image.as_deref(), Some("/a.png"));
        assert_eq!(project.source_url(), Some("https://github.com/a"));
        assert_eq!(project.demo_url(), None);
    }

    #[test]
    fn decodes_long_field_names() {
        let project: Project = serde_json::from_value(json!({
            "title": "B",
            "description": "second",
            "image": "/b.png",
            "source": "https://github.com/b"
        }))
        .expect("decode project");

        assert_eq!(project.description, "second");
        assert_eq!(project.image_src(), "/b.png");
        assert_eq!(project.source_url(), Some("https://github.com/b"));
    }

    #[test]
    fn short_name_wins_when_both_are_present() {
        let project: Project = serde_json::from_value(json!({
            "title": "C",
            "desc": "short",
            "description": "long",
            "img": "/c.png",
            "image": "/c-large.png",
            "github": "https://github.com/c",
            "source": "https://example.com/c"
        }))
        .expect("decode project");

        assert_eq!(project.description, "short");
        assert_eq!(project.image_src(), "/c.png");
        assert_eq!(project.source_url(), Some("https://github.com/c"));
    }

    #[test]
    fn null_fields_read_as_absent() {
        let project: Project = serde_json::from_value(json!({
            "title": null,
            "desc": null,
            "img": null,
            "demo": null
        }))
        .expect("decode project");

        assert!(project.title.is_empty());
        assert!(project.description.is_empty());
        assert_eq!(project.image_src(), PLACEHOLDER_IMAGE);
        assert_eq!(project.demo_url(), None);
    }

    #[test]
    fn title_only_record_decodes() {
        let project: Project = serde_json::from_value(json!({ "title": "X" })).expect("decode");
        assert_eq!(project.title, "X");
        assert!(project.description.is_empty());
        assert_eq!(project.demo, None);
    }

    #[test]
    fn fallback_has_three_records() {
        let projects = fallback_projects();
        assert_eq!(projects.len(), 3);
        assert_eq!(projects[0].title, "Restaurant Web App");
        assert_eq!(projects[0].demo_url(), Some("https://restaurant-demo.com"));
        assert!(projects[1..].iter().all(|project| project.demo_url().is_none()));
        assert!(projects.iter().all(|project| project.source_url().is_some()));
    }
}
