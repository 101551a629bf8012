//! Normalization of the `GET /projects` response body.
//!
//! The endpoint answers with one of three shapes:
//!
//! - a bare array of records,
//! - `{ "projects": [...] }`,
//! - `{ "data": [...] }`.
//!
//! Every other shape is [`ProjectsPayload::Unrecognized`] and normalizes to an
//! empty sequence. Array elements that do not decode as a [`Project`] are
//! dropped; the order of the remaining records is preserved.

use crate::project::Project;
use serde_json::Value;
use tracing::debug;

#[derive(Debug, PartialEq)]
pub enum ProjectsPayload {
    List(Vec<Value>),
    Projects(Vec<Value>),
    Data(Vec<Value>),
    Unrecognized,
}

impl ProjectsPayload {
    /// Classifies a decoded JSON body. `projects` wins over `data` when both are arrays.
    pub fn classify(body: Value) -> Self {
        match body {
            Value::Array(items) => Self::List(items),
            Value::Object(mut object) => {
                if let Some(Value::Array(items)) = object.remove("projects") {
                    Self::Projects(items)
                } else if let Some(Value::Array(items)) = object.remove("data") {
                    Self::Data(items)
                } else {
                    Self::Unrecognized
                }
            }
            _ => Self::Unrecognized,
        }
    }

    /// Returns the usable records, possibly none.
    pub fn into_projects(self) -> Vec<Project> {
        let items = match self {
            Self::List(items) | Self::Projects(items) | Self::Data(items) => items,
            Self::Unrecognized => return Vec::new(),
        };
        let total = items.len();

        let projects: Vec<Project> = items
            .into_iter()
            .filter(Value::is_object)
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect();

        if projects.len() != total {
            debug!(
                total,
                kept = projects.len(),
                "dropped project records that did not decode"
            );
        }

        projects
    }
}

/// Normalizes a response body into a sequence of projects.
pub fn normalize(body: Value) -> Vec<Project> {
    ProjectsPayload::classify(body).into_projects()
}

#[cfg(test)]
mod tests {
    use super::{normalize, ProjectsPayload};
    use serde_json::json;

    fn titles(body: serde_json::Value) -> Vec<String> {
        normalize(body).into_iter().map(|project| project.title).collect()
    }

    #[test]
    fn bare_array_is_accepted() {
        assert_eq!(titles(json!([{ "title": "A", "desc": "a" }])), vec!["A"]);
    }

    #[test]
    fn projects_field_is_accepted_in_order() {
        assert_eq!(
            titles(json!({ "projects": [{ "title": "X" }, { "title": "Y" }] })),
            vec!["X", "Y"]
        );
    }

    #[test]
    fn data_field_is_accepted() {
        assert_eq!(titles(json!({ "data": [{ "title": "D" }] })), vec!["D"]);
        assert!(titles(json!({ "data": [] })).is_empty());
    }

    #[test]
    fn projects_takes_precedence_over_data() {
        let body = json!({ "projects": [{ "title": "P" }], "data": [{ "title": "D" }] });
        assert_eq!(titles(body), vec!["P"]);
    }

    #[test]
    fn non_array_fields_fall_through() {
        let body = json!({ "projects": "nope", "data": [{ "title": "D" }] });
        assert_eq!(titles(body), vec!["D"]);
    }

    #[test]
    fn other_shapes_are_empty() {
        assert_eq!(
            ProjectsPayload::classify(json!({ "items": [] })),
            ProjectsPayload::Unrecognized
        );
        assert!(normalize(json!("projects")).is_empty());
        assert!(normalize(json!(42)).is_empty());
        assert!(normalize(json!(null)).is_empty());
        assert!(normalize(json!({ "data": { "title": "A" } })).is_empty());
    }

    #[test]
    fn records_with_both_field_names_are_kept() {
        let projects = normalize(json!([
            { "title": "A", "desc": "short", "description": "long" },
            { "title": null, "desc": "untitled" }
        ]));

        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].description, "short");
        assert!(projects[1].title.is_empty());
        assert_eq!(projects[1].description, "untitled");
    }

    #[test]
    fn unusable_elements_are_dropped() {
        let body = json!([1, "two", { "title": "Kept" }, null, { "title": 3 }]);
        assert_eq!(titles(body), vec!["Kept"]);
    }
}
