//! Embedded project catalog and id lookup.
//!
//! Project detail records are embedded in the binary at compile time and
//! parsed once at startup. Lookups by id are O(1); a miss is not an error
//! (the detail dialog simply does not open for unknown ids).

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Detail record for one portfolio project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDetails {
    /// Unique key, referenced by portfolio grid items.
    pub id: String,
    /// Dialog title. Also used as the image alt text.
    pub title: String,
    /// Asset path of the project image.
    pub image: String,
    /// Link target of the "visit" action.
    pub link: String,
    /// Body copy as markup lines: lines ending in `:` render as headings,
    /// lines starting with `- ` as bullets, everything else as paragraphs.
    pub description: Vec<String>,
}

/// Catalog schema from projects.json.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CatalogFile {
    version: String,
    projects: Vec<ProjectDetails>,
}

/// Immutable project catalog with fast id lookup.
///
/// The catalog is embedded in the binary at compile time and loaded once at
/// startup.
#[derive(Debug, Clone)]
pub struct ProjectCatalog {
    /// All project records in file order.
    projects: Vec<ProjectDetails>,
    /// Fast lookup by project id.
    lookup: HashMap<String, usize>,
}

impl ProjectCatalog {
    /// Loads the catalog from the embedded JSON file.
    pub fn load() -> Result<Self> {
        let json_data = include_str!("projects.json");
        Self::from_json(json_data)
    }

    /// Parses a catalog from JSON text. Exposed for tests and for swapping
    /// the catalog without touching the presentation layer.
    pub fn from_json(json_data: &str) -> Result<Self> {
        let file: CatalogFile =
            serde_json::from_str(json_data).context("Failed to parse embedded projects.json")?;

        let mut lookup = HashMap::new();
        for (idx, project) in file.projects.iter().enumerate() {
            lookup.insert(project.id.clone(), idx);
        }

        Ok(Self {
            projects: file.projects,
            lookup,
        })
    }

    /// Looks up a project by id. Unknown ids return `None`.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&ProjectDetails> {
        self.lookup.get(id).map(|&idx| &self.projects[idx])
    }

    /// Number of records in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Whether the catalog holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// All records in file order.
    #[must_use]
    pub fn projects(&self) -> &[ProjectDetails] {
        &self.projects
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_catalog_loads() {
        let catalog = ProjectCatalog::load().unwrap();
        assert_eq!(catalog.len(), 8);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_lookup_known_id() {
        let catalog = ProjectCatalog::load().unwrap();
        let project = catalog.get("fittrack").unwrap();
        assert_eq!(project.title, "FitTrack Pro");
        assert_eq!(project.image, "images/project-app-1.jpg");
        assert!(!project.description.is_empty());
    }

    #[test]
    fn test_lookup_unknown_id_is_none() {
        let catalog = ProjectCatalog::load().unwrap();
        assert!(catalog.get("does-not-exist").is_none());
        assert!(catalog.get("").is_none());
    }

    #[test]
    fn test_all_ids_unique() {
        let catalog = ProjectCatalog::load().unwrap();
        assert_eq!(catalog.lookup.len(), catalog.projects.len());
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        assert!(ProjectCatalog::from_json("not json").is_err());
        assert!(ProjectCatalog::from_json("{\"version\": \"1\"}").is_err());
    }

    #[test]
    fn test_from_json_custom_catalog() {
        let json = r##"{
            "version": "1",
            "projects": [
                {
                    "id": "demo",
                    "title": "Demo",
                    "image": "images/demo.jpg",
                    "link": "#",
                    "description": ["A demo project."]
                }
            ]
        }"##;
        let catalog = ProjectCatalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("demo").unwrap().title, "Demo");
    }
}
