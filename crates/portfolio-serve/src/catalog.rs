//! Static project catalog.
//!
//! The catalog is built once at startup and never changes afterwards.

use serde::{Deserialize, Serialize};

/// A portfolio project as served to the site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Unique URL key.
    pub slug: String,
    pub title: String,
    pub year: String,
    pub location: Option<String>,
    /// Cover image URL.
    pub cover: String,
    pub area: Option<String>,
    pub scope: Option<String>,
    pub excerpt: Option<String>,
    /// Gallery image URLs, in display order.
    pub images: Option<Vec<String>>,
}

/// Read-only, ordered set of projects.
#[derive(Debug, Clone)]
pub struct Catalog {
    projects: Vec<Project>,
}

impl Catalog {
    /// Build a catalog from an ordered list of projects.
    ///
    /// Returns `None` if two projects share a slug.
    #[cfg(test)]
    fn new(projects: Vec<Project>) -> Option<Self> {
        let mut seen = std::collections::HashSet::new();
        if !projects.iter().all(|p| seen.insert(p.slug.as_str())) {
            return None;
        }
        Some(Self { projects })
    }

    /// The demo dataset shown on the portfolio site.
    pub fn demo() -> Self {
        Self {
            projects: vec![
                Project {
                    slug: "calm-townhouse".to_string(),
                    title: "Calm Townhouse".to_string(),
                    year: "2023".to_string(),
                    location: Some("Brooklyn, NY".to_string()),
                    cover: unsplash("photo-1505691723518-36a5ac3b2d51", 1600),
                    area: Some("2,100 sq ft".to_string()),
                    scope: Some("Full Remodel".to_string()),
                    excerpt: Some(
                        "A warm, edited palette with natural light and crafted finishes."
                            .to_string(),
                    ),
                    images: Some(vec![
                        unsplash("photo-1493666438817-866a91353ca9", 2000),
                        unsplash("photo-1501045661006-fcebe0257c3f", 2000),
                        unsplash("photo-1524758631624-e2822e304c36", 2000),
                    ]),
                },
                Project {
                    slug: "quiet-loft".to_string(),
                    title: "Quiet Loft".to_string(),
                    year: "2022".to_string(),
                    location: Some("SoHo, NY".to_string()),
                    cover: unsplash("photo-1524758631624-e2822e304c36", 1600),
                    area: Some("1,450 sq ft".to_string()),
                    scope: Some("Furnishing & Styling".to_string()),
                    excerpt: Some("Soft textures and layered neutrals in a sunlit loft.".to_string()),
                    images: Some(vec![
                        unsplash("photo-1493666438817-866a91353ca9", 2000),
                        unsplash("photo-1501045661006-fcebe0257c3f", 2000),
                    ]),
                },
            ],
        }
    }

    /// All projects in insertion order.
    pub fn list_projects(&self) -> &[Project] {
        &self.projects
    }

    /// Find a project by exact, case-sensitive slug.
    pub fn get_project(&self, slug: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.slug == slug)
    }
}

fn unsplash(photo: &str, width: u32) -> String {
    format!("https://images.unsplash.com/{photo}?q=80&w={width}&auto=format&fit=crop")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_catalog_order() {
        let catalog = Catalog::demo();
        let slugs: Vec<_> = catalog
            .list_projects()
            .iter()
            .map(|p| p.slug.as_str())
            .collect();
        assert_eq!(slugs, ["calm-townhouse", "quiet-loft"]);
    }

    #[test]
    fn list_projects_is_stable() {
        let catalog = Catalog::demo();
        assert_eq!(catalog.list_projects(), catalog.list_projects());
    }

    #[test]
    fn every_slug_resolves_to_itself() {
        let catalog = Catalog::demo();
        for project in catalog.list_projects() {
            let found = catalog.get_project(&project.slug).unwrap();
            assert_eq!(found, project);
        }
    }

    #[test]
    fn get_project_is_case_sensitive() {
        let catalog = Catalog::demo();
        assert!(catalog.get_project("Calm-Townhouse").is_none());
        assert!(catalog.get_project("calm-townhouse ").is_none());
        assert!(catalog.get_project("nonexistent").is_none());
        assert!(catalog.get_project("").is_none());
    }

    #[test]
    fn demo_cover_urls() {
        let catalog = Catalog::demo();
        let townhouse = catalog.get_project("calm-townhouse").unwrap();
        assert_eq!(
            townhouse.cover,
            "https://images.unsplash.com/photo-1505691723518-36a5ac3b2d51?q=80&w=1600&auto=format&fit=crop"
        );
        assert_eq!(townhouse.images.as_ref().map(Vec::len), Some(3));
    }

    #[test]
    fn demo_slugs_are_unique() {
        let projects = Catalog::demo().list_projects().to_vec();
        let rebuilt = Catalog::new(projects).expect("demo catalog has duplicate slugs");
        assert_eq!(rebuilt.list_projects().len(), 2);
    }

    #[test]
    fn new_rejects_duplicate_slugs() {
        let project = Catalog::demo().list_projects()[0].clone();
        assert!(Catalog::new(vec![project.clone(), project.clone()]).is_none());
        assert_eq!(
            Catalog::new(vec![project]).map(|c| c.list_projects().len()),
            Some(1)
        );
    }

    #[test]
    fn missing_optionals_serialize_as_null() {
        let project = Project {
            slug: "bare".to_string(),
            title: "Bare".to_string(),
            year: "2021".to_string(),
            location: None,
            cover: "https://example.com/c.jpg".to_string(),
            area: None,
            scope: None,
            excerpt: None,
            images: None,
        };
        let value = serde_json::to_value(&project).unwrap();
        assert!(value["location"].is_null());
        assert!(value["images"].is_null());
    }
}
