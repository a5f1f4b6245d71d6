//! Learning path selection.

use serde::Serialize;

use super::catalog::{Catalog, LearningPath, SkillLevel};

/// Visibility of one path card after a level change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathVisibility {
    pub id: &'static str,
    pub visible: bool,
}

/// Where a "start path" trigger sends the learner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Navigation {
    pub url: String,
}

impl Navigation {
    pub fn to_path(path_id: &str) -> Self {
        Self { url: format!("/learn/{}", path_id) }
    }
}

/// Tracks the selected skill level and which paths it shows.
#[derive(Debug, Clone)]
pub struct PathSelector {
    catalog: Catalog,
    level: SkillLevel,
}

impl PathSelector {
    /// Selector over `catalog`, starting at the beginner level.
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog, level: SkillLevel::default() }
    }

    pub fn level(&self) -> SkillLevel {
        self.level
    }

    /// Change the level and return which paths are now shown.
    pub fn select_level(&mut self, level: SkillLevel) -> Vec<PathVisibility> {
        log::debug!("skill level set to {}", level);
        self.level = level;
        self.visibility()
    }

    /// A path is shown iff its level tag equals the selected level.
    pub fn visibility(&self) -> Vec<PathVisibility> {
        self.catalog
            .paths()
            .iter()
            .map(|p| PathVisibility { id: p.id, visible: p.level == self.level })
            .collect()
    }

    /// Paths shown at the selected level.
    pub fn visible_paths(&self) -> Vec<&'static LearningPath> {
        self.catalog.paths_for(self.level).collect()
    }

    /// Resolve a start trigger to its navigation target. An empty id does
    /// nothing. The id is not checked against the catalog; the server route
    /// handles unknown paths.
    pub fn start_path(&self, path_id: &str) -> Option<Navigation> {
        let path_id = path_id.trim();
        if path_id.is_empty() {
            return None;
        }
        log::info!("starting learning path {}", path_id);
        Some(Navigation::to_path(path_id))
    }
}

impl Default for PathSelector {
    fn default() -> Self {
        Self::new(Catalog::standard())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_beginner() {
        let selector = PathSelector::default();
        assert_eq!(selector.level(), SkillLevel::Beginner);
        let ids: Vec<_> = selector.visible_paths().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["fundamentals", "basic_math"]);
    }

    #[test]
    fn test_select_level_toggles_visibility() {
        let mut selector = PathSelector::default();
        let shown = selector.select_level(SkillLevel::Advanced);
        assert_eq!(shown.len(), 5);
        for entry in &shown {
            assert_eq!(entry.visible, entry.id == "gto_basics", "{}", entry.id);
        }
        assert_eq!(selector.level(), SkillLevel::Advanced);
    }

    #[test]
    fn test_start_path() {
        let selector = PathSelector::default();
        assert_eq!(
            selector.start_path("hand_reading"),
            Some(Navigation { url: "/learn/hand_reading".to_string() })
        );
        assert_eq!(selector.start_path(""), None);
        assert_eq!(selector.level(), SkillLevel::Beginner);
    }

    #[test]
    fn test_empty_catalog_is_tolerated() {
        let mut selector = PathSelector::new(Catalog::empty());
        assert!(selector.select_level(SkillLevel::Pro).is_empty());
        assert!(selector.visible_paths().is_empty());
        assert!(selector.start_path("fundamentals").is_some());
    }
}
