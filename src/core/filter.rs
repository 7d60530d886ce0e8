use crate::domain::model::Project;

/// Category that matches every project.
pub const ALL_CATEGORIES: &str = "all";

/// Selected project category. Categories are not checked against the
/// projects; an unknown one simply matches nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectFilter {
    selected: String,
}

impl Default for ProjectFilter {
    fn default() -> Self {
        Self {
            selected: ALL_CATEGORIES.to_string(),
        }
    }
}

impl ProjectFilter {
    pub fn selected(&self) -> &str {
        &self.selected
    }

    pub fn select(&mut self, category: impl Into<String>) {
        self.selected = category.into();
    }

    pub fn matches(&self, project: &Project) -> bool {
        self.selected == ALL_CATEGORIES || project.category == self.selected
    }

    /// Matching projects in their original order.
    pub fn apply<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        projects.iter().filter(|p| self.matches(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(title: &str, category: &str) -> Project {
        Project {
            title: title.to_string(),
            description: String::new(),
            image: String::new(),
            link: String::new(),
            category: category.to_string(),
        }
    }

    fn titles(projects: &[&Project]) -> Vec<String> {
        projects.iter().map(|p| p.title.clone()).collect()
    }

    #[test]
    fn test_default_is_all() {
        let filter = ProjectFilter::default();
        let projects = vec![project("a", "web"), project("b", "design")];
        assert_eq!(filter.selected(), "all");
        assert_eq!(titles(&filter.apply(&projects)), vec!["a", "b"]);
    }

    #[test]
    fn test_category_keeps_relative_order() {
        let projects = vec![
            project("a", "web"),
            project("b", "design"),
            project("c", "web"),
            project("d", "mobile"),
            project("e", "web"),
        ];
        let mut filter = ProjectFilter::default();
        filter.select("web");
        assert_eq!(titles(&filter.apply(&projects)), vec!["a", "c", "e"]);

        filter.select(ALL_CATEGORIES);
        assert_eq!(filter.apply(&projects).len(), projects.len());
    }

    #[test]
    fn test_unknown_category_is_empty() {
        let projects = vec![project("a", "web")];
        let mut filter = ProjectFilter::default();
        filter.select("hardware");
        assert!(filter.apply(&projects).is_empty());
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let projects = vec![project("a", "Web")];
        let mut filter = ProjectFilter::default();
        filter.select("web");
        assert!(filter.apply(&projects).is_empty());
    }
}
