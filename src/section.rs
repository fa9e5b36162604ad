//! Derives the visible subset of a section's project list from the search
//! term and the selected tech-stack tag. Pure functions over slices; the
//! repository's ordering is never re-sorted.

use crate::models::{Project, Section};

/// Filter state for one section page.
#[derive(Debug, Clone, Default)]
pub struct SectionFilter {
    pub search: String,
    pub tech: Option<String>,
}

impl SectionFilter {
    pub fn new(search: impl Into<String>, tech: Option<String>) -> Self {
        Self {
            search: search.into(),
            tech,
        }
    }

    fn matches(&self, project: &Project) -> bool {
        let term = self.search.to_lowercase();
        let matches_search = term.is_empty()
            || project.title.to_lowercase().contains(&term)
            || project.description.to_lowercase().contains(&term);

        let matches_tech = match &self.tech {
            Some(tag) => project.tech_stack.iter().any(|t| t == tag),
            None => true,
        };

        matches_search && matches_tech
    }

    /// Apply the filter to a slice already restricted to one section,
    /// preserving order.
    pub fn apply<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        projects.iter().filter(|p| self.matches(p)).collect()
    }
}

/// Restrict the full list to one section, preserving order.
pub fn section_projects(projects: &[Project], section: Section) -> Vec<&Project> {
    projects.iter().filter(|p| p.section == section).collect()
}

/// The selectable tech-stack tags for a project list: de-duplicated,
/// lexicographically sorted union of every tag that appears.
pub fn tech_options<'a, I>(projects: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a Project>,
{
    let mut tags: Vec<String> = projects
        .into_iter()
        .flat_map(|p| p.tech_stack.iter().cloned())
        .collect();
    tags.sort();
    tags.dedup();
    tags
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed::sample_projects;

    fn project(title: &str, description: &str, tech: &[&str], section: Section) -> Project {
        Project {
            id: ulid::Ulid::new().to_string(),
            title: title.to_string(),
            description: description.to_string(),
            tech_stack: tech.iter().map(|t| t.to_string()).collect(),
            section,
            author: "tester".to_string(),
            uploaded_at: "2024-02-01T00:00:00Z".to_string(),
            thumbnail: String::new(),
            link: None,
            github_repo: None,
            files: Vec::new(),
            upload_method: None,
            likes: 0,
            views: 0,
        }
    }

    #[test]
    fn test_section_projects_restricts_and_keeps_order() {
        let projects = sample_projects();
        let frontend = section_projects(&projects, Section::Frontend);
        assert_eq!(frontend.len(), 1);
        assert!(frontend.iter().all(|p| p.section == Section::Frontend));
    }

    #[test]
    fn test_search_matches_title_or_description_case_insensitive() {
        let projects = vec![
            project("Dashboard", "admin panel", &[], Section::Frontend),
            project("Blog", "a personal DASHBOARD of posts", &[], Section::Frontend),
            project("Shop", "storefront", &[], Section::Frontend),
        ];

        let filter = SectionFilter::new("dashboard", None);
        let visible = filter.apply(&projects);
        assert_eq!(visible.len(), 2);
        assert_eq!(visible[0].title, "Dashboard");
        assert_eq!(visible[1].title, "Blog");
    }

    #[test]
    fn test_empty_search_matches_all() {
        let projects = sample_projects();
        let filter = SectionFilter::default();
        assert_eq!(filter.apply(&projects).len(), projects.len());
    }

    #[test]
    fn test_tech_filter_requires_exact_membership() {
        let projects = vec![
            project("A", "", &["React", "TypeScript"], Section::Frontend),
            project("B", "", &["ReactNative"], Section::Frontend),
        ];

        let filter = SectionFilter::new("", Some("React".to_string()));
        let visible = filter.apply(&projects);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "A");
    }

    #[test]
    fn test_search_and_tech_filters_combine() {
        let projects = vec![
            project("Chat App", "realtime chat", &["Rust"], Section::Backend),
            project("Chat Bot", "assistant", &["Python"], Section::Backend),
            project("Queue", "realtime jobs", &["Rust"], Section::Backend),
        ];

        let filter = SectionFilter::new("chat", Some("Rust".to_string()));
        let visible = filter.apply(&projects);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "Chat App");
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let projects = sample_projects();
        let filter = SectionFilter::new("e", None);

        let once: Vec<String> = filter.apply(&projects).iter().map(|p| p.id.clone()).collect();
        let owned: Vec<Project> = filter.apply(&projects).into_iter().cloned().collect();
        let twice: Vec<String> = filter.apply(&owned).iter().map(|p| p.id.clone()).collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_tech_options_sorted_and_deduped() {
        let projects = vec![
            project("A", "", &["React", "Chart.js"], Section::Frontend),
            project("B", "", &["React", "Axum"], Section::Frontend),
        ];

        let options = tech_options(projects.iter());
        assert_eq!(options, ["Axum", "Chart.js", "React"]);
    }

    #[test]
    fn test_tech_options_empty_input() {
        assert!(tech_options(std::iter::empty()).is_empty());
    }

    #[test]
    fn test_dashboard_search_hits_exactly_the_sample_record() {
        let projects = sample_projects();
        let frontend: Vec<Project> = section_projects(&projects, Section::Frontend)
            .into_iter()
            .cloned()
            .collect();

        let filter = SectionFilter::new("dashboard", None);
        let visible = filter.apply(&frontend);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "Modern E-commerce Dashboard");
    }
}
