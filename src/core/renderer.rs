use crate::core::dom::{Document, NodeId};
use crate::core::filter::ProjectFilter;
use crate::core::mount::MountPoints;
use crate::domain::model::{ContentDocument, Experience, Project, Skill};

pub const LOADING_CLASS: &str = "loading";
pub const ERROR_CLASS: &str = "error";
pub const NO_RESULTS_CLASS: &str = "no-results";
pub const NO_RESULTS_TEXT: &str = "No projects found in this category.";
pub const ERROR_TEXT: &str = "Failed to load content. Please try again later.";
pub const DEFAULT_PLACEHOLDER_IMAGE: &str =
    "https://via.placeholder.com/300x200?text=Project+Image";

#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Image a card falls back to when its own image fails to load.
    pub placeholder_image: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            placeholder_image: DEFAULT_PLACEHOLDER_IMAGE.to_string(),
        }
    }
}

/// A skill bar waiting for its deferred width change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillTransition {
    pub fill: NodeId,
    pub level: u8,
}

/// Counts of what a populate pass rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderSummary {
    pub skills: usize,
    pub projects: usize,
    pub experience: usize,
}

/// Projects a [`ContentDocument`] onto the page's mount points. Holds no
/// page state of its own.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    options: RenderOptions,
}

impl Renderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Appends a loading indicator to every section. Returns how many were added.
    pub fn show_loading(&self, doc: &mut Document) -> usize {
        let sections = doc.elements_by_tag("section");
        for section in &sections {
            let loading = doc.create_element("div");
            doc.add_class(loading, LOADING_CLASS);
            doc.set_text(loading, "Loading");
            doc.append_child(*section, loading);
        }
        sections.len()
    }

    pub fn clear_loading(&self, doc: &mut Document) -> usize {
        self.remove_by_class(doc, LOADING_CLASS)
    }

    /// One generic error placeholder per section, replacing any left over
    /// from an earlier failed load.
    pub fn show_error(&self, doc: &mut Document) {
        self.remove_by_class(doc, ERROR_CLASS);
        for section in doc.elements_by_tag("section") {
            let error = doc.create_element("div");
            doc.add_class(error, ERROR_CLASS);
            doc.set_text(error, ERROR_TEXT);
            doc.append_child(section, error);
        }
    }

    fn remove_by_class(&self, doc: &mut Document, class: &str) -> usize {
        let nodes = doc.elements_by_class(class);
        for node in &nodes {
            doc.remove(*node);
        }
        nodes.len()
    }

    /// Empties the list regions so nothing from a previous load survives.
    pub fn clear_lists(&self, doc: &mut Document, mounts: &MountPoints) {
        doc.clear_children(mounts.skills_list);
        doc.clear_children(mounts.projects_list);
        doc.clear_children(mounts.experience_list);
    }

    /// Fills every region from `content`. Skill bars start at 0%; the
    /// returned transitions carry their target widths.
    pub fn populate(
        &self,
        doc: &mut Document,
        mounts: &MountPoints,
        content: &ContentDocument,
        filter: &ProjectFilter,
        year: i32,
    ) -> (RenderSummary, Vec<SkillTransition>) {
        self.remove_by_class(doc, ERROR_CLASS);
        self.clear_lists(doc, mounts);

        let personal = &content.personal;
        doc.set_text(mounts.nav_name, personal.name.as_str());
        self.update_metadata(doc, mounts, &personal.name, year);
        doc.set_text(mounts.bio, personal.bio.as_str());

        let transitions = self.render_skills(doc, mounts, &content.skills);
        let projects = self.render_projects(doc, mounts, &content.projects, filter);
        let experience = self.render_experience(doc, mounts, &content.experience);

        doc.set_text(mounts.email, personal.email.as_str());
        doc.set_attribute(mounts.email, "href", format!("mailto:{}", personal.email));
        doc.set_attribute(mounts.linkedin, "href", personal.social.linkedin.as_str());
        doc.set_attribute(mounts.github, "href", personal.social.github.as_str());

        let summary = RenderSummary {
            skills: transitions.len(),
            projects,
            experience,
        };
        (summary, transitions)
    }

    pub fn update_metadata(&self, doc: &mut Document, mounts: &MountPoints, name: &str, year: i32) {
        doc.set_title(format!("{} - Portfolio", name));
        doc.set_text(
            mounts.footer_text,
            format!("© {} {}. All rights reserved.", year, name),
        );
    }

    fn render_skills(
        &self,
        doc: &mut Document,
        mounts: &MountPoints,
        skills: &[Skill],
    ) -> Vec<SkillTransition> {
        let mut transitions = Vec::with_capacity(skills.len());

        for skill in skills {
            if !skill.is_level_in_range() {
                tracing::warn!(
                    "Skill '{}' has level {} outside 0-100, clamping",
                    skill.name,
                    skill.level
                );
            }

            let skill_div = doc.create_element("div");
            doc.add_class(skill_div, "skill");

            let heading = doc.create_element("h3");
            doc.set_text(heading, skill.name.as_str());
            doc.append_child(skill_div, heading);

            let bar = doc.create_element("div");
            doc.add_class(bar, "skill-bar");
            let fill = doc.create_element("div");
            doc.add_class(fill, "skill-fill");
            doc.set_style(fill, "width", "0%");
            doc.append_child(bar, fill);
            doc.append_child(skill_div, bar);

            doc.append_child(mounts.skills_list, skill_div);
            transitions.push(SkillTransition {
                fill,
                level: skill.clamped_level(),
            });
        }

        transitions
    }

    /// Re-renders the project list for the current filter. Returns the
    /// number of cards shown.
    pub fn render_projects(
        &self,
        doc: &mut Document,
        mounts: &MountPoints,
        projects: &[Project],
        filter: &ProjectFilter,
    ) -> usize {
        doc.clear_children(mounts.projects_list);

        let visible = filter.apply(projects);
        if visible.is_empty() {
            let p = doc.create_element("p");
            doc.add_class(p, NO_RESULTS_CLASS);
            doc.set_text(p, NO_RESULTS_TEXT);
            doc.append_child(mounts.projects_list, p);
            return 0;
        }

        for project in &visible {
            let card = self.project_card(doc, project);
            doc.append_child(mounts.projects_list, card);
        }
        visible.len()
    }

    fn project_card(&self, doc: &mut Document, project: &Project) -> NodeId {
        let card = doc.create_element("div");
        doc.add_class(card, "project");
        doc.set_attribute(card, "data-category", project.category.as_str());

        let img = doc.create_element("img");
        doc.set_attribute(img, "src", project.image.as_str());
        doc.set_attribute(img, "alt", project.title.as_str());
        doc.set_attribute(
            img,
            "data-fallback-src",
            self.options.placeholder_image.as_str(),
        );
        doc.append_child(card, img);

        let info = doc.create_element("div");
        doc.add_class(info, "project-info");

        let title = doc.create_element("h3");
        doc.set_text(title, project.title.as_str());
        doc.append_child(info, title);

        let description = doc.create_element("p");
        doc.set_text(description, project.description.as_str());
        doc.append_child(info, description);

        let link = doc.create_element("a");
        doc.add_class(link, "project-link");
        doc.set_attribute(link, "href", project.link.as_str());
        doc.set_attribute(link, "target", "_blank");
        doc.set_text(link, "View Project");
        doc.append_child(info, link);

        doc.append_child(card, info);
        card
    }

    fn render_experience(
        &self,
        doc: &mut Document,
        mounts: &MountPoints,
        experience: &[Experience],
    ) -> usize {
        for entry in experience {
            let item = doc.create_element("div");
            doc.add_class(item, "experience-item");

            let heading = doc.create_element("h3");
            doc.set_text(heading, format!("{} at {}", entry.job, entry.company));
            doc.append_child(item, heading);

            for text in [&entry.duration, &entry.description] {
                let p = doc.create_element("p");
                doc.set_text(p, text.as_str());
                doc.append_child(item, p);
            }

            doc.append_child(mounts.experience_list, item);
        }
        experience.len()
    }

    /// Marks exactly one filter button active.
    pub fn mark_active_filter(&self, doc: &mut Document, mounts: &MountPoints, active: NodeId) {
        for button in &mounts.filter_buttons {
            doc.remove_class(*button, "active");
        }
        doc.add_class(active, "active");
    }
}
