use crate::core::dom::{Document, NodeId};
use crate::utils::error::{RenderError, Result};

/// Regions of the host page the renderer is allowed to populate. The
/// renderer only ever creates children of these; it never creates the
/// containers themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountPoints {
    pub nav_name: NodeId,
    pub bio: NodeId,
    pub skills_list: NodeId,
    pub projects_list: NodeId,
    pub experience_list: NodeId,
    pub email: NodeId,
    pub linkedin: NodeId,
    pub github: NodeId,
    pub footer_text: NodeId,
    pub hamburger: NodeId,
    pub nav_links: NodeId,
    pub filter_buttons: Vec<NodeId>,
}

fn missing(name: &str) -> RenderError {
    RenderError::MissingMountPoint {
        name: name.to_string(),
    }
}

fn by_id(doc: &Document, id: &str) -> Result<NodeId> {
    doc.get_element_by_id(id)
        .ok_or_else(|| missing(&format!("#{}", id)))
}

fn by_class(doc: &Document, class: &str) -> Result<NodeId> {
    doc.elements_by_class(class)
        .into_iter()
        .next()
        .ok_or_else(|| missing(&format!(".{}", class)))
}

impl MountPoints {
    /// Looks up every mount point, failing on the first one that is absent.
    pub fn resolve(doc: &Document) -> Result<Self> {
        let footer_text = doc
            .elements_by_tag("footer")
            .into_iter()
            .find_map(|footer| doc.first_descendant_by_tag(footer, "p"))
            .ok_or_else(|| missing("footer p"))?;

        let filter_buttons = doc.elements_by_class("filter-btn");
        if filter_buttons.is_empty() {
            return Err(missing(".filter-btn"));
        }

        let mounts = Self {
            nav_name: by_id(doc, "nav-name")?,
            bio: by_id(doc, "bio")?,
            skills_list: by_id(doc, "skills-list")?,
            projects_list: by_id(doc, "projects-list")?,
            experience_list: by_id(doc, "experience-list")?,
            email: by_id(doc, "email")?,
            linkedin: by_id(doc, "linkedin")?,
            github: by_id(doc, "github")?,
            footer_text,
            hamburger: by_class(doc, "hamburger")?,
            nav_links: by_class(doc, "nav-links")?,
            filter_buttons,
        };

        tracing::debug!(
            "Resolved mount points ({} filter buttons)",
            mounts.filter_buttons.len()
        );
        Ok(mounts)
    }

    pub fn filter_button(&self, doc: &Document, category: &str) -> Option<NodeId> {
        self.filter_buttons
            .iter()
            .copied()
            .find(|b| doc.attribute(*b, "data-category") == Some(category))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::shell::portfolio_shell;

    #[test]
    fn test_missing_bio_is_named() {
        let mut doc = portfolio_shell(&["all".to_string()]);
        let bio = doc.get_element_by_id("bio").unwrap();
        doc.detach(bio);

        match MountPoints::resolve(&doc) {
            Err(RenderError::MissingMountPoint { name }) => assert_eq!(name, "#bio"),
            other => panic!("expected missing mount point, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_footer_paragraph() {
        let mut doc = portfolio_shell(&["all".to_string()]);
        let footer = doc.elements_by_tag("footer")[0];
        doc.clear_children(footer);

        let err = MountPoints::resolve(&doc).unwrap_err();
        assert_eq!(err.to_string(), "Host page is missing mount point 'footer p'");
    }

    #[test]
    fn test_empty_document_fails_fast() {
        let doc = Document::new();
        assert!(matches!(
            MountPoints::resolve(&doc),
            Err(RenderError::MissingMountPoint { .. })
        ));
    }

    #[test]
    fn test_filter_button_lookup() {
        let categories = vec!["all".to_string(), "web".to_string()];
        let doc = portfolio_shell(&categories);
        let mounts = MountPoints::resolve(&doc).unwrap();

        let web = mounts.filter_button(&doc, "web").unwrap();
        assert_eq!(doc.attribute(web, "data-category"), Some("web"));
        assert!(mounts.filter_button(&doc, "design").is_none());
    }
}
