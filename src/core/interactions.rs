//! Stateless page interactions that do not depend on loaded content.

use crate::core::dom::{Document, NodeId};
use crate::core::mount::MountPoints;
use crate::utils::error::{RenderError, Result};

pub const NAV_OPEN_CLASS: &str = "active";

/// Something the visitor did to the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Click on the mobile menu button.
    HamburgerClick,
    /// Click on a link; only in-page (`#...`) hrefs are handled.
    AnchorClick { href: String },
    /// Click on a category filter button.
    FilterClick { button: NodeId },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    NavToggled { open: bool },
    Scrolled { target: NodeId },
    Filtered { category: String, shown: usize },
    /// The event is not one the page reacts to.
    Ignored,
}

/// Flips the mobile navigation open or closed.
pub fn toggle_nav(doc: &mut Document, mounts: &MountPoints) -> EventOutcome {
    let open = doc.toggle_class(mounts.nav_links, NAV_OPEN_CLASS);
    tracing::debug!("Mobile navigation {}", if open { "opened" } else { "closed" });
    EventOutcome::NavToggled { open }
}

/// In-page links never navigate: the target is scrolled into view smoothly
/// and the mobile menu is closed. The menu closes even when the target does
/// not exist, in which case the missing selector is reported.
pub fn follow_anchor(doc: &mut Document, mounts: &MountPoints, href: &str) -> Result<EventOutcome> {
    let Some(fragment) = href.strip_prefix('#') else {
        return Ok(EventOutcome::Ignored);
    };

    doc.remove_class(mounts.nav_links, NAV_OPEN_CLASS);

    let target = doc
        .get_element_by_id(fragment)
        .ok_or_else(|| RenderError::ElementNotFound {
            selector: href.to_string(),
        })?;

    doc.scroll_into_view(target);
    Ok(EventOutcome::Scrolled { target })
}

/// All links in the page whose href points inside it.
pub fn in_page_anchors(doc: &Document) -> Vec<(NodeId, String)> {
    doc.elements_by_tag("a")
        .into_iter()
        .filter_map(|a| {
            doc.attribute(a, "href")
                .filter(|href| href.starts_with('#'))
                .map(|href| (a, href.to_string()))
        })
        .collect()
}

/// In-page links whose target id is not on the page.
pub fn dangling_anchors(doc: &Document) -> Vec<String> {
    in_page_anchors(doc)
        .into_iter()
        .filter(|(_, href)| {
            let id = &href[1..];
            id.is_empty() || doc.get_element_by_id(id).is_none()
        })
        .map(|(_, href)| href)
        .collect()
}
