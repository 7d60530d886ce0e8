//! Default host page: navigation, one `section` per content region and a
//! footer. Provides every mount point [`MountPoints`] requires.
//!
//! [`MountPoints`]: crate::core::mount::MountPoints

use crate::core::dom::{Document, NodeId};
use crate::core::filter::ALL_CATEGORIES;

const SECTIONS: &[(&str, &str)] = &[
    ("about", "About Me"),
    ("skills", "Skills"),
    ("projects", "Projects"),
    ("experience", "Experience"),
    ("contact", "Contact"),
];

pub fn portfolio_shell(filter_categories: &[String]) -> Document {
    let mut doc = Document::new();
    let root = doc.root();

    let nav = build_nav(&mut doc);
    doc.append_child(root, nav);

    for (id, heading) in SECTIONS {
        let section = doc.create_element("section");
        doc.set_id(section, id);
        let h2 = doc.create_element("h2");
        doc.set_text(h2, *heading);
        doc.append_child(section, h2);

        match *id {
            "about" => append_slot(&mut doc, section, "p", "bio"),
            "skills" => append_slot(&mut doc, section, "div", "skills-list"),
            "projects" => {
                let filters = build_filters(&mut doc, filter_categories);
                doc.append_child(section, filters);
                append_slot(&mut doc, section, "div", "projects-list");
            }
            "experience" => append_slot(&mut doc, section, "div", "experience-list"),
            _ => {
                let contact = build_contact(&mut doc);
                doc.append_child(section, contact);
            }
        }
        doc.append_child(root, section);
    }

    let footer = doc.create_element("footer");
    let p = doc.create_element("p");
    doc.append_child(footer, p);
    doc.append_child(root, footer);

    doc
}

fn append_slot(doc: &mut Document, parent: NodeId, tag: &str, id: &str) {
    let slot = doc.create_element(tag);
    doc.set_id(slot, id);
    doc.append_child(parent, slot);
}

fn build_nav(doc: &mut Document) -> NodeId {
    let nav = doc.create_element("nav");
    doc.add_class(nav, "navbar");

    let logo = doc.create_element("div");
    doc.add_class(logo, "logo");
    let name = doc.create_element("span");
    doc.set_id(name, "nav-name");
    doc.append_child(logo, name);
    doc.append_child(nav, logo);

    let hamburger = doc.create_element("div");
    doc.add_class(hamburger, "hamburger");
    for _ in 0..3 {
        let bar = doc.create_element("span");
        doc.append_child(hamburger, bar);
    }
    doc.append_child(nav, hamburger);

    let links = doc.create_element("ul");
    doc.add_class(links, "nav-links");
    for (id, heading) in SECTIONS {
        let li = doc.create_element("li");
        let a = doc.create_element("a");
        doc.set_attribute(a, "href", format!("#{}", id));
        doc.set_text(a, heading.trim_end_matches(" Me"));
        doc.append_child(li, a);
        doc.append_child(links, li);
    }
    doc.append_child(nav, links);

    nav
}

fn build_filters(doc: &mut Document, categories: &[String]) -> NodeId {
    let filters = doc.create_element("div");
    doc.add_class(filters, "filters");

    for category in categories {
        let button = doc.create_element("button");
        doc.add_class(button, "filter-btn");
        if category == ALL_CATEGORIES {
            doc.add_class(button, "active");
        }
        doc.set_attribute(button, "data-category", category.as_str());
        doc.set_text(button, capitalize(category));
        doc.append_child(filters, button);
    }

    filters
}

fn build_contact(doc: &mut Document) -> NodeId {
    let wrapper = doc.create_element("div");
    doc.add_class(wrapper, "contact-info");

    let p = doc.create_element("p");
    let email = doc.create_element("a");
    doc.set_id(email, "email");
    doc.append_child(p, email);
    doc.append_child(wrapper, p);

    let social = doc.create_element("div");
    doc.add_class(social, "social-links");
    for (id, label) in [("linkedin", "LinkedIn"), ("github", "GitHub")] {
        let a = doc.create_element("a");
        doc.set_id(a, id);
        doc.set_attribute(a, "target", "_blank");
        doc.set_text(a, label);
        doc.append_child(social, a);
    }
    doc.append_child(wrapper, social);

    wrapper
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
