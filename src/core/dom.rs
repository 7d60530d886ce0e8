//! In-memory page tree.
//!
//! Nodes live in an arena and are addressed by [`NodeId`]. Detaching a node
//! only unlinks it from its parent so it can be appended again. Removing or
//! clearing releases the whole subtree; its slots are reused by later
//! `create_element` calls and any [`NodeId`] still pointing at them goes stale.
//! Stale ids read as empty and writes through them are ignored.

use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    index: usize,
    generation: u32,
}

#[derive(Debug, Clone, Default)]
pub struct Element {
    pub tag: String,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub attributes: BTreeMap<String, String>,
    pub style: BTreeMap<String, String>,
    pub text: Option<String>,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
}

impl Element {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            ..Default::default()
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

#[derive(Debug, Clone)]
struct Slot {
    generation: u32,
    element: Option<Element>,
}

/// A pending smooth scroll to `target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollRequest {
    pub target: NodeId,
}

const VOID_TAGS: &[&str] = &["img", "meta", "link", "br", "hr", "input"];

#[derive(Debug, Clone)]
pub struct Document {
    slots: Vec<Slot>,
    free: Vec<usize>,
    root: NodeId,
    title: String,
    scroll: Option<ScrollRequest>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// An empty document whose root is `<body>`.
    pub fn new() -> Self {
        Self {
            slots: vec![Slot {
                generation: 0,
                element: Some(Element::new("body")),
            }],
            free: Vec::new(),
            root: NodeId {
                index: 0,
                generation: 0,
            },
            title: String::new(),
            scroll: None,
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn scroll_request(&self) -> Option<ScrollRequest> {
        self.scroll
    }

    pub fn scroll_into_view(&mut self, target: NodeId) {
        self.scroll = Some(ScrollRequest { target });
    }

    pub fn create_element(&mut self, tag: &str) -> NodeId {
        let element = Some(Element::new(tag));
        match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index];
                slot.generation = slot.generation.wrapping_add(1);
                slot.element = element;
                NodeId {
                    index,
                    generation: slot.generation,
                }
            }
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    element,
                });
                NodeId {
                    index: self.slots.len() - 1,
                    generation: 0,
                }
            }
        }
    }

    /// Live nodes, attached or not.
    pub fn node_count(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// Slots ever allocated; only grows when no released slot is free.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    fn get(&self, node: NodeId) -> Option<&Element> {
        self.slots
            .get(node.index)
            .filter(|slot| slot.generation == node.generation)
            .and_then(|slot| slot.element.as_ref())
    }

    fn get_mut(&mut self, node: NodeId) -> Option<&mut Element> {
        self.slots
            .get_mut(node.index)
            .filter(|slot| slot.generation == node.generation)
            .and_then(|slot| slot.element.as_mut())
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.get(node).is_some()
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.get(node).and_then(|e| e.parent)
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.get(node).map(|e| e.children.as_slice()).unwrap_or(&[])
    }

    /// Moves `child` under `parent`, detaching it from any previous parent.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if !self.contains(parent) || !self.contains(child) {
            return;
        }
        self.detach(child);
        if let Some(element) = self.get_mut(child) {
            element.parent = Some(parent);
        }
        if let Some(element) = self.get_mut(parent) {
            element.children.push(child);
        }
    }

    pub fn detach(&mut self, node: NodeId) {
        let parent = self.get_mut(node).and_then(|e| e.parent.take());
        if let Some(element) = parent.and_then(|p| self.get_mut(p)) {
            element.children.retain(|c| *c != node);
        }
    }

    /// Detaches `node` and releases it together with its subtree.
    pub fn remove(&mut self, node: NodeId) {
        if node == self.root {
            return;
        }
        self.detach(node);
        self.release(node);
    }

    fn release(&mut self, node: NodeId) {
        let mut stack = vec![node];
        while let Some(next) = stack.pop() {
            let Some(slot) = self
                .slots
                .get_mut(next.index)
                .filter(|slot| slot.generation == next.generation)
            else {
                continue;
            };
            if let Some(element) = slot.element.take() {
                stack.extend(element.children);
                self.free.push(next.index);
            }
        }
    }

    /// Removes and releases every child of `node`.
    pub fn clear_children(&mut self, node: NodeId) {
        let children = match self.get_mut(node) {
            Some(element) => std::mem::take(&mut element.children),
            None => return,
        };
        for child in children {
            self.release(child);
        }
    }

    /// Replaces the node's content with a single text value, like assigning
    /// `textContent`.
    pub fn set_text(&mut self, node: NodeId, text: impl Into<String>) {
        self.clear_children(node);
        if let Some(element) = self.get_mut(node) {
            element.text = Some(text.into());
        }
    }

    pub fn text_content(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(node, &mut out);
        out
    }

    fn collect_text(&self, node: NodeId, out: &mut String) {
        let Some(element) = self.get(node) else {
            return;
        };
        if let Some(text) = &element.text {
            out.push_str(text);
        }
        for child in &element.children {
            self.collect_text(*child, out);
        }
    }

    pub fn set_id(&mut self, node: NodeId, id: &str) {
        if let Some(element) = self.get_mut(node) {
            element.id = Some(id.to_string());
        }
    }

    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: impl Into<String>) {
        if let Some(element) = self.get_mut(node) {
            element.attributes.insert(name.to_string(), value.into());
        }
    }

    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.get(node)?.attributes.get(name).map(String::as_str)
    }

    pub fn set_style(&mut self, node: NodeId, property: &str, value: impl Into<String>) {
        if let Some(element) = self.get_mut(node) {
            element.style.insert(property.to_string(), value.into());
        }
    }

    pub fn style(&self, node: NodeId, property: &str) -> Option<&str> {
        self.get(node)?.style.get(property).map(String::as_str)
    }

    pub fn add_class(&mut self, node: NodeId, class: &str) {
        if let Some(element) = self.get_mut(node) {
            if !element.has_class(class) {
                element.classes.push(class.to_string());
            }
        }
    }

    pub fn remove_class(&mut self, node: NodeId, class: &str) {
        if let Some(element) = self.get_mut(node) {
            element.classes.retain(|c| c != class);
        }
    }

    /// Returns whether the class is present afterwards.
    pub fn toggle_class(&mut self, node: NodeId, class: &str) -> bool {
        if self.has_class(node, class) {
            self.remove_class(node, class);
            false
        } else {
            self.add_class(node, class);
            true
        }
    }

    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.get(node).is_some_and(|e| e.has_class(class))
    }

    /// Connected nodes below `node` in document order, `node` excluded.
    pub fn descendants(&self, node: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(node).iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.children(next).iter().rev().copied());
        }
        out
    }

    fn find_all(&self, predicate: impl Fn(&Element) -> bool) -> Vec<NodeId> {
        self.descendants(self.root)
            .into_iter()
            .filter(|n| self.get(*n).is_some_and(&predicate))
            .collect()
    }

    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.find_all(|e| e.id.as_deref() == Some(id))
            .into_iter()
            .next()
    }

    pub fn elements_by_class(&self, class: &str) -> Vec<NodeId> {
        self.find_all(|e| e.has_class(class))
    }

    pub fn elements_by_tag(&self, tag: &str) -> Vec<NodeId> {
        let tag = tag.to_ascii_lowercase();
        self.find_all(|e| e.tag == tag)
    }

    pub fn first_descendant_by_tag(&self, node: NodeId, tag: &str) -> Option<NodeId> {
        self.descendants(node)
            .into_iter()
            .find(|n| self.get(*n).is_some_and(|e| e.tag == tag))
    }

    pub fn first_descendant_by_class(&self, node: NodeId, class: &str) -> Option<NodeId> {
        self.descendants(node)
            .into_iter()
            .find(|n| self.get(*n).is_some_and(|e| e.has_class(class)))
    }

    /// False for detached nodes and for stale ids.
    pub fn is_connected(&self, node: NodeId) -> bool {
        let mut current = node;
        loop {
            if current == self.root {
                return true;
            }
            match self.get(current).and_then(|e| e.parent) {
                Some(parent) => current = parent,
                None => return false,
            }
        }
    }

    pub fn outer_html(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.write_node(node, &mut out);
        out
    }

    pub fn to_html(&self) -> String {
        let mut out = String::from("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        out.push_str("<meta charset=\"UTF-8\">\n");
        out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
        out.push_str(&format!("<title>{}</title>\n", escape_html(&self.title)));
        out.push_str("<link rel=\"stylesheet\" href=\"styles.css\">\n</head>\n");
        self.write_node(self.root, &mut out);
        out.push_str("\n</html>\n");
        out
    }

    fn write_node(&self, node: NodeId, out: &mut String) {
        let Some(element) = self.get(node) else {
            return;
        };
        out.push('<');
        out.push_str(&element.tag);
        if let Some(id) = &element.id {
            out.push_str(&format!(" id=\"{}\"", escape_html(id)));
        }
        if !element.classes.is_empty() {
            out.push_str(&format!(
                " class=\"{}\"",
                escape_html(&element.classes.join(" "))
            ));
        }
        for (name, value) in &element.attributes {
            out.push_str(&format!(" {}=\"{}\"", name, escape_html(value)));
        }
        if !element.style.is_empty() {
            let style = element
                .style
                .iter()
                .map(|(k, v)| format!("{}: {};", k, v))
                .collect::<Vec<_>>()
                .join(" ");
            out.push_str(&format!(" style=\"{}\"", escape_html(&style)));
        }
        out.push('>');

        if VOID_TAGS.contains(&element.tag.as_str()) {
            return;
        }

        if let Some(text) = &element.text {
            out.push_str(&escape_html(text));
        }
        for child in &element.children {
            self.write_node(*child, out);
        }
        out.push_str(&format!("</{}>", element.tag));
    }
}

pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
