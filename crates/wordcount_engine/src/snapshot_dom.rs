use ego_tree::{NodeId, NodeMut, NodeRef, Tree};
use scraper::node::Node;
use scraper::Html;

use crate::dom::{HostDom, Insert};

#[derive(Debug, Clone, PartialEq, Eq)]
enum DomNode {
    Document,
    Element(ElementData),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ElementData {
    tag: String,
    attrs: Vec<(String, String)>,
}

impl ElementData {
    fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    fn classes(&self) -> impl Iterator<Item = &str> {
        self.attr("class").unwrap_or("").split_whitespace()
    }

    fn is_absolute(&self) -> bool {
        self.attr("style")
            .map(|style| {
                style.split(';').any(|decl| match decl.split_once(':') {
                    Some((prop, value)) => {
                        prop.trim().eq_ignore_ascii_case("position")
                            && value.trim().eq_ignore_ascii_case("absolute")
                    }
                    None => false,
                })
            })
            .unwrap_or(false)
    }
}

/// Mutable in-memory DOM built from an HTML snapshot of the host page.
///
/// Removed nodes stay in the arena but are unreachable from the document
/// root, so stale handles behave like detached browser nodes.
#[derive(Debug, Clone)]
pub struct SnapshotDom {
    tree: Tree<DomNode>,
    location: String,
    selection: Option<String>,
    text_writes: usize,
}

impl SnapshotDom {
    pub fn parse(html: &str, location: impl Into<String>) -> Self {
        let parsed = Html::parse_document(html);
        let mut tree = Tree::new(DomNode::Document);
        copy_children(parsed.tree.root(), &mut tree.root_mut());
        Self {
            tree,
            location: location.into(),
            selection: None,
            text_writes: 0,
        }
    }

    /// Simulates the single-page host changing its address.
    pub fn set_location(&mut self, location: impl Into<String>) {
        self.location = location.into();
    }

    pub fn set_selection(&mut self, selection: Option<&str>) {
        self.selection = selection.map(str::to_string);
    }

    /// Parses `html` as body content and appends it under `parent`.
    /// Returns the top-level elements that were added.
    pub fn append_html(&mut self, parent: NodeId, html: &str) -> Vec<NodeId> {
        let parsed = Html::parse_document(html);
        let Some(body) = parsed
            .tree
            .root()
            .descendants()
            .find(|n| matches!(n.value(), Node::Element(el) if el.name() == "body"))
        else {
            return Vec::new();
        };
        let Some(mut target) = self.tree.get_mut(parent) else {
            return Vec::new();
        };
        let mut added = Vec::new();
        for child in body.children() {
            let Some(value) = convert(child.value()) else {
                continue;
            };
            let is_element = matches!(value, DomNode::Element(_));
            let mut appended = target.append(value);
            copy_children(child, &mut appended);
            if is_element {
                added.push(appended.id());
            }
        }
        added
    }

    /// Number of `set_text` calls so far.
    pub fn text_writes(&self) -> usize {
        self.text_writes
    }

    fn element(&self, node: NodeId) -> Option<&ElementData> {
        match self.tree.get(node)?.value() {
            DomNode::Element(el) => Some(el),
            _ => None,
        }
    }

    fn connected_elements(&self) -> impl Iterator<Item = NodeRef<'_, DomNode>> {
        self.tree
            .root()
            .descendants()
            .filter(|n| matches!(n.value(), DomNode::Element(_)))
    }
}

impl HostDom for SnapshotDom {
    type Node = NodeId;

    fn body(&self) -> Option<NodeId> {
        self.connected_elements()
            .find(|n| matches!(n.value(), DomNode::Element(el) if el.tag == "body"))
            .map(|n| n.id())
    }

    fn location(&self) -> String {
        self.location.clone()
    }

    fn elements_by_class(&self, class: &str) -> Vec<NodeId> {
        self.connected_elements()
            .filter(|n| match n.value() {
                DomNode::Element(el) => el.classes().any(|c| c == class),
                _ => false,
            })
            .map(|n| n.id())
            .collect()
    }

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.connected_elements()
            .find(|n| match n.value() {
                DomNode::Element(el) => el.attr("id") == Some(id),
                _ => false,
            })
            .map(|n| n.id())
    }

    fn element_children(&self, node: NodeId) -> Vec<NodeId> {
        self.tree
            .get(node)
            .map(|n| {
                n.children()
                    .filter(|c| matches!(c.value(), DomNode::Element(_)))
                    .map(|c| c.id())
                    .collect()
            })
            .unwrap_or_default()
    }

    fn parent_element(&self, node: NodeId) -> Option<NodeId> {
        let parent = self.tree.get(node)?.parent()?;
        match parent.value() {
            DomNode::Element(_) => Some(parent.id()),
            _ => None,
        }
    }

    fn class_list(&self, node: NodeId) -> Vec<String> {
        self.element(node)
            .map(|el| el.classes().map(str::to_string).collect())
            .unwrap_or_default()
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
        self.element(node)?.attr(name).map(str::to_string)
    }

    fn is_absolutely_positioned(&self, node: NodeId) -> bool {
        self.element(node).is_some_and(ElementData::is_absolute)
    }

    fn visible_text(&self, node: NodeId) -> String {
        let mut text = String::new();
        if let Some(node) = self.tree.get(node) {
            collect_visible_text(node, &mut text);
        }
        text
    }

    fn selection_text(&self) -> Option<String> {
        self.selection.clone()
    }

    fn is_connected(&self, node: NodeId) -> bool {
        let root = self.tree.root().id();
        match self.tree.get(node) {
            Some(n) => n.id() == root || n.ancestors().last().map(|a| a.id()) == Some(root),
            None => false,
        }
    }

    fn insert_element(
        &mut self,
        parent: NodeId,
        at: Insert,
        tag: &str,
        attributes: &[(&str, &str)],
    ) -> Option<NodeId> {
        self.element(parent)?;
        let mut parent = self.tree.get_mut(parent)?;
        let value = DomNode::Element(ElementData {
            tag: tag.to_string(),
            attrs: attributes
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        });
        let inserted = match at {
            Insert::First => parent.prepend(value),
            Insert::Last => parent.append(value),
        };
        Some(inserted.id())
    }

    fn set_text(&mut self, node: NodeId, text: &str) {
        let children: Vec<NodeId> = match self.tree.get(node) {
            Some(n) => n.children().map(|c| c.id()).collect(),
            None => return,
        };
        for child in children {
            if let Some(mut child) = self.tree.get_mut(child) {
                child.detach();
            }
        }
        if let Some(mut target) = self.tree.get_mut(node) {
            target.append(DomNode::Text(text.to_string()));
            self.text_writes += 1;
        }
    }

    fn remove(&mut self, node: NodeId) {
        if let Some(mut target) = self.tree.get_mut(node) {
            target.detach();
        }
    }
}

fn convert(node: &Node) -> Option<DomNode> {
    match node {
        Node::Element(el) => Some(DomNode::Element(ElementData {
            tag: el.name().to_string(),
            attrs: el
                .attrs()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        })),
        Node::Text(text) => {
            let text: &str = text;
            Some(DomNode::Text(text.to_string()))
        }
        _ => None,
    }
}

fn copy_children(src: NodeRef<'_, Node>, dst: &mut NodeMut<'_, DomNode>) {
    // Comments, doctypes and the like carry nothing countable.
    for child in src.children() {
        if let Some(value) = convert(child.value()) {
            let mut appended = dst.append(value);
            copy_children(child, &mut appended);
        }
    }
}

fn collect_visible_text(node: NodeRef<'_, DomNode>, out: &mut String) {
    for child in node.children() {
        match child.value() {
            DomNode::Text(text) => out.push_str(text),
            DomNode::Element(el) if el.is_absolute() => {}
            _ => collect_visible_text(child, out),
        }
    }
}
