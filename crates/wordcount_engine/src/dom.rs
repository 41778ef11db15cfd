use std::fmt::Debug;
use std::hash::Hash;

/// Outcome of looking something up in a page the engine does not own.
///
/// `NotFound` covers both "absent" and "ambiguous"; it is a transient state
/// the host passes through during navigation, not a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<T> {
    Found(T),
    NotFound,
}

impl<T> Lookup<T> {
    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }

    pub fn found(self) -> Option<T> {
        match self {
            Lookup::Found(value) => Some(value),
            Lookup::NotFound => None,
        }
    }

    /// Maps a query result to `Found` only when it has exactly one element.
    pub fn exactly_one(mut matches: Vec<T>) -> Self {
        if matches.len() == 1 {
            matches.pop().map_or(Lookup::NotFound, Lookup::Found)
        } else {
            Lookup::NotFound
        }
    }
}

/// Where `HostDom::insert_element` places the new element among its siblings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insert {
    First,
    Last,
}

/// The slice of the browser DOM the engine needs.
///
/// Node handles are cheap copies that the host may invalidate at any time;
/// queries on a handle that is no longer part of the document must return
/// empty results rather than fail.
pub trait HostDom {
    type Node: Copy + Eq + Hash + Debug;

    /// The `<body>` element, if the document has one.
    fn body(&self) -> Option<Self::Node>;

    /// Current address of the page.
    fn location(&self) -> String;

    /// Connected elements carrying `class`, in document order.
    fn elements_by_class(&self, class: &str) -> Vec<Self::Node>;

    /// First connected element whose id is `id`.
    fn element_by_id(&self, id: &str) -> Option<Self::Node>;

    fn element_children(&self, node: Self::Node) -> Vec<Self::Node>;

    fn parent_element(&self, node: Self::Node) -> Option<Self::Node>;

    /// Class tokens in attribute order.
    fn class_list(&self, node: Self::Node) -> Vec<String>;

    fn attribute(&self, node: Self::Node, name: &str) -> Option<String>;

    /// True for elements styled `position: absolute`.
    fn is_absolutely_positioned(&self, node: Self::Node) -> bool;

    /// Concatenated text of descendant text nodes in document order,
    /// leaving out the subtrees of absolutely positioned descendants.
    fn visible_text(&self, node: Self::Node) -> String;

    /// Stringified platform text selection, if any.
    fn selection_text(&self) -> Option<String>;

    /// Whether `node` is still reachable from the document.
    fn is_connected(&self, node: Self::Node) -> bool;

    fn insert_element(
        &mut self,
        parent: Self::Node,
        at: Insert,
        tag: &str,
        attributes: &[(&str, &str)],
    ) -> Option<Self::Node>;

    /// Replaces all children of `node` with a single text node.
    fn set_text(&mut self, node: Self::Node, text: &str);

    /// Detaches `node` and its subtree from the document.
    fn remove(&mut self, node: Self::Node);

    fn has_class(&self, node: Self::Node, class: &str) -> bool {
        self.class_list(node).iter().any(|c| c == class)
    }

    /// Whether `node` is `ancestor` or lies beneath it.
    fn is_inclusive_descendant(&self, node: Self::Node, ancestor: Self::Node) -> bool {
        let mut current = Some(node);
        while let Some(candidate) = current {
            if candidate == ancestor {
                return true;
            }
            current = self.parent_element(candidate);
        }
        false
    }
}
