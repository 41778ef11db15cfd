use std::collections::BTreeSet;

use crate::blocks::{classify_for, BlockKind};
use crate::dom::HostDom;
use crate::host::HostSignature;

/// Counts words in rendered text.
///
/// Tokens are separated by whitespace runs and by `.`, `(` and `)`, since the
/// host often glues sentence fragments together at those characters.
/// Commas and other punctuation stay attached to their word.
pub fn count_words(text: &str) -> u64 {
    text.trim()
        .split(|c: char| c.is_whitespace() || matches!(c, '.' | '(' | ')'))
        .filter(|token| !token.is_empty())
        .count() as u64
}

/// Walks block subtrees and sums the words of their editable text leaves.
#[derive(Debug, Clone, Default)]
pub struct WordCounter {
    signature: HostSignature,
}

impl WordCounter {
    pub fn new(signature: HostSignature) -> Self {
        Self { signature }
    }

    /// Top-level blocks of `root` paired with their kind.
    pub fn page_blocks<D: HostDom>(
        &self,
        dom: &D,
        root: D::Node,
    ) -> Vec<(D::Node, Option<BlockKind>)> {
        dom.element_children(root)
            .into_iter()
            .map(|block| (block, self.classify(dom, block)))
            .collect()
    }

    pub fn classify<D: HostDom>(&self, dom: &D, node: D::Node) -> Option<BlockKind> {
        let classes = dom.class_list(node);
        classify_for(&self.signature, classes.iter().map(String::as_str))
    }

    /// Total words on the page, skipping blocks whose kind is in `excluded`.
    /// Unclassified blocks always count.
    pub fn count_in_page<D: HostDom>(
        &self,
        dom: &D,
        root: D::Node,
        excluded: &BTreeSet<BlockKind>,
    ) -> u64 {
        self.page_blocks(dom, root)
            .into_iter()
            .filter(|(_, kind)| !matches!(kind, Some(kind) if excluded.contains(kind)))
            .map(|(block, _)| self.count_block(dom, block))
            .sum()
    }

    /// Words in every text leaf under `block`.
    ///
    /// Absolutely positioned elements are host overlays and are not entered,
    /// at any depth. A leaf is counted as a whole; leaves nested inside it
    /// are not revisited.
    pub fn count_block<D: HostDom>(&self, dom: &D, block: D::Node) -> u64 {
        let mut words = 0;
        let mut stack = vec![block];

        while let Some(node) = stack.pop() {
            if dom.is_absolutely_positioned(node) {
                continue;
            }
            if self.is_text_leaf(dom, node) {
                words += count_words(&dom.visible_text(node));
                continue;
            }
            stack.extend(dom.element_children(node));
        }

        words
    }

    fn is_text_leaf<D: HostDom>(&self, dom: &D, node: D::Node) -> bool {
        dom.attribute(node, &self.signature.text_leaf_attribute)
            .is_some_and(|value| !value.eq_ignore_ascii_case("false"))
    }
}

#[cfg(test)]
mod tests {
    use super::count_words;

    #[test]
    fn punctuation_boundaries_are_pinned() {
        assert_eq!(count_words("Hello, world (test)."), 3);
        assert_eq!(count_words("end.Start"), 2);
        assert_eq!(count_words("f(x)"), 2);
        assert_eq!(count_words("a,b;c"), 1);
    }

    #[test]
    fn whitespace_runs_collapse() {
        assert_eq!(count_words("  one \t two\n\nthree  "), 3);
        assert_eq!(count_words("non\u{a0}breaking"), 2);
    }

    #[test]
    fn empty_text_has_no_words() {
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words("   \n\t"), 0);
        assert_eq!(count_words("..."), 0);
        assert_eq!(count_words("( )"), 0);
    }
}
