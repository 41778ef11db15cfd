use std::collections::{BTreeSet, HashSet};

use crate::blocks::BlockKind;
use crate::count::{count_words, WordCounter};
use crate::dom::HostDom;
use crate::host::HostSignature;

/// The two independent selection measurements of one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionCounts {
    /// Words in whole blocks the host marked as selected.
    pub blocks: u64,
    /// Words in the platform text selection.
    pub text: u64,
}

#[derive(Debug, Clone, Default)]
pub struct SelectionTracker {
    signature: HostSignature,
    counter: WordCounter,
}

impl SelectionTracker {
    pub fn new(signature: HostSignature) -> Self {
        Self {
            counter: WordCounter::new(signature.clone()),
            signature,
        }
    }

    pub fn count_selection<D: HostDom>(
        &self,
        dom: &D,
        root: D::Node,
        excluded: &BTreeSet<BlockKind>,
    ) -> SelectionCounts {
        let text = dom
            .selection_text()
            .map(|selection| count_words(&selection))
            .unwrap_or(0);

        let blocks = self
            .selected_blocks(dom, root)
            .into_iter()
            .filter(|block| {
                !matches!(self.counter.classify(dom, *block), Some(kind) if excluded.contains(&kind))
            })
            .map(|block| self.counter.count_block(dom, block))
            .sum();

        SelectionCounts { blocks, text }
    }

    /// Unique selectable blocks inside `root` that contain a selection halo,
    /// in the order their first halo appears.
    ///
    /// A block nested in another selected block is dropped, its words are
    /// already part of the outer block.
    pub fn selected_blocks<D: HostDom>(&self, dom: &D, root: D::Node) -> Vec<D::Node> {
        let mut seen = HashSet::new();
        let selected: Vec<D::Node> = dom
            .elements_by_class(&self.signature.selection_halo_class)
            .into_iter()
            .filter_map(|halo| self.enclosing_selectable(dom, halo))
            .filter(|block| *block != root && dom.is_inclusive_descendant(*block, root))
            .filter(|block| seen.insert(*block))
            .collect();

        selected
            .iter()
            .copied()
            .filter(|block| {
                let mut ancestor = dom.parent_element(*block);
                while let Some(node) = ancestor {
                    if seen.contains(&node) {
                        return false;
                    }
                    ancestor = dom.parent_element(node);
                }
                true
            })
            .collect()
    }

    fn enclosing_selectable<D: HostDom>(&self, dom: &D, halo: D::Node) -> Option<D::Node> {
        let mut current = dom.parent_element(halo);
        while let Some(node) = current {
            if dom.has_class(node, &self.signature.selectable_class) {
                return Some(node);
            }
            current = dom.parent_element(node);
        }
        None
    }
}
