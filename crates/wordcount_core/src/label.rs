use serde::{Deserialize, Serialize};

/// Translation key for the indicator text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelKey {
    Total,
    Selected,
}

impl LabelKey {
    pub fn as_str(self) -> &'static str {
        match self {
            LabelKey::Total => "words.count.total",
            LabelKey::Selected => "words.count.selected",
        }
    }
}

/// What the indicator currently shows. The rendered text is a pure function of this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelContent {
    pub selection_scoped: bool,
    pub count: u64,
}

impl LabelContent {
    pub fn total(count: u64) -> Self {
        Self {
            selection_scoped: false,
            count,
        }
    }

    pub fn selected(count: u64) -> Self {
        Self {
            selection_scoped: true,
            count,
        }
    }

    pub fn key(&self) -> LabelKey {
        if self.selection_scoped {
            LabelKey::Selected
        } else {
            LabelKey::Total
        }
    }
}

/// Which selection measurement wins when both are nonzero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SelectionPolicy {
    /// Block-halo count first, raw text selection only as a fallback.
    #[default]
    PreferBlocks,
    /// Raw text selection first, block-halo count only as a fallback.
    PreferText,
}

/// Result of one counting pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WordCountSnapshot {
    pub total: u64,
    pub selected_blocks: u64,
    pub selected_text: u64,
}

impl WordCountSnapshot {
    /// Selection count after applying `policy`; zero when nothing is selected.
    pub fn selected(&self, policy: SelectionPolicy) -> u64 {
        let (first, fallback) = match policy {
            SelectionPolicy::PreferBlocks => (self.selected_blocks, self.selected_text),
            SelectionPolicy::PreferText => (self.selected_text, self.selected_blocks),
        };
        if first != 0 {
            first
        } else {
            fallback
        }
    }

    /// Selection count if anything is selected, the page total otherwise.
    pub fn label(&self, policy: SelectionPolicy) -> LabelContent {
        match self.selected(policy) {
            0 => LabelContent::total(self.total),
            selected => LabelContent::selected(selected),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{LabelContent, SelectionPolicy, WordCountSnapshot};

    fn snapshot(total: u64, selected_blocks: u64, selected_text: u64) -> WordCountSnapshot {
        WordCountSnapshot {
            total,
            selected_blocks,
            selected_text,
        }
    }

    #[test]
    fn nothing_selected_shows_total() {
        let snap = snapshot(42, 0, 0);
        assert_eq!(snap.label(SelectionPolicy::PreferBlocks), LabelContent::total(42));
        assert_eq!(snap.label(SelectionPolicy::PreferText), LabelContent::total(42));
    }

    #[test]
    fn block_count_wins_by_default() {
        let snap = snapshot(100, 12, 3);
        assert_eq!(snap.label(SelectionPolicy::default()), LabelContent::selected(12));
    }

    #[test]
    fn text_selection_is_the_fallback() {
        let snap = snapshot(100, 0, 3);
        assert_eq!(snap.label(SelectionPolicy::PreferBlocks), LabelContent::selected(3));
    }

    #[test]
    fn prefer_text_flips_precedence() {
        let snap = snapshot(100, 12, 3);
        assert_eq!(snap.selected(SelectionPolicy::PreferText), 3);
        assert_eq!(snapshot(100, 12, 0).selected(SelectionPolicy::PreferText), 12);
    }

    #[test]
    fn zero_selection_keeps_total_key() {
        // A zero-word selection is indistinguishable from no selection.
        assert!(!snapshot(0, 0, 0).label(SelectionPolicy::PreferBlocks).selection_scoped);
    }
}
