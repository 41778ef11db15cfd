/// Reserved names the host page uses for the structures the engine probes.
///
/// Everything host-specific lives here so a host redesign only touches this
/// table. None of these are guaranteed to exist at any given moment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostSignature {
    /// Class of the single container holding the document's blocks.
    pub page_root_class: String,
    /// Class of the single element the indicator is mounted under.
    pub anchor_class: String,
    /// First segment of block-kind marker classes (`<namespace>-<kind>-<suffix>`).
    pub block_namespace: String,
    /// Last segment of block-kind marker classes.
    pub block_suffix: String,
    /// Class of blocks the host lets the user select as a whole.
    pub selectable_class: String,
    /// Class of the highlight overlay drawn inside a selected block.
    pub selection_halo_class: String,
    /// Attribute marking editable text leaves.
    pub text_leaf_attribute: String,
    /// Element id reserved for the indicator wrapper.
    pub indicator_id: String,
    /// Class of the text element inside the indicator wrapper.
    pub indicator_label_class: String,
}

impl Default for HostSignature {
    fn default() -> Self {
        Self {
            page_root_class: "notion-page-content".to_string(),
            anchor_class: "shadow-cursor-breadcrumb".to_string(),
            block_namespace: "notion".to_string(),
            block_suffix: "block".to_string(),
            selectable_class: "notion-selectable".to_string(),
            selection_halo_class: "notion-selectable-halo".to_string(),
            text_leaf_attribute: "data-content-editable-leaf".to_string(),
            indicator_id: "notion-word-count-label".to_string(),
            indicator_label_class: "notion-word-count-text".to_string(),
        }
    }
}
