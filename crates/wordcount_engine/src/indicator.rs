use wordcount_core::LabelContent;
use wordcount_logging::{wc_debug, wc_info};

use crate::dom::{HostDom, Insert, Lookup};
use crate::host::HostSignature;
use crate::i18n::Translator;
use crate::locate::DocumentLocator;

const WRAPPER_STYLE: &str = "position: absolute; top: 40px";

/// The engine's on-page label: a wrapper mounted under the anchor and the
/// text element inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndicatorHandle<N> {
    pub wrapper: N,
    pub label: N,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum IndicatorState<N> {
    Detached,
    /// Detached, and the page has already been swept for a stray wrapper.
    Cleared,
    Attached {
        handle: IndicatorHandle<N>,
        rendered: Option<LabelContent>,
    },
}

/// Owns the lifecycle of the single indicator element.
#[derive(Debug, Clone)]
pub struct IndicatorController<N> {
    signature: HostSignature,
    state: IndicatorState<N>,
}

impl<N: Copy + Eq + std::hash::Hash + std::fmt::Debug> IndicatorController<N> {
    pub fn new(signature: HostSignature) -> Self {
        Self {
            signature,
            state: IndicatorState::Detached,
        }
    }

    pub fn is_attached(&self) -> bool {
        matches!(self.state, IndicatorState::Attached { .. })
    }

    pub fn handle(&self) -> Option<IndicatorHandle<N>> {
        match &self.state {
            IndicatorState::Attached { handle, .. } => Some(*handle),
            IndicatorState::Detached | IndicatorState::Cleared => None,
        }
    }

    /// Last content written to the label, if any.
    pub fn rendered(&self) -> Option<LabelContent> {
        match &self.state {
            IndicatorState::Attached { rendered, .. } => *rendered,
            IndicatorState::Detached | IndicatorState::Cleared => None,
        }
    }

    /// Makes sure the indicator exists, reusing a previously created one.
    pub fn ensure<D: HostDom<Node = N>>(
        &mut self,
        dom: &mut D,
        locator: &mut DocumentLocator<N>,
    ) -> Lookup<IndicatorHandle<N>> {
        if let IndicatorState::Attached { handle, .. } = &self.state {
            if dom.is_connected(handle.wrapper) && dom.is_connected(handle.label) {
                return Lookup::Found(*handle);
            }
            wc_debug!("indicator {:?} was removed by the host", handle.wrapper);
            self.state = IndicatorState::Detached;
        }

        let handle = match dom.element_by_id(&self.signature.indicator_id) {
            Some(wrapper) => self.adopt(dom, wrapper),
            None => match locator.resolve_anchor(dom) {
                Lookup::Found(anchor) => self.create(dom, anchor),
                Lookup::NotFound => None,
            },
        };

        match handle {
            Some(handle) => {
                self.state = IndicatorState::Attached {
                    handle,
                    rendered: None,
                };
                Lookup::Found(handle)
            }
            None => Lookup::NotFound,
        }
    }

    /// Shows `content`, writing to the page only when it changed.
    /// Returns whether a write happened.
    pub fn render<D: HostDom<Node = N>>(
        &mut self,
        dom: &mut D,
        content: LabelContent,
        translator: &dyn Translator,
    ) -> bool {
        let IndicatorState::Attached { handle, rendered } = &mut self.state else {
            return false;
        };
        if *rendered == Some(content) {
            return false;
        }
        let text = translator.translate(content.key(), content.count);
        wc_debug!("indicator text -> {:?}", text);
        dom.set_text(handle.label, &text);
        *rendered = Some(content);
        true
    }

    /// Removes the indicator wrapper and forgets it. Returns whether anything
    /// was removed from the page.
    ///
    /// Without a handle the page is searched for a stray wrapper once; later
    /// calls skip the search until the indicator is attached again.
    pub fn teardown<D: HostDom<Node = N>>(&mut self, dom: &mut D) -> bool {
        let state = std::mem::replace(&mut self.state, IndicatorState::Cleared);
        let wrapper = match state {
            IndicatorState::Attached { handle, .. } => Some(handle.wrapper),
            IndicatorState::Detached => dom.element_by_id(&self.signature.indicator_id),
            IndicatorState::Cleared => None,
        };
        match wrapper {
            Some(wrapper) if dom.is_connected(wrapper) => {
                dom.remove(wrapper);
                wc_info!("Removed word count indicator");
                true
            }
            _ => false,
        }
    }

    fn create<D: HostDom<Node = N>>(
        &self,
        dom: &mut D,
        anchor: N,
    ) -> Option<IndicatorHandle<N>> {
        let wrapper = dom.insert_element(
            anchor,
            Insert::First,
            "div",
            &[
                ("id", self.signature.indicator_id.as_str()),
                ("style", WRAPPER_STYLE),
            ],
        )?;
        let Some(label) = self.insert_label(dom, wrapper) else {
            dom.remove(wrapper);
            return None;
        };
        wc_info!("Attached word count indicator");
        Some(IndicatorHandle { wrapper, label })
    }

    fn adopt<D: HostDom<Node = N>>(&self, dom: &mut D, wrapper: N) -> Option<IndicatorHandle<N>> {
        let existing = dom
            .element_children(wrapper)
            .into_iter()
            .find(|child| dom.has_class(*child, &self.signature.indicator_label_class));
        let label = match existing {
            Some(label) => label,
            None => self.insert_label(dom, wrapper)?,
        };
        wc_debug!("reusing indicator {:?} already in the page", wrapper);
        Some(IndicatorHandle { wrapper, label })
    }

    fn insert_label<D: HostDom<Node = N>>(&self, dom: &mut D, wrapper: N) -> Option<N> {
        dom.insert_element(
            wrapper,
            Insert::Last,
            "span",
            &[("class", self.signature.indicator_label_class.as_str())],
        )
    }
}
