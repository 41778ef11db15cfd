use wordcount_logging::{wc_debug, wc_warn};

use crate::dom::{HostDom, Lookup};
use crate::host::HostSignature;

/// Finds the document root and the indicator anchor in the host page.
///
/// Both must match exactly one element; anything else is reported as
/// `NotFound` and retried on the next pass. Hits are cached until
/// `invalidate` is called or the host detaches the cached element.
#[derive(Debug, Clone)]
pub struct DocumentLocator<N> {
    signature: HostSignature,
    root: Option<N>,
    anchor: Option<N>,
    root_warned: bool,
    anchor_warned: bool,
    root_queries: u64,
}

impl<N: Copy + Eq + std::hash::Hash + std::fmt::Debug> DocumentLocator<N> {
    pub fn new(signature: HostSignature) -> Self {
        Self {
            signature,
            root: None,
            anchor: None,
            root_warned: false,
            anchor_warned: false,
            root_queries: 0,
        }
    }

    pub fn signature(&self) -> &HostSignature {
        &self.signature
    }

    pub fn cached_root(&self) -> Option<N> {
        self.root
    }

    /// How many times the root was looked up in the page rather than served
    /// from the cache.
    pub fn root_queries(&self) -> u64 {
        self.root_queries
    }

    pub fn resolve_root<D: HostDom<Node = N>>(&mut self, dom: &D) -> Lookup<N> {
        if let Some(root) = self.root {
            if dom.is_connected(root) {
                return Lookup::Found(root);
            }
            wc_debug!("cached page root {:?} was detached by the host", root);
            self.root = None;
        }

        self.root_queries += 1;
        let class = &self.signature.page_root_class;
        let matches = dom.elements_by_class(class);
        let found = matches.len();
        let lookup = Lookup::exactly_one(matches);
        match lookup {
            Lookup::Found(root) => {
                self.root = Some(root);
                self.root_warned = false;
            }
            Lookup::NotFound => {
                // Zero matches is normal right after switching pages.
                warn_cardinality(&mut self.root_warned, class, found);
            }
        }
        lookup
    }

    pub fn resolve_anchor<D: HostDom<Node = N>>(&mut self, dom: &D) -> Lookup<N> {
        if let Some(anchor) = self.anchor {
            if dom.is_connected(anchor) {
                return Lookup::Found(anchor);
            }
            self.anchor = None;
        }

        let class = &self.signature.anchor_class;
        let matches = dom.elements_by_class(class);
        let found = matches.len();
        let lookup = Lookup::exactly_one(matches);
        match lookup {
            Lookup::Found(anchor) => {
                self.anchor = Some(anchor);
                self.anchor_warned = false;
            }
            Lookup::NotFound => warn_cardinality(&mut self.anchor_warned, class, found),
        }
        lookup
    }

    /// Forgets both cached handles; the next resolution queries the page.
    pub fn invalidate(&mut self) {
        self.root = None;
        self.anchor = None;
        self.root_warned = false;
        self.anchor_warned = false;
    }
}

fn warn_cardinality(warned: &mut bool, class: &str, found: usize) {
    if *warned {
        wc_debug!("expected exactly one '{}' but found {}", class, found);
    } else {
        *warned = true;
        wc_warn!("Expected exactly one '{}' but found {}", class, found);
    }
}
