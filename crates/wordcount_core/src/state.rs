use url::Url;

use crate::{LoopView, SelectionPolicy, WordCountSnapshot};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoopState {
    policy: SelectionPolicy,
    address: Option<String>,
    passes: u64,
    navigations: u64,
    last_snapshot: Option<WordCountSnapshot>,
    stopped: bool,
}

impl LoopState {
    pub fn new(policy: SelectionPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Starts tracking from the address the page was loaded at.
    pub fn with_address(policy: SelectionPolicy, address: &str) -> Self {
        Self {
            address: Some(normalize_address(address)),
            ..Self::new(policy)
        }
    }

    pub fn view(&self) -> LoopView {
        LoopView {
            address: self.address.clone(),
            passes: self.passes,
            navigations: self.navigations,
            last_snapshot: self.last_snapshot,
            stopped: self.stopped,
        }
    }

    pub fn policy(&self) -> SelectionPolicy {
        self.policy
    }

    pub fn passes(&self) -> u64 {
        self.passes
    }

    pub fn navigations(&self) -> u64 {
        self.navigations
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    pub(crate) fn begin_pass(&mut self) {
        self.passes += 1;
    }

    /// Records `raw` as the current address. Returns true when it replaced a
    /// different, previously known address.
    pub(crate) fn observe_address(&mut self, raw: &str) -> bool {
        let normalized = normalize_address(raw);
        match self.address.as_deref() {
            Some(current) if current == normalized => false,
            Some(_) => {
                self.address = Some(normalized);
                self.navigations += 1;
                self.last_snapshot = None;
                true
            }
            None => {
                self.address = Some(normalized);
                false
            }
        }
    }

    pub(crate) fn record_snapshot(&mut self, snapshot: WordCountSnapshot) {
        self.last_snapshot = Some(snapshot);
    }

    pub(crate) fn clear_snapshot(&mut self) {
        self.last_snapshot = None;
    }

    pub(crate) fn stop(&mut self) {
        self.stopped = true;
    }
}

/// Address used to decide whether the host switched documents.
///
/// The fragment is dropped since in-page anchors keep the same document open.
/// Unparsable input is compared verbatim after trimming.
pub fn normalize_address(raw: &str) -> String {
    let trimmed = raw.trim();
    match Url::parse(trimmed) {
        Ok(mut url) => {
            url.set_fragment(None);
            url.to_string()
        }
        Err(_) => trimmed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::normalize_address;

    #[test]
    fn fragment_is_ignored() {
        assert_eq!(
            normalize_address("https://www.notion.so/Page-abc#block1"),
            normalize_address("https://www.notion.so/Page-abc")
        );
    }

    #[test]
    fn query_and_path_are_significant() {
        assert_ne!(
            normalize_address("https://www.notion.so/Page-abc?p=1"),
            normalize_address("https://www.notion.so/Page-abc?p=2")
        );
        assert_ne!(
            normalize_address("https://www.notion.so/One"),
            normalize_address("https://www.notion.so/Two")
        );
    }

    #[test]
    fn unparsable_addresses_compare_verbatim() {
        assert_eq!(normalize_address("  about:blank-ish  "), "about:blank-ish");
        assert_eq!(normalize_address("not a url"), "not a url");
    }
}
