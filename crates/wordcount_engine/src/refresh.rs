use std::collections::BTreeSet;
use std::fmt::Debug;
use std::hash::Hash;

use wordcount_core::{update, Effect, LabelContent, LoopState, LoopView, Msg, WordCountSnapshot};
use wordcount_logging::{set_pass, wc_info, wc_trace};

use crate::blocks::BlockKind;
use crate::count::WordCounter;
use crate::dom::{HostDom, Lookup};
use crate::error::EngineError;
use crate::host::HostSignature;
use crate::i18n::Translator;
use crate::indicator::IndicatorController;
use crate::locate::DocumentLocator;
use crate::selection::SelectionTracker;
use crate::settings::CountSettings;

/// What a call into the loop did to the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The indicator text was written.
    Rendered(LabelContent),
    /// The indicator already showed this content.
    Unchanged(LabelContent),
    /// Page structure was missing; the indicator was torn down if present.
    Deferred { torn_down: bool },
    /// Nothing to do.
    Idle,
    /// The loop was unloaded.
    Stopped,
}

/// Engine state for one page: cached handles, indicator and refresh state.
pub struct RefreshLoop<N> {
    state: LoopState,
    locator: DocumentLocator<N>,
    counter: WordCounter,
    selection: SelectionTracker,
    indicator: IndicatorController<N>,
    translator: Box<dyn Translator>,
    excluded: BTreeSet<BlockKind>,
}

impl<N: Copy + Eq + Hash + Debug> RefreshLoop<N> {
    /// Starts tracking `dom` with the default host signature.
    pub fn start<D: HostDom<Node = N>>(
        dom: &D,
        settings: &CountSettings,
        translator: Box<dyn Translator>,
    ) -> Result<Self, EngineError> {
        Self::with_signature(dom, settings, HostSignature::default(), translator)
    }

    /// Fails if the document has no body: mutation tracking hangs off it,
    /// so the engine is not running inside a real page.
    pub fn with_signature<D: HostDom<Node = N>>(
        dom: &D,
        settings: &CountSettings,
        signature: HostSignature,
        translator: Box<dyn Translator>,
    ) -> Result<Self, EngineError> {
        if dom.body().is_none() {
            return Err(EngineError::MissingBody);
        }
        let address = dom.location();
        wc_info!("Word count engine started at {}", address);

        Ok(Self {
            state: LoopState::with_address(settings.selection_policy, &address),
            locator: DocumentLocator::new(signature.clone()),
            counter: WordCounter::new(signature.clone()),
            selection: SelectionTracker::new(signature.clone()),
            indicator: IndicatorController::new(signature),
            translator,
            excluded: settings.excluded_kinds(),
        })
    }

    pub fn view(&self) -> LoopView {
        self.state.view()
    }

    pub fn is_stopped(&self) -> bool {
        self.state.is_stopped()
    }

    pub fn locator(&self) -> &DocumentLocator<N> {
        &self.locator
    }

    pub fn indicator(&self) -> &IndicatorController<N> {
        &self.indicator
    }

    /// One resolve-count-render pass.
    pub fn tick<D: HostDom<Node = N>>(&mut self, dom: &mut D) -> TickOutcome {
        self.dispatch(dom, Msg::Tick)
    }

    /// Called when the host body mutated. Returns true if the page address
    /// changed, in which case the root cache and indicator were dropped.
    pub fn observe_mutations<D: HostDom<Node = N>>(&mut self, dom: &mut D) -> bool {
        let before = self.state.navigations();
        let address = dom.location();
        self.dispatch(dom, Msg::LocationObserved(address.clone()));
        let navigated = self.state.navigations() > before;
        if navigated {
            wc_info!("Page changed to {}; indicator reset", address);
        }
        navigated
    }

    /// Tears the indicator down and stops all further passes.
    pub fn unload<D: HostDom<Node = N>>(&mut self, dom: &mut D) {
        self.dispatch(dom, Msg::Unloaded);
    }

    fn dispatch<D: HostDom<Node = N>>(&mut self, dom: &mut D, msg: Msg) -> TickOutcome {
        if self.state.is_stopped() {
            return TickOutcome::Stopped;
        }
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;

        let mut outcome = TickOutcome::Idle;
        for effect in effects {
            outcome = match effect {
                Effect::RunPass => self.run_pass(dom),
                Effect::Render(content) => {
                    if self.indicator.render(dom, content, self.translator.as_ref()) {
                        TickOutcome::Rendered(content)
                    } else {
                        TickOutcome::Unchanged(content)
                    }
                }
                Effect::InvalidateRoot => {
                    self.locator.invalidate();
                    outcome
                }
                Effect::Teardown => TickOutcome::Deferred {
                    torn_down: self.indicator.teardown(dom),
                },
                Effect::Stop => TickOutcome::Stopped,
            };
        }
        outcome
    }

    fn run_pass<D: HostDom<Node = N>>(&mut self, dom: &mut D) -> TickOutcome {
        set_pass(self.state.passes());

        let root = match self.locator.resolve_root(dom) {
            Lookup::Found(root) => root,
            Lookup::NotFound => return self.dispatch(dom, Msg::StructureMissing),
        };
        if !self.indicator.ensure(dom, &mut self.locator).is_found() {
            return self.dispatch(dom, Msg::StructureMissing);
        }

        let snapshot = self.measure(dom, root);
        wc_trace!("measured {:?}", snapshot);
        self.dispatch(dom, Msg::Measured(snapshot))
    }

    fn measure<D: HostDom<Node = N>>(&self, dom: &D, root: N) -> WordCountSnapshot {
        let total = self.counter.count_in_page(dom, root, &self.excluded);
        let selection = self.selection.count_selection(dom, root, &self.excluded);
        WordCountSnapshot {
            total,
            selected_blocks: selection.blocks,
            selected_text: selection.text,
        }
    }
}
