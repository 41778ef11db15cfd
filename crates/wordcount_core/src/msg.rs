use crate::WordCountSnapshot;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Periodic timer fired.
    Tick,
    /// The host body mutated; carries the address read at that moment.
    LocationObserved(String),
    /// Root or anchor could not be resolved during a pass.
    StructureMissing,
    /// A pass measured the page.
    Measured(WordCountSnapshot),
    /// Hosting script context is going away.
    Unloaded,
}
