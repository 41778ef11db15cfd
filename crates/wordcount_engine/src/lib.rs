//! Word-count engine: host DOM probing, counting and indicator upkeep.
mod blocks;
mod count;
mod dom;
mod driver;
mod error;
mod host;
mod i18n;
mod indicator;
mod locate;
mod refresh;
mod selection;
mod settings;
mod snapshot_dom;

pub use blocks::{classify, BlockKind};
pub use count::{count_words, WordCounter};
pub use dom::{HostDom, Insert, Lookup};
pub use driver::{run, spawn_ticker, HostEvent, RunSummary, DEFAULT_TICK_INTERVAL};
pub use error::EngineError;
pub use host::HostSignature;
pub use i18n::{format_count, primary_languages, Catalog, CatalogError, Translator};
pub use indicator::{IndicatorController, IndicatorHandle};
pub use locate::DocumentLocator;
pub use refresh::{RefreshLoop, TickOutcome};
pub use selection::{SelectionCounts, SelectionTracker};
pub use settings::{CountSettings, SettingsError};
pub use snapshot_dom::SnapshotDom;
