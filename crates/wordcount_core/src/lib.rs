//! Word-count core: pure refresh state machine and label value types.
mod effect;
mod label;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use label::{LabelContent, LabelKey, SelectionPolicy, WordCountSnapshot};
pub use msg::Msg;
pub use state::{normalize_address, LoopState};
pub use update::update;
pub use view_model::LoopView;
