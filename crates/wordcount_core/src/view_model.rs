use crate::WordCountSnapshot;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoopView {
    pub address: Option<String>,
    pub passes: u64,
    pub navigations: u64,
    pub last_snapshot: Option<WordCountSnapshot>,
    pub stopped: bool,
}
