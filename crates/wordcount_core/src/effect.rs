use crate::LabelContent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Resolve the page, measure it and report back with a `Msg`.
    RunPass,
    /// Render the indicator with this content (the controller skips no-op writes).
    Render(LabelContent),
    /// Drop the cached document root.
    InvalidateRoot,
    /// Remove the indicator from the page.
    Teardown,
    /// Stop scheduling passes.
    Stop,
}
