use thiserror::Error;

use crate::i18n::CatalogError;
use crate::settings::SettingsError;

/// Faults that mean the engine cannot run in this environment at all.
///
/// Transient page states never surface here; they are `Lookup::NotFound`.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("expected the host document to have a body element")]
    MissingBody,
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
