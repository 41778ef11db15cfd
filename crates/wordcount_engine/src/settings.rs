use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use wordcount_core::SelectionPolicy;

use crate::blocks::BlockKind;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Io(#[from] io::Error),
    #[error("failed to parse settings: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

/// User-facing counting options. Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountSettings {
    pub include_headings: bool,
    pub include_captions: bool,
    pub include_code_blocks: bool,
    pub include_tables: bool,
    pub include_equations: bool,
    pub selection_policy: SelectionPolicy,
}

impl Default for CountSettings {
    fn default() -> Self {
        Self {
            include_headings: true,
            include_captions: false,
            include_code_blocks: false,
            include_tables: true,
            include_equations: true,
            selection_policy: SelectionPolicy::PreferBlocks,
        }
    }
}

impl CountSettings {
    pub fn from_ron_str(text: &str) -> Result<Self, SettingsError> {
        Ok(ron::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let text = fs::read_to_string(path)?;
        Self::from_ron_str(&text)
    }

    /// Block kinds left out of every count.
    pub fn excluded_kinds(&self) -> BTreeSet<BlockKind> {
        BlockKind::ALL
            .into_iter()
            .filter(|kind| !self.includes(*kind))
            .collect()
    }

    fn includes(&self, kind: BlockKind) -> bool {
        match kind {
            kind if kind.is_heading() => self.include_headings,
            BlockKind::Caption => self.include_captions,
            BlockKind::Code => self.include_code_blocks,
            BlockKind::Table => self.include_tables,
            BlockKind::Equation => self.include_equations,
            _ => true,
        }
    }
}
