use std::fmt;

use crate::host::HostSignature;

/// Semantic role of a top-level block, derived from its marker class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BlockKind {
    Heading,
    SubHeading,
    SubSubHeading,
    Caption,
    Code,
    Table,
    Text,
    Equation,
    ToDo,
    BulletedList,
    NumberedList,
    Toggle,
    Quote,
    Callout,
}

impl BlockKind {
    pub const ALL: [BlockKind; 14] = [
        BlockKind::Heading,
        BlockKind::SubHeading,
        BlockKind::SubSubHeading,
        BlockKind::Caption,
        BlockKind::Code,
        BlockKind::Table,
        BlockKind::Text,
        BlockKind::Equation,
        BlockKind::ToDo,
        BlockKind::BulletedList,
        BlockKind::NumberedList,
        BlockKind::Toggle,
        BlockKind::Quote,
        BlockKind::Callout,
    ];

    /// Middle segment of the marker class for this kind.
    pub fn marker(self) -> &'static str {
        match self {
            BlockKind::Heading => "header",
            BlockKind::SubHeading => "sub_header",
            BlockKind::SubSubHeading => "sub_sub_header",
            BlockKind::Caption => "caption",
            BlockKind::Code => "code",
            BlockKind::Table => "table",
            BlockKind::Text => "text",
            BlockKind::Equation => "equation",
            BlockKind::ToDo => "to_do",
            BlockKind::BulletedList => "bulleted_list",
            BlockKind::NumberedList => "numbered_list",
            BlockKind::Toggle => "toggle",
            BlockKind::Quote => "quote",
            BlockKind::Callout => "callout",
        }
    }

    pub fn from_marker(marker: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.marker() == marker)
    }

    pub fn is_heading(self) -> bool {
        matches!(
            self,
            BlockKind::Heading | BlockKind::SubHeading | BlockKind::SubSubHeading
        )
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.marker())
    }
}

/// Classifies a node from its class tokens using the default host markers.
///
/// The first token that names a known kind wins; anything else yields `None`.
pub fn classify<'a>(tokens: impl IntoIterator<Item = &'a str>) -> Option<BlockKind> {
    classify_for(&HostSignature::default(), tokens)
}

pub(crate) fn classify_for<'a>(
    signature: &HostSignature,
    tokens: impl IntoIterator<Item = &'a str>,
) -> Option<BlockKind> {
    tokens.into_iter().find_map(|token| {
        marker_segment(token, &signature.block_namespace, &signature.block_suffix)
            .and_then(BlockKind::from_marker)
    })
}

fn marker_segment<'t>(token: &'t str, namespace: &str, suffix: &str) -> Option<&'t str> {
    let rest = token.strip_prefix(namespace)?.strip_prefix('-')?;
    let middle = rest.strip_suffix(suffix)?.strip_suffix('-')?;
    if middle.is_empty() {
        None
    } else {
        Some(middle)
    }
}
