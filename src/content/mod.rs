//! Descriptive content shown for each target
//!
//! Content is static: the builtin registry is defined in code, and extra
//! entries can be merged in from a RON file at startup. Nothing edits it at
//! runtime.

mod builtin;

use crate::catalog::TargetId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading content files
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read content file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse content: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

/// Inline text style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SpanStyle {
    #[default]
    Plain,
    /// Species names
    Italic,
    /// Rendered as a `mailto:` link
    Email,
}

/// A run of text with a single style
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub text: String,
    #[serde(default)]
    pub style: SpanStyle,
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: SpanStyle::Plain,
        }
    }

    pub fn italic(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: SpanStyle::Italic,
        }
    }

    pub fn email(address: impl Into<String>) -> Self {
        Self {
            text: address.into(),
            style: SpanStyle::Email,
        }
    }
}

/// One block of a content page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Block {
    Paragraph(Vec<Span>),
    Heading(String),
    /// Image referenced by logical asset name, with a caption
    Figure { asset: String, caption: Vec<Span> },
    Contacts { intro: String, emails: Vec<String> },
}

/// Static information page for one target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptiveContent {
    pub title: String,
    pub blocks: Vec<Block>,
}

impl DescriptiveContent {
    /// Deterministic plain-text rendering (used by the CLI and tests)
    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.title);
        out.push('\n');

        for block in &self.blocks {
            out.push('\n');
            match block {
                Block::Paragraph(spans) => {
                    out.push_str(&join_spans(spans));
                }
                Block::Heading(text) => {
                    out.push_str(&text.to_uppercase());
                }
                Block::Figure { caption, .. } => {
                    out.push_str("[Figure: ");
                    out.push_str(&join_spans(caption));
                    out.push(']');
                }
                Block::Contacts { intro, emails } => {
                    out.push_str(intro);
                    out.push('\n');
                    out.push_str(&emails.join(" or "));
                }
            }
            out.push('\n');
        }

        out
    }

    /// Logical names of all figures referenced by this page
    pub fn figures(&self) -> impl Iterator<Item = &str> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Figure { asset, .. } => Some(asset.as_str()),
            _ => None,
        })
    }
}

fn join_spans(spans: &[Span]) -> String {
    spans.iter().map(|s| s.text.as_str()).collect()
}

/// Result of looking up content for a target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentEntry<'a> {
    Registered(&'a DescriptiveContent),
    /// No content for this id (listed-but-unsupported targets)
    Absent,
}

impl<'a> ContentEntry<'a> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    pub fn content(self) -> Option<&'a DescriptiveContent> {
        match self {
            Self::Registered(content) => Some(content),
            Self::Absent => None,
        }
    }
}

/// Mapping from target id to its information page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentRegistry {
    entries: BTreeMap<TargetId, DescriptiveContent>,
}

impl ContentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Content shipped with the portal
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.insert("Vibrio_cholerae".into(), builtin::vibrio_cholerae());
        registry
    }

    /// Parse a RON map of `target id -> content`
    pub fn from_ron_str(source: &str) -> Result<Self, ContentError> {
        Ok(ron::from_str(source)?)
    }

    pub fn from_ron_file(path: impl AsRef<Path>) -> Result<Self, ContentError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ContentError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_ron_str(&source)
    }

    /// Replaces any existing entry for `id`
    pub fn insert(&mut self, id: TargetId, content: DescriptiveContent) {
        self.entries.insert(id, content);
    }

    /// Merge `other` into this registry; its entries win on conflicts
    pub fn merge(&mut self, other: ContentRegistry) {
        self.entries.extend(other.entries);
    }

    pub fn lookup(&self, id: &str) -> ContentEntry<'_> {
        match self.entries.get(id) {
            Some(content) => ContentEntry::Registered(content),
            None => ContentEntry::Absent,
        }
    }

    pub fn ids(&self) -> impl Iterator<Item = &TargetId> {
        self.entries.keys()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SALMONELLA_RON: &str = r#"{
        "Salmonella_enterica": (
            title: "Salmonella enterica",
            blocks: [
                Paragraph([
                    (text: "cgMLST profiling for "),
                    (text: "Salmonella enterica", style: Italic),
                    (text: "."),
                ]),
                Contacts(intro: "Questions:", emails: ["nipmcsc@cdc.gov.tw"]),
            ],
        ),
    }"#;

    #[test]
    fn test_builtin_has_only_vibrio() {
        let registry = ContentRegistry::builtin();
        assert_eq!(registry.len(), 1);
        assert!(!registry.lookup("Vibrio_cholerae").is_absent());
        assert!(registry.lookup("Salmonella_enterica").is_absent());
        assert!(registry.lookup("Campylobacter_jejuni").is_absent());
        assert_eq!(registry.lookup("").content(), None);
    }

    #[test]
    fn test_vibrio_plain_text() {
        let registry = ContentRegistry::builtin();
        let content = registry.lookup("Vibrio_cholerae").content().unwrap();
        let text = content.to_plain_text();

        assert!(text.starts_with("Vibrio cholerae"));
        assert!(text.contains("2,951 V. cholerae core genes"));
        assert!(text.contains("5,048 cgMLST profiles"));
        assert!(text.contains("[Figure: Frequency of loci (genes) over 1,647 V. cholerae genomes.]"));
        assert!(text.contains("CITATIONS"));
        assert!(text.contains("nipmcsc@cdc.gov.tw or nipmcsc@gmail.com"));
        assert_eq!(
            content.figures().collect::<Vec<_>>(),
            vec!["figures.vc_loci_feq_distribution"]
        );
    }

    #[test]
    fn test_load_from_ron() {
        let registry = ContentRegistry::from_ron_str(SALMONELLA_RON).unwrap();
        let content = registry.lookup("Salmonella_enterica").content().unwrap();
        assert_eq!(content.title, "Salmonella enterica");
        assert_eq!(
            content.blocks[0],
            Block::Paragraph(vec![
                Span::plain("cgMLST profiling for "),
                Span::italic("Salmonella enterica"),
                Span::plain("."),
            ])
        );
    }

    #[test]
    fn test_merge_replaces_and_extends() {
        let mut registry = ContentRegistry::builtin();
        let mut extra = ContentRegistry::from_ron_str(SALMONELLA_RON).unwrap();
        extra.insert(
            "Vibrio_cholerae".into(),
            DescriptiveContent {
                title: "Replaced".to_string(),
                blocks: vec![],
            },
        );

        registry.merge(extra);

        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.lookup("Vibrio_cholerae").content().unwrap().title,
            "Replaced"
        );
        assert!(!registry.lookup("Salmonella_enterica").is_absent());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("content.ron");
        std::fs::write(&path, SALMONELLA_RON).unwrap();

        let registry = ContentRegistry::from_ron_file(&path).unwrap();
        assert_eq!(registry.len(), 1);

        let missing = ContentRegistry::from_ron_file(dir.path().join("missing.ron"));
        assert!(matches!(missing, Err(ContentError::Read { .. })));
    }

    #[test]
    fn test_invalid_ron_is_parse_error() {
        let result = ContentRegistry::from_ron_str("{ \"Vibrio_cholerae\": (title: 1) }");
        assert!(matches!(result, Err(ContentError::Parse(_))));
    }
}
